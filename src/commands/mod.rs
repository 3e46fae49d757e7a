pub mod add;
pub mod courses;
pub mod init;
pub mod list;
pub mod reset;
pub mod sum;

use crate::{
    db::storage::Storage,
    libs::{config::Config, messages::Message, view::View},
    msg_warning,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Prepare the database and import legacy records")]
    Init(init::InitArgs),
    #[command(about = "Record an expense or income", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "List recent records")]
    List(list::ListArgs),
    #[command(about = "Show the overall balance")]
    Total,
    #[command(about = "Summarize amounts by day or by type")]
    Sum(sum::SumArgs),
    #[command(about = "Print all records as calendar events (JSON)")]
    Events,
    #[command(about = "List the reference course catalog (JSON)")]
    Courses(courses::CoursesArgs),
    #[command(about = "Delete all records and restore the course catalog")]
    Reset(reset::ResetArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();

        let config = Config::read().unwrap_or_else(|e| {
            msg_warning!(Message::ConfigLoadFailed(e.to_string()));
            Config::default()
        });
        let storage = Storage::new(config.storage.clone());

        match cli.command {
            Commands::Init(args) => init::cmd(&storage, &config, args).await,
            Commands::Add(args) => add::cmd(&storage, args).await,
            Commands::List(args) => list::cmd(&storage, &config, args).await,
            Commands::Total => sum::total(&storage).await,
            Commands::Sum(args) => sum::cmd(&storage, &config, args).await,
            Commands::Events => View::events(&storage.expenses().await?.list_as_events().await?),
            Commands::Courses(args) => courses::cmd(&storage, &config, args).await,
            Commands::Reset(args) => reset::cmd(&storage, args).await,
        }
    }
}
