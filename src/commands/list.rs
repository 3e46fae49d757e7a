use crate::{
    db::storage::Storage,
    libs::{config::Config, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show every record instead of the most recent ones
    #[arg(short, long)]
    all: bool,
    /// Number of recent records to show
    #[arg(short, long)]
    limit: Option<usize>,
}

pub async fn cmd(storage: &Storage, config: &Config, list_args: ListArgs) -> Result<()> {
    let expenses = storage.expenses().await?;

    let items = if list_args.all {
        expenses.list_all().await?
    } else {
        expenses
            .list_recent(list_args.limit.unwrap_or(config.display.recent_limit))
            .await?
    };

    if items.is_empty() {
        msg_info!(Message::ExpensesNotFound);
        return Ok(());
    }

    msg_print!(Message::ExpensesHeader(items.len()), true);
    View::expenses(&items)?;
    msg_print!(Message::TotalBalance(expenses.total().await?));
    Ok(())
}
