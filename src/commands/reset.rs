use crate::{
    db::storage::Storage,
    libs::messages::Message,
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

/// Wipes all records and restores the course catalog, after confirmation.
pub async fn cmd(storage: &Storage, reset_args: ResetArgs) -> Result<()> {
    if !reset_args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmReset.to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::ResetCancelled);
            return Ok(());
        }
    }

    let seeded = storage.reset().await?.reset_all().await?;
    msg_success!(Message::ResetCompleted(seeded));
    Ok(())
}
