use crate::{
    db::storage::Storage,
    libs::{config::Config, messages::Message, summary::SummaryTotals, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {
    /// Number of most recent days to include
    #[arg(short, long)]
    days: Option<usize>,
    /// Group by record type instead of by day
    #[arg(long)]
    by_type: bool,
}

pub async fn cmd(storage: &Storage, config: &Config, sum_args: SumArgs) -> Result<()> {
    let expenses = storage.expenses().await?;

    if sum_args.by_type {
        let types = expenses.summary_by_type().await?;
        msg_print!(Message::TypeSummaryHeader, true);
        View::by_type(&types)?;
        msg_print!(Message::SummaryNet(types.net()));
    } else {
        let days_limit = sum_args.days.unwrap_or(config.display.summary_days);
        let days = expenses.summary_by_day(days_limit).await?;
        msg_print!(Message::DailySummaryHeader(days_limit), true);
        View::daily(&days)?;
        msg_print!(Message::SummaryNet(days.net()));
    }

    Ok(())
}

/// Prints the overall balance.
pub async fn total(storage: &Storage) -> Result<()> {
    let total = storage.expenses().await?.total().await?;
    msg_print!(Message::TotalBalance(total));
    Ok(())
}
