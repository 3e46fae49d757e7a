use crate::{
    db::storage::Storage,
    libs::{
        expense::{ExpenseDraft, NewExpense},
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Record title; "Untitled" when omitted
    #[arg(short, long)]
    title: Option<String>,
    /// Amount; the sign is derived from the type
    #[arg(allow_hyphen_values = true)]
    amount: String,
    /// Record an income instead of an expense
    #[arg(short, long)]
    income: bool,
    #[arg(short, long)]
    category: Option<String>,
    #[arg(short, long)]
    note: Option<String>,
    /// ISO-8601 timestamp; defaults to now
    #[arg(short, long)]
    date: Option<String>,
}

pub async fn cmd(storage: &Storage, add_args: AddArgs) -> Result<()> {
    let expenses = storage.expenses().await?;

    let draft = ExpenseDraft {
        title: add_args.title,
        amount: Some(add_args.amount),
        kind: Some(if add_args.income { "income" } else { "expense" }.to_string()),
        category: add_args.category,
        note: add_args.note,
        date: add_args.date,
    };
    let row = NewExpense::from_draft(draft.clone());
    let id = expenses.add(draft).await?;

    msg_success!(Message::ExpenseAdded(id, row.title, row.amount));
    Ok(())
}
