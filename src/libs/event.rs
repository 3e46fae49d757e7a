//! Calendar view of expense records.
//!
//! Calendar widgets expect `{id, title, start, extendedProps}` objects; this
//! module maps stored records to that shape.

use super::expense::{Expense, ExpenseType};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventProps {
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: ExpenseType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: i64,
    pub title: String,
    pub start: String,
    pub extended_props: EventProps,
}

impl From<Expense> for CalendarEvent {
    fn from(expense: Expense) -> Self {
        CalendarEvent {
            id: expense.id,
            title: format!("{} ({})", expense.title, expense.amount),
            start: expense.date,
            extended_props: EventProps {
                amount: expense.amount,
                kind: expense.kind,
            },
        }
    }
}
