//! Expense records and the normalization applied before they are stored.
//!
//! The sign of a stored amount encodes its direction: income is kept as a
//! non-negative number, an expense as a non-positive one. [`NewExpense::from_draft`]
//! is the only way to build a row for insertion, so every write path agrees
//! on that convention.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Title used when a record arrives without one.
pub const DEFAULT_TITLE: &str = "Untitled";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseType {
    Expense,
    Income,
}

impl ExpenseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseType::Expense => "expense",
            ExpenseType::Income => "income",
        }
    }

    /// Anything other than `"income"` selects an expense.
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            Some("income") => ExpenseType::Income,
            _ => ExpenseType::Expense,
        }
    }

    /// Applies the sign convention to a raw magnitude.
    pub fn signed(&self, amount: f64) -> f64 {
        if amount == 0.0 {
            return 0.0;
        }
        match self {
            ExpenseType::Income => amount.abs(),
            ExpenseType::Expense => -amount.abs(),
        }
    }
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored expense or income record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub title: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: ExpenseType,
    pub category: Option<String>,
    pub note: String,
    pub date: String,
}

/// Unvalidated input for a new record, as submitted by a form or a CLI.
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub title: Option<String>,
    /// Raw amount text; parsed leniently.
    pub amount: Option<String>,
    /// Type selector; only `"income"` is recognized, the rest means expense.
    pub kind: Option<String>,
    pub category: Option<String>,
    pub note: Option<String>,
    /// ISO-8601 timestamp; the insertion time is used when absent.
    pub date: Option<String>,
}

impl ExpenseDraft {
    pub fn new(title: &str, amount: &str, kind: &str) -> Self {
        ExpenseDraft {
            title: Some(title.to_string()),
            amount: Some(amount.to_string()),
            kind: Some(kind.to_string()),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    pub fn with_date(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }
}

/// A normalized row ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub title: String,
    pub amount: f64,
    pub kind: ExpenseType,
    pub category: Option<String>,
    pub note: String,
    pub date: String,
}

impl NewExpense {
    pub fn from_draft(draft: ExpenseDraft) -> Self {
        let kind = ExpenseType::from_selector(draft.kind.as_deref());
        let amount = kind.signed(parse_amount(draft.amount.as_deref()));

        NewExpense {
            title: draft
                .title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            amount,
            kind,
            category: draft.category.filter(|c| !c.trim().is_empty()),
            note: draft.note.unwrap_or_default(),
            date: draft.date.filter(|d| !d.trim().is_empty()).unwrap_or_else(now_timestamp),
        }
    }
}

/// Parses a decimal amount; missing, non-numeric or non-finite input yields 0.
pub fn parse_amount(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
