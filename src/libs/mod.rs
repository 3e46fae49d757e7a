//! Core library modules for spendlog.
//!
//! Domain types, configuration, errors, messaging and console rendering.
//! Database access lives in [`crate::db`].
//!
//! ## Usage
//!
//! ```rust
//! use spendlog::libs::expense::{ExpenseDraft, ExpenseType, NewExpense};
//!
//! let row = NewExpense::from_draft(ExpenseDraft::new("Coffee", "3.50", "expense"));
//! assert_eq!(row.amount, -3.5);
//! assert_eq!(row.kind, ExpenseType::Expense);
//! ```

pub mod config;
pub mod course;
pub mod data_storage;
pub mod error;
pub mod event;
pub mod expense;
pub mod messages;
pub mod summary;
pub mod view;
