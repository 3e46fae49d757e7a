//! # Spendlog - personal expense tracking
//!
//! A small expense and income tracker backed by a single SQLite file, with
//! a command-line front end and a reference course catalog.
//!
//! ## Features
//!
//! - **Self-maintaining store**: schema created and extended on every start
//! - **Legacy import**: one-time migration of the old `expenses.json` list
//! - **Sign convention**: expenses stored negative, income positive
//! - **Aggregates**: balance, per-day and per-type totals, calendar events
//! - **Reset**: transactional wipe with catalog re-seeding
//!
//! ## Usage
//!
//! ```rust,no_run
//! use spendlog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
