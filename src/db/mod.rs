//! Persistence layer for spendlog.
//!
//! A single SQLite file holds two tables: `expenses`, the user's records, and
//! `courses`, a fixed reference catalog. The layer creates and evolves its
//! own schema, imports the legacy JSON record list once, and seeds the
//! catalog, so any start of the process on any earlier state ends in a
//! usable store.
//!
//! ## Features
//!
//! - **Self-healing schema**: idempotent DDL plus additive optional columns
//! - **Legacy import**: one-shot, de-duplicated, archived after processing
//! - **Reference data**: 50-row course catalog seeded on demand
//! - **Async repositories**: every query runs on the blocking pool
//! - **Transactional reset**: wipe and reseed as one unit
//!
//! ## Usage
//!
//! ```rust,no_run
//! use spendlog::db::storage::Storage;
//! use spendlog::libs::config::StorageConfig;
//! use spendlog::libs::expense::ExpenseDraft;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let storage = Storage::new(StorageConfig::default());
//! let expenses = storage.expenses().await?;
//!
//! let id = expenses.add(ExpenseDraft::new("Coffee", "3.50", "expense")).await?;
//! let balance = expenses.total().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Connection Management
//!
//! One connection per process, wrapped in [`db::Db`]. The handle is created by
//! [`storage::Storage`] on first use and cloned into each repository. SQLite
//! serializes writes itself; the mutex around the connection is held for one
//! operation at a time.

/// Shared connection handle and the blocking-pool bridge.
pub mod db;

/// Table creation and optional column migrations.
pub mod schema;

/// One-time import of the legacy JSON expense list.
pub mod import;

/// Reference course catalog: seeding and listing.
pub mod courses;

/// Expense records: inserts, listings and aggregates.
pub mod expenses;

/// Transactional wipe and reseed.
pub mod reset;

/// Lazily initialized process-wide store and the start-up sequence.
pub mod storage;
