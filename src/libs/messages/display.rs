//! Display implementation for spendlog application messages.
//!
//! All message text is defined here, in one place, so call sites only deal
//! with typed [`Message`] variants and their parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === STORAGE MESSAGES ===
            Message::StorageOpening(path) => format!("Opening database at {}", path),
            Message::StorageReady(path) => format!("Database ready: {}", path),
            Message::SchemaEnsured => "Schema is up to date".to_string(),
            Message::ColumnAdded(table, column) => format!("Added column '{}' to table '{}'", column, table),
            Message::ColumnPresent(table, column) => format!("Column '{}' already present in table '{}'", column, table),
            Message::StorageInitFailed(error) => format!("Failed to initialize storage: {}", error),

            // === LEGACY IMPORT MESSAGES ===
            Message::LegacyFileAbsent(path) => format!("No legacy expense file at {}", path),
            Message::LegacyImportStarted(path) => format!("Importing legacy expenses from {}", path),
            Message::LegacyReadFailed(path, error) => format!("Could not read legacy file {}: {}", path, error),
            Message::LegacyParseFailed(path, error) => format!("Legacy file {} is not valid JSON, import skipped: {}", path, error),
            Message::LegacyNotAnArray(path) => format!("Legacy file {} does not contain a list of records, import skipped", path),
            Message::LegacyRecordNotObject(index) => format!("Legacy record #{} is not an object, skipped", index),
            Message::LegacyRecordWithoutDate(index) => format!("Legacy record #{} has no date, skipped", index),
            Message::LegacyRecordDuplicate(date, title) => format!("Legacy record '{}' at {} already imported", title, date),
            Message::LegacyRecordFailed(index, error) => format!("Legacy record #{} could not be stored: {}", index, error),
            Message::LegacyArchiveFailed(path, error) => format!("Could not archive legacy file {}: {}", path, error),
            Message::LegacyImportAborted(path, error) => format!("Legacy import from {} aborted: {}", path, error),
            Message::LegacyImportCompleted {
                imported,
                duplicates,
                skipped,
                failed,
            } => format!(
                "Legacy import finished: {} imported, {} already present, {} without date, {} failed",
                imported, duplicates, skipped, failed
            ),

            // === REFERENCE DATA MESSAGES ===
            Message::CoursesSeeded(count) => format!("Seeded {} courses", count),
            Message::CoursesAlreadySeeded(count) => format!("Course catalog already holds {} rows", count),

            // === EXPENSE MESSAGES ===
            Message::ExpenseAdded(id, title, amount) => format!("Recorded #{} '{}' ({:.2})", id, title, amount),
            Message::ExpensesNotFound => "No records yet".to_string(),
            Message::ExpensesHeader(count) => format!("Records ({})", count),
            Message::TotalBalance(total) => format!("Balance: {:.2}", total),
            Message::DailySummaryHeader(days) => format!("Daily totals, last {} days", days),
            Message::TypeSummaryHeader => "Totals by type".to_string(),
            Message::SummaryNet(net) => format!("Net: {:.2}", net),

            // === RESET MESSAGES ===
            Message::ConfirmReset => "Delete all records and restore the course catalog?".to_string(),
            Message::ResetCancelled => "Reset cancelled".to_string(),
            Message::ResetCompleted(count) => format!("All data cleared, {} courses restored", count),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigLoadFailed(error) => format!("Failed to read configuration, using defaults: {}", error),
        };
        write!(f, "{}", text)
    }
}
