//! One-time import of the legacy JSON expense list.
//!
//! Older versions kept expenses in a flat `expenses.json` array. On start the
//! importer copies those records into the `expenses` table and archives the
//! file as `expenses.json.bak`, so the import runs once per file.
//!
//! ## Guarantees
//!
//! - **Best effort**: read and parse failures are logged and reported as
//!   [`ImportOutcome::Aborted`]; they never fail initialization.
//! - **Idempotent**: a record whose `(date, title)` pair is already stored is
//!   skipped, so re-running over the same data inserts nothing.
//! - **Per-record isolation**: a record that cannot be stored is counted and
//!   logged; the remaining records are still imported.
//!
//! ## File Format
//!
//! ```json
//! [
//!   { "title": "Coffee", "amount": "3.50", "type": "expense", "date": "2024-03-01T08:00:00.000Z" },
//!   { "title": "Salary", "amount": 2500, "type": "income", "note": "March", "date": "2024-03-01T09:00:00.000Z" }
//! ]
//! ```
//!
//! Only `date` is required. Missing fields get the same defaults as an
//! interactive add, and amounts go through the same sign normalization.

use super::expenses;
use crate::libs::expense::{ExpenseDraft, NewExpense};
use crate::libs::messages::Message;
use crate::{msg_debug, msg_info, msg_warning};
use rusqlite::Connection;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to the legacy file once it has been processed.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Counters for a completed import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    /// Records whose `(date, title)` pair was already stored.
    pub duplicates: usize,
    pub skipped_no_date: usize,
    /// Records that were not objects or failed to insert.
    pub failed: usize,
    /// Whether the source was renamed to its `.bak` name.
    pub archived: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// No legacy file present; nothing to do.
    NoSource,
    /// The file could not be read or parsed. It is left in place.
    Aborted(String),
    Completed(ImportReport),
}

impl ImportOutcome {
    pub fn report(&self) -> Option<&ImportReport> {
        match self {
            ImportOutcome::Completed(report) => Some(report),
            _ => None,
        }
    }
}

/// A legacy record with its loosely typed fields extracted.
#[derive(Debug, Clone, Default, PartialEq)]
struct LegacyRecord {
    title: Option<String>,
    amount: Option<String>,
    kind: Option<String>,
    category: Option<String>,
    note: Option<String>,
    date: Option<String>,
}

impl LegacyRecord {
    /// Returns `None` when the value is not a JSON object.
    fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let text = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);

        let scalar = |key: &str| {
            obj.get(key).and_then(|v| match v {
                Value::Number(n) => Some(n.to_string()),
                Value::String(s) => Some(s.clone()),
                _ => None,
            })
        };

        Some(LegacyRecord {
            title: scalar("title"),
            amount: scalar("amount"),
            kind: text("type"),
            category: text("category"),
            note: text("note"),
            date: text("date").filter(|d| !d.is_empty()),
        })
    }

    fn into_row(self) -> Option<NewExpense> {
        let date = self.date?;
        Some(NewExpense::from_draft(ExpenseDraft {
            title: self.title,
            amount: self.amount,
            kind: self.kind.or_else(|| Some("expense".to_string())),
            category: self.category,
            note: self.note,
            date: Some(date),
        }))
    }
}

/// Path the legacy file is renamed to after processing.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Imports `path` into the expenses table. Never returns an error.
pub fn import_legacy(conn: &mut Connection, path: &Path) -> ImportOutcome {
    let source_path = path.display().to_string();

    if !path.exists() {
        msg_debug!(Message::LegacyFileAbsent(source_path));
        return ImportOutcome::NoSource;
    }

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            msg_warning!(Message::LegacyReadFailed(source_path, e.to_string()));
            return ImportOutcome::Aborted(e.to_string());
        }
    };

    let records = match parse_records(&raw) {
        Ok(records) => records,
        Err(reason) => {
            match &reason {
                ParseFailure::Json(e) => msg_warning!(Message::LegacyParseFailed(source_path, e.clone())),
                ParseFailure::NotAnArray => msg_warning!(Message::LegacyNotAnArray(source_path)),
            }
            return ImportOutcome::Aborted(reason.to_string());
        }
    };

    msg_info!(Message::LegacyImportStarted(source_path.clone()));
    let mut report = match store_records(conn, &records) {
        Ok(report) => report,
        Err(e) => {
            msg_warning!(Message::LegacyImportAborted(source_path, e.to_string()));
            return ImportOutcome::Aborted(e.to_string());
        }
    };

    report.archived = match fs::rename(path, backup_path(path)) {
        Ok(()) => true,
        Err(e) => {
            msg_warning!(Message::LegacyArchiveFailed(source_path, e.to_string()));
            false
        }
    };

    msg_info!(Message::LegacyImportCompleted {
        imported: report.imported,
        duplicates: report.duplicates,
        skipped: report.skipped_no_date,
        failed: report.failed,
    });
    ImportOutcome::Completed(report)
}

#[derive(Debug)]
enum ParseFailure {
    Json(String),
    NotAnArray,
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseFailure::Json(e) => write!(f, "invalid JSON: {}", e),
            ParseFailure::NotAnArray => write!(f, "expected a JSON array"),
        }
    }
}

/// An empty or whitespace-only file counts as an empty list.
fn parse_records(raw: &str) -> Result<Vec<Value>, ParseFailure> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(_) => Err(ParseFailure::NotAnArray),
        Err(e) => Err(ParseFailure::Json(e.to_string())),
    }
}

/// Inserts records in one transaction; only begin/commit failures abort.
fn store_records(conn: &mut Connection, records: &[Value]) -> rusqlite::Result<ImportReport> {
    let tx = conn.transaction()?;
    let mut report = ImportReport::default();

    for (index, value) in records.iter().enumerate() {
        let Some(record) = LegacyRecord::from_value(value) else {
            msg_warning!(Message::LegacyRecordNotObject(index));
            report.failed += 1;
            continue;
        };
        let Some(row) = record.into_row() else {
            msg_debug!(Message::LegacyRecordWithoutDate(index));
            report.skipped_no_date += 1;
            continue;
        };

        match expenses::exists(&tx, &row.date, &row.title) {
            Ok(true) => {
                msg_debug!(Message::LegacyRecordDuplicate(row.date.clone(), row.title.clone()));
                report.duplicates += 1;
                continue;
            }
            Ok(false) => {}
            Err(e) => {
                msg_warning!(Message::LegacyRecordFailed(index, e.to_string()));
                report.failed += 1;
                continue;
            }
        }

        match expenses::insert(&tx, &row) {
            Ok(_) => report.imported += 1,
            Err(e) => {
                msg_warning!(Message::LegacyRecordFailed(index, e.to_string()));
                report.failed += 1;
            }
        }
    }

    tx.commit()?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::expense::{ExpenseType, DEFAULT_TITLE};
    use serde_json::json;

    #[test]
    fn record_defaults_follow_interactive_add() {
        let record = LegacyRecord::from_value(&json!({ "date": "2024-01-02T10:00:00.000Z" })).unwrap();
        let row = record.into_row().unwrap();
        assert_eq!(row.title, DEFAULT_TITLE);
        assert_eq!(row.amount, 0.0);
        assert_eq!(row.kind, ExpenseType::Expense);
        assert_eq!(row.category, None);
        assert_eq!(row.note, "");
    }

    #[test]
    fn numeric_and_string_amounts_are_accepted() {
        let row = LegacyRecord::from_value(&json!({ "amount": 12.5, "type": "income", "date": "d" }))
            .unwrap()
            .into_row()
            .unwrap();
        assert_eq!(row.amount, 12.5);

        let row = LegacyRecord::from_value(&json!({ "amount": "7", "date": "d" }))
            .unwrap()
            .into_row()
            .unwrap();
        assert_eq!(row.amount, -7.0);

        let row = LegacyRecord::from_value(&json!({ "amount": true, "date": "d" }))
            .unwrap()
            .into_row()
            .unwrap();
        assert_eq!(row.amount, 0.0);
    }

    #[test]
    fn numeric_titles_are_kept_as_text() {
        let row = LegacyRecord::from_value(&json!({ "title": 2024, "amount": "5", "date": "d" }))
            .unwrap()
            .into_row()
            .unwrap();
        assert_eq!(row.title, "2024");

        let row = LegacyRecord::from_value(&json!({ "title": ["a"], "date": "d" }))
            .unwrap()
            .into_row()
            .unwrap();
        assert_eq!(row.title, DEFAULT_TITLE);
    }

    #[test]
    fn records_without_date_are_rejected() {
        let record = LegacyRecord::from_value(&json!({ "title": "Bus", "date": "" })).unwrap();
        assert!(record.into_row().is_none());
        assert!(LegacyRecord::from_value(&json!("not an object")).is_none());
    }

    #[test]
    fn empty_file_is_an_empty_list() {
        assert!(parse_records("  \n").unwrap().is_empty());
        assert!(matches!(parse_records("{}"), Err(ParseFailure::NotAnArray)));
        assert!(matches!(parse_records("[oops"), Err(ParseFailure::Json(_))));
    }

    #[test]
    fn backup_path_appends_suffix() {
        assert_eq!(backup_path(Path::new("/data/expenses.json")), PathBuf::from("/data/expenses.json.bak"));
    }
}
