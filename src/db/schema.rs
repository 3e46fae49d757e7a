//! Schema creation and additive column migrations.
//!
//! Every statement here is safe to repeat: tables and indices use
//! `IF NOT EXISTS`, and optional columns are only added after
//! `PRAGMA table_info` shows they are missing. There is no version table;
//! running [`ensure_schema`] on any earlier layout brings it up to date.
//!
//! ## Usage
//!
//! ```rust
//! use rusqlite::Connection;
//! use spendlog::db::schema::{ensure_schema, has_column};
//!
//! let mut conn = Connection::open_in_memory()?;
//! ensure_schema(&mut conn)?;
//! assert!(has_column(&conn, "expenses", "category")?);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::error::{StorageError, StorageResult};
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::{params, Connection};

const SCHEMA_EXPENSES: &str = "CREATE TABLE IF NOT EXISTS expenses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    amount REAL NOT NULL,
    type TEXT NOT NULL,
    category TEXT,
    note TEXT,
    date TEXT NOT NULL
)";
const SCHEMA_COURSES: &str = "CREATE TABLE IF NOT EXISTS courses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT
)";
const INDEX_EXPENSES_DATE: &str = "CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date)";
const INDEX_EXPENSES_DATE_TITLE: &str = "CREATE INDEX IF NOT EXISTS idx_expenses_date_title ON expenses(date, title)";
const TABLE_EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)";

/// A column that may be missing from databases created by older builds.
#[derive(Debug, Clone, Copy)]
pub struct OptionalColumn {
    pub table: &'static str,
    pub column: &'static str,
    pub sql_type: &'static str,
}

/// Columns added after the first release, applied in order on every start.
pub const OPTIONAL_COLUMNS: &[OptionalColumn] = &[OptionalColumn {
    table: "expenses",
    column: "category",
    sql_type: "TEXT",
}];

/// Creates missing tables and indices, then adds any missing optional columns.
pub fn ensure_schema(conn: &mut Connection) -> StorageResult<()> {
    let tx = conn.transaction().map_err(StorageError::Schema)?;
    for ddl in [SCHEMA_EXPENSES, SCHEMA_COURSES, INDEX_EXPENSES_DATE, INDEX_EXPENSES_DATE_TITLE] {
        tx.execute(ddl, []).map_err(StorageError::Schema)?;
    }
    tx.commit().map_err(StorageError::Schema)?;

    for optional in OPTIONAL_COLUMNS {
        ensure_optional_column(conn, optional.table, optional.column, optional.sql_type)?;
    }

    msg_debug!(Message::SchemaEnsured);
    Ok(())
}

/// Adds `column` to `table` unless it already exists.
///
/// Returns `true` when the column was added. Any engine error is returned
/// unchanged; nothing is swallowed.
pub fn ensure_optional_column(conn: &Connection, table: &str, column: &str, sql_type: &str) -> StorageResult<bool> {
    validate_identifier(table)?;
    validate_identifier(column)?;
    validate_type_decl(sql_type)?;

    if has_column(conn, table, column)? {
        msg_debug!(Message::ColumnPresent(table.to_string(), column.to_string()));
        return Ok(false);
    }

    conn.execute(&format!("ALTER TABLE {} ADD COLUMN {} {}", table, column, sql_type), [])
        .map_err(StorageError::Schema)?;
    msg_debug!(Message::ColumnAdded(table.to_string(), column.to_string()));
    Ok(true)
}

pub fn table_exists(conn: &Connection, table: &str) -> StorageResult<bool> {
    conn.query_row(TABLE_EXISTS, params![table], |row| row.get::<_, bool>(0))
        .map_err(StorageError::Schema)
}

/// Checks `PRAGMA table_info` for `column`. A missing table has no columns.
pub fn has_column(conn: &Connection, table: &str, column: &str) -> StorageResult<bool> {
    validate_identifier(table)?;
    if !table_exists(conn, table)? {
        return Ok(false);
    }

    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({})", table))
        .map_err(StorageError::Schema)?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .map_err(StorageError::Schema)?;

    for name in names {
        if name.map_err(StorageError::Schema)?.eq_ignore_ascii_case(column) {
            return Ok(true);
        }
    }
    Ok(false)
}

fn validate_identifier(name: &str) -> StorageResult<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => (first.is_ascii_alphabetic() || first == '_') && chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidIdentifier(name.to_string()))
    }
}

fn validate_type_decl(decl: &str) -> StorageResult<()> {
    let valid = !decl.trim().is_empty()
        && decl
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ' ' | '(' | ')' | ',' | '\''));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidIdentifier(decl.to_string()))
    }
}
