use super::db::Db;
use crate::libs::error::{StorageError, StorageResult};
use crate::libs::event::CalendarEvent;
use crate::libs::expense::{Expense, ExpenseDraft, ExpenseType, NewExpense};
use crate::libs::summary::{DaySummary, TypeSummary};
use rusqlite::{params, Connection, Row};

const INSERT_EXPENSE: &str = "INSERT INTO expenses (title, amount, type, category, note, date) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const EXISTS_BY_DATE_TITLE: &str = "SELECT EXISTS(SELECT 1 FROM expenses WHERE date = ?1 AND title = ?2)";
const SELECT_EXPENSES: &str = "SELECT id, title, amount, type, category, note, date FROM expenses ORDER BY date DESC, id ASC";
const SELECT_RECENT_EXPENSES: &str = "SELECT id, title, amount, type, category, note, date FROM expenses ORDER BY date DESC, id ASC LIMIT ?1";
const SELECT_TOTAL: &str = "SELECT COALESCE(SUM(amount), 0.0) FROM expenses";
const SELECT_COUNT: &str = "SELECT COUNT(*) FROM expenses";
const SELECT_DAILY_TOTALS: &str = "
    SELECT substr(date, 1, 10) AS day, SUM(amount) AS total
    FROM expenses
    GROUP BY day
    ORDER BY day DESC
    LIMIT ?1
";
// Any stored type other than 'income' counts as an expense.
const SELECT_TYPE_TOTALS: &str = "
    SELECT CASE WHEN type = 'income' THEN 'income' ELSE 'expense' END AS kind, SUM(amount) AS total
    FROM expenses
    GROUP BY kind
    ORDER BY kind
";

/// Inserts a normalized row and returns its id.
pub(crate) fn insert(conn: &Connection, row: &NewExpense) -> rusqlite::Result<i64> {
    conn.execute(
        INSERT_EXPENSE,
        params![row.title, row.amount, row.kind.as_str(), row.category, row.note, row.date],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Whether a row with this exact `(date, title)` pair is already stored.
pub(crate) fn exists(conn: &Connection, date: &str, title: &str) -> rusqlite::Result<bool> {
    conn.query_row(EXISTS_BY_DATE_TITLE, params![date, title], |row| row.get(0))
}

fn map_expense(row: &Row<'_>) -> rusqlite::Result<Expense> {
    let kind: String = row.get(3)?;
    Ok(Expense {
        id: row.get(0)?,
        title: row.get(1)?,
        amount: row.get(2)?,
        kind: ExpenseType::from_selector(Some(&kind)),
        category: row.get(4)?,
        note: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        date: row.get(6)?,
    })
}

fn fetch(conn: &Connection, limit: Option<usize>) -> rusqlite::Result<Vec<Expense>> {
    let mut expenses = Vec::new();
    match limit {
        Some(limit) => {
            let mut stmt = conn.prepare(SELECT_RECENT_EXPENSES)?;
            for expense in stmt.query_map(params![limit as i64], map_expense)? {
                expenses.push(expense?);
            }
        }
        None => {
            let mut stmt = conn.prepare(SELECT_EXPENSES)?;
            for expense in stmt.query_map([], map_expense)? {
                expenses.push(expense?);
            }
        }
    }
    Ok(expenses)
}

/// Expense and income records.
///
/// Reads are ordered most recent first by `date`; rows sharing a timestamp
/// keep their insertion order.
#[derive(Clone)]
pub struct Expenses {
    db: Db,
}

impl Expenses {
    pub fn new(db: &Db) -> Self {
        Self { db: db.clone() }
    }

    /// Normalizes `draft` and stores it, returning the new id.
    pub async fn add(&self, draft: ExpenseDraft) -> StorageResult<i64> {
        let row = NewExpense::from_draft(draft);
        self.db.call(move |conn| insert(conn, &row).map_err(StorageError::Write)).await
    }

    pub async fn list_recent(&self, limit: usize) -> StorageResult<Vec<Expense>> {
        self.db.call(move |conn| fetch(conn, Some(limit)).map_err(StorageError::Read)).await
    }

    pub async fn list_all(&self) -> StorageResult<Vec<Expense>> {
        self.db.call(|conn| fetch(conn, None).map_err(StorageError::Read)).await
    }

    /// Sum of all amounts; 0 for an empty table.
    pub async fn total(&self) -> StorageResult<f64> {
        self.db
            .call(|conn| conn.query_row(SELECT_TOTAL, [], |row| row.get(0)).map_err(StorageError::Read))
            .await
    }

    pub async fn count(&self) -> StorageResult<usize> {
        self.db
            .call(|conn| {
                conn.query_row(SELECT_COUNT, [], |row| row.get::<_, i64>(0))
                    .map(|count| count as usize)
                    .map_err(StorageError::Read)
            })
            .await
    }

    /// Per-day totals for the `max_days` most recent days, oldest first.
    pub async fn summary_by_day(&self, max_days: usize) -> StorageResult<Vec<DaySummary>> {
        self.db
            .call(move |conn| {
                let mut stmt = conn.prepare(SELECT_DAILY_TOTALS).map_err(StorageError::Read)?;
                let rows = stmt
                    .query_map(params![max_days as i64], |row| {
                        Ok(DaySummary {
                            day: row.get(0)?,
                            total: row.get(1)?,
                        })
                    })
                    .map_err(StorageError::Read)?;

                let mut days = rows.collect::<Result<Vec<_>, _>>().map_err(StorageError::Read)?;
                // Query yields newest first.
                days.reverse();
                Ok(days)
            })
            .await
    }

    pub async fn summary_by_type(&self) -> StorageResult<Vec<TypeSummary>> {
        self.db
            .call(|conn| {
                let mut stmt = conn.prepare(SELECT_TYPE_TOTALS).map_err(StorageError::Read)?;
                let rows = stmt
                    .query_map([], |row| {
                        let kind: String = row.get(0)?;
                        Ok(TypeSummary {
                            kind: ExpenseType::from_selector(Some(&kind)),
                            total: row.get(1)?,
                        })
                    })
                    .map_err(StorageError::Read)?;

                let types = rows.collect::<Result<Vec<_>, _>>().map_err(StorageError::Read)?;
                Ok(types)
            })
            .await
    }

    /// All records as calendar events, most recent first.
    pub async fn list_as_events(&self) -> StorageResult<Vec<CalendarEvent>> {
        Ok(self.list_all().await?.into_iter().map(CalendarEvent::from).collect())
    }
}
