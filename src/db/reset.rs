use super::courses;
use super::db::Db;
use crate::libs::error::{StorageError, StorageResult};
use rusqlite::Connection;

const DELETE_EXPENSES: &str = "DELETE FROM expenses";
const DELETE_COURSES: &str = "DELETE FROM courses";

/// Clears every expense and course, then restores the course catalog.
///
/// All steps share one transaction: if any of them fails the database is
/// left exactly as it was. Returns the number of courses re-seeded.
pub fn reset_all(conn: &mut Connection) -> StorageResult<usize> {
    let tx = conn.transaction().map_err(StorageError::Write)?;
    tx.execute(DELETE_EXPENSES, []).map_err(StorageError::Write)?;
    tx.execute(DELETE_COURSES, []).map_err(StorageError::Write)?;
    let seeded = courses::reseed(&tx)?;
    tx.commit().map_err(StorageError::Write)?;
    Ok(seeded)
}

/// Destructive maintenance operations. Access control is up to the caller.
#[derive(Clone)]
pub struct Reset {
    db: Db,
}

impl Reset {
    pub fn new(db: &Db) -> Self {
        Self { db: db.clone() }
    }

    pub async fn reset_all(&self) -> StorageResult<usize> {
        self.db.call(reset_all).await
    }
}
