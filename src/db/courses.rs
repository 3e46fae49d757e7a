use super::db::Db;
use crate::libs::course::{catalog_entry, Course, CATALOG_SIZE};
use crate::libs::error::{StorageError, StorageResult};
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::{params, Connection};

const INSERT_COURSE: &str = "INSERT INTO courses (title, description) VALUES (?1, ?2)";
const COUNT_COURSES: &str = "SELECT COUNT(*) FROM courses";
const SELECT_COURSES: &str = "SELECT id, title, description FROM courses ORDER BY id LIMIT ?1";

pub fn count(conn: &Connection) -> rusqlite::Result<usize> {
    conn.query_row(COUNT_COURSES, [], |row| row.get::<_, i64>(0)).map(|c| c as usize)
}

/// Inserts the catalog when the table is empty. Returns the number of rows inserted.
pub fn seed_if_empty(conn: &mut Connection) -> StorageResult<usize> {
    let tx = conn.transaction().map_err(StorageError::Write)?;

    let existing = count(&tx).map_err(StorageError::Read)?;
    if existing > 0 {
        msg_debug!(Message::CoursesAlreadySeeded(existing));
        return Ok(0);
    }

    let inserted = reseed(&tx)?;
    tx.commit().map_err(StorageError::Write)?;
    msg_debug!(Message::CoursesSeeded(inserted));
    Ok(inserted)
}

/// Inserts the full catalog, `Course 1` through `Course 50`, regardless of
/// what the table already holds.
pub fn reseed(conn: &Connection) -> StorageResult<usize> {
    let mut stmt = conn.prepare_cached(INSERT_COURSE).map_err(StorageError::Write)?;
    for n in 1..=CATALOG_SIZE {
        let (title, description) = catalog_entry(n);
        stmt.execute(params![title, description]).map_err(StorageError::Write)?;
    }
    Ok(CATALOG_SIZE)
}

/// Read access to the reference course catalog.
#[derive(Clone)]
pub struct Courses {
    db: Db,
}

impl Courses {
    pub fn new(db: &Db) -> Self {
        Self { db: db.clone() }
    }

    /// Up to `limit` courses in insertion order.
    pub async fn list(&self, limit: usize) -> StorageResult<Vec<Course>> {
        self.db
            .call(move |conn| {
                let mut stmt = conn.prepare(SELECT_COURSES).map_err(StorageError::Read)?;
                let course_iter = stmt
                    .query_map(params![limit as i64], |row| {
                        Ok(Course {
                            id: row.get(0)?,
                            title: row.get(1)?,
                            description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                        })
                    })
                    .map_err(StorageError::Read)?;

                let mut courses = Vec::new();
                for course in course_iter {
                    courses.push(course.map_err(StorageError::Read)?);
                }
                Ok(courses)
            })
            .await
    }

    pub async fn count(&self) -> StorageResult<usize> {
        self.db.call(|conn| count(conn).map_err(StorageError::Read)).await
    }
}
