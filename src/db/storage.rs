//! Lazily initialized, process-wide store.
//!
//! [`Storage`] owns the single [`Db`] handle of the process. The first call to
//! [`Storage::initialize`] runs the start-up sequence, strictly in order:
//!
//! 1. open the database file, creating its directory if needed
//! 2. create or update the schema
//! 3. import the legacy JSON file, if one is present (never fatal)
//! 4. seed the course catalog when it is empty
//!
//! Later and concurrent calls receive a clone of the same handle without
//! repeating any of these steps. A failed initialization leaves the cell
//! empty so a later call can retry.

use super::courses::Courses;
use super::db::Db;
use super::expenses::Expenses;
use super::import::ImportOutcome;
use super::reset::Reset;
use super::{courses, import, schema};
use crate::libs::config::StorageConfig;
use crate::libs::error::{StorageError, StorageResult};
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use tokio::sync::OnceCell;
use tokio::task;

/// What the start-up sequence did besides opening the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub import: ImportOutcome,
    /// Courses inserted by seeding; 0 when the catalog already existed.
    pub seeded_courses: usize,
}

struct Initialized {
    db: Db,
    report: InitReport,
}

pub struct Storage {
    config: StorageConfig,
    cell: OnceCell<Initialized>,
}

impl Storage {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            cell: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Returns the shared handle, running the start-up sequence on first use.
    pub async fn initialize(&self) -> StorageResult<Db> {
        let initialized = self
            .cell
            .get_or_try_init(|| {
                let config = self.config.clone();
                async move {
                    task::spawn_blocking(move || bootstrap(&config))
                        .await
                        .unwrap_or_else(|e| Err(StorageError::Startup(e)))
                }
            })
            .await?;
        Ok(initialized.db.clone())
    }

    /// Outcome of the start-up sequence, once it has completed.
    pub fn init_report(&self) -> Option<&InitReport> {
        self.cell.get().map(|initialized| &initialized.report)
    }

    pub async fn expenses(&self) -> StorageResult<Expenses> {
        Ok(Expenses::new(&self.initialize().await?))
    }

    pub async fn courses(&self) -> StorageResult<Courses> {
        Ok(Courses::new(&self.initialize().await?))
    }

    pub async fn reset(&self) -> StorageResult<Reset> {
        Ok(Reset::new(&self.initialize().await?))
    }
}

fn bootstrap(config: &StorageConfig) -> StorageResult<Initialized> {
    let db_path = config.db_path();
    msg_debug!(Message::StorageOpening(db_path.display().to_string()));

    let result = open_and_prepare(config);
    match &result {
        Ok(initialized) => msg_debug!(Message::StorageReady(initialized.db.path().display().to_string())),
        Err(e) => msg_error!(Message::StorageInitFailed(e.to_string())),
    }
    result
}

fn open_and_prepare(config: &StorageConfig) -> StorageResult<Initialized> {
    let db = Db::open(&config.db_path())?;
    let legacy_path = config.legacy_path();

    let report = db.with_conn(|conn| -> StorageResult<InitReport> {
        schema::ensure_schema(conn)?;
        let import = import::import_legacy(conn, &legacy_path);
        let seeded_courses = courses::seed_if_empty(conn)?;
        Ok(InitReport { import, seeded_courses })
    })?;

    Ok(Initialized { db, report })
}
