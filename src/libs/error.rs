//! Error types for the persistence layer.
//!
//! Every failure is classified by [`ErrorKind`]: initialization problems are
//! fatal to the process, while read and write failures surface to the caller
//! of the individual repository operation.

use std::path::PathBuf;
use thiserror::Error;
use tokio::task::JoinError;

/// Coarse classification of a [`StorageError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The data directory, database file or schema could not be set up.
    Init,
    /// An insert, update or delete failed on an open store.
    Write,
    /// A query failed on an open store.
    Read,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot create data directory {}: {source}", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open database {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("schema setup failed: {0}")]
    Schema(#[source] rusqlite::Error),

    #[error("invalid schema identifier '{0}'")]
    InvalidIdentifier(String),

    #[error("database write failed: {0}")]
    Write(#[source] rusqlite::Error),

    #[error("database read failed: {0}")]
    Read(#[source] rusqlite::Error),

    #[error("storage start-up task did not complete: {0}")]
    Startup(#[source] JoinError),

    #[error("storage task did not complete: {0}")]
    Task(#[from] JoinError),
}

impl StorageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Directory { .. }
            | Self::Open { .. }
            | Self::Schema(_)
            | Self::InvalidIdentifier(_)
            | Self::Startup(_) => ErrorKind::Init,
            Self::Write(_) => ErrorKind::Write,
            Self::Read(_) | Self::Task(_) => ErrorKind::Read,
        }
    }

    pub fn is_init(&self) -> bool {
        self.kind() == ErrorKind::Init
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_and_open_failures_are_init_errors() {
        let err = StorageError::Schema(rusqlite::Error::InvalidQuery);
        assert_eq!(err.kind(), ErrorKind::Init);

        let err = StorageError::InvalidIdentifier("a b".into());
        assert!(err.is_init());
    }

    #[test]
    fn write_and_read_failures_keep_their_kind() {
        assert_eq!(StorageError::Write(rusqlite::Error::InvalidQuery).kind(), ErrorKind::Write);
        assert_eq!(StorageError::Read(rusqlite::Error::QueryReturnedNoRows).kind(), ErrorKind::Read);
    }

    #[tokio::test]
    async fn join_failures_during_start_up_are_init_errors() {
        let handle = tokio::spawn(std::future::pending::<()>());
        handle.abort();
        let join_err = handle.await.unwrap_err();
        assert!(StorageError::Startup(join_err).is_init());

        let handle = tokio::spawn(std::future::pending::<()>());
        handle.abort();
        let join_err = handle.await.unwrap_err();
        assert_eq!(StorageError::from(join_err).kind(), ErrorKind::Read);
    }
}
