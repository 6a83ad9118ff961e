//! Storage error types
//!
//! SQLite reports every constraint failure as `SQLITE_CONSTRAINT`; the
//! extended result code tells us which one fired. Handlers need that
//! distinction to choose between "not found" and "conflict".

use rusqlite::ffi;
use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// A UNIQUE or PRIMARY KEY constraint rejected the write
    #[error("{0}")]
    Unique(String),

    /// A FOREIGN KEY constraint rejected the write
    #[error("{0}")]
    ForeignKey(String),

    /// A CHECK or NOT NULL constraint rejected the write
    #[error("{0}")]
    Check(String),

    /// Any other engine failure
    #[error("{0}")]
    Sqlite(String),

    /// The blocking task running the unit of work did not finish
    #[error("storage task failed: {0}")]
    Task(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        let message = err.to_string();
        match err {
            rusqlite::Error::SqliteFailure(failure, _)
                if failure.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                match failure.extended_code {
                    ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                        StorageError::Unique(message)
                    }
                    ffi::SQLITE_CONSTRAINT_FOREIGNKEY => StorageError::ForeignKey(message),
                    ffi::SQLITE_CONSTRAINT_CHECK | ffi::SQLITE_CONSTRAINT_NOTNULL => {
                        StorageError::Check(message)
                    }
                    _ => StorageError::Sqlite(message),
                }
            }
            _ => StorageError::Sqlite(message),
        }
    }
}

impl From<tokio::task::JoinError> for StorageError {
    fn from(err: tokio::task::JoinError) -> Self {
        StorageError::Task(err.to_string())
    }
}
