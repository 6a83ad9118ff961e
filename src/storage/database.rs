//! Database handle and scoped connections
//!
//! A `Database` is only a path. Every unit of work opens its own
//! connection, configures it, runs, and drops it. No connection outlives
//! the closure it was opened for, whichever way the closure exits.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use rusqlite::Connection;

use super::errors::{StorageError, StorageResult};
use crate::observability::ObservationScope;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const CREATE_STORES_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS stores (
        id   TEXT PRIMARY KEY,
        name TEXT NOT NULL UNIQUE CHECK(length(name) <= 80)
    );";

const CREATE_ITEMS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS items (
        id       TEXT PRIMARY KEY,
        name     TEXT NOT NULL CHECK(length(name) <= 50),
        price    REAL NOT NULL,
        store_id TEXT NOT NULL,
        FOREIGN KEY (store_id) REFERENCES stores (id),
        UNIQUE (name, store_id)
    );";

/// Handle to the SQLite database file
#[derive(Debug, Clone)]
pub struct Database {
    path: Arc<PathBuf>,
}

impl Database {
    /// Create a handle for the database at `path`. Nothing is opened yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    /// Open and configure a new connection.
    fn open(&self) -> StorageResult<Connection> {
        let conn = Connection::open(self.path.as_path())?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    /// Run `f` against a freshly opened connection.
    ///
    /// The connection is closed when this returns, whether `f` succeeded,
    /// failed, or returned early. Anything `f` did not commit is rolled
    /// back by SQLite on close.
    pub fn with_connection<T, F>(&self, f: F) -> StorageResult<T>
    where
        F: FnOnce(&mut Connection) -> StorageResult<T>,
    {
        let mut conn = self.open()?;
        f(&mut conn)
    }

    /// Async form of [`Database::with_connection`] for request handlers.
    ///
    /// SQLite calls block, so the unit of work runs on tokio's blocking pool.
    pub async fn run<T, F>(&self, f: F) -> StorageResult<T>
    where
        F: FnOnce(&mut Connection) -> StorageResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = self.clone();
        tokio::task::spawn_blocking(move || db.with_connection(f)).await?
    }

    /// Create the `stores` and `items` tables if they are missing.
    ///
    /// Safe to call on every start. A failure here means the service
    /// cannot work at all and must not start.
    pub fn init_schema(&self) -> StorageResult<()> {
        let path = self.path.display().to_string();
        let scope = ObservationScope::with_fields("SCHEMA_INIT", &[("database", path.as_str())]);

        self.with_connection(|conn| {
            let tx = conn.transaction()?;
            tx.execute_batch(CREATE_STORES_TABLE)?;
            tx.execute_batch(CREATE_ITEMS_TABLE)?;
            tx.commit()?;
            Ok(())
        })?;

        scope.complete();
        Ok(())
    }
}

/// Fresh opaque id for a new row: a v4 UUID as 32 lowercase hex chars.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
