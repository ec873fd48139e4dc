//! SQLite connection wrapper (one connection, owned by the sqlite store).

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// How long a writer waits for another process holding the database lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file. Failing to open means the
    /// backend is unreachable, not that the data is bad.
    pub fn open(path: &Path) -> AppResult<Self> {
        let conn = Connection::open(path).map_err(|e| {
            AppError::PersistenceUnavailable(format!("{}: {}", path.display(), e))
        })?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(Self { conn })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T>,
    {
        func(&mut self.conn)
    }
}
