//! Single write connection behind a mutex. Writers are serialized here,
//! which is what makes the uniqueness checks atomic.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use pandemicnet_core::errors::{PandemicResult, StorageError};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open (creating if needed) the database file.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> PandemicResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory(busy_timeout_ms: u32) -> PandemicResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the write lock and execute a closure with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> PandemicResult<T>
    where
        F: FnOnce(&Connection) -> PandemicResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        f(&guard)
    }
}
