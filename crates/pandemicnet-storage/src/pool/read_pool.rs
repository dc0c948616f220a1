//! Pool of read-only connections, handed out round-robin.
//! WAL lets them read while the writer holds its lock.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rusqlite::{Connection, OpenFlags};

use pandemicnet_core::errors::{PandemicResult, StorageError};

use super::pragmas::apply_read_pragmas;
use crate::to_storage_err;

/// Upper bound on read connections regardless of configuration.
const MAX_POOL_SIZE: usize = 8;

pub struct ReadPool {
    connections: Vec<Mutex<Connection>>,
    next: AtomicUsize,
}

impl ReadPool {
    /// Open `pool_size` (clamped to 1..=8) read-only connections to `path`.
    pub fn open(path: &Path, pool_size: usize, busy_timeout_ms: u32) -> PandemicResult<Self> {
        let size = pool_size.clamp(1, MAX_POOL_SIZE);
        let mut connections = Vec::with_capacity(size);
        for _ in 0..size {
            let conn = Connection::open_with_flags(
                path,
                OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
            apply_read_pragmas(&conn, busy_timeout_ms)?;
            connections.push(Mutex::new(conn));
        }
        Ok(Self {
            connections,
            next: AtomicUsize::new(0),
        })
    }

    /// Execute a closure with the next read connection.
    pub fn with_conn<F, T>(&self, f: F) -> PandemicResult<T>
    where
        F: FnOnce(&Connection) -> PandemicResult<T>,
    {
        let idx = self.next.fetch_add(1, Ordering::Relaxed) % self.connections.len();
        let guard = self.connections[idx]
            .lock()
            .map_err(|e| StorageError::LockPoisoned(format!("read pool: {e}")))?;
        f(&guard)
    }

    pub fn size(&self) -> usize {
        self.connections.len()
    }
}
