//! Connection pool managing the write connection and the read connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};

use pandemicnet_core::config::StorageConfig;
use pandemicnet_core::errors::PandemicResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// The single write connection plus, for file-backed databases, a read pool.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    /// `None` in in-memory mode: a second in-memory connection would be a
    /// separate database, so reads go through the writer.
    pub readers: Option<ReadPool>,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open the writer only. Readers are attached with [`ConnectionPool::attach_readers`]
    /// once the schema exists.
    pub fn open_writer(path: &Path, config: &StorageConfig) -> PandemicResult<Self> {
        let writer = WriteConnection::open(path, config.busy_timeout_ms)?;
        Ok(Self {
            writer,
            readers: None,
            db_path: Some(path.to_path_buf()),
        })
    }

    pub fn open_in_memory(config: &StorageConfig) -> PandemicResult<Self> {
        let writer = WriteConnection::open_in_memory(config.busy_timeout_ms)?;
        Ok(Self {
            writer,
            readers: None,
            db_path: None,
        })
    }

    /// Open the read pool against the same file as the writer.
    /// No-op in in-memory mode.
    pub fn attach_readers(&mut self, config: &StorageConfig) -> PandemicResult<()> {
        if let Some(path) = &self.db_path {
            self.readers = Some(ReadPool::open(
                path,
                config.read_pool_size,
                config.busy_timeout_ms,
            )?);
        }
        Ok(())
    }
}
