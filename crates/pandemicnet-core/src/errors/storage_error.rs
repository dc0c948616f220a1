use super::error_code::{self, ErrorCode};

/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("corrupt row in {table}: {details}")]
    CorruptRow { table: String, details: String },

    #[error("connection lock poisoned: {0}")]
    LockPoisoned(String),
}

impl ErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        error_code::STORAGE_ERROR
    }
}
