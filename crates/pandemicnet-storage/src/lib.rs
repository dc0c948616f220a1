//! # pandemicnet-storage
//!
//! SQLite-backed contact store. Owns the connection pool, the schema
//! migrations, and the SQL for individuals and contact events.
//! Implements [`pandemicnet_core::IContactStore`].

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use pandemicnet_core::errors::{PandemicError, StorageError};

/// Wrap an SQLite failure message as a storage error.
pub(crate) fn to_storage_err(message: impl Into<String>) -> PandemicError {
    StorageError::SqliteError {
        message: message.into(),
    }
    .into()
}

/// True when the failure is a UNIQUE constraint (column or index).
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
