//! Versioned schema migrations, recorded in `schema_version`.

pub mod v001_initial_schema;

use rusqlite::Connection;

use pandemicnet_core::errors::{PandemicResult, StorageError};

type Migration = fn(&Connection) -> rusqlite::Result<()>;

const MIGRATIONS: &[(u32, Migration)] = &[(1, v001_initial_schema::migrate)];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 1;

/// Apply every migration newer than the recorded version, each in its own
/// transaction.
pub fn run_migrations(conn: &Connection) -> PandemicResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| StorageError::MigrationFailed {
        version: 0,
        reason: e.to_string(),
    })?;

    let current = current_version(conn)?;
    for &(version, migrate) in MIGRATIONS {
        if version <= current {
            continue;
        }
        let failed = |e: rusqlite::Error| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        };
        conn.execute_batch("BEGIN IMMEDIATE").map_err(failed)?;
        let applied = migrate(conn).and_then(|()| {
            conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])
                .map(|_| ())
        });
        match applied {
            Ok(()) => conn.execute_batch("COMMIT").map_err(failed)?,
            Err(e) => {
                let _ = conn.execute_batch("ROLLBACK");
                return Err(failed(e).into());
            }
        }
        tracing::info!(version, "applied migration");
    }
    Ok(())
}

/// Highest applied version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> PandemicResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| {
        StorageError::MigrationFailed {
            version: 0,
            reason: e.to_string(),
        }
        .into()
    })
}
