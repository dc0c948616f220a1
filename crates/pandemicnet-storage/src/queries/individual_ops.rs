//! Individual insert and lookups.

use rusqlite::{params, Connection, OptionalExtension, Row};

use pandemicnet_core::errors::{PandemicError, PandemicResult};
use pandemicnet_core::models::{Individual, NewIndividual};

use crate::{is_unique_violation, to_storage_err};

const COLUMNS: &str = "id, handle, phone";

fn row_to_individual(row: &Row<'_>) -> rusqlite::Result<Individual> {
    Ok(Individual {
        id: row.get(0)?,
        handle: row.get(1)?,
        phone: row.get(2)?,
    })
}

/// Insert an individual. A taken handle is a `Conflict`.
pub fn insert_individual(conn: &Connection, individual: &NewIndividual) -> PandemicResult<Individual> {
    conn.execute(
        "INSERT INTO individuals (handle, phone) VALUES (?1, ?2)",
        params![individual.handle(), individual.phone()],
    )
    .map_err(|e| {
        if is_unique_violation(&e) {
            PandemicError::conflict(format!("Sorry, '{}' is already taken", individual.handle()))
        } else {
            to_storage_err(e.to_string())
        }
    })?;

    Ok(Individual {
        id: conn.last_insert_rowid(),
        handle: individual.handle().to_string(),
        phone: individual.phone().map(str::to_string),
    })
}

pub fn get_individual(conn: &Connection, id: i64) -> PandemicResult<Option<Individual>> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM individuals WHERE id = ?1"),
        params![id],
        row_to_individual,
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn get_individual_by_handle(conn: &Connection, handle: &str) -> PandemicResult<Option<Individual>> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM individuals WHERE handle = ?1"),
        params![handle],
        row_to_individual,
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn individual_exists(conn: &Connection, id: i64) -> PandemicResult<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM individuals WHERE id = ?1)",
        params![id],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// All individuals, ascending id.
pub fn list_individuals(conn: &Connection) -> PandemicResult<Vec<Individual>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {COLUMNS} FROM individuals ORDER BY id"))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], row_to_individual)
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn count_individuals(conn: &Connection) -> PandemicResult<usize> {
    conn.query_row("SELECT COUNT(*) FROM individuals", [], |row| row.get::<_, i64>(0))
        .map(|n| n as usize)
        .map_err(|e| to_storage_err(e.to_string()))
}
