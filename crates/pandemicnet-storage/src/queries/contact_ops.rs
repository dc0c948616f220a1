//! Contact event insert and scans. Events are stored directionally but
//! every per-person query matches both roles.

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};

use pandemicnet_core::constants::DATE_FORMAT;
use pandemicnet_core::errors::{PandemicError, PandemicResult, StorageError};
use pandemicnet_core::models::{ContactEvent, NewContact};

use crate::{is_unique_violation, to_storage_err};

const COLUMNS: &str = "id, individual_id, contact_id, contact_date";

type RawEvent = (i64, i64, i64, String);

fn read_raw(row: &Row<'_>) -> rusqlite::Result<RawEvent> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn into_event((id, individual_id, contact_id, raw_date): RawEvent) -> PandemicResult<ContactEvent> {
    let date = NaiveDate::parse_from_str(&raw_date, DATE_FORMAT).map_err(|e| {
        StorageError::CorruptRow {
            table: "contacts".to_string(),
            details: format!("id {id}: bad contact_date '{raw_date}': {e}"),
        }
    })?;
    Ok(ContactEvent {
        id,
        individual_id,
        contact_id,
        date,
    })
}

/// Insert a contact event. The same unordered pair on the same day is a `Conflict`.
pub fn insert_contact(conn: &Connection, contact: &NewContact) -> PandemicResult<ContactEvent> {
    let date = contact.date().format(DATE_FORMAT).to_string();
    conn.execute(
        "INSERT INTO contacts (individual_id, contact_id, contact_date) VALUES (?1, ?2, ?3)",
        params![contact.individual_id(), contact.contact_id(), date],
    )
    .map_err(|e| {
        if is_unique_violation(&e) {
            PandemicError::conflict("This contact is already logged for that day")
        } else {
            to_storage_err(e.to_string())
        }
    })?;

    Ok(ContactEvent {
        id: conn.last_insert_rowid(),
        individual_id: contact.individual_id(),
        contact_id: contact.contact_id(),
        date: contact.date(),
    })
}

fn query_events(
    conn: &Connection,
    sql: &str,
    params: &[&dyn rusqlite::types::ToSql],
) -> PandemicResult<Vec<ContactEvent>> {
    let mut stmt = conn.prepare(sql).map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params, read_raw)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut events = Vec::new();
    for row in rows {
        let raw = row.map_err(|e| to_storage_err(e.to_string()))?;
        events.push(into_event(raw)?);
    }
    Ok(events)
}

/// All events, ascending id (insertion order).
pub fn list_contact_events(conn: &Connection) -> PandemicResult<Vec<ContactEvent>> {
    query_events(
        conn,
        &format!("SELECT {COLUMNS} FROM contacts ORDER BY id"),
        params![],
    )
}

/// Events where `individual_id` is either party, ascending id.
pub fn contacts_of(conn: &Connection, individual_id: i64) -> PandemicResult<Vec<ContactEvent>> {
    query_events(
        conn,
        &format!(
            "SELECT {COLUMNS} FROM contacts
             WHERE individual_id = ?1 OR contact_id = ?1
             ORDER BY id"
        ),
        params![individual_id],
    )
}

pub fn count_contacts(conn: &Connection) -> PandemicResult<usize> {
    conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get::<_, i64>(0))
        .map(|n| n as usize)
        .map_err(|e| to_storage_err(e.to_string()))
}
