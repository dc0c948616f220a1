//! Consistent multi-table reads.

use rusqlite::Connection;

use pandemicnet_core::errors::PandemicResult;
use pandemicnet_core::models::ContactSnapshot;

use super::{contact_ops, individual_ops};
use crate::to_storage_err;

/// Read every individual and every event inside one deferred transaction.
/// Under WAL the read snapshot is fixed at the first SELECT, so a writer
/// committing between the two scans is invisible to both.
pub fn read_snapshot(conn: &Connection) -> PandemicResult<ContactSnapshot> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(e.to_string()))?;
    let individuals = individual_ops::list_individuals(&tx)?;
    let events = contact_ops::list_contact_events(&tx)?;
    tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
    Ok(ContactSnapshot { individuals, events })
}
