//! StorageEngine: owns the ConnectionPool, runs migrations on open,
//! implements IContactStore.

use std::path::Path;

use pandemicnet_core::config::StorageConfig;
use pandemicnet_core::errors::{PandemicError, PandemicResult};
use pandemicnet_core::models::{ContactEvent, ContactSnapshot, Individual, NewContact, NewIndividual};
use pandemicnet_core::traits::IContactStore;

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{contact_ops, individual_ops, snapshot_ops};

/// SQLite contact store.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a file-backed store with default settings.
    pub fn open(path: &Path) -> PandemicResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open the store at `config.db_path`.
    pub fn from_config(config: &StorageConfig) -> PandemicResult<Self> {
        Self::open_with_config(Path::new(&config.db_path), config)
    }

    pub fn open_with_config(path: &Path, config: &StorageConfig) -> PandemicResult<Self> {
        let mut pool = ConnectionPool::open_writer(path, config)?;
        pool.writer.with_conn(migrations::run_migrations)?;
        pool.attach_readers(config)?;
        tracing::debug!(path = %path.display(), readers = config.read_pool_size, "contact store opened");
        Ok(Self { pool })
    }

    /// In-memory store (for testing). All reads go through the writer.
    pub fn open_in_memory() -> PandemicResult<Self> {
        let pool = ConnectionPool::open_in_memory(&StorageConfig::default())?;
        pool.writer.with_conn(migrations::run_migrations)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    pub fn schema_version(&self) -> PandemicResult<u32> {
        self.with_reader(migrations::current_version)
    }

    pub fn count_individuals(&self) -> PandemicResult<usize> {
        self.with_reader(individual_ops::count_individuals)
    }

    pub fn count_contacts(&self) -> PandemicResult<usize> {
        self.with_reader(contact_ops::count_contacts)
    }

    /// File-backed: read pool. In-memory: the writer.
    fn with_reader<F, T>(&self, f: F) -> PandemicResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> PandemicResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn(f),
        }
    }
}

impl IContactStore for StorageEngine {
    fn insert_individual(&self, individual: &NewIndividual) -> PandemicResult<Individual> {
        self.pool
            .writer
            .with_conn(|conn| individual_ops::insert_individual(conn, individual))
    }

    fn insert_contact(&self, contact: &NewContact) -> PandemicResult<ContactEvent> {
        // Existence checks and the insert share the write lock.
        self.pool.writer.with_conn(|conn| {
            for id in [contact.individual_id(), contact.contact_id()] {
                if !individual_ops::individual_exists(conn, id)? {
                    return Err(PandemicError::not_found("individual", id));
                }
            }
            contact_ops::insert_contact(conn, contact)
        })
    }

    fn get_individual(&self, id: i64) -> PandemicResult<Option<Individual>> {
        self.with_reader(|conn| individual_ops::get_individual(conn, id))
    }

    fn get_individual_by_handle(&self, handle: &str) -> PandemicResult<Option<Individual>> {
        self.with_reader(|conn| individual_ops::get_individual_by_handle(conn, handle))
    }

    fn list_individuals(&self) -> PandemicResult<Vec<Individual>> {
        self.with_reader(individual_ops::list_individuals)
    }

    fn list_contact_events(&self) -> PandemicResult<Vec<ContactEvent>> {
        self.with_reader(contact_ops::list_contact_events)
    }

    fn contacts_of(&self, individual_id: i64) -> PandemicResult<Vec<ContactEvent>> {
        self.with_reader(|conn| contact_ops::contacts_of(conn, individual_id))
    }

    fn snapshot(&self) -> PandemicResult<ContactSnapshot> {
        self.with_reader(snapshot_ops::read_snapshot)
    }
}
