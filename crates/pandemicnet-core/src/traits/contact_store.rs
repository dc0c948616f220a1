use crate::errors::PandemicResult;
use crate::models::{ContactEvent, ContactSnapshot, Individual, NewContact, NewIndividual};

/// Create/read/query-by-field access to individuals and contact events.
///
/// The store serializes concurrent writers and enforces uniqueness
/// atomically: duplicate handles and duplicate (pair, day) contacts
/// surface as `PandemicError::Conflict`.
pub trait IContactStore: Send + Sync {
    // --- Writes ---
    fn insert_individual(&self, individual: &NewIndividual) -> PandemicResult<Individual>;
    fn insert_contact(&self, contact: &NewContact) -> PandemicResult<ContactEvent>;

    // --- Lookups ---
    fn get_individual(&self, id: i64) -> PandemicResult<Option<Individual>>;
    fn get_individual_by_handle(&self, handle: &str) -> PandemicResult<Option<Individual>>;

    // --- Scans ---
    /// All individuals, ascending id.
    fn list_individuals(&self) -> PandemicResult<Vec<Individual>>;
    /// All contact events, ascending id (insertion order).
    fn list_contact_events(&self) -> PandemicResult<Vec<ContactEvent>>;
    /// Events where `individual_id` is either party, ascending id.
    fn contacts_of(&self, individual_id: i64) -> PandemicResult<Vec<ContactEvent>>;

    /// Both scans in one consistent read: a write that commits between
    /// them is seen by neither.
    fn snapshot(&self) -> PandemicResult<ContactSnapshot>;
}
