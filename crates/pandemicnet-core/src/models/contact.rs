use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{PandemicError, PandemicResult};

/// A logged contact between two individuals on a calendar day.
///
/// Stored directionally as (individual, contact) but symmetric in meaning:
/// every lookup checks both roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEvent {
    /// Store-assigned identifier; ascending ids follow insertion order.
    pub id: i64,
    pub individual_id: i64,
    pub contact_id: i64,
    pub date: NaiveDate,
}

impl ContactEvent {
    /// Whether `person_id` is either party of this event.
    pub fn involves(&self, person_id: i64) -> bool {
        self.individual_id == person_id || self.contact_id == person_id
    }

    /// The party that is not `person_id`, if `person_id` is part of the event.
    pub fn other_party(&self, person_id: i64) -> Option<i64> {
        if self.individual_id == person_id {
            Some(self.contact_id)
        } else if self.contact_id == person_id {
            Some(self.individual_id)
        } else {
            None
        }
    }
}

/// A validated contact registration, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    individual_id: i64,
    contact_id: i64,
    date: NaiveDate,
}

impl NewContact {
    /// Build a contact registration. Rejects self-contact.
    pub fn new(individual_id: i64, contact_id: i64, date: NaiveDate) -> PandemicResult<Self> {
        if individual_id == contact_id {
            return Err(PandemicError::validation(
                "contact_id",
                "a person can't be their own contact",
            ));
        }
        Ok(Self {
            individual_id,
            contact_id,
            date,
        })
    }

    pub fn individual_id(&self) -> i64 {
        self.individual_id
    }

    pub fn contact_id(&self) -> i64 {
        self.contact_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// One entry of a traced person's direct-contact list.
/// A pair that met on several days yields one entry per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectContact {
    /// Identifier of the other party.
    pub contact_id: i64,
    /// Handle of the other party.
    pub handle: String,
    pub date: NaiveDate,
}
