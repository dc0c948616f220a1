//! Loosely-typed registration payloads as they arrive from an outer boundary
//! (JSON body, form, CLI). Missing fields are representable here and rejected
//! when converting into the validated `New*` types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{NewContact, NewIndividual};
use crate::constants::DATE_FORMAT;
use crate::errors::{PandemicError, PandemicResult};

/// Person registration payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonRequest {
    #[serde(alias = "unique_id")]
    pub handle: Option<String>,
    #[serde(alias = "phone_number")]
    pub phone: Option<String>,
}

impl PersonRequest {
    pub fn new(handle: &str, phone: &str) -> Self {
        Self {
            handle: Some(handle.to_string()),
            phone: Some(phone.to_string()),
        }
    }

    pub fn into_new(self) -> PandemicResult<NewIndividual> {
        let handle = self
            .handle
            .ok_or_else(|| PandemicError::validation("handle", "Please provide a unique ID"))?;
        NewIndividual::new(&handle, self.phone.as_deref())
    }
}

/// Contact registration payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    pub individual_id: Option<i64>,
    pub contact_id: Option<i64>,
    #[serde(alias = "date")]
    pub contact_date: Option<String>,
}

impl ContactRequest {
    pub fn new(individual_id: i64, contact_id: i64, contact_date: &str) -> Self {
        Self {
            individual_id: Some(individual_id),
            contact_id: Some(contact_id),
            contact_date: Some(contact_date.to_string()),
        }
    }

    pub fn into_new(self) -> PandemicResult<NewContact> {
        let (Some(individual_id), Some(contact_id), Some(raw_date)) =
            (self.individual_id, self.contact_id, self.contact_date)
        else {
            return Err(PandemicError::validation(
                "contact",
                "Please fill in all contact details",
            ));
        };
        let date = NaiveDate::parse_from_str(raw_date.trim(), DATE_FORMAT).map_err(|e| {
            PandemicError::validation("contact_date", format!("'{raw_date}' is not a YYYY-MM-DD date: {e}"))
        })?;
        NewContact::new(individual_id, contact_id, date)
    }
}
