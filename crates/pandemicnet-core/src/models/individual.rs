use serde::{Deserialize, Serialize};

use crate::errors::PandemicResult;
use crate::validation;

/// A registered person. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    /// Store-assigned identifier.
    pub id: i64,
    /// Unique display handle (ASCII alphanumeric, at least one letter).
    pub handle: String,
    /// Digits-only phone number, at least 7 digits.
    pub phone: Option<String>,
}

/// A validated registration, ready to be inserted.
///
/// Only constructible through [`NewIndividual::new`], so every value that
/// reaches the store has passed the handle and phone rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIndividual {
    handle: String,
    phone: Option<String>,
}

impl NewIndividual {
    /// Validate and build a registration. An empty phone is treated as absent.
    pub fn new(handle: &str, phone: Option<&str>) -> PandemicResult<Self> {
        validation::validate_handle(handle)?;
        let phone = match phone {
            Some(p) if !p.is_empty() => {
                validation::validate_phone(p)?;
                Some(p.to_string())
            }
            _ => None,
        };
        Ok(Self {
            handle: handle.to_string(),
            phone,
        })
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}
