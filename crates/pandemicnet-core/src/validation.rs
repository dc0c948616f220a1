//! Registration rules for handles and phone numbers.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{PandemicError, PandemicResult};

// ASCII classes on purpose: `\d` and `\w` would admit non-ASCII digits/letters.
static HANDLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]+$").expect("handle pattern is a valid regex")
});
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{7,}$").expect("phone pattern is a valid regex")
});

/// Handle must be ASCII alphanumeric with at least one letter.
pub fn is_valid_handle(handle: &str) -> bool {
    HANDLE_RE.is_match(handle) && handle.bytes().any(|b| b.is_ascii_alphabetic())
}

/// Phone must be ASCII digits only, at least 7 of them.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

pub fn validate_handle(handle: &str) -> PandemicResult<()> {
    if is_valid_handle(handle) {
        Ok(())
    } else {
        Err(PandemicError::validation(
            "handle",
            "Unique ID must contain at least one letter and no spaces/special characters",
        ))
    }
}

pub fn validate_phone(phone: &str) -> PandemicResult<()> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(PandemicError::validation(
            "phone",
            "Phone number must be at least 7 digits (numbers only)",
        ))
    }
}
