//! Stable machine-readable codes for every error family.

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const CONFLICT: &str = "CONFLICT";
pub const PREDICTION_ERROR: &str = "PREDICTION_ERROR";
pub const INTEGRITY_ERROR: &str = "INTEGRITY_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Implemented by every error enum so an outer boundary can map
/// failures to statuses without string matching.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}
