// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "pandemicnet.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Prediction ---
pub const DEFAULT_DAYS_SINCE: u32 = 30;
pub const DEFAULT_CONFIDENCE_DECIMALS: u32 = 2;
pub const MAX_CONFIDENCE_DECIMALS: u32 = 6;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
