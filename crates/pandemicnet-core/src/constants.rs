/// PandemicNet version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Calendar-day format used for contact dates on every surface.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Prefix for every environment variable the tracer reads.
pub const ENV_PREFIX: &str = "PANDEMICNET_";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "PANDEMICNET_LOG";
