use serde::{Deserialize, Serialize};

use super::defaults;

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive used when `PANDEMICNET_LOG` is unset.
    pub log_filter: String,
    /// Emit JSON lines instead of the human formatter.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: defaults::DEFAULT_LOG_FILTER.to_string(),
            json: defaults::DEFAULT_JSON_LOGS,
        }
    }
}
