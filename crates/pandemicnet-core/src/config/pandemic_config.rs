//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::{BridgePolicy, ClassifierConfig, ObservabilityConfig, PredictionConfig, StorageConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PANDEMICNET_*`)
/// 2. TOML file passed to [`PandemicConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PandemicConfig {
    pub storage: StorageConfig,
    pub prediction: PredictionConfig,
    pub classifier: ClassifierConfig,
    pub observability: ObservabilityConfig,
}

impl PandemicConfig {
    /// Load a TOML file (if it exists), apply env overrides, validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content =
                std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from a TOML string and validate. No env overrides.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.read_pool_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "storage.read_pool_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.prediction.confidence_decimals > defaults::MAX_CONFIDENCE_DECIMALS {
            return Err(ConfigError::ValidationFailed {
                field: "prediction.confidence_decimals".to_string(),
                message: format!("must be at most {}", defaults::MAX_CONFIDENCE_DECIMALS),
            });
        }
        if self.prediction.days_since_cap == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "prediction.days_since_cap".to_string(),
                message: "must be greater than 0 when set".to_string(),
            });
        }
        Ok(())
    }

    /// Pattern: `PANDEMICNET_DB_PATH`, `PANDEMICNET_BRIDGE_POLICY`, etc.
    /// Unparsable numeric values are rejected rather than ignored.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("PANDEMICNET_DB_PATH") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("PANDEMICNET_CLASSIFIER_PATH") {
            self.classifier.artifact_path = Some(val);
        }
        if let Ok(val) = std::env::var("PANDEMICNET_BRIDGE_POLICY") {
            self.prediction.bridge_policy =
                BridgePolicy::from_str_name(&val).ok_or_else(|| ConfigError::ValidationFailed {
                    field: "PANDEMICNET_BRIDGE_POLICY".to_string(),
                    message: format!("unknown bridge policy '{val}'"),
                })?;
        }
        if let Ok(val) = std::env::var("PANDEMICNET_DEFAULT_DAYS_SINCE") {
            self.prediction.default_days_since =
                val.parse().map_err(|_| ConfigError::ValidationFailed {
                    field: "PANDEMICNET_DEFAULT_DAYS_SINCE".to_string(),
                    message: format!("'{val}' is not a non-negative integer"),
                })?;
        }
        Ok(())
    }
}
