use serde::{Deserialize, Serialize};

use super::defaults;

/// Which bridge's score survives when a candidate is reachable through
/// several direct contacts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgePolicy {
    /// The bridge enumerated last overwrites earlier ones.
    #[default]
    LastBridge,
    /// The bridge yielding the highest confidence is kept.
    HighestConfidence,
}

impl BridgePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LastBridge => "last_bridge",
            Self::HighestConfidence => "highest_confidence",
        }
    }

    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "last_bridge" => Some(Self::LastBridge),
            "highest_confidence" => Some(Self::HighestConfidence),
            _ => None,
        }
    }
}

/// Prediction engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// `days_since_last` when the bridge has no dated events.
    pub default_days_since: u32,
    /// Optional upper bound applied to `days_since_last`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_since_cap: Option<u32>,
    /// Decimal places kept on reported confidences.
    pub confidence_decimals: u32,
    pub bridge_policy: BridgePolicy,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            default_days_since: defaults::DEFAULT_DAYS_SINCE,
            days_since_cap: None,
            confidence_decimals: defaults::DEFAULT_CONFIDENCE_DECIMALS,
            bridge_policy: BridgePolicy::default(),
        }
    }
}
