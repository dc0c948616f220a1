//! Confidence rounding and word levels.

use serde::{Deserialize, Serialize};

/// Round to `decimals` places.
pub fn round_confidence(value: f64, decimals: u32) -> f64 {
    let scale = 10_f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Word form of a confidence, used in explanations and narratives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Hot,
    Maybe,
    WildGuess,
}

impl ConfidenceLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            Self::Hot
        } else if score >= 0.5 {
            Self::Maybe
        } else {
            Self::WildGuess
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Maybe => "maybe",
            Self::WildGuess => "wild guess",
        }
    }

    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "hot" => Some(Self::Hot),
            "maybe" => Some(Self::Maybe),
            "wild guess" => Some(Self::WildGuess),
            _ => None,
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
