//! Structured, parseable explanation attached to every prediction.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use pandemicnet_core::config::defaults::DEFAULT_CONFIDENCE_DECIMALS;
use pandemicnet_core::models::FeatureVector;

use crate::confidence::ConfidenceLevel;

static EXPLANATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^Predicted (?P<candidate>\S+) via (?P<bridge>\S+): ",
        r"Contacts=(?P<contacts>\d+) \(high activity boosts chance\), ",
        r"Days ago=(?P<days>\d+) \(recent is better\), ",
        r"Mutuals=(?P<mutuals>\d+) \(shared ties help\), ",
        r"Confidence=(?P<confidence>\d+(?:\.\d+)?) \((?P<level>hot|maybe|wild guess)\)$",
    ))
    .expect("explanation pattern is a valid regex")
});

/// Why a candidate was predicted: the bridge it was scored through, the
/// features, and the resulting confidence.
///
/// Renders as
/// `Predicted <m> via <n>: Contacts=<c> (high activity boosts chance), Days ago=<d> (recent is better), Mutuals=<k> (shared ties help), Confidence=<p.pp> (<word>)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionExplanation {
    pub candidate: String,
    pub bridge: String,
    pub features: FeatureVector,
    pub confidence: f64,
    pub level: ConfidenceLevel,
    /// Decimal places `confidence` is printed with.
    #[serde(default = "default_decimals")]
    pub decimals: u32,
}

fn default_decimals() -> u32 {
    DEFAULT_CONFIDENCE_DECIMALS
}

impl PredictionExplanation {
    pub fn new(candidate: &str, bridge: &str, features: FeatureVector, confidence: f64) -> Self {
        Self {
            candidate: candidate.to_string(),
            bridge: bridge.to_string(),
            features,
            confidence,
            level: ConfidenceLevel::from_score(confidence),
            decimals: DEFAULT_CONFIDENCE_DECIMALS,
        }
    }

    /// Print `confidence` with `decimals` places instead of the default two.
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Inverse of `Display`. `decimals` is taken from the printed confidence.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = EXPLANATION_RE.captures(text)?;
        let features = FeatureVector::new(
            caps["contacts"].parse().ok()?,
            caps["days"].parse().ok()?,
            caps["mutuals"].parse().ok()?,
        );
        Some(Self {
            candidate: caps["candidate"].to_string(),
            bridge: caps["bridge"].to_string(),
            features,
            confidence: caps["confidence"].parse().ok()?,
            level: ConfidenceLevel::from_str_name(&caps["level"])?,
            decimals: caps["confidence"]
                .split_once('.')
                .map_or(0, |(_, fraction)| fraction.len() as u32),
        })
    }
}

impl fmt::Display for PredictionExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Predicted {} via {}: Contacts={} (high activity boosts chance), \
             Days ago={} (recent is better), Mutuals={} (shared ties help), \
             Confidence={:.*} ({})",
            self.candidate,
            self.bridge,
            self.features.neighbor_contacts,
            self.features.days_since_last,
            self.features.mutual_contacts,
            self.decimals as usize,
            self.confidence,
            self.level,
        )
    }
}
