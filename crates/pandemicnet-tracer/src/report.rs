//! The response produced for one trace.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pandemicnet_core::models::{DirectContact, Individual};
use pandemicnet_graph::GraphSnapshot;
use pandemicnet_prediction::{Narrator, PredictionExplanation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictedContact {
    pub handle: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceReport {
    pub person: Individual,
    /// The day `days_since_last` was measured from.
    pub today: NaiveDate,
    /// One entry per contact event involving the person.
    pub direct: Vec<DirectContact>,
    /// Confidence descending, ties by handle.
    pub predicted: Vec<PredictedContact>,
    pub explanations: BTreeMap<String, String>,
    pub graph: GraphSnapshot,
}

impl TraceReport {
    pub fn is_predicted(&self, handle: &str) -> bool {
        self.predicted.iter().any(|p| p.handle == handle)
    }

    pub fn confidence_of(&self, handle: &str) -> Option<f64> {
        self.predicted
            .iter()
            .find(|p| p.handle == handle)
            .map(|p| p.confidence)
    }

    /// Parsed explanation for a predicted handle.
    pub fn explanation(&self, handle: &str) -> Option<PredictionExplanation> {
        self.explanations
            .get(handle)
            .and_then(|text| PredictionExplanation::parse(text))
    }

    /// handle → narrator sentence for every predicted candidate, keyed and
    /// ordered by handle. Use `predicted` for rank order.
    pub fn narrate(&self, narrator: &dyn Narrator) -> BTreeMap<String, String> {
        let parsed: Vec<PredictionExplanation> = self
            .predicted
            .iter()
            .filter_map(|p| self.explanation(&p.handle))
            .collect();
        narrator.narrate_all(&parsed)
    }
}
