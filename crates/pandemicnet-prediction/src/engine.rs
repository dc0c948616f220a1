//! PredictionEngine: enumerates second-degree candidates, scores each with
//! the classifier, keeps one bridge per candidate, ranks the result.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pandemicnet_core::config::{BridgePolicy, PredictionConfig};
use pandemicnet_core::errors::{GraphError, PandemicResult, PredictionError};
use pandemicnet_core::models::{ContactEvent, DirectContact, FeatureVector};
use pandemicnet_core::traits::ContactClassifier;
use pandemicnet_graph::traversal::second_degree;
use pandemicnet_graph::ContactGraph;

use crate::confidence::round_confidence;
use crate::explanation::PredictionExplanation;
use crate::features::FeatureExtractor;

/// One scored second-degree candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionCandidate {
    pub handle: String,
    /// Bridge the surviving score was computed through.
    pub bridge: String,
    pub features: FeatureVector,
    /// Rounded to the configured number of decimals.
    pub confidence: f64,
    /// Classifier output before rounding.
    pub raw_confidence: f64,
    pub explanation: PredictionExplanation,
}

/// Result of one prediction run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub direct: Vec<DirectContact>,
    /// One entry per candidate, in order of first discovery.
    pub candidates: Vec<PredictionCandidate>,
}

impl Prediction {
    /// handle → rounded confidence.
    pub fn predicted(&self) -> BTreeMap<String, f64> {
        self.candidates
            .iter()
            .map(|c| (c.handle.clone(), c.confidence))
            .collect()
    }

    /// handle → rendered explanation.
    pub fn explanations(&self) -> BTreeMap<String, String> {
        self.candidates
            .iter()
            .map(|c| (c.handle.clone(), c.explanation.to_string()))
            .collect()
    }

    /// Candidates by confidence descending, ties by handle ascending.
    pub fn ranked(&self) -> Vec<&PredictionCandidate> {
        let mut ranked: Vec<_> = self.candidates.iter().collect();
        ranked.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.handle.cmp(&b.handle))
        });
        ranked
    }

    pub fn candidate(&self, handle: &str) -> Option<&PredictionCandidate> {
        self.candidates.iter().find(|c| c.handle == handle)
    }
}

/// Scores second-degree candidates with a shared, immutable classifier.
pub struct PredictionEngine {
    classifier: Arc<dyn ContactClassifier>,
    config: PredictionConfig,
}

impl PredictionEngine {
    pub fn new(classifier: Arc<dyn ContactClassifier>, config: PredictionConfig) -> Self {
        Self { classifier, config }
    }

    pub fn config(&self) -> &PredictionConfig {
        &self.config
    }

    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    /// Predict for `traced_handle` on `today`.
    ///
    /// A handle absent from the graph yields an empty prediction. Any
    /// classifier failure or out-of-range output fails the whole run.
    pub fn predict(
        &self,
        graph: &ContactGraph,
        events: &[ContactEvent],
        traced_handle: &str,
        today: NaiveDate,
    ) -> PandemicResult<Prediction> {
        let Some(origin) = graph.get_node(traced_handle) else {
            return Ok(Prediction::default());
        };
        let origin_id = graph.node(origin).map(|n| n.id).unwrap_or_default();

        let direct = direct_contacts(graph, events, origin_id)?;

        let extractor = FeatureExtractor::new(graph, events, today, &self.config);
        let mut candidates: Vec<PredictionCandidate> = Vec::new();
        let mut slot: HashMap<String, usize> = HashMap::new();

        for pair in second_degree(graph, origin) {
            let (Some(bridge), Some(candidate)) = (graph.handle(pair.bridge), graph.handle(pair.candidate)) else {
                continue;
            };
            let features = extractor.extract(origin, pair.bridge, pair.candidate);
            let raw = self.score(candidate, &features)?;
            let confidence = round_confidence(raw, self.config.confidence_decimals);

            let scored = PredictionCandidate {
                handle: candidate.to_string(),
                bridge: bridge.to_string(),
                features,
                confidence,
                raw_confidence: raw,
                explanation: PredictionExplanation::new(candidate, bridge, features, confidence)
                    .with_decimals(self.config.confidence_decimals),
            };

            match slot.get(candidate) {
                Some(&i) => {
                    let replace = match self.config.bridge_policy {
                        BridgePolicy::LastBridge => true,
                        BridgePolicy::HighestConfidence => raw > candidates[i].raw_confidence,
                    };
                    if replace {
                        candidates[i] = scored;
                    }
                }
                None => {
                    slot.insert(candidate.to_string(), candidates.len());
                    candidates.push(scored);
                }
            }
        }

        Ok(Prediction { direct, candidates })
    }

    /// One classifier call, output checked to be a probability.
    fn score(&self, candidate: &str, features: &FeatureVector) -> Result<f64, PredictionError> {
        let value = self.classifier.predict_probability(features)?;
        if value.is_nan() || !(0.0..=1.0).contains(&value) {
            return Err(PredictionError::OutOfRange {
                candidate: candidate.to_string(),
                value,
            });
        }
        Ok(value)
    }
}

/// One entry per event involving `person_id`: events where they are the
/// `individual_id` first, then those where they are the `contact_id`, each
/// in event order.
fn direct_contacts(
    graph: &ContactGraph,
    events: &[ContactEvent],
    person_id: i64,
) -> Result<Vec<DirectContact>, GraphError> {
    let outgoing = events.iter().filter(|e| e.individual_id == person_id);
    let incoming = events.iter().filter(|e| e.contact_id == person_id);

    outgoing
        .chain(incoming)
        .map(|event| {
            let other = event.other_party(person_id).unwrap_or(event.contact_id);
            let handle = graph
                .get_node_by_id(other)
                .and_then(|idx| graph.handle(idx))
                .ok_or(GraphError::UnknownIndividual {
                    event_id: event.id,
                    individual_id: other,
                })?;
            Ok(DirectContact {
                contact_id: other,
                handle: handle.to_string(),
                date: event.date,
            })
        })
        .collect()
}
