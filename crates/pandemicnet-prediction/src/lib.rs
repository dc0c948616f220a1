//! # pandemicnet-prediction
//!
//! Predicts which second-degree contacts of a traced person are likely to
//! become direct contacts, and explains each prediction.
//!
//! ## Pipeline
//!
//! | Step | Module |
//! |------|--------|
//! | Enumerate (bridge, candidate) pairs | `pandemicnet_graph::traversal` |
//! | Derive `[contacts, days_since_last, mutuals]` | `features` |
//! | Score with a trained classifier | `classifier` |
//! | Round, keep one bridge per candidate, rank | `engine` |
//! | Structured explanation and human narrative | `explanation`, `narrative` |
//!
//! ## Multiple bridges
//!
//! A candidate reachable through several direct contacts is scored once per
//! bridge. `BridgePolicy::LastBridge` keeps the bridge enumerated last;
//! `BridgePolicy::HighestConfidence` keeps the best-scoring one.

pub mod classifier;
pub mod confidence;
pub mod engine;
pub mod explanation;
pub mod features;
pub mod narrative;

pub use classifier::{reference_classifier, ClassifierArtifact, ForestClassifier, LogisticClassifier};
pub use confidence::ConfidenceLevel;
pub use engine::{Prediction, PredictionCandidate, PredictionEngine};
pub use explanation::PredictionExplanation;
pub use features::FeatureExtractor;
pub use narrative::{Narrator, TemplateNarrator};
