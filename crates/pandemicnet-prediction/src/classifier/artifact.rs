//! On-disk classifier artifact: JSON tagged by `kind`.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use pandemicnet_core::errors::PredictionError;
use pandemicnet_core::models::FeatureVector;
use pandemicnet_core::traits::ContactClassifier;

use super::forest::{DecisionTree, ForestClassifier};
use super::logistic::LogisticClassifier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    Forest {
        trees: Vec<DecisionTree>,
    },
    Logistic {
        weights: [f64; FeatureVector::LEN],
        bias: f64,
    },
}

impl ClassifierArtifact {
    pub fn from_json(json: &str) -> Result<Self, PredictionError> {
        serde_json::from_str(json).map_err(|e| PredictionError::InvalidArtifact {
            reason: e.to_string(),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, PredictionError> {
        let content = std::fs::read_to_string(path).map_err(|e| PredictionError::InvalidArtifact {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_json(&content)
    }

    /// Validate and build the classifier.
    pub fn into_classifier(self) -> Result<Arc<dyn ContactClassifier>, PredictionError> {
        Ok(match self {
            Self::Forest { trees } => Arc::new(ForestClassifier::new(trees)?),
            Self::Logistic { weights, bias } => Arc::new(LogisticClassifier::new(weights, bias)?),
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Forest { .. } => "forest",
            Self::Logistic { .. } => "logistic",
        }
    }
}
