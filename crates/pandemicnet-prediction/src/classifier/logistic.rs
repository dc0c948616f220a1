use serde::{Deserialize, Serialize};

use pandemicnet_core::errors::PredictionError;
use pandemicnet_core::models::FeatureVector;
use pandemicnet_core::traits::ContactClassifier;

/// `sigmoid(w · x + b)` over the three features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticClassifier {
    pub weights: [f64; FeatureVector::LEN],
    pub bias: f64,
}

impl LogisticClassifier {
    pub fn new(weights: [f64; FeatureVector::LEN], bias: f64) -> Result<Self, PredictionError> {
        if !bias.is_finite() || weights.iter().any(|w| !w.is_finite()) {
            return Err(PredictionError::InvalidArtifact {
                reason: "logistic weights and bias must be finite".to_string(),
            });
        }
        Ok(Self { weights, bias })
    }
}

impl ContactClassifier for LogisticClassifier {
    fn predict_probability(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let z = self
            .weights
            .iter()
            .zip(features.as_array())
            .fold(self.bias, |acc, (w, x)| acc + w * x);
        Ok(1.0 / (1.0 + (-z).exp()))
    }

    fn name(&self) -> &str {
        "logistic"
    }
}

/// Built-in model used when no artifact is configured.
///
/// The training data labels a pair as "met" when
/// `0.6·contacts/10 + 0.3·(1 − days/30) + 0.1·mutuals/5 > 0.4`.
/// Scaling that score by 20 around the 0.4 threshold gives these weights.
pub fn reference_classifier() -> LogisticClassifier {
    LogisticClassifier {
        weights: [1.2, -0.2, 0.4],
        bias: -2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_model_agrees_with_labelling_rule_away_from_threshold() {
        let clf = reference_classifier();
        // Busy, recent, well-connected bridge: 0.18 + 0.3 + 0.04 = 0.52.
        let strong = clf.predict_probability(&FeatureVector::new(3, 0, 2)).unwrap();
        // Quiet, stale bridge: 0.06 + 0.0 + 0.0 = 0.06.
        let weak = clf.predict_probability(&FeatureVector::new(1, 30, 0)).unwrap();
        assert!(strong > 0.5, "strong = {strong}");
        assert!(weak < 0.5, "weak = {weak}");
    }

    #[test]
    fn non_finite_weights_rejected() {
        assert!(LogisticClassifier::new([f64::NAN, 0.0, 0.0], 0.0).is_err());
        assert!(LogisticClassifier::new([0.0, 0.0, 0.0], f64::INFINITY).is_err());
    }
}
