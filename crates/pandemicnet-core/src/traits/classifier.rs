use crate::errors::PredictionError;
use crate::models::FeatureVector;

/// A trained binary classifier: probability that a second-degree candidate
/// becomes a direct contact.
///
/// Implementations must be deterministic for fixed inputs and cheap enough
/// to call once per candidate on the request thread.
pub trait ContactClassifier: Send + Sync {
    fn predict_probability(&self, features: &FeatureVector) -> Result<f64, PredictionError>;

    /// Short identifier used in logs.
    fn name(&self) -> &str {
        "classifier"
    }
}
