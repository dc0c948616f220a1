use serde::{Deserialize, Serialize};

/// Classifier artifact location. `None` selects the built-in reference model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_path: Option<String>,
}
