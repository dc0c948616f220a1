//! Concrete [`ContactClassifier`](pandemicnet_core::ContactClassifier)s and
//! the JSON artifact format they load from.

pub mod artifact;
pub mod forest;
pub mod logistic;

pub use artifact::ClassifierArtifact;
pub use forest::{DecisionTree, ForestClassifier, TreeNode};
pub use logistic::{reference_classifier, LogisticClassifier};
