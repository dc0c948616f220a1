//! Tree-ensemble classifier exported from a trained random forest.
//!
//! Each tree is a flat node array rooted at index 0. Split nodes send a
//! sample left when `x[feature] <= threshold`. Leaf `value` is the tree's
//! positive-class probability; the forest averages its trees.

use serde::{Deserialize, Serialize};

use pandemicnet_core::errors::PredictionError;
use pandemicnet_core::models::FeatureVector;
use pandemicnet_core::traits::ContactClassifier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Children must point forward, which rules out cycles and guarantees
    /// `evaluate` terminates.
    fn validate(&self, tree: usize) -> Result<(), PredictionError> {
        let invalid = |reason: String| PredictionError::InvalidArtifact {
            reason: format!("tree {tree}: {reason}"),
        };
        if self.nodes.is_empty() {
            return Err(invalid("no nodes".to_string()));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= FeatureVector::LEN {
                        return Err(invalid(format!("node {i}: feature index {feature} out of range")));
                    }
                    if !threshold.is_finite() {
                        return Err(invalid(format!("node {i}: threshold is not finite")));
                    }
                    for child in [left, right] {
                        if child <= i || child >= self.nodes.len() {
                            return Err(invalid(format!("node {i}: child {child} out of range")));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if !(0.0..=1.0).contains(&value) {
                        return Err(invalid(format!("node {i}: leaf value {value} not in [0, 1]")));
                    }
                }
            }
        }
        Ok(())
    }

    fn evaluate(&self, x: &[f64; FeatureVector::LEN]) -> f64 {
        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                TreeNode::Leaf { value } => return value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if x[feature] <= threshold { left } else { right };
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForestClassifier {
    trees: Vec<DecisionTree>,
}

impl ForestClassifier {
    pub fn new(trees: Vec<DecisionTree>) -> Result<Self, PredictionError> {
        if trees.is_empty() {
            return Err(PredictionError::InvalidArtifact {
                reason: "forest has no trees".to_string(),
            });
        }
        for (i, tree) in trees.iter().enumerate() {
            tree.validate(i)?;
        }
        Ok(Self { trees })
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

impl ContactClassifier for ForestClassifier {
    fn predict_probability(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let x = features.as_array();
        let sum: f64 = self.trees.iter().map(|t| t.evaluate(&x)).sum();
        Ok(sum / self.trees.len() as f64)
    }

    fn name(&self) -> &str {
        "forest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump(feature: usize, threshold: f64, low: f64, high: f64) -> DecisionTree {
        DecisionTree {
            nodes: vec![
                TreeNode::Split {
                    feature,
                    threshold,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf { value: low },
                TreeNode::Leaf { value: high },
            ],
        }
    }

    #[test]
    fn threshold_is_inclusive_on_the_left() {
        let forest = ForestClassifier::new(vec![stump(0, 2.0, 0.1, 0.9)]).unwrap();
        let at = forest.predict_probability(&FeatureVector::new(2, 0, 0)).unwrap();
        let above = forest.predict_probability(&FeatureVector::new(3, 0, 0)).unwrap();
        assert_eq!(at, 0.1);
        assert_eq!(above, 0.9);
    }

    #[test]
    fn forest_averages_trees() {
        let forest =
            ForestClassifier::new(vec![stump(0, 0.5, 0.0, 1.0), stump(2, 0.5, 0.0, 0.5)]).unwrap();
        let p = forest.predict_probability(&FeatureVector::new(1, 0, 1)).unwrap();
        assert!((p - 0.75).abs() < 1e-12);
    }

    #[test]
    fn backward_child_is_rejected() {
        let tree = DecisionTree {
            nodes: vec![
                TreeNode::Leaf { value: 0.5 },
                TreeNode::Split {
                    feature: 0,
                    threshold: 1.0,
                    left: 0,
                    right: 0,
                },
            ],
        };
        assert!(ForestClassifier::new(vec![tree]).is_err());
    }

    #[test]
    fn bad_feature_and_empty_forest_are_rejected() {
        assert!(ForestClassifier::new(vec![stump(3, 1.0, 0.0, 1.0)]).is_err());
        assert!(ForestClassifier::new(vec![]).is_err());
        assert!(ForestClassifier::new(vec![stump(0, 1.0, 0.0, 1.5)]).is_err());
    }
}
