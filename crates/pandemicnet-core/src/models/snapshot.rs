use serde::{Deserialize, Serialize};

use super::{ContactEvent, Individual};

/// Individuals and contact events read together at one point in time.
///
/// Every event in a snapshot references individuals in the same snapshot,
/// so graph assembly over it only fails on genuine store corruption.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSnapshot {
    /// Ascending id.
    pub individuals: Vec<Individual>,
    /// Ascending id (insertion order).
    pub events: Vec<ContactEvent>,
}
