use serde::{Deserialize, Serialize};

/// The three engineered features scored by the classifier, in model order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Degree of the bridging neighbor.
    pub neighbor_contacts: u32,
    /// Days since the bridging neighbor's most recent contact.
    pub days_since_last: u32,
    /// Size of the traced person's and the candidate's shared neighborhood.
    pub mutual_contacts: u32,
}

impl FeatureVector {
    /// Number of features the classifier expects.
    pub const LEN: usize = 3;

    /// Feature names, in the same order as [`FeatureVector::as_array`].
    pub const NAMES: [&'static str; Self::LEN] =
        ["direct_contacts", "days_since_last", "mutual_contacts"];

    pub fn new(neighbor_contacts: u32, days_since_last: u32, mutual_contacts: u32) -> Self {
        Self {
            neighbor_contacts,
            days_since_last,
            mutual_contacts,
        }
    }

    /// Row vector `[direct_contacts, days_since_last, mutual_contacts]`.
    pub fn as_array(&self) -> [f64; Self::LEN] {
        [
            f64::from(self.neighbor_contacts),
            f64::from(self.days_since_last),
            f64::from(self.mutual_contacts),
        ]
    }
}
