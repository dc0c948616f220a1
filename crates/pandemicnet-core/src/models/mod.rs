//! Domain records shared by the store, graph, and prediction crates.

pub mod contact;
pub mod features;
pub mod individual;
pub mod requests;
pub mod snapshot;

pub use contact::{ContactEvent, DirectContact, NewContact};
pub use features::FeatureVector;
pub use individual::{Individual, NewIndividual};
pub use requests::{ContactRequest, PersonRequest};
pub use snapshot::ContactSnapshot;
