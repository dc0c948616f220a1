//! # pandemicnet-core
//!
//! Foundation crate for the PandemicNet contact tracer.
//! Defines the domain types, registration validation, collaborator traits,
//! errors, config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod validation;

// Re-export the most commonly used types at the crate root.
pub use config::PandemicConfig;
pub use errors::{PandemicError, PandemicResult};
pub use models::{ContactEvent, ContactSnapshot, DirectContact, FeatureVector, Individual, NewContact, NewIndividual};
pub use traits::{ContactClassifier, IContactStore};
