//! Seams to the two external collaborators: the contact store and the classifier.

pub mod classifier;
pub mod contact_store;

pub use classifier::ContactClassifier;
pub use contact_store::IContactStore;
