//! Ordered traversal over the contact graph. Every enumeration follows
//! first-contact order, which decides which bridge a candidate is scored
//! through when several reach it.

pub mod mutual;
pub mod second_degree;

pub use mutual::mutual_contacts;
pub use second_degree::{second_degree, SecondDegree};
