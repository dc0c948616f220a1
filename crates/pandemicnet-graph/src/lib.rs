//! # pandemicnet-graph
//!
//! The contact graph. Built fresh from a store snapshot for every trace:
//! one node per individual, one undirected edge per contacted pair.
//!
//! | Module | Role |
//! |--------|------|
//! | `graph` | `petgraph` wrapper keyed by handle |
//! | `builder` | individuals + events → graph |
//! | `traversal` | ordered neighbors, second-degree enumeration, mutual counts |
//! | `snapshot` | serializable nodes/edges view for rendering |

pub mod builder;
pub mod graph;
pub mod snapshot;
pub mod traversal;

pub use builder::GraphBuilder;
pub use graph::{ContactEdge, ContactGraph, ContactNode};
pub use snapshot::{GraphSnapshot, SnapshotEdge, SnapshotNode};
pub use traversal::SecondDegree;
