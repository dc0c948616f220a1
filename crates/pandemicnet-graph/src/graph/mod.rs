pub mod contact_graph;

pub use contact_graph::{ContactEdge, ContactGraph, ContactNode, ContactStableGraph};
