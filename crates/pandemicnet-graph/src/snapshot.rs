//! Serializable view of the graph for a rendering layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pandemicnet_core::models::ContactEvent;

use crate::graph::ContactGraph;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub id: i64,
    pub handle: String,
    /// Distinct neighbors.
    pub contacts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEdge {
    pub source: String,
    pub target: String,
    pub date: NaiveDate,
}

/// All nodes with degree, one edge entry per stored event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<SnapshotNode>,
    pub edges: Vec<SnapshotEdge>,
}

impl GraphSnapshot {
    /// Events whose parties are not in the graph are left out; the builder
    /// has already rejected those for any graph it produced.
    pub fn capture(graph: &ContactGraph, events: &[ContactEvent]) -> Self {
        let nodes = graph
            .nodes()
            .map(|(idx, node)| SnapshotNode {
                id: node.id,
                handle: node.handle.clone(),
                contacts: graph.degree(idx),
            })
            .collect();

        let handle_of = |id: i64| {
            graph
                .get_node_by_id(id)
                .and_then(|idx| graph.handle(idx))
                .map(str::to_string)
        };
        let edges = events
            .iter()
            .filter_map(|event| {
                Some(SnapshotEdge {
                    source: handle_of(event.individual_id)?,
                    target: handle_of(event.contact_id)?,
                    date: event.date,
                })
            })
            .collect();

        Self { nodes, edges }
    }

    pub fn node(&self, handle: &str) -> Option<&SnapshotNode> {
        self.nodes.iter().find(|n| n.handle == handle)
    }
}
