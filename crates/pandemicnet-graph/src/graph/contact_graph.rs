//! petgraph::StableGraph wrapper with ContactNode and ContactEdge types.

use std::collections::HashMap;

use chrono::NaiveDate;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::Undirected;
use serde::{Deserialize, Serialize};

/// A node in the contact graph, representing one individual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactNode {
    pub id: i64,
    pub handle: String,
}

/// Weight on a contact edge. One edge per pair; when several events connect
/// the pair, the last one connected wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEdge {
    pub date: NaiveDate,
    /// Store id of the event that last wrote this edge.
    pub event_id: i64,
}

pub type ContactStableGraph = StableGraph<ContactNode, ContactEdge, Undirected>;

/// Contact graph with O(1) lookup by handle and by individual id.
pub struct ContactGraph {
    graph: ContactStableGraph,
    /// handle → NodeIndex.
    node_index: HashMap<String, NodeIndex>,
    /// individual id → NodeIndex.
    id_index: HashMap<i64, NodeIndex>,
}

impl ContactGraph {
    pub fn new() -> Self {
        Self {
            graph: StableGraph::default(),
            node_index: HashMap::new(),
            id_index: HashMap::new(),
        }
    }

    /// Get or create the node for an individual.
    pub fn ensure_node(&mut self, id: i64, handle: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(handle) {
            return idx;
        }
        let idx = self.graph.add_node(ContactNode {
            id,
            handle: handle.to_string(),
        });
        self.node_index.insert(handle.to_string(), idx);
        self.id_index.insert(id, idx);
        idx
    }

    /// Connect two nodes, overwriting the date if the pair is already connected.
    /// The edge keeps its original index, so neighbor order stays first-contact order.
    pub fn connect(&mut self, a: NodeIndex, b: NodeIndex, edge: ContactEdge) -> EdgeIndex {
        self.graph.update_edge(a, b, edge)
    }

    pub fn get_node(&self, handle: &str) -> Option<NodeIndex> {
        self.node_index.get(handle).copied()
    }

    pub fn get_node_by_id(&self, id: i64) -> Option<NodeIndex> {
        self.id_index.get(&id).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> Option<&ContactNode> {
        self.graph.node_weight(idx)
    }

    pub fn handle(&self, idx: NodeIndex) -> Option<&str> {
        self.node(idx).map(|n| n.handle.as_str())
    }

    /// Neighbors of `idx` ordered by when their edge was first inserted.
    pub fn neighbors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut edges: Vec<(EdgeIndex, NodeIndex)> = self
            .graph
            .edges(idx)
            .map(|e| {
                let other = if e.source() == idx { e.target() } else { e.source() };
                (e.id(), other)
            })
            .collect();
        edges.sort_by_key(|(edge, _)| *edge);
        edges.into_iter().map(|(_, other)| other).collect()
    }

    /// Count of distinct neighbors.
    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges(idx).count()
    }

    /// Date retained on the edge between two nodes, if connected.
    pub fn edge_date(&self, a: NodeIndex, b: NodeIndex) -> Option<NaiveDate> {
        self.graph
            .find_edge(a, b)
            .and_then(|e| self.graph.edge_weight(e))
            .map(|w| w.date)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &ContactNode)> {
        self.graph
            .node_indices()
            .filter_map(move |idx| self.graph.node_weight(idx).map(|n| (idx, n)))
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for ContactGraph {
    fn default() -> Self {
        Self::new()
    }
}
