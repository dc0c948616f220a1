//! Second-degree candidate enumeration.

use std::collections::HashSet;

use petgraph::stable_graph::NodeIndex;

use crate::graph::ContactGraph;

/// A candidate reached through one bridging neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondDegree {
    pub bridge: NodeIndex,
    pub candidate: NodeIndex,
}

/// Every (bridge, candidate) pair for `origin`, in enumeration order:
/// bridges in neighbor order, then each bridge's neighbors in order.
///
/// Candidates exclude `origin` and its direct neighbors. A candidate reachable
/// through several bridges appears once per bridge.
pub fn second_degree(graph: &ContactGraph, origin: NodeIndex) -> Vec<SecondDegree> {
    let direct = graph.neighbors(origin);
    let excluded: HashSet<NodeIndex> = direct.iter().copied().chain([origin]).collect();

    let mut pairs = Vec::new();
    for &bridge in &direct {
        for candidate in graph.neighbors(bridge) {
            if !excluded.contains(&candidate) {
                pairs.push(SecondDegree { bridge, candidate });
            }
        }
    }
    pairs
}
