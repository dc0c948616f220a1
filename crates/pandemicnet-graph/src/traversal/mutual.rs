use std::collections::HashSet;

use petgraph::stable_graph::NodeIndex;

use crate::graph::ContactGraph;

/// |neighbors(a) ∩ neighbors(b)|.
pub fn mutual_contacts(graph: &ContactGraph, a: NodeIndex, b: NodeIndex) -> usize {
    let of_a: HashSet<NodeIndex> = graph.neighbors(a).into_iter().collect();
    graph
        .neighbors(b)
        .into_iter()
        .filter(|n| of_a.contains(n))
        .count()
}
