use crate::domain::graph::{AdjacencyGraph, NodeId};
use indexmap::{IndexMap, IndexSet};

/// Symmetric closure of `graph`. The input is not touched.
///
/// Forward edges keep their order; each reverse edge is appended in the order
/// its forward counterpart is met, unless already present.
pub fn make_bidirectional<N: NodeId>(graph: &AdjacencyGraph<N>) -> AdjacencyGraph<N> {
    let mut out = AdjacencyGraph::new();
    for (id, outs) in graph.iter() {
        out.insert_entry(id.clone(), outs.clone());
    }

    for (u, outs) in graph.iter() {
        for v in outs {
            out.add_node(v.clone(), [u.clone()]);
        }
    }

    out
}

/// Reverse-adjacency index: for every node, the nodes with an edge into it.
///
/// Every node of `graph` has an entry, possibly empty.
pub fn reverse_adjacency<N: NodeId>(graph: &AdjacencyGraph<N>) -> IndexMap<N, IndexSet<N>> {
    let mut rev: IndexMap<N, IndexSet<N>> =
        graph.nodes().map(|n| (n.clone(), IndexSet::new())).collect();

    for (u, outs) in graph.iter() {
        for v in outs {
            rev.entry(v.clone()).or_default().insert(u.clone());
        }
    }

    rev
}
