use crate::domain::bidirectional::reverse_adjacency;
use crate::domain::graph::{AdjacencyGraph, NodeId};
use crate::domain::model::Direction;
use crate::domain::traits::ComponentDetector;
use indexmap::{IndexMap, IndexSet};
use tracing::trace;

/// Explicit-stack DFS over the graph.
///
/// Directed mode walks forward edges and a reverse-adjacency index built once
/// per scan, yielding weakly connected components. Undirected mode walks
/// forward edges only and assumes they are already symmetric.
#[derive(Debug, Clone, Copy, Default)]
pub struct DfsComponentDetector;

impl<N: NodeId> ComponentDetector<N> for DfsComponentDetector {
    fn connected_components(
        &self,
        graph: &AdjacencyGraph<N>,
        direction: Direction,
    ) -> Vec<AdjacencyGraph<N>> {
        dfs_components(graph, direction)
    }
}

fn dfs_components<N: NodeId>(
    graph: &AdjacencyGraph<N>,
    direction: Direction,
) -> Vec<AdjacencyGraph<N>> {
    let reverse: Option<IndexMap<N, IndexSet<N>>> = if direction.is_directed() {
        Some(reverse_adjacency(graph))
    } else {
        None
    };

    let mut component_of: IndexMap<N, usize> = IndexMap::with_capacity(graph.node_count());
    let mut count = 0usize;

    for start in graph.nodes() {
        if component_of.contains_key(start) {
            continue;
        }

        let cid = count;
        count += 1;
        component_of.insert(start.clone(), cid);
        let mut stack = vec![start.clone()];

        while let Some(u) = stack.pop() {
            let backward = reverse
                .as_ref()
                .and_then(|rev| rev.get(&u))
                .into_iter()
                .flatten();

            for v in graph.neighbors(&u).chain(backward) {
                if !component_of.contains_key(v) {
                    component_of.insert(v.clone(), cid);
                    stack.push(v.clone());
                }
            }
        }
    }

    let mut fragments: Vec<AdjacencyGraph<N>> = (0..count).map(|_| AdjacencyGraph::new()).collect();

    // Entries keep the original key order within each fragment.
    for (id, outs) in graph.iter() {
        let cid = component_of[id];
        fragments[cid].insert_entry(id.clone(), outs.clone());
    }

    trace!(
        nodes = graph.node_count(),
        components = fragments.len(),
        directed = direction.is_directed(),
        "connected components computed"
    );

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_sets(parts: &[AdjacencyGraph<&'static str>]) -> Vec<Vec<&'static str>> {
        parts.iter().map(|p| p.nodes().copied().collect()).collect()
    }

    #[test]
    fn undirected_scan_splits_disconnected_input() {
        let g = AdjacencyGraph::from_entries([
            ("0", vec!["1"]),
            ("1", vec!["0"]),
            ("2", vec!["3"]),
            ("3", vec!["2"]),
        ]);
        let parts = DfsComponentDetector.connected_components(&g, Direction::Undirected);

        assert_eq!(node_sets(&parts), vec![vec!["0", "1"], vec!["2", "3"]]);
        assert!(parts[0].contains_edge(&"0", &"1"));
        assert!(parts[1].contains_edge(&"3", &"2"));
    }

    #[test]
    fn directed_scan_follows_edges_backwards() {
        // b -> a and c -> a: weakly connected only through a.
        let g = AdjacencyGraph::from_entries([
            ("a", vec![]),
            ("b", vec!["a"]),
            ("c", vec!["a"]),
            ("d", vec![]),
        ]);
        let parts = DfsComponentDetector.connected_components(&g, Direction::Directed);

        assert_eq!(node_sets(&parts), vec![vec!["a", "b", "c"], vec!["d"]]);
        // directed payload is retained verbatim
        assert!(parts[0].contains_edge(&"b", &"a"));
        assert!(!parts[0].contains_edge(&"a", &"b"));
    }

    #[test]
    fn undirected_scan_on_one_way_edges_only_walks_forward() {
        let g = AdjacencyGraph::from_entries([("b", vec!["a"]), ("a", vec![])]);
        let parts = DfsComponentDetector.connected_components(&g, Direction::Undirected);
        // b reaches a, so both land together
        assert_eq!(parts.len(), 1);
    }

    #[test]
    fn empty_graph_has_no_components() {
        let g: AdjacencyGraph<u32> = AdjacencyGraph::new();
        assert!(DfsComponentDetector.connected_components(&g, Direction::Directed).is_empty());
    }
}
