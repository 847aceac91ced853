use crate::domain::graph::{AdjacencyGraph, NodeId};
use crate::domain::traits::RootScorer;
use indexmap::IndexMap;

/// Prefers nodes with the fewest incoming edges, reading the graph as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastInDegree;

impl<N: NodeId> RootScorer<N> for LeastInDegree {
    fn scores(&self, graph: &AdjacencyGraph<N>) -> IndexMap<N, i64> {
        graph
            .in_degrees()
            .into_iter()
            .map(|(n, d)| (n, -(d as i64)))
            .collect()
    }
}

/// Prefers nodes reaching the most nodes along forward edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostReachable;

impl<N: NodeId> RootScorer<N> for MostReachable {
    fn scores(&self, graph: &AdjacencyGraph<N>) -> IndexMap<N, i64> {
        graph
            .nodes()
            .map(|n| (n.clone(), graph.reachable_from(n).len() as i64))
            .collect()
    }
}

/// Adapts a per-node scoring closure.
pub struct ScoreFn<F>(pub F);

impl<N, F> RootScorer<N> for ScoreFn<F>
where
    N: NodeId,
    F: Fn(&AdjacencyGraph<N>, &N) -> i64,
{
    fn scores(&self, graph: &AdjacencyGraph<N>) -> IndexMap<N, i64> {
        graph
            .nodes()
            .map(|n| (n.clone(), (self.0)(graph, n)))
            .collect()
    }
}
