use crate::domain::graph::{AdjacencyGraph, NodeId};
use crate::domain::model::Direction;
use indexmap::IndexMap;

pub trait ComponentDetector<N: NodeId> {
    /// Full connectivity scan. Each returned fragment holds exactly the nodes
    /// of one (weakly, when directed) connected component with their
    /// original neighbor lists.
    fn connected_components(
        &self,
        graph: &AdjacencyGraph<N>,
        direction: Direction,
    ) -> Vec<AdjacencyGraph<N>>;
}

/// Ranks candidate roots; higher scores rank first.
pub trait RootScorer<N: NodeId> {
    fn scores(&self, graph: &AdjacencyGraph<N>) -> IndexMap<N, i64>;
}
