use crate::domain::bidirectional::make_bidirectional;
use crate::domain::graph::{AdjacencyGraph, NodeId};
use crate::domain::model::{Classification, Direction};
use crate::domain::traits::RootScorer;
use indexmap::{IndexMap, IndexSet};
use std::borrow::Cow;
use tracing::trace;

/// Root of `graph` read as a directed tree, or `None` when it is not one.
///
/// A tree has exactly one edge fewer than it has nodes. Candidates are the
/// zero-in-degree nodes in graph order; the first whose forward reach covers
/// every node wins.
pub fn is_directed_tree<N: NodeId>(graph: &AdjacencyGraph<N>) -> Option<N> {
    let total = graph.node_count();
    if total == 0 || graph.edge_count() + 1 != total {
        return None;
    }

    let root = graph
        .in_degrees()
        .into_iter()
        .filter(|(_, d)| *d == 0)
        .map(|(n, _)| n)
        .find(|candidate| graph.reachable_from(candidate).len() == total);

    trace!(nodes = total, root = ?root, "directed tree check");
    root
}

/// Whether `graph`, read as undirected, is acyclic and connected.
pub fn is_undirected_tree<N: NodeId>(graph: &AdjacencyGraph<N>) -> bool {
    let graph: Cow<'_, AdjacencyGraph<N>> = if graph.is_bidirectional() {
        Cow::Borrowed(graph)
    } else {
        Cow::Owned(make_bidirectional(graph))
    };

    let Some(start) = graph.nodes().next() else {
        return false;
    };

    let mut visited: IndexSet<N> = IndexSet::new();
    visited.insert(start.clone());
    let mut stack: Vec<(N, Option<N>)> = vec![(start.clone(), None)];

    while let Some((u, parent)) = stack.pop() {
        for v in graph.neighbors(&u) {
            if parent.as_ref() == Some(v) {
                continue;
            }
            if !visited.insert(v.clone()) {
                trace!(node = ?u, back_edge_to = ?v, "cycle detected");
                return false;
            }
            stack.push((v.clone(), Some(u.clone())));
        }
    }

    visited.len() == graph.node_count()
}

pub fn classify<N: NodeId>(graph: &AdjacencyGraph<N>, direction: Direction) -> Classification<N> {
    match direction {
        Direction::Directed => match is_directed_tree(graph) {
            Some(root) => Classification::Rooted(root),
            None => Classification::NotTree,
        },
        Direction::Undirected => {
            if is_undirected_tree(graph) {
                Classification::Unrooted
            } else {
                Classification::NotTree
            }
        }
    }
}

/// Nodes sharing the highest score, in score-map order.
pub fn top_bucket<N: NodeId>(scores: &IndexMap<N, i64>) -> IndexSet<N> {
    let Some(best) = scores.values().copied().max() else {
        return IndexSet::new();
    };

    scores
        .iter()
        .filter(|(_, s)| **s == best)
        .map(|(n, _)| n.clone())
        .collect()
}

/// Heuristic apex for rendering.
///
/// Intersects the top buckets of `scorers` in order. An intersection that
/// would come out empty is skipped, so earlier scorers take priority. Ties
/// fall to graph order.
pub fn best_root<N: NodeId>(
    graph: &AdjacencyGraph<N>,
    scorers: &[&dyn RootScorer<N>],
) -> Option<N> {
    let mut bucket: IndexSet<N> = graph.nodes().cloned().collect();

    for scorer in scorers {
        let top = top_bucket(&scorer.scores(graph));
        let narrowed: IndexSet<N> = bucket.intersection(&top).cloned().collect();
        if !narrowed.is_empty() {
            bucket = narrowed;
        }
    }

    graph.nodes().find(|n| bucket.contains(*n)).cloned()
}
