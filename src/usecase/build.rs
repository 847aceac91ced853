use crate::domain::bidirectional::make_bidirectional;
use crate::domain::graph::{AdjacencyGraph, NodeId};
use crate::domain::model::Direction;
use crate::domain::tree::RootedTree;
use indexmap::IndexSet;
use std::borrow::Cow;

struct Frame<N> {
    node: N,
    next_i: usize,
    children: Vec<RootedTree>,
}

/// Nested tree rooted at `root`, built by depth-first traversal.
///
/// Children follow neighbor-list order. Already-visited neighbors are pruned,
/// so a non-tree graph yields its DFS spanning tree instead of an error. An
/// undirected build symmetrizes first unless the graph already is symmetric.
pub fn build_rooted_tree<N: NodeId>(
    graph: &AdjacencyGraph<N>,
    root: &N,
    direction: Direction,
) -> RootedTree {
    let graph: Cow<'_, AdjacencyGraph<N>> =
        if direction.is_bidirectional() && !graph.is_bidirectional() {
            Cow::Owned(make_bidirectional(graph))
        } else {
            Cow::Borrowed(graph)
        };

    let mut visited: IndexSet<N> = IndexSet::new();
    visited.insert(root.clone());

    let mut stack: Vec<Frame<N>> = vec![Frame {
        node: root.clone(),
        next_i: 0,
        children: Vec::new(),
    }];

    loop {
        let Some(top) = stack.last_mut() else {
            // the root frame always returns below
            return RootedTree::leaf(root.to_string());
        };

        let next = graph
            .neighbors(&top.node)
            .enumerate()
            .skip(top.next_i)
            .find(|(_, n)| !visited.contains(*n))
            .map(|(i, n)| (i, n.clone()));

        match next {
            Some((i, child)) => {
                top.next_i = i + 1;
                visited.insert(child.clone());
                stack.push(Frame {
                    node: child,
                    next_i: 0,
                    children: Vec::new(),
                });
            }
            None => {
                let Some(done) = stack.pop() else {
                    continue;
                };
                let tree = RootedTree::with_children(done.node.to_string(), done.children);
                match stack.last_mut() {
                    Some(parent) => parent.children.push(tree),
                    None => return tree,
                }
            }
        }
    }
}
