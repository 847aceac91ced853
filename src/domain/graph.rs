use indexmap::{IndexMap, IndexSet};
use std::fmt;
use std::hash::Hash;

/// Capability required of a node identifier.
///
/// Equality and hashing drive set/map membership; `Display` produces the
/// `id` of rendered [`RootedTree`](crate::domain::tree::RootedTree) nodes.
pub trait NodeId: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> NodeId for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

/// Mapping from node id to its ordered, duplicate-free neighbor list.
///
/// Directedness is not stored: each operation that cares takes it from the
/// caller. Every construction path registers neighbor ids as keys, so a
/// neighbor always has an entry of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph<N: NodeId> {
    adjacency: IndexMap<N, IndexSet<N>>,
}

impl<N: NodeId> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }
}

impl<N: NodeId> AdjacencyGraph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph by feeding every entry through [`Self::add_node`].
    pub fn from_entries<I, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        V: IntoIterator<Item = N>,
    {
        let mut graph = Self::new();
        for (id, neighbors) in entries {
            graph.add_node(id, neighbors);
        }
        graph
    }

    /// Idempotent upsert.
    ///
    /// Creates `id` if absent, registers every unknown neighbor with an empty
    /// list, then appends the neighbors not already present in input order.
    pub fn add_node<I>(&mut self, id: N, neighbors: I)
    where
        I: IntoIterator<Item = N>,
    {
        let neighbors: Vec<N> = neighbors.into_iter().collect();
        self.adjacency.entry(id.clone()).or_default();

        for n in neighbors.iter() {
            if !self.adjacency.contains_key(n) {
                self.adjacency.insert(n.clone(), IndexSet::new());
            }
        }

        if let Some(list) = self.adjacency.get_mut(&id) {
            list.extend(neighbors);
        }
    }

    pub fn add_edge(&mut self, parent: N, child: N, bidirectional: bool) {
        if bidirectional {
            self.add_node(parent.clone(), [child.clone()]);
            self.add_node(child, [parent]);
        } else {
            self.add_node(parent, [child]);
        }
    }

    /// Strips `id` from every neighbor list, then drops its own entry.
    /// Returns whether `id` was a key.
    pub fn remove_node(&mut self, id: &N) -> bool {
        for list in self.adjacency.values_mut() {
            list.shift_remove(id);
        }
        self.adjacency.shift_remove(id).is_some()
    }

    /// Returns whether any edge was actually removed.
    pub fn remove_edge(&mut self, parent: &N, child: &N, bidirectional: bool) -> bool {
        let mut removed = self
            .adjacency
            .get_mut(parent)
            .map_or(false, |list| list.shift_remove(child));

        if bidirectional {
            removed |= self
                .adjacency
                .get_mut(child)
                .map_or(false, |list| list.shift_remove(parent));
        }

        removed
    }

    /// True iff every edge `u -> v` has its reverse `v -> u`.
    pub fn is_bidirectional(&self) -> bool {
        self.adjacency.iter().all(|(u, outs)| {
            outs.iter()
                .all(|v| self.adjacency.get(v).map_or(false, |back| back.contains(u)))
        })
    }

    pub fn contains_node(&self, id: &N) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn contains_edge(&self, parent: &N, child: &N) -> bool {
        self.adjacency
            .get(parent)
            .map_or(false, |list| list.contains(child))
    }

    /// Neighbors of `id` in insertion order; empty when `id` is unknown.
    pub fn neighbors<'a>(&'a self, id: &N) -> impl Iterator<Item = &'a N> + 'a {
        self.adjacency.get(id).into_iter().flatten()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&N, &IndexSet<N>)> {
        self.adjacency.iter()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// In-degree of every node, keyed in graph order.
    pub fn in_degrees(&self) -> IndexMap<N, usize> {
        let mut degrees: IndexMap<N, usize> =
            self.adjacency.keys().map(|k| (k.clone(), 0)).collect();

        for outs in self.adjacency.values() {
            for v in outs {
                *degrees.entry(v.clone()).or_insert(0) += 1;
            }
        }

        degrees
    }

    /// Nodes reachable from `start` along forward edges, in discovery order.
    /// `start` itself is included when it is a node of the graph.
    pub fn reachable_from(&self, start: &N) -> IndexSet<N> {
        let mut seen: IndexSet<N> = IndexSet::new();
        if !self.contains_node(start) {
            return seen;
        }

        let mut stack = vec![start.clone()];
        seen.insert(start.clone());

        while let Some(u) = stack.pop() {
            for v in self.neighbors(&u) {
                if seen.insert(v.clone()) {
                    stack.push(v.clone());
                }
            }
        }

        seen
    }

    /// Union with a fragment that shares no node with `self`.
    pub fn absorb(&mut self, other: AdjacencyGraph<N>) {
        for (id, neighbors) in other.adjacency {
            self.adjacency.entry(id).or_default().extend(neighbors);
        }
    }

    /// Raw entry insertion for fragment construction; the caller guarantees
    /// every neighbor ends up registered as a key.
    pub(crate) fn insert_entry(&mut self, id: N, neighbors: IndexSet<N>) {
        self.adjacency.entry(id).or_default().extend(neighbors);
    }
}
