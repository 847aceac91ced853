use crate::domain::bidirectional::make_bidirectional;
use crate::domain::graph::{AdjacencyGraph, NodeId};
use crate::domain::model::Direction;
use crate::domain::traits::ComponentDetector;
use crate::infrastructure::dfs_components::DfsComponentDetector;
use crate::usecase::event::{emit, EventSink, PartitionEvent};
use std::borrow::Cow;
use tracing::{debug, trace};

/// Disjoint connected fragments covering every live node.
///
/// Insertions merge the fragments they touch without rescanning. Removals
/// recheck connectivity of the single fragment that held the node or edge,
/// splitting it in place when it fell apart. In undirected mode every edge
/// is installed and removed in both directions so fragments stay symmetric.
#[derive(Debug)]
pub struct ComponentPartition<N: NodeId, D = DfsComponentDetector> {
    components: Vec<AdjacencyGraph<N>>,
    direction: Direction,
    detector: D,
    sink: EventSink,
}

impl<N: NodeId> ComponentPartition<N, DfsComponentDetector> {
    pub fn new(direction: Direction) -> Self {
        Self::with_detector(direction, DfsComponentDetector)
    }

    pub fn from_graph(graph: &AdjacencyGraph<N>, direction: Direction) -> Self {
        Self::from_graph_with(graph, direction, DfsComponentDetector)
    }
}

impl<N: NodeId, D: ComponentDetector<N>> ComponentPartition<N, D> {
    pub fn with_detector(direction: Direction, detector: D) -> Self {
        Self {
            components: Vec::new(),
            direction,
            detector,
            sink: None,
        }
    }

    /// Full connectivity scan of `graph`. An undirected partition is built
    /// from the symmetric closure of one-way input.
    pub fn from_graph_with(graph: &AdjacencyGraph<N>, direction: Direction, detector: D) -> Self {
        let graph: Cow<'_, AdjacencyGraph<N>> =
            if direction.is_bidirectional() && !graph.is_bidirectional() {
                Cow::Owned(make_bidirectional(graph))
            } else {
                Cow::Borrowed(graph)
            };
        let components = detector.connected_components(&graph, direction);
        debug!(
            nodes = graph.node_count(),
            components = components.len(),
            "partition built"
        );
        Self {
            components,
            direction,
            detector,
            sink: None,
        }
    }

    /// Wraps fragments as-is, without any connectivity scan.
    #[cfg(test)]
    pub(crate) fn from_components(components: Vec<AdjacencyGraph<N>>, direction: Direction) -> Self
    where
        D: Default,
    {
        Self {
            components,
            direction,
            detector: D::default(),
            sink: None,
        }
    }

    pub fn with_sink(mut self, sink: EventSink) -> Self {
        self.sink = sink;
        self.emit_detected();
        self
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn components(&self) -> &[AdjacencyGraph<N>] {
        &self.components
    }

    pub fn into_components(self) -> Vec<AdjacencyGraph<N>> {
        self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.components.iter().map(|c| c.node_count()).sum()
    }

    pub fn contains_node(&self, id: &N) -> bool {
        self.component_of(id).is_some()
    }

    /// Index of the fragment holding `id`.
    pub fn component_of(&self, id: &N) -> Option<usize> {
        self.components.iter().position(|c| c.contains_node(id))
    }

    /// Union of all fragments.
    pub fn to_graph(&self) -> AdjacencyGraph<N> {
        let mut out = AdjacencyGraph::new();
        for c in self.components.iter() {
            out.absorb(c.clone());
        }
        out
    }

    /// Installs `id` with edges to `neighbors`, fusing every fragment that
    /// already holds `id` or one of the neighbors into a single fragment.
    pub fn insert_node(&mut self, id: N, neighbors: Vec<N>) {
        let touched: Vec<&N> = std::iter::once(&id).chain(neighbors.iter()).collect();
        let mut merged = self.take_components_holding(&touched);

        if self.direction.is_bidirectional() {
            for n in neighbors.iter() {
                merged.add_node(n.clone(), [id.clone()]);
            }
        }
        trace!(node = %id, neighbors = neighbors.len(), "insert node");
        merged.add_node(id, neighbors);
        self.components.push(merged);
    }

    /// Removes `id` and rechecks the connectivity of its fragment.
    pub fn remove_node(&mut self, id: &N) {
        let Some(idx) = self.component_of(id) else {
            return;
        };

        self.components[idx].remove_node(id);
        trace!(node = %id, "remove node");

        if self.components[idx].is_empty() {
            self.components.remove(idx);
            emit(
                &self.sink,
                PartitionEvent::ComponentDropped {
                    node: id.to_string(),
                },
            );
            return;
        }

        self.resplit(idx);
    }

    /// Adds `parent -> child` (both ways when undirected), merging the two
    /// endpoint fragments if they differ. Unknown endpoints are registered.
    pub fn insert_edge(&mut self, parent: N, child: N) {
        let same = match (self.component_of(&parent), self.component_of(&child)) {
            (Some(a), Some(b)) if a == b => Some(a),
            _ => None,
        };

        let bidirectional = self.direction.is_bidirectional();
        match same {
            Some(idx) => self.components[idx].add_edge(parent, child, bidirectional),
            None => {
                let mut merged = self.take_components_holding(&[&parent, &child]);
                merged.add_edge(parent, child, bidirectional);
                self.components.push(merged);
            }
        }
    }

    /// Removes `parent -> child` (both ways when undirected) and rechecks the
    /// connectivity of the fragment that held it.
    pub fn remove_edge(&mut self, parent: &N, child: &N) {
        let Some(idx) = self.component_of(parent) else {
            return;
        };

        let removed =
            self.components[idx].remove_edge(parent, child, self.direction.is_bidirectional());
        if !removed {
            return;
        }
        trace!(parent = %parent, child = %child, "remove edge");

        self.resplit(idx);
    }

    /// Pulls out every fragment containing one of `ids` and fuses them.
    fn take_components_holding(&mut self, ids: &[&N]) -> AdjacencyGraph<N> {
        let mut hit: Vec<usize> = ids.iter().filter_map(|id| self.component_of(id)).collect();
        hit.sort_unstable();
        hit.dedup();

        let mut merged = AdjacencyGraph::new();
        for idx in hit.iter().rev() {
            merged.absorb(self.components.remove(*idx));
        }

        match hit.len() {
            0 => emit(
                &self.sink,
                PartitionEvent::ComponentCreated {
                    node: ids.first().map(|id| id.to_string()).unwrap_or_default(),
                },
            ),
            1 => {}
            merged_count => {
                debug!(merged = merged_count, nodes = merged.node_count(), "components merged");
                emit(
                    &self.sink,
                    PartitionEvent::ComponentsMerged {
                        merged: merged_count,
                        nodes: merged.node_count(),
                    },
                );
            }
        }

        merged
    }

    /// Replaces fragment `idx` with its pieces if it is no longer connected.
    fn resplit(&mut self, idx: usize) {
        let pieces = self
            .detector
            .connected_components(&self.components[idx], self.direction);
        if pieces.len() <= 1 {
            return;
        }

        let count = pieces.len();
        let nodes = self.components[idx].node_count();
        debug!(pieces = count, nodes, "component split");
        self.components.splice(idx..=idx, pieces).for_each(drop);
        emit(&self.sink, PartitionEvent::ComponentSplit { pieces: count, nodes });
    }

    fn emit_detected(&self) {
        emit(
            &self.sink,
            PartitionEvent::ComponentsDetected {
                nodes: self.node_count(),
                edges: self.components.iter().map(|c| c.edge_count()).sum(),
                components: self.components.len(),
            },
        );
    }
}
