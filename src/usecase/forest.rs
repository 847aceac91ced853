use crate::domain::graph::{AdjacencyGraph, NodeId};
use crate::domain::model::{Classification, Direction};
use crate::domain::traits::{ComponentDetector, RootScorer};
use crate::domain::tree::RootedTree;
use crate::infrastructure::root_scorers::{LeastInDegree, MostReachable};
use crate::usecase::build::build_rooted_tree;
use crate::usecase::classify::{best_root, classify};
use crate::usecase::event::{emit, EventSink, PartitionEvent};
use crate::usecase::stats::ForestStats;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootStrategy {
    /// Directed trees use their classified root; undirected ones use `best_root`.
    #[default]
    Classified,
    /// First node of the component, unless the classifier found a root.
    First,
    /// Always the `best_root` heuristic.
    Best,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestOptions {
    pub direction: Direction,
    pub root_strategy: RootStrategy,
    /// Render non-tree components as their DFS spanning tree.
    pub include_non_trees: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    pub trees: Vec<RootedTree>,
    pub stats: ForestStats,
}

/// Split `graph` into components, then classify and render each one.
///
/// Components are detected as weakly connected pieces of the graph as given,
/// so root scorers see the original edge orientation. Undirected
/// classification and building symmetrize each component on their own.
pub fn build_forest<N, D>(
    graph: &AdjacencyGraph<N>,
    options: &ForestOptions,
    detector: &D,
    sink: &EventSink,
) -> Forest
where
    N: NodeId,
    D: ComponentDetector<N>,
{
    emit(
        sink,
        PartitionEvent::PhaseStarted {
            name: "partition".into(),
        },
    );
    let components = detector.connected_components(graph, Direction::Directed);
    emit(
        sink,
        PartitionEvent::ComponentsDetected {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            components: components.len(),
        },
    );
    emit(
        sink,
        PartitionEvent::PhaseFinished {
            name: "partition".into(),
        },
    );

    render_components(&components, options, sink)
}

/// Classify and render already-partitioned components.
pub fn render_components<N: NodeId>(
    components: &[AdjacencyGraph<N>],
    options: &ForestOptions,
    sink: &EventSink,
) -> Forest {
    emit(
        sink,
        PartitionEvent::PhaseStarted {
            name: "render".into(),
        },
    );

    let scorers: [&dyn RootScorer<N>; 2] = [&LeastInDegree, &MostReachable];
    let mut stats = ForestStats::default();
    let mut trees = Vec::new();

    for component in components {
        stats.components += 1;
        stats.nodes += component.node_count();
        stats.edges += component.edge_count();

        let verdict = classify(component, options.direction);
        if verdict.is_tree() {
            stats.trees += 1;
        } else {
            stats.non_trees += 1;
        }

        let root = pick_root(component, &verdict, options, &scorers);
        emit(
            sink,
            PartitionEvent::TreeClassified {
                nodes: component.node_count(),
                root: root.as_ref().map(|r| r.to_string()),
                is_tree: verdict.is_tree(),
            },
        );

        if !verdict.is_tree() && !options.include_non_trees {
            continue;
        }
        let Some(root) = root else {
            continue;
        };

        trees.push(build_rooted_tree(component, &root, options.direction));
    }

    stats.rendered = trees.len();
    debug!(
        components = stats.components,
        trees = stats.trees,
        rendered = stats.rendered,
        "forest rendered"
    );
    emit(
        sink,
        PartitionEvent::PhaseFinished {
            name: "render".into(),
        },
    );
    emit(
        sink,
        PartitionEvent::Finished {
            stats: stats.clone(),
        },
    );

    Forest { trees, stats }
}

fn pick_root<N: NodeId>(
    component: &AdjacencyGraph<N>,
    verdict: &Classification<N>,
    options: &ForestOptions,
    scorers: &[&dyn RootScorer<N>],
) -> Option<N> {
    match (options.root_strategy, verdict.root()) {
        (RootStrategy::Best, _) => best_root(component, scorers),
        (_, Some(root)) => Some(root.clone()),
        (RootStrategy::First, None) => component.nodes().next().cloned(),
        (RootStrategy::Classified, None) => best_root(component, scorers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::dfs_components::DfsComponentDetector;

    fn graph() -> AdjacencyGraph<&'static str> {
        // tree 0 -> {1, 2}, 2 -> 3; cycle a -> b -> c -> a; isolated x
        AdjacencyGraph::from_entries([
            ("0", vec!["1", "2"]),
            ("2", vec!["3"]),
            ("a", vec!["b"]),
            ("b", vec!["c"]),
            ("c", vec!["a"]),
            ("x", vec![]),
        ])
    }

    #[test]
    fn directed_forest_renders_only_trees() {
        let options = ForestOptions {
            direction: Direction::Directed,
            ..ForestOptions::default()
        };
        let forest = build_forest(&graph(), &options, &DfsComponentDetector, &None);

        assert_eq!(forest.stats.components, 3);
        assert_eq!(forest.stats.trees, 2);
        assert_eq!(forest.stats.non_trees, 1);
        assert_eq!(forest.trees.len(), 2);
        assert_eq!(forest.trees[0].preorder_ids(), vec!["0", "1", "2", "3"]);
        assert_eq!(forest.trees[1], RootedTree::leaf("x"));
    }

    #[test]
    fn include_non_trees_renders_spanning_projection() {
        let options = ForestOptions {
            direction: Direction::Directed,
            include_non_trees: true,
            ..ForestOptions::default()
        };
        let forest = build_forest(&graph(), &options, &DfsComponentDetector, &None);

        assert_eq!(forest.stats.rendered, 3);
        assert_eq!(forest.trees[1].node_count(), 3);
    }

    #[test]
    fn undirected_tree_root_follows_strategy() {
        let g = AdjacencyGraph::from_entries([
            ("m", vec!["l", "r"]),
            ("l", vec!["m"]),
            ("r", vec!["m"]),
        ]);

        let first = ForestOptions {
            root_strategy: RootStrategy::First,
            ..ForestOptions::default()
        };
        let forest = build_forest(&g, &first, &DfsComponentDetector, &None);
        assert_eq!(forest.trees[0].id, "m");

        // "m" has the most in-edges, so least-in-degree leaves {l, r}
        let best = ForestOptions {
            root_strategy: RootStrategy::Best,
            ..ForestOptions::default()
        };
        let forest = build_forest(&g, &best, &DfsComponentDetector, &None);
        assert_eq!(forest.trees[0].id, "l");
        assert_eq!(forest.trees[0].preorder_ids(), vec!["l", "m", "r"]);
    }

    #[test]
    fn undirected_apex_is_scored_on_the_edges_as_given() {
        let g = AdjacencyGraph::from_entries([
            ("0", vec!["1", "2"]),
            ("1", vec![]),
            ("2", vec!["3"]),
            ("3", vec![]),
        ]);
        let forest = build_forest(&g, &ForestOptions::default(), &DfsComponentDetector, &None);

        assert_eq!(forest.stats.trees, 1);
        assert_eq!(forest.trees[0].id, "0");
        assert_eq!(forest.trees[0].preorder_ids(), vec!["0", "1", "2", "3"]);
    }

    #[test]
    fn undirected_forest_splits_one_way_input_into_weak_components() {
        // b -> a and c -> a only meet through a
        let g = AdjacencyGraph::from_entries([
            ("a", vec![]),
            ("b", vec!["a"]),
            ("c", vec!["a"]),
            ("x", vec![]),
        ]);
        let forest = build_forest(&g, &ForestOptions::default(), &DfsComponentDetector, &None);

        assert_eq!(forest.stats.components, 2);
        assert_eq!(forest.stats.trees, 2);
        // b and c tie on both scores; graph order picks b
        assert_eq!(forest.trees[0].id, "b");
        assert_eq!(forest.trees[0].preorder_ids(), vec!["b", "a", "c"]);
        assert_eq!(forest.trees[1], RootedTree::leaf("x"));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let o: ForestOptions = serde_json::from_str(r#"{"direction":"directed"}"#).expect("parse");
        assert_eq!(o.direction, Direction::Directed);
        assert_eq!(o.root_strategy, RootStrategy::Classified);
        assert!(!o.include_non_trees);
    }
}
