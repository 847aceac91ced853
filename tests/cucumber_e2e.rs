use component_forest::domain::bidirectional::make_bidirectional;
use component_forest::domain::graph::AdjacencyGraph;
use component_forest::domain::model::Direction;
use component_forest::domain::traits::ComponentDetector;
use component_forest::domain::tree::RootedTree;
use component_forest::infrastructure::dfs_components::DfsComponentDetector;
use component_forest::infrastructure::serde_json_adapter::parse_adjacency;
use component_forest::usecase::build::build_rooted_tree;
use component_forest::usecase::classify::{is_directed_tree, is_undirected_tree};
use component_forest::usecase::partition::ComponentPartition;
use component_forest::usecase::validate::validate_partition;

use cucumber::{given, then, when, World as _};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, cucumber::World)]
struct TestWorld {
    graph: Option<AdjacencyGraph<String>>,
    partition: Option<ComponentPartition<String>>,
    directed_root: Option<Option<String>>,
    undirected_tree: Option<bool>,
    tree: Option<RootedTree>,
    components: Vec<AdjacencyGraph<String>>,
}

impl TestWorld {
    fn graph(&self) -> &AdjacencyGraph<String> {
        self.graph.as_ref().expect("graph")
    }

    fn partition(&mut self) -> &mut ComponentPartition<String> {
        self.partition.as_mut().expect("partition")
    }
}

#[given(expr = "the adjacency list {string}")]
fn the_adjacency_list(world: &mut TestWorld, json: String) {
    world.graph = Some(parse_adjacency(&json).expect("parse adjacency"));
}

#[given(expr = "an undirected partition of {string}")]
fn an_undirected_partition_of(world: &mut TestWorld, json: String) {
    let graph = make_bidirectional(&parse_adjacency(&json).expect("parse adjacency"));
    world.partition = Some(ComponentPartition::from_graph(&graph, Direction::Undirected));
}

#[when("I check it as a directed tree")]
fn i_check_it_as_a_directed_tree(world: &mut TestWorld) {
    world.directed_root = Some(is_directed_tree(world.graph()));
}

#[when("I check it as an undirected tree")]
fn i_check_it_as_an_undirected_tree(world: &mut TestWorld) {
    world.undirected_tree = Some(is_undirected_tree(world.graph()));
}

#[when(expr = "I build the rooted tree from {string} as directed")]
fn i_build_the_rooted_tree_from(world: &mut TestWorld, root: String) {
    world.tree = Some(build_rooted_tree(world.graph(), &root, Direction::Directed));
}

#[when("I split it into undirected components")]
fn i_split_it_into_undirected_components(world: &mut TestWorld) {
    let sym = make_bidirectional(world.graph());
    world.components = DfsComponentDetector.connected_components(&sym, Direction::Undirected);
}

#[when(expr = "I insert the edge {string} to {string}")]
fn i_insert_the_edge(world: &mut TestWorld, parent: String, child: String) {
    world.partition().insert_edge(parent, child);
}

#[when(expr = "I remove the edge {string} to {string}")]
fn i_remove_the_edge(world: &mut TestWorld, parent: String, child: String) {
    world.partition().remove_edge(&parent, &child);
}

#[when(expr = "I remove the node {string}")]
fn i_remove_the_node(world: &mut TestWorld, id: String) {
    world.partition().remove_node(&id);
}

#[then(expr = "the directed root is {string}")]
fn the_directed_root_is(world: &mut TestWorld, root: String) {
    assert_eq!(world.directed_root.clone().expect("checked"), Some(root));
}

#[then("there is no directed root")]
fn there_is_no_directed_root(world: &mut TestWorld) {
    assert_eq!(world.directed_root.clone().expect("checked"), None);
}

#[then("it is an undirected tree")]
fn it_is_an_undirected_tree(world: &mut TestWorld) {
    assert_eq!(world.undirected_tree, Some(true));
}

#[then("it is not an undirected tree")]
fn it_is_not_an_undirected_tree(world: &mut TestWorld) {
    assert_eq!(world.undirected_tree, Some(false));
}

#[then(expr = "the tree is {string}")]
fn the_tree_is(world: &mut TestWorld, json: String) {
    let expected: RootedTree = serde_json::from_str(&json).expect("expected tree json");
    assert_eq!(world.tree.as_ref().expect("built tree"), &expected);
}

#[then(expr = "there are {int} components")]
fn there_are_components(world: &mut TestWorld, count: usize) {
    assert_eq!(world.components.len(), count);
}

#[then(expr = "component {int} holds {string}")]
fn component_holds(world: &mut TestWorld, index: usize, nodes: String) {
    let component = &world.components[index - 1];
    let mut got: Vec<&str> = component.nodes().map(|n| n.as_str()).collect();
    got.sort_unstable();
    let want: Vec<&str> = nodes.split(',').collect();
    assert_eq!(got, want);
}

#[then(regex = r"^the partition has (\d+) components?$")]
fn the_partition_has(world: &mut TestWorld, count: usize) {
    assert_eq!(world.partition().len(), count);
}

#[then("the partition is valid")]
fn the_partition_is_valid(world: &mut TestWorld) {
    validate_partition(world.partition()).expect("partition invariants");
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    TestWorld::cucumber()
        .max_concurrent_scenarios(Some(1))
        .fail_on_skipped()
        .run_and_exit("tests/features")
        .await;
}
