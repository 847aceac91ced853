use crate::domain::graph::NodeId;
use crate::domain::tree::RootedTree;
use crate::domain::traits::ComponentDetector;
use crate::usecase::partition::ComponentPartition;
use anyhow::{anyhow, Result};
use std::collections::{HashMap, HashSet};

/// Checks the partition invariants: no empty fragment, no node in two
/// fragments, no neighbor outside its own fragment, every fragment connected.
pub fn validate_partition<N, D>(partition: &ComponentPartition<N, D>) -> Result<()>
where
    N: NodeId,
    D: ComponentDetector<N>,
{
    let mut owner: HashMap<&N, usize> = HashMap::new();

    for (idx, component) in partition.components().iter().enumerate() {
        if component.is_empty() {
            return Err(anyhow!("component {idx} is empty"));
        }

        for node in component.nodes() {
            if let Some(prev) = owner.insert(node, idx) {
                return Err(anyhow!(
                    "node {node} appears in components {prev} and {idx}"
                ));
            }
        }
    }

    for (idx, component) in partition.components().iter().enumerate() {
        for (node, outs) in component.iter() {
            for n in outs {
                if !component.contains_node(n) {
                    return Err(anyhow!(
                        "edge {node} -> {n} in component {idx} leaves the component"
                    ));
                }
            }
        }

        let pieces = partition
            .detector()
            .connected_components(component, partition.direction())
            .len();
        if pieces != 1 {
            return Err(anyhow!(
                "component {idx} is not connected: it splits into {pieces} pieces"
            ));
        }
    }

    Ok(())
}

/// Checks that no id repeats anywhere across the rendered trees.
pub fn validate_forest(trees: &[RootedTree]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut stack: Vec<(String, &RootedTree)> = Vec::new();

    for (idx, tree) in trees.iter().enumerate().rev() {
        stack.push((format!("/{idx}"), tree));
    }

    while let Some((path, node)) = stack.pop() {
        if !seen.insert(node.id.as_str()) {
            return Err(anyhow!("node id {} repeats at {path}", node.id));
        }
        for ch in node.children.iter().rev() {
            stack.push((format!("{path}/{}", ch.id), ch));
        }
    }

    Ok(())
}
