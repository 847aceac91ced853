use crate::domain::graph::AdjacencyGraph;
use crate::domain::tree::RootedTree;
use crate::infrastructure::schema_validator::{validate_adjacency_input, validate_forest_output};
use crate::usecase::forest::ForestOptions;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tokio::fs;

/// Neighbor id as it appears in JSON: a string or an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNodeId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RawNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawNodeId::Int(n) => write!(f, "{n}"),
            RawNodeId::Text(s) => f.write_str(s),
        }
    }
}

/// `{"id": [neighbor, ...], ...}` in document order.
pub type AdjacencyDto = IndexMap<String, Vec<RawNodeId>>;

/// Converts a DTO into a graph keyed by stringified ids. Neighbors missing
/// from the key set are registered as empty nodes.
pub fn graph_from_dto(dto: AdjacencyDto) -> AdjacencyGraph<String> {
    AdjacencyGraph::from_entries(
        dto.into_iter()
            .map(|(id, neighbors)| (id, neighbors.into_iter().map(|n| n.to_string()))),
    )
}

pub fn graph_to_dto(graph: &AdjacencyGraph<String>) -> AdjacencyDto {
    graph
        .iter()
        .map(|(id, outs)| {
            (
                id.clone(),
                outs.iter().cloned().map(RawNodeId::Text).collect(),
            )
        })
        .collect()
}

/// Parses and schema-checks adjacency JSON.
///
/// The DTO is read from `raw` itself, since `Value` objects do not keep key order.
pub fn parse_adjacency(raw: &str) -> Result<AdjacencyGraph<String>> {
    let value: Value = serde_json::from_str(raw).context("adjacency input is not valid JSON")?;
    validate_adjacency_input(&value)?;
    let dto: AdjacencyDto = serde_json::from_str(raw).context("decoding adjacency input")?;
    Ok(graph_from_dto(dto))
}

pub fn forest_to_json(trees: &[RootedTree]) -> Result<Value> {
    let value = serde_json::to_value(trees)?;
    validate_forest_output(&value)?;
    Ok(value)
}

pub async fn read_adjacency_file(path: &str) -> Result<AdjacencyGraph<String>> {
    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("reading adjacency JSON: {path}"))?;
    parse_adjacency(&raw).with_context(|| format!("parsing adjacency JSON: {path}"))
}

pub async fn read_forest_options(path: &str) -> Result<ForestOptions> {
    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("reading forest options: {path}"))?;
    let options: ForestOptions =
        serde_json::from_str(&raw).with_context(|| format!("parsing forest options: {path}"))?;
    Ok(options)
}

pub async fn write_forest_file(path: &str, trees: &[RootedTree]) -> Result<()> {
    let pretty = serde_json::to_string_pretty(&forest_to_json(trees)?)?;
    fs::write(path, pretty)
        .await
        .with_context(|| format!("writing forest JSON: {path}"))?;
    Ok(())
}
