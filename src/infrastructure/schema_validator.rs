use anyhow::{anyhow, Result};
use jsonschema::{Draft, JSONSchema};
use once_cell::sync::Lazy;
use serde_json::Value;

static ADJACENCY_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/adjacency_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid adjacency schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile adjacency schema")
});

static FOREST_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/forest_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid forest schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile forest schema")
});

/// Validate raw adjacency input: an object of id -> [string | integer].
pub fn validate_adjacency_input(input: &Value) -> Result<()> {
    match ADJACENCY_SCHEMA.validate(input) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_list: Vec<String> = errors.map(|e| e.to_string()).collect();
            Err(anyhow!(
                "Adjacency input validation failed:\n{}",
                error_list.join("\n")
            ))
        }
    }
}

/// Validate rendered output: a list of `{ id, children }` trees.
pub fn validate_forest_output(forest: &Value) -> Result<()> {
    match FOREST_SCHEMA.validate(forest) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_list: Vec<String> = errors.map(|e| e.to_string()).collect();
            Err(anyhow!(
                "Forest output validation failed:\n{}",
                error_list.join("\n")
            ))
        }
    }
}
