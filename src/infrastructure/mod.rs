// Infrastructure layer: seam implementations, file I/O, serde, eventing
pub mod dfs_components;
pub mod event_ndjson;
pub mod root_scorers;
pub mod schema_validator;
pub mod serde_json_adapter;
