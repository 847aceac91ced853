//! Connected-component maintenance for evolving adjacency graphs, plus
//! conversion of tree-shaped components into nested rooted trees.
//!
//! The crate is split into Clean Architecture layers:
//! - domain: pure, synchronous graph types and rules
//! - usecase: partition maintenance, classification, tree building + events
//! - infrastructure: detector/scorer implementations, serde + async IO

pub mod domain;
pub mod infrastructure;
pub mod usecase;
