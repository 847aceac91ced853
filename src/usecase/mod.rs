//! Usecase layer: partition maintenance, classification, tree building + events.

pub mod build;
pub mod classify;
pub mod event;
pub mod forest;
pub mod partition;
pub mod stats;
pub mod validate;
