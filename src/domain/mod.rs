// Domain layer: graph model, tree output, seams
pub mod bidirectional;
pub mod graph;
pub mod model;
pub mod traits;
pub mod tree;
