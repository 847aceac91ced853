use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ForestStats {
    pub nodes: usize,
    pub edges: usize,
    pub components: usize,
    pub trees: usize,
    pub non_trees: usize,
    pub rendered: usize,
}
