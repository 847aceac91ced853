use serde::{Deserialize, Serialize};

/// How edges are interpreted by an operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Directed,
    #[default]
    Undirected,
}

impl Direction {
    pub fn is_directed(self) -> bool {
        matches!(self, Direction::Directed)
    }

    /// Whether edge insertion/removal should touch both directions.
    pub fn is_bidirectional(self) -> bool {
        !self.is_directed()
    }
}

/// Verdict of the tree classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification<N> {
    /// Directed tree with its unique root.
    Rooted(N),
    /// Undirected tree; any node may serve as root.
    Unrooted,
    NotTree,
}

impl<N> Classification<N> {
    pub fn is_tree(&self) -> bool {
        !matches!(self, Classification::NotTree)
    }

    pub fn root(&self) -> Option<&N> {
        match self {
            Classification::Rooted(root) => Some(root),
            _ => None,
        }
    }
}
