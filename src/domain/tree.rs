use serde::{Deserialize, Serialize};

/// Nested rooted tree handed to renderers: `{ "id": ..., "children": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootedTree {
    pub id: String,
    #[serde(default)]
    pub children: Vec<RootedTree>,
}

impl RootedTree {
    pub fn leaf(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(id: impl Into<String>, children: Vec<RootedTree>) -> Self {
        Self {
            id: id.into(),
            children,
        }
    }

    pub fn node_count(&self) -> usize {
        self.preorder().count()
    }

    /// Number of levels; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, d)) = stack.pop() {
            max = max.max(d);
            for ch in node.children.iter() {
                stack.push((ch, d + 1));
            }
        }
        max
    }

    pub fn preorder_ids(&self) -> Vec<&str> {
        self.preorder().map(|n| n.id.as_str()).collect()
    }

    fn preorder(&self) -> impl Iterator<Item = &RootedTree> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            for ch in node.children.iter().rev() {
                stack.push(ch);
            }
            Some(node)
        })
    }
}
