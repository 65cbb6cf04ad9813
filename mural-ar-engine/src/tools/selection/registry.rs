use std::collections::HashMap;
use std::hash::Hash;

/// Bidirectional link between figure tags and scene node handles.
///
/// A tag resolves to the earliest registered node still carrying it; later
/// duplicates take over in registration order as earlier ones go away.
#[derive(Debug, Clone)]
pub struct TagRegistry<N> {
    by_tag: HashMap<String, Vec<N>>,
    by_node: HashMap<N, String>,
}

impl<N> Default for TagRegistry<N> {
    fn default() -> Self {
        Self {
            by_tag: HashMap::new(),
            by_node: HashMap::new(),
        }
    }
}

impl<N: Copy + Eq + Hash> TagRegistry<N> {
    pub fn register(&mut self, tag: impl Into<String>, node: N) {
        let tag = tag.into();
        if self.by_node.get(&node) == Some(&tag) {
            return;
        }
        if let Some(previous) = self.by_node.remove(&node) {
            self.unlink_tag(&previous, node);
        }
        self.by_tag.entry(tag.clone()).or_default().push(node);
        self.by_node.insert(node, tag);
    }

    /// Forget a node, returning the tag it carried.
    pub fn unregister_node(&mut self, node: N) -> Option<String> {
        let tag = self.by_node.remove(&node)?;
        self.unlink_tag(&tag, node);
        Some(tag)
    }

    pub fn tag_of(&self, node: N) -> Option<&str> {
        self.by_node.get(&node).map(String::as_str)
    }

    pub fn node_of(&self, tag: &str) -> Option<N> {
        self.by_tag.get(tag).and_then(|nodes| nodes.first()).copied()
    }

    pub fn len(&self) -> usize {
        self.by_node.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_node.is_empty()
    }

    fn unlink_tag(&mut self, tag: &str, node: N) {
        let Some(nodes) = self.by_tag.get_mut(tag) else {
            return;
        };
        nodes.retain(|n| *n != node);
        if nodes.is_empty() {
            self.by_tag.remove(tag);
        }
    }
}
