#![forbid(unsafe_code)]

//! Nested key trees of translation strings.
//!
//! A [`Node`] is either a leaf string or a subtree; the two cases are a
//! tagged union rather than a dynamic value, so merge and traversal get
//! exhaustive case handling instead of runtime type inspection.
//!
//! # Invariants
//!
//! 1. **Leaf xor subtree**: a node is never ambiguously both; every
//!    traversal step matches on the variant.
//!
//! 2. **Merge never fails**: `deep_merge` is total. Shape conflicts
//!    (leaf vs. subtree) resolve in favor of the overlay.
//!
//! 3. **Traversal never fails**: `dig` expresses every miss as `None`,
//!    including a leaf encountered before the path is exhausted.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;

/// A subtree: string key segments mapped to child nodes.
pub type KeyTree = FxHashMap<String, Node>;

/// One node of a translation tree.
///
/// Deserializes untagged, so a decoded JSON/YAML mapping of strings turns
/// directly into a tree:
///
/// ```
/// use polyglot::Node;
///
/// let node: Node = serde_json::from_str(r#"{"greetings": {"hello": "Hi"}}"#).unwrap();
/// assert_eq!(node.dig(&["greetings", "hello"]).and_then(Node::as_str), Some("Hi"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A translation string.
    Leaf(String),
    /// A nested mapping of key segments to child nodes.
    Tree(KeyTree),
}

impl Node {
    /// The leaf string, if this node is a leaf.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Leaf(text) => Some(text),
            Self::Tree(_) => None,
        }
    }

    /// The leaf string by value, if this node is a leaf.
    #[must_use]
    pub fn into_string(self) -> Option<String> {
        match self {
            Self::Leaf(text) => Some(text),
            Self::Tree(_) => None,
        }
    }

    /// The subtree, if this node is a subtree.
    #[must_use]
    pub fn as_tree(&self) -> Option<&KeyTree> {
        match self {
            Self::Leaf(_) => None,
            Self::Tree(tree) => Some(tree),
        }
    }

    /// Whether the node holds nothing: an empty leaf string or an empty
    /// subtree.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Leaf(text) => text.is_empty(),
            Self::Tree(tree) => tree.is_empty(),
        }
    }

    /// Descend through the tree one path segment at a time.
    ///
    /// Returns `None` when a subtree lacks the next segment or a leaf is
    /// reached before the path is exhausted. An empty path returns the
    /// node itself. Segments match exactly; there is no fuzzy matching.
    #[must_use]
    pub fn dig(&self, path: &[&str]) -> Option<&Self> {
        path.iter().try_fold(self, |node, segment| match node {
            Self::Tree(tree) => tree.get(*segment),
            Self::Leaf(_) => None,
        })
    }

    /// Merge `overlay` into this node.
    ///
    /// Where both sides hold subtrees the merge recurses; in every other
    /// case the overlay value wins, including a subtree replacing a leaf
    /// and vice versa. Keys present only in the base are retained.
    pub fn deep_merge(&mut self, overlay: Self) {
        match (&mut *self, overlay) {
            (Self::Tree(base), Self::Tree(over)) => {
                for (key, value) in over {
                    match base.entry(key) {
                        Entry::Occupied(mut slot) => slot.get_mut().deep_merge(value),
                        Entry::Vacant(slot) => {
                            slot.insert(value);
                        }
                    }
                }
            }
            (slot, over) => *slot = over,
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Leaf(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Leaf(text)
    }
}

impl From<KeyTree> for Node {
    fn from(tree: KeyTree) -> Self {
        Self::Tree(tree)
    }
}

impl<K: Into<String>, V: Into<Node>> FromIterator<(K, V)> for Node {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::Tree(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::from_iter([(
            "greetings",
            Node::from_iter([("hello", "Hi"), ("bye", "Bye")]),
        )])
    }

    #[test]
    fn dig_hit() {
        let node = sample();
        assert_eq!(
            node.dig(&["greetings", "hello"]).and_then(Node::as_str),
            Some("Hi")
        );
    }

    #[test]
    fn dig_missing_segment() {
        let node = sample();
        assert_eq!(node.dig(&["greetings", "welcome"]), None);
    }

    #[test]
    fn dig_through_leaf_is_none() {
        let node = sample();
        assert_eq!(node.dig(&["greetings", "hello", "more"]), None);
    }

    #[test]
    fn dig_empty_path_is_identity() {
        let node = sample();
        assert_eq!(node.dig(&[]), Some(&node));
    }

    #[test]
    fn dig_stops_at_subtree() {
        let node = sample();
        assert!(node.dig(&["greetings"]).is_some_and(|n| n.as_tree().is_some()));
    }

    #[test]
    fn merge_overlay_scalar_wins() {
        let mut base = Node::from_iter([("a", "1")]);
        base.deep_merge(Node::from_iter([("a", "2"), ("b", "3")]));
        assert_eq!(base, Node::from_iter([("a", "2"), ("b", "3")]));
    }

    #[test]
    fn merge_recurses_into_subtrees() {
        let mut base = Node::from_iter([("greetings", Node::from_iter([("hello", "Hi")]))]);
        base.deep_merge(Node::from_iter([(
            "greetings",
            Node::from_iter([("bye", "Bye")]),
        )]));
        assert_eq!(base, sample());
    }

    #[test]
    fn merge_subtree_replaces_leaf() {
        let mut base = Node::from_iter([("a", "leaf")]);
        base.deep_merge(Node::from_iter([("a", Node::from_iter([("b", "1")]))]));
        assert_eq!(
            base.dig(&["a", "b"]).and_then(Node::as_str),
            Some("1")
        );
    }

    #[test]
    fn merge_leaf_replaces_subtree() {
        let mut base = Node::from_iter([("a", Node::from_iter([("b", "1")]))]);
        base.deep_merge(Node::from_iter([("a", "leaf")]));
        assert_eq!(base.dig(&["a"]).and_then(Node::as_str), Some("leaf"));
    }

    #[test]
    fn merge_retains_base_only_keys() {
        let mut base = sample();
        base.deep_merge(Node::from_iter([("farewells", Node::from_iter([("bye", "Bye")]))]));
        assert_eq!(
            base.dig(&["greetings", "hello"]).and_then(Node::as_str),
            Some("Hi")
        );
    }

    #[test]
    fn merge_with_self_is_identity() {
        let mut base = sample();
        base.deep_merge(sample());
        assert_eq!(base, sample());
    }

    #[test]
    fn emptiness() {
        assert!(Node::from("").is_empty());
        assert!(Node::Tree(KeyTree::default()).is_empty());
        assert!(!Node::from("x").is_empty());
        assert!(!sample().is_empty());
    }

    #[test]
    fn deserializes_untagged() {
        let node: Node =
            serde_json::from_str(r#"{"en": {"msg": "Hello"}}"#).unwrap();
        assert_eq!(node.dig(&["en", "msg"]).and_then(Node::as_str), Some("Hello"));
    }

    #[test]
    fn serializes_as_plain_mapping() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["greetings"]["hello"], "Hi");
    }
}
