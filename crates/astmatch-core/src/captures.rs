//! Named captures collected while matching.
//!
//! A [`Captures`] value maps capture names to the sub-nodes they were bound
//! to. Captures from every predicate in a walk are merged in invocation
//! order, so a name bound twice keeps the later value.

use serde::{Deserialize, Serialize};
use serde_json::Map;
use tracing::trace;

use crate::Node;

/// Mapping from capture name to captured node.
///
/// Serialises as a plain JSON object.
///
/// # Example
///
/// ```
/// use astmatch_core::Captures;
/// use serde_json::json;
///
/// let mut captures = Captures::single("callee", json!("require"));
/// captures.merge(Captures::single("callee", json!("import")));
/// assert_eq!(captures.get("callee"), Some(&json!("import")));
/// assert_eq!(captures.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Captures {
    inner: Map<String, Node>,
}

impl Captures {
    /// Creates an empty capture mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a capture mapping holding exactly one binding.
    #[must_use]
    pub fn single(name: impl Into<String>, value: Node) -> Self {
        let mut inner = Map::new();
        inner.insert(name.into(), value);
        Self { inner }
    }

    /// Binds `name` to `value`, returning the previous binding if any.
    pub fn insert(&mut self, name: impl Into<String>, value: Node) -> Option<Node> {
        self.inner.insert(name.into(), value)
    }

    /// Folds `other` into `self`; bindings in `other` win on collision.
    pub fn merge(&mut self, other: Self) {
        for (name, value) in other.inner {
            if self.inner.contains_key(&name) {
                trace!(capture = %name, "capture overwritten by later binding");
            }
            self.inner.insert(name, value);
        }
    }

    /// Returns the node bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.inner.get(name)
    }

    /// Returns true when `name` has a binding.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true when nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.inner.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterates over capture names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Consumes the captures, returning the underlying JSON object map.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Node> {
        self.inner
    }
}

impl From<Captures> for Node {
    fn from(captures: Captures) -> Self {
        Self::Object(captures.inner)
    }
}

impl FromIterator<(String, Node)> for Captures {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Captures {
    type Item = (String, Node);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}
