//! Pattern representation.

use crate::{Node, Predicate, Verdict};

/// A shape to match candidate nodes against.
///
/// Whether a position is literal or delegated to a predicate is decided when
/// the pattern is built, never by inspecting values at match time.
///
/// # Example
///
/// ```
/// use astmatch_core::{Pattern, is_match};
/// use serde_json::json;
///
/// let literal = Pattern::mapping([("type", "Literal")]);
/// let candidate = json!({ "type": "Literal", "value": 5 });
/// assert!(is_match(&candidate, &literal).is_some_and(|captures| captures.is_empty()));
/// ```
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Deep partial comparison against a plain value.
    ///
    /// Mappings need every listed key (extra candidate keys are fine),
    /// sequences are compared index-by-index as a prefix, and scalars by
    /// equality.
    Literal(Node),
    /// Each key's pattern is matched against the candidate's value for that
    /// key, in the listed order.
    Mapping(Vec<(String, Pattern)>),
    /// Element patterns matched index-by-index; the candidate may be longer.
    Sequence(Vec<Pattern>),
    /// Matching at this position is delegated entirely to a predicate.
    Predicate(Predicate),
}

impl Pattern {
    /// Creates a literal pattern.
    pub fn literal(value: impl Into<Node>) -> Self {
        Self::Literal(value.into())
    }

    /// Creates a mapping pattern from `(key, pattern)` pairs.
    pub fn mapping<I, K, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<String>,
        P: Into<Self>,
    {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(key, pattern)| (key.into(), pattern.into()))
                .collect(),
        )
    }

    /// Creates a sequence pattern.
    pub fn sequence<I, P>(items: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Self>,
    {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Creates a predicate pattern from a closure.
    pub fn predicate<F, V>(func: F) -> Self
    where
        F: Fn(&Node) -> V + Send + Sync + 'static,
        V: Into<Verdict>,
    {
        Self::Predicate(Predicate::new(func))
    }

    /// Returns true when this position is a predicate.
    #[must_use]
    pub const fn is_predicate(&self) -> bool {
        matches!(self, Self::Predicate(_))
    }

    /// Returns true when a predicate appears anywhere in the pattern.
    #[must_use]
    pub fn has_predicates(&self) -> bool {
        match self {
            Self::Literal(_) => false,
            Self::Predicate(_) => true,
            Self::Mapping(entries) => entries.iter().any(|(_, pattern)| pattern.has_predicates()),
            Self::Sequence(items) => items.iter().any(Self::has_predicates),
        }
    }
}

impl From<Node> for Pattern {
    fn from(value: Node) -> Self {
        Self::Literal(value)
    }
}

impl From<Predicate> for Pattern {
    fn from(predicate: Predicate) -> Self {
        Self::Predicate(predicate)
    }
}

impl From<&str> for Pattern {
    fn from(value: &str) -> Self {
        Self::Literal(Node::from(value))
    }
}

impl From<String> for Pattern {
    fn from(value: String) -> Self {
        Self::Literal(Node::from(value))
    }
}

impl From<bool> for Pattern {
    fn from(value: bool) -> Self {
        Self::Literal(Node::from(value))
    }
}

impl From<i64> for Pattern {
    fn from(value: i64) -> Self {
        Self::Literal(Node::from(value))
    }
}

impl From<f64> for Pattern {
    fn from(value: f64) -> Self {
        Self::Literal(Node::from(value))
    }
}

impl From<Vec<Self>> for Pattern {
    fn from(items: Vec<Self>) -> Self {
        Self::Sequence(items)
    }
}
