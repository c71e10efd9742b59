//! Predicates: user-supplied tests placed anywhere in a pattern.
//!
//! A [`Predicate`] fully takes over matching for the subtree at its
//! position. It answers with a [`Verdict`]: reject, accept, or accept while
//! contributing [`Captures`] to the running match.

use std::fmt;
use std::sync::Arc;

use crate::{Captures, Node};

/// Outcome of applying a [`Predicate`] to one candidate node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The candidate does not match.
    Reject,
    /// The candidate matches and nothing is captured.
    Accept,
    /// The candidate matches and these captures are merged into the result.
    ///
    /// An empty mapping still counts as a match.
    Capture(Captures),
}

impl Verdict {
    /// Returns true unless this is [`Verdict::Reject`].
    #[must_use]
    pub const fn is_match(&self) -> bool {
        !matches!(self, Self::Reject)
    }

    /// Converts the verdict into a match result.
    ///
    /// `Accept` becomes an empty capture mapping.
    #[must_use]
    pub fn into_captures(self) -> Option<Captures> {
        match self {
            Self::Reject => None,
            Self::Accept => Some(Captures::new()),
            Self::Capture(captures) => Some(captures),
        }
    }
}

impl From<bool> for Verdict {
    fn from(matched: bool) -> Self {
        if matched { Self::Accept } else { Self::Reject }
    }
}

impl From<Captures> for Verdict {
    fn from(captures: Captures) -> Self {
        Self::Capture(captures)
    }
}

impl From<Option<Captures>> for Verdict {
    fn from(result: Option<Captures>) -> Self {
        result.map_or(Self::Reject, Self::Capture)
    }
}

type PredicateFn = dyn Fn(&Node) -> Verdict + Send + Sync;

/// A shareable test over a candidate node.
///
/// Predicates are cheap to clone and safe to share between threads. The
/// closure may return anything convertible into a [`Verdict`]: a `bool`,
/// [`Captures`], an `Option<Captures>`, or a `Verdict` itself.
///
/// # Example
///
/// ```
/// use astmatch_core::{Predicate, Verdict};
/// use serde_json::json;
///
/// let positive = Predicate::new(|node| {
///     node.get("value")
///         .and_then(serde_json::Value::as_i64)
///         .is_some_and(|value| value > 0)
/// });
///
/// assert_eq!(positive.call(&json!({ "value": 3 })), Verdict::Accept);
/// assert_eq!(positive.call(&json!({ "value": -1 })), Verdict::Reject);
/// ```
#[derive(Clone)]
pub struct Predicate {
    func: Arc<PredicateFn>,
    label: Arc<str>,
}

impl Predicate {
    /// Wraps a closure as a predicate.
    pub fn new<F, V>(func: F) -> Self
    where
        F: Fn(&Node) -> V + Send + Sync + 'static,
        V: Into<Verdict>,
    {
        Self {
            func: Arc::new(move |node: &Node| func(node).into()),
            label: Arc::from("fn"),
        }
    }

    /// Attaches a human-readable label used by the `Debug` output.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Arc::from(label.into());
        self
    }

    /// Returns the predicate's label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Applies the predicate to `node`.
    #[must_use]
    pub fn call(&self, node: &Node) -> Verdict {
        (self.func)(node)
    }

    /// Applies the predicate and converts the verdict into a match result.
    #[must_use]
    pub fn matches(&self, node: &Node) -> Option<Captures> {
        self.call(node).into_captures()
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&&*self.label).finish()
    }
}
