//! Field extraction: naming a sub-node while optionally constraining it.

use crate::{Captures, Node, Pattern, Predicate, Verdict, as_predicate};

/// Returns a predicate that always matches and captures the candidate as
/// `name`.
///
/// # Example
///
/// ```
/// use astmatch_core::{Pattern, extract_field, is_match};
/// use serde_json::json;
///
/// let node = json!({ "type": "Identifier", "name": "x" });
/// let captures = is_match(&node, &Pattern::from(extract_field("id"))).expect("always matches");
/// assert_eq!(captures.get("id"), Some(&node));
/// ```
pub fn extract_field(name: impl Into<String>) -> Predicate {
    let capture: String = name.into();
    let label = format!("extract_field({capture})");
    Predicate::new(move |candidate: &Node| Captures::single(capture.clone(), candidate.clone()))
        .with_label(label)
}

/// Returns a predicate that captures the candidate as `name` only when it
/// also satisfies `matcher`.
///
/// A literal or structural `matcher` is wrapped with [`as_predicate`]
/// first. Captures produced by the nested matcher are merged over the
/// `name` binding, so a nested capture reusing `name` wins. A rejection
/// discards the binding.
///
/// # Example
///
/// ```
/// use astmatch_core::{Pattern, extract_field_with};
/// use serde_json::json;
///
/// let positive = extract_field_with(
///     "arg",
///     Pattern::predicate(|node| {
///         node.get("value")
///             .and_then(serde_json::Value::as_i64)
///             .is_some_and(|value| value > 0)
///     }),
/// );
///
/// assert!(positive.matches(&json!({ "value": -1 })).is_none());
/// let captures = positive.matches(&json!({ "value": 3 })).expect("positive value");
/// assert_eq!(captures.get("arg"), Some(&json!({ "value": 3 })));
/// ```
pub fn extract_field_with(name: impl Into<String>, matcher: impl Into<Pattern>) -> Predicate {
    let capture: String = name.into();
    let label = format!("extract_field_with({capture})");
    let nested = match matcher.into() {
        Pattern::Predicate(predicate) => predicate,
        pattern => as_predicate(pattern),
    };
    Predicate::new(move |candidate: &Node| match nested.call(candidate) {
        Verdict::Reject => Verdict::Reject,
        Verdict::Accept => Verdict::Capture(Captures::single(capture.clone(), candidate.clone())),
        Verdict::Capture(found) => {
            let mut captures = Captures::single(capture.clone(), candidate.clone());
            captures.merge(found);
            Verdict::Capture(captures)
        }
    })
    .with_label(label)
}
