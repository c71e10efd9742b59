//! The structural walk shared by every public operation.
//!
//! [`is_match`] walks a candidate and a [`Pattern`] together. Literal
//! positions use deep partial comparison; predicate positions hand the
//! candidate sub-node to the predicate and merge whatever it captures into
//! one accumulator owned by the call. The accumulator is only returned when
//! the whole walk succeeds.

use tracing::trace;

use crate::literal;
use crate::{Captures, Node, Pattern, Predicate, Verdict};

/// Result of a match: captures on success, `None` on failure.
///
/// Success with nothing captured is `Some` of an empty [`Captures`].
pub type MatchResult = Option<Captures>;

/// Matches `candidate` against `pattern`.
///
/// Returns every capture produced by predicates anywhere in the walk, merged
/// in invocation order, or `None` if any position fails. Evaluation stops at
/// the first failing position.
///
/// # Example
///
/// ```
/// use astmatch_core::{Pattern, is_match};
/// use serde_json::json;
///
/// let pattern = Pattern::literal(json!({ "type": "Literal" }));
/// let result = is_match(&json!({ "type": "Literal", "value": 5 }), &pattern);
/// assert_eq!(result.map(|captures| captures.len()), Some(0));
///
/// assert!(is_match(&json!({ "type": "Identifier" }), &pattern).is_none());
/// ```
#[must_use]
pub fn is_match(candidate: &Node, pattern: &Pattern) -> MatchResult {
    let mut captures = Captures::new();
    walk(candidate, pattern, &mut captures).then_some(captures)
}

/// Freezes `pattern` into a reusable predicate.
///
/// The predicate runs [`is_match`] with the fixed pattern and carries no
/// state between calls.
///
/// # Example
///
/// ```
/// use astmatch_core::{Pattern, Verdict, as_predicate};
/// use serde_json::json;
///
/// let is_identifier = as_predicate(Pattern::mapping([("type", "Identifier")]));
/// assert!(is_identifier.call(&json!({ "type": "Identifier", "name": "x" })).is_match());
/// assert_eq!(is_identifier.call(&json!({ "type": "Literal" })), Verdict::Reject);
/// ```
pub fn as_predicate(pattern: impl Into<Pattern>) -> Predicate {
    let fixed = pattern.into();
    Predicate::new(move |candidate: &Node| is_match(candidate, &fixed)).with_label("as_predicate")
}

fn walk(candidate: &Node, pattern: &Pattern, captures: &mut Captures) -> bool {
    match pattern {
        Pattern::Predicate(predicate) => apply(predicate, candidate, captures),
        Pattern::Literal(expected) => {
            let matched = literal::contains(candidate, expected);
            if !matched {
                trace!(%expected, "literal mismatch");
            }
            matched
        }
        Pattern::Mapping(entries) => {
            let Some(fields) = candidate.as_object() else {
                trace!("mapping pattern applied to a non-mapping");
                return false;
            };
            entries.iter().all(|(key, entry)| {
                let Some(field) = fields.get(key) else {
                    trace!(key = %key, "mapping key missing");
                    return false;
                };
                walk(field, entry, captures)
            })
        }
        Pattern::Sequence(items) => {
            let Some(elements) = candidate.as_array() else {
                trace!("sequence pattern applied to a non-sequence");
                return false;
            };
            if elements.len() < items.len() {
                trace!(
                    expected = items.len(),
                    actual = elements.len(),
                    "sequence shorter than pattern"
                );
                return false;
            }
            elements
                .iter()
                .zip(items)
                .all(|(element, item)| walk(element, item, captures))
        }
    }
}

fn apply(predicate: &Predicate, candidate: &Node, captures: &mut Captures) -> bool {
    match predicate.call(candidate) {
        Verdict::Reject => {
            trace!(predicate = predicate.label(), "predicate rejected candidate");
            false
        }
        Verdict::Accept => true,
        Verdict::Capture(found) => {
            captures.merge(found);
            true
        }
    }
}
