//! Exact-arity sequence matching.

use tracing::trace;

use crate::{Node, Pattern, Predicate, Verdict, as_predicate};

/// Returns a predicate that requires a sequence of exactly `items.len()`
/// elements before matching them index-by-index.
///
/// Plain sequence patterns accept longer candidates; this variant is for
/// rules that need "exactly these arguments, no more, no fewer". Candidates
/// that are not sequences never match.
///
/// # Example
///
/// ```
/// use astmatch_core::{Pattern, is_match, match_length_strict};
/// use serde_json::json;
///
/// let prefix = Pattern::sequence([1_i64]);
/// let exact = Pattern::from(match_length_strict([1_i64]));
///
/// assert!(is_match(&json!([1, 2]), &prefix).is_some());
/// assert!(is_match(&json!([1, 2]), &exact).is_none());
/// assert!(is_match(&json!([1]), &exact).is_some());
/// ```
pub fn match_length_strict<I, P>(items: I) -> Predicate
where
    I: IntoIterator<Item = P>,
    P: Into<Pattern>,
{
    let patterns: Vec<Pattern> = items.into_iter().map(Into::into).collect();
    let expected = patterns.len();
    let elements = as_predicate(Pattern::Sequence(patterns));
    Predicate::new(move |candidate: &Node| match candidate.as_array() {
        Some(actual) if actual.len() == expected => elements.call(candidate),
        Some(actual) => {
            trace!(expected, actual = actual.len(), "sequence length mismatch");
            Verdict::Reject
        }
        None => {
            trace!("exact-length pattern applied to a non-sequence");
            Verdict::Reject
        }
    })
    .with_label(format!("match_length_strict({expected})"))
}
