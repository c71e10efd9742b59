//! Tests for [`match_length_strict`].

use rstest::rstest;
use serde_json::{Value, json};

use crate::{Captures, Pattern, extract_field, is_match, match_length_strict};

#[rstest]
#[case(json!([1]), true)]
#[case(json!([1, 2]), false)]
#[case(json!([]), false)]
#[case(json!([2]), false)]
fn exact_arity_is_required(#[case] candidate: Value, #[case] expected: bool) {
    let pattern = Pattern::from(match_length_strict([1_i64]));
    assert_eq!(is_match(&candidate, &pattern).is_some(), expected);
}

#[test]
fn longer_sequence_fails_even_when_the_prefix_matches() {
    let candidate = json!([1, 2]);
    assert!(is_match(&candidate, &Pattern::sequence([1_i64])).is_some());
    assert!(is_match(&candidate, &match_length_strict([1_i64]).into()).is_none());
}

#[rstest]
#[case(json!({ "length": 1 }))]
#[case(json!("a"))]
#[case(json!(null))]
#[case(json!(1))]
fn non_sequences_never_match(#[case] candidate: Value) {
    assert!(match_length_strict([Pattern::predicate(|_| true)]).matches(&candidate).is_none());
}

#[test]
fn empty_pattern_matches_only_empty_sequences() {
    let predicate = match_length_strict(Vec::<Pattern>::new());
    assert_eq!(predicate.matches(&json!([])), Some(Captures::new()));
    assert!(predicate.matches(&json!([0])).is_none());
}

#[test]
fn element_captures_are_returned() {
    let arguments = Pattern::mapping([(
        "arguments",
        match_length_strict([extract_field("first"), extract_field("second")]),
    )]);
    let call = json!({ "arguments": ["a", "b"] });

    let captures = is_match(&call, &arguments).expect("two arguments");
    assert_eq!(captures.get("first"), Some(&json!("a")));
    assert_eq!(captures.get("second"), Some(&json!("b")));

    assert!(is_match(&json!({ "arguments": ["a", "b", "c"] }), &arguments).is_none());
}
