//! Tests for [`extract_field`] and [`extract_field_with`].

use rstest::rstest;
use serde_json::{Value, json};

use crate::{
    Captures, Pattern, Predicate, Verdict, as_predicate, extract_field, extract_field_with,
    is_match,
};

fn positive_value() -> Pattern {
    Pattern::predicate(|node| {
        node.get("value")
            .and_then(Value::as_i64)
            .is_some_and(|value| value > 0)
    })
}

#[rstest]
#[case(json!(null))]
#[case(json!(42))]
#[case(json!("text"))]
#[case(json!([1, [2, 3]]))]
#[case(json!({ "type": "Program", "body": [] }))]
fn bare_extraction_captures_exactly_the_candidate(#[case] candidate: Value) {
    let result = is_match(&candidate, &extract_field("node").into());
    assert_eq!(result, Some(Captures::single("node", candidate)));
}

#[test]
fn failing_nested_predicate_rejects() {
    let predicate = extract_field_with("arg", positive_value());
    assert_eq!(predicate.call(&json!({ "value": -1 })), Verdict::Reject);
}

#[test]
fn passing_nested_predicate_captures_the_candidate() {
    let predicate = extract_field_with("arg", positive_value());
    assert_eq!(
        predicate.matches(&json!({ "value": 3 })),
        Some(Captures::single("arg", json!({ "value": 3 })))
    );
}

#[test]
fn structural_matcher_is_adapted_automatically() {
    let predicate = extract_field_with("callee", json!({ "type": "Identifier" }));
    let identifier = json!({ "type": "Identifier", "name": "require" });

    assert_eq!(
        predicate.matches(&identifier),
        Some(Captures::single("callee", identifier.clone()))
    );
    assert_eq!(predicate.matches(&json!({ "type": "MemberExpression" })), None);
}

#[test]
fn nested_captures_are_merged() {
    let predicate = extract_field_with(
        "call",
        Pattern::mapping([
            ("callee", extract_field("callee")),
            ("arguments", extract_field("args")),
        ]),
    );
    let call = json!({ "callee": "f", "arguments": [1, 2] });

    let captures = predicate.matches(&call).expect("match");
    assert_eq!(captures.get("call"), Some(&call));
    assert_eq!(captures.get("callee"), Some(&json!("f")));
    assert_eq!(captures.get("args"), Some(&json!([1, 2])));
}

#[test]
fn nested_capture_reusing_the_name_wins() {
    let predicate = extract_field_with(
        "node",
        Pattern::mapping([("name", extract_field("node"))]),
    );
    let captures = predicate
        .matches(&json!({ "name": "inner" }))
        .expect("match");
    assert_eq!(captures.get("node"), Some(&json!("inner")));
    assert_eq!(captures.len(), 1);
}

#[test]
fn truthy_nested_result_keeps_only_the_named_binding() {
    let predicate = extract_field_with("flag", Predicate::new(|_| Verdict::Accept));
    assert_eq!(
        predicate.matches(&json!(true)),
        Some(Captures::single("flag", json!(true)))
    );
}

#[test]
fn empty_nested_captures_still_succeed() {
    let predicate = extract_field_with("value", as_predicate(json!({})));
    assert_eq!(
        predicate.matches(&json!({ "x": 1 })),
        Some(Captures::single("value", json!({ "x": 1 })))
    );
}

#[rstest]
#[case(extract_field("callee"), "extract_field(callee)")]
#[case(extract_field_with("callee", json!({ "type": "Identifier" })), "extract_field_with(callee)")]
#[case(extract_field_with("arg", positive_value()), "extract_field_with(arg)")]
fn labels_distinguish_bare_and_constrained_extraction(
    #[case] predicate: Predicate,
    #[case] expected: &str,
) {
    assert_eq!(predicate.label(), expected);
    assert_eq!(format!("{predicate:?}"), format!("Predicate({expected:?})"));
}
