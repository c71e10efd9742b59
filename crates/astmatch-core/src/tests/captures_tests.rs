//! Tests for [`Captures`] and [`Verdict`] conversions.

use serde_json::json;

use crate::{Captures, Verdict};

#[test]
fn merge_keeps_the_later_binding() {
    let mut captures = Captures::single("name", json!("first"));
    captures.merge(Captures::single("name", json!("second")));
    assert_eq!(captures.get("name"), Some(&json!("second")));
    assert_eq!(captures.len(), 1);
}

#[test]
fn merge_unions_distinct_names() {
    let mut captures = Captures::single("a", json!(1));
    captures.merge(Captures::single("b", json!(2)));
    let names: Vec<_> = captures.names().collect();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn captures_serialise_as_a_plain_object() {
    let mut captures = Captures::new();
    captures.insert("callee", json!({ "type": "Identifier" }));
    let json = serde_json::to_value(&captures).expect("serialize");
    assert_eq!(json, json!({ "callee": { "type": "Identifier" } }));
}

#[test]
fn captures_convert_into_a_node() {
    let node: crate::Node = Captures::single("x", json!(true)).into();
    assert_eq!(node, json!({ "x": true }));
}

#[test]
fn verdict_conversions() {
    assert_eq!(Verdict::from(true), Verdict::Accept);
    assert_eq!(Verdict::from(false), Verdict::Reject);
    assert_eq!(Verdict::from(None::<Captures>), Verdict::Reject);
    assert_eq!(
        Verdict::from(Some(Captures::new())),
        Verdict::Capture(Captures::new())
    );
}

#[test]
fn empty_capture_verdict_still_matches() {
    let verdict = Verdict::Capture(Captures::new());
    assert!(verdict.is_match());
    assert_eq!(verdict.into_captures(), Some(Captures::new()));
    assert_eq!(Verdict::Accept.into_captures(), Some(Captures::new()));
    assert_eq!(Verdict::Reject.into_captures(), None);
}
