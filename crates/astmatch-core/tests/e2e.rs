//! End-to-end tests for `astmatch_core` against realistic syntax trees.
//!
//! The trees follow the ESTree shape produced by JavaScript parsers; the
//! matcher itself knows nothing about it.

use insta::assert_snapshot;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use astmatch_core::{
    Captures, Pattern, as_predicate, extract_field, extract_field_with, find_all, is_match,
    match_length_strict,
};

/// `goog.require('goog.array'); const x = goog.require('goog.object');`
#[fixture]
fn program() -> Value {
    json!({
        "type": "Program",
        "body": [
            {
                "type": "ExpressionStatement",
                "expression": {
                    "type": "CallExpression",
                    "callee": {
                        "type": "MemberExpression",
                        "object": { "type": "Identifier", "name": "goog" },
                        "property": { "type": "Identifier", "name": "require" },
                    },
                    "arguments": [{ "type": "Literal", "value": "goog.array" }],
                },
            },
            {
                "type": "VariableDeclaration",
                "kind": "const",
                "declarations": [{
                    "type": "VariableDeclarator",
                    "id": { "type": "Identifier", "name": "x" },
                    "init": {
                        "type": "CallExpression",
                        "callee": {
                            "type": "MemberExpression",
                            "object": { "type": "Identifier", "name": "goog" },
                            "property": { "type": "Identifier", "name": "require" },
                        },
                        "arguments": [{ "type": "Literal", "value": "goog.object" }],
                    },
                }],
            },
        ],
    })
}

fn member(object: &str, property: &str) -> Pattern {
    Pattern::literal(json!({
        "type": "MemberExpression",
        "object": { "type": "Identifier", "name": object },
        "property": { "type": "Identifier", "name": property },
    }))
}

/// `goog.require(<string literal>)` with exactly one argument.
fn goog_require() -> Pattern {
    Pattern::mapping([
        ("type", Pattern::from("CallExpression")),
        ("callee", member("goog", "require")),
        (
            "arguments",
            match_length_strict([extract_field_with(
                "namespace",
                Pattern::mapping([
                    ("type", Pattern::from("Literal")),
                    (
                        "value",
                        Pattern::predicate(|node| node.as_str().is_some_and(|s| s.starts_with("goog."))),
                    ),
                ]),
            )])
            .into(),
        ),
    ])
}

fn to_json(captures: &Captures) -> String {
    serde_json::to_string(captures).unwrap_or_else(|err| panic!("serialize: {err}"))
}

#[rstest]
fn finds_every_require_call(program: Value) {
    let found = find_all(&program, &goog_require());
    let summary: Vec<_> = found
        .iter()
        .map(|m| format!("{} -> {}", m.path(), to_json(m.captures())))
        .collect();
    assert_snapshot!(
        summary.join("\n"),
        @r#"
    /body/0/expression -> {"namespace":{"type":"Literal","value":"goog.array"}}
    /body/1/declarations/0/init -> {"namespace":{"type":"Literal","value":"goog.object"}}
    "#
    );
}

#[rstest]
fn extracts_the_declared_alias(program: Value) {
    let declarator = Pattern::mapping([
        ("type", Pattern::from("VariableDeclarator")),
        (
            "id",
            extract_field_with("alias", Pattern::literal(json!({ "type": "Identifier" }))).into(),
        ),
        ("init", as_predicate(goog_require()).into()),
    ]);

    let found = find_all(&program, &declarator);
    assert_eq!(found.len(), 1);
    let captures = found
        .first()
        .map(|m| to_json(m.captures()))
        .unwrap_or_default();
    assert_snapshot!(
        captures,
        @r#"{"alias":{"name":"x","type":"Identifier"},"namespace":{"type":"Literal","value":"goog.object"}}"#
    );
}

#[test]
fn extra_arguments_defeat_the_exact_length_rule() {
    let call = json!({
        "type": "CallExpression",
        "callee": {
            "type": "MemberExpression",
            "object": { "type": "Identifier", "name": "goog" },
            "property": { "type": "Identifier", "name": "require" },
        },
        "arguments": [
            { "type": "Literal", "value": "goog.array" },
            { "type": "Literal", "value": "extra" },
        ],
    });
    assert!(is_match(&call, &goog_require()).is_none());
}

#[test]
fn non_goog_namespaces_are_rejected() {
    let call = json!({
        "type": "CallExpression",
        "callee": {
            "type": "MemberExpression",
            "object": { "type": "Identifier", "name": "goog" },
            "property": { "type": "Identifier", "name": "require" },
        },
        "arguments": [{ "type": "Literal", "value": "fs" }],
    });
    assert!(is_match(&call, &goog_require()).is_none());
}
