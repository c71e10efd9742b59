//! Deep partial comparison for literal pattern positions.

use std::cmp::Ordering;

use serde_json::Number;

use crate::Node;

/// Returns true when `candidate` contains the shape of `literal`.
///
/// Mappings are subset checks, sequences are prefix checks, and scalars
/// compare by value with numbers compared numerically.
pub(crate) fn contains(candidate: &Node, literal: &Node) -> bool {
    match (candidate, literal) {
        (Node::Object(fields), Node::Object(expected)) => expected.iter().all(|(key, value)| {
            fields
                .get(key)
                .is_some_and(|field| contains(field, value))
        }),
        (Node::Array(elements), Node::Array(expected)) => {
            elements.len() >= expected.len()
                && elements
                    .iter()
                    .zip(expected)
                    .all(|(element, value)| contains(element, value))
        }
        (Node::Number(left), Node::Number(right)) => numbers_equal(left, right),
        _ => candidate == literal,
    }
}

fn numbers_equal(left: &Number, right: &Number) -> bool {
    if let (Some(a), Some(b)) = (left.as_i64(), right.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (left.as_u64(), right.as_u64()) {
        return a == b;
    }
    match (left.as_f64(), right.as_f64()) {
        (Some(a), Some(b)) => a.partial_cmp(&b) == Some(Ordering::Equal),
        _ => false,
    }
}
