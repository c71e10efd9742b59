//! Searching every subtree of a document for pattern matches.
//!
//! Traversal is pre-order: a node is tried before its children, mapping
//! children in key order and sequence children in index order. Each node is
//! matched with a fresh capture accumulator.

use std::ops::ControlFlow;

use serde::Serialize;
use tracing::debug;

use crate::{Captures, Node, Pattern, is_match};

/// A subtree that matched during a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Found {
    path: String,
    captures: Captures,
}

impl Found {
    /// Returns the JSON Pointer (RFC 6901) of the matching node.
    ///
    /// The document root is the empty string.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the captures produced by the match.
    #[must_use]
    pub const fn captures(&self) -> &Captures {
        &self.captures
    }

    /// Consumes the match, returning its captures.
    #[must_use]
    pub fn into_captures(self) -> Captures {
        self.captures
    }
}

/// Returns every subtree of `root` matching `pattern`, in pre-order.
///
/// # Example
///
/// ```
/// use astmatch_core::{Pattern, extract_field, find_all};
/// use serde_json::json;
///
/// let program = json!({
///     "body": [
///         { "type": "Identifier", "name": "a" },
///         { "type": "Identifier", "name": "b" },
///     ],
/// });
/// let pattern = Pattern::mapping([
///     ("type", Pattern::from("Identifier")),
///     ("name", extract_field("name").into()),
/// ]);
///
/// let found = find_all(&program, &pattern);
/// let paths: Vec<_> = found.iter().map(|m| m.path()).collect();
/// assert_eq!(paths, ["/body/0", "/body/1"]);
/// ```
#[must_use]
pub fn find_all(root: &Node, pattern: &Pattern) -> Vec<Found> {
    let mut results = Vec::new();
    let flow = visit(root, &mut String::new(), pattern, &mut |found| {
        results.push(found);
        ControlFlow::<Found>::Continue(())
    });
    debug_assert!(flow.is_continue());
    debug!(matches = results.len(), "subtree search finished");
    results
}

/// Returns the first subtree of `root` matching `pattern`, in pre-order.
#[must_use]
pub fn find_first(root: &Node, pattern: &Pattern) -> Option<Found> {
    visit(root, &mut String::new(), pattern, &mut |found| {
        ControlFlow::Break(found)
    })
    .break_value()
}

fn visit<B, F>(node: &Node, path: &mut String, pattern: &Pattern, on_match: &mut F) -> ControlFlow<B>
where
    F: FnMut(Found) -> ControlFlow<B>,
{
    if let Some(captures) = is_match(node, pattern) {
        on_match(Found {
            path: path.clone(),
            captures,
        })?;
    }

    match node {
        Node::Object(fields) => {
            for (key, child) in fields {
                let parent_len = path.len();
                push_token(path, key);
                visit(child, path, pattern, on_match)?;
                path.truncate(parent_len);
            }
        }
        Node::Array(elements) => {
            for (index, child) in elements.iter().enumerate() {
                let parent_len = path.len();
                push_token(path, &index.to_string());
                visit(child, path, pattern, on_match)?;
                path.truncate(parent_len);
            }
        }
        _ => {}
    }

    ControlFlow::Continue(())
}

fn push_token(path: &mut String, token: &str) {
    path.push('/');
    path.push_str(&token.replace('~', "~0").replace('/', "~1"));
}
