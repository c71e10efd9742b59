//! Structural pattern matching over tree-shaped JSON data.
//!
//! `astmatch_core` answers the question "does this node look like X, and if
//! so, which parts of it should I keep?" without hand-written recursive
//! descent. Trees are plain [`Node`] values (`serde_json::Value`), so any
//! syntax tree that serialises to mappings, sequences and scalars can be
//! matched.
//!
//! # Core types
//!
//! - [`Pattern`]: the shape to look for (literals, mappings, sequences, or a
//!   [`Predicate`] that takes over matching for a subtree)
//! - [`Predicate`] and [`Verdict`]: user-supplied tests that may also
//!   capture values
//! - [`Captures`]: named sub-nodes collected during a successful match
//!
//! # Operations
//!
//! - [`is_match`]: walk a candidate against a pattern
//! - [`as_predicate`]: freeze a pattern into a reusable predicate
//! - [`extract_field`] and [`extract_field_with`]: capture a sub-node by
//!   name, optionally constraining it
//! - [`match_length_strict`]: require an exact sequence length
//! - [`find_all`] and [`find_first`]: search every subtree of a document
//!
//! # Example
//!
//! ```
//! use astmatch_core::{Pattern, extract_field, is_match};
//! use serde_json::json;
//!
//! let call = json!({
//!     "type": "CallExpression",
//!     "callee": { "type": "Identifier", "name": "require" },
//!     "arguments": [{ "type": "Literal", "value": "fs" }],
//! });
//!
//! let pattern = Pattern::mapping([
//!     ("type", Pattern::from("CallExpression")),
//!     ("callee", Pattern::literal(json!({ "name": "require" }))),
//!     ("arguments", Pattern::sequence([extract_field("module")])),
//! ]);
//!
//! let captures = is_match(&call, &pattern).expect("require call should match");
//! assert_eq!(
//!     captures.get("module"),
//!     Some(&json!({ "type": "Literal", "value": "fs" }))
//! );
//! ```

mod captures;
mod extract;
mod length;
mod literal;
mod matcher;
mod pattern;
mod predicate;
mod search;

pub use captures::Captures;
pub use extract::{extract_field, extract_field_with};
pub use length::match_length_strict;
pub use matcher::{MatchResult, as_predicate, is_match};
pub use pattern::Pattern;
pub use predicate::{Predicate, Verdict};
pub use search::{Found, find_all, find_first};

/// A value under structural test.
///
/// Scalars, ordered sequences and keyed mappings are all represented by
/// `serde_json::Value`; the matcher never mutates them.
pub type Node = serde_json::Value;

#[cfg(test)]
mod tests;
