//! Declarative pattern documents for `astmatch_core`.
//!
//! Patterns can be written as data instead of Rust code. A document is YAML
//! (JSON is accepted as a YAML subset) whose plain values describe the
//! shape to match and whose `$`-prefixed mapping keys are directives that
//! compile to the core predicates:
//!
//! ```yaml
//! type: CallExpression
//! callee:
//!   name: require
//! arguments:
//!   $exact:
//!     - $extract: module
//!       $match:
//!         type: Literal
//! ```
//!
//! Use [`parse_document`] for document text or [`compile`] for an already
//! decoded [`Node`](astmatch_core::Node).

mod compile;
mod error;

pub use compile::compile;
pub use error::DocumentError;

use astmatch_core::{Node, Pattern};

/// Parses document text and compiles it into a [`Pattern`].
///
/// # Errors
///
/// Returns [`DocumentError::Parse`] when the text is not valid YAML, or any
/// error [`compile`] reports for the decoded document.
///
/// # Example
///
/// ```
/// use astmatch_core::is_match;
/// use astmatch_yaml::parse_document;
/// use serde_json::json;
///
/// let pattern = parse_document("arguments:\n  $exact:\n    - $extract: first\n")?;
/// let call = json!({ "arguments": ["a"] });
/// let captures = is_match(&call, &pattern).expect("one argument");
/// assert_eq!(captures.get("first"), Some(&json!("a")));
/// assert!(is_match(&json!({ "arguments": ["a", "b"] }), &pattern).is_none());
/// # Ok::<(), astmatch_yaml::DocumentError>(())
/// ```
pub fn parse_document(text: &str) -> Result<Pattern, DocumentError> {
    let document: Node =
        serde_saphyr::from_str(text).map_err(|error| DocumentError::parse(error.to_string()))?;
    compile(&document)
}

#[cfg(test)]
mod tests;
