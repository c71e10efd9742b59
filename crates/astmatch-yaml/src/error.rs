//! Error types for pattern document decoding.

use thiserror::Error;

/// Errors raised while turning a pattern document into a [`Pattern`].
///
/// Every variant that refers to a location carries the JSON Pointer of the
/// offending mapping within the document; the document root is the empty
/// pointer.
///
/// [`Pattern`]: astmatch_core::Pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// The document text is not valid YAML or JSON.
    #[error("failed to parse pattern document: {message}")]
    Parse {
        /// Description of the syntax failure.
        message: String,
    },

    /// A `$`-prefixed key is not a known directive.
    #[error("unknown directive `{directive}` at {}", display_pointer(path))]
    UnknownDirective {
        /// Pointer to the mapping holding the directive.
        path: String,
        /// The unrecognised key.
        directive: String,
    },

    /// A mapping mixes directives with plain keys.
    #[error(
        "directive mapping at {} also contains plain key `{key}`; escape literal keys with `$literal`",
        display_pointer(path)
    )]
    MixedDirective {
        /// Pointer to the mapping.
        path: String,
        /// The first plain key found.
        key: String,
    },

    /// A directive was given a value of the wrong shape or combination.
    #[error("invalid directive at {}: {message}", display_pointer(path))]
    InvalidDirective {
        /// Pointer to the mapping holding the directive.
        path: String,
        /// Description of what was expected.
        message: String,
    },
}

impl DocumentError {
    /// Creates a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Creates an unknown directive error.
    #[must_use]
    pub fn unknown_directive(path: impl Into<String>, directive: impl Into<String>) -> Self {
        Self::UnknownDirective {
            path: path.into(),
            directive: directive.into(),
        }
    }

    /// Creates a mixed directive error.
    #[must_use]
    pub fn mixed_directive(path: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MixedDirective {
            path: path.into(),
            key: key.into(),
        }
    }

    /// Creates an invalid directive error.
    #[must_use]
    pub fn invalid_directive(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDirective {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns the JSON Pointer the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Parse { .. } => None,
            Self::UnknownDirective { path, .. }
            | Self::MixedDirective { path, .. }
            | Self::InvalidDirective { path, .. } => Some(path),
        }
    }
}

fn display_pointer(path: &str) -> String {
    if path.is_empty() {
        String::from("document root")
    } else {
        format!("`{path}`")
    }
}
