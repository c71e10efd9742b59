//! The `--log-format` option.

use strum::{Display, EnumString};

/// How diagnostics on stderr are rendered.
///
/// Parsed case-insensitively, so `--log-format JSON` works.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One JSON object per event, fields flattened to the top level.
    Json,
    /// Terse human-readable lines.
    #[default]
    Compact,
}
