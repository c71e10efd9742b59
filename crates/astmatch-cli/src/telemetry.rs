//! Diagnostic logging for `astmatch` runs.
//!
//! Match results go to stdout, so every log line is written to stderr.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;

use crate::LogFormat;

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Errors raised while setting up diagnostic logging.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// `--log-filter` is not a valid filter directive.
    #[error("invalid log filter `{filter}`: {message}")]
    Filter {
        /// The rejected directive.
        filter: String,
        /// Why it was rejected.
        message: String,
    },
    /// Another global subscriber was installed first.
    #[error("failed to install log subscriber: {0}")]
    Install(String),
}

/// Routes `tracing` events to stderr using `filter` and `format`.
///
/// Only the first call in a process installs anything; later calls return
/// `Ok(())` and keep the existing settings.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] for an unparsable `filter` and
/// [`TelemetryError::Install`] when a global subscriber already exists.
pub fn initialise(filter: &str, format: LogFormat) -> Result<(), TelemetryError> {
    INSTALLED
        .get_or_try_init(|| install(filter, format))
        .map(|_| ())
}

fn install(filter: &str, format: LogFormat) -> Result<(), TelemetryError> {
    let directives = EnvFilter::try_new(filter).map_err(|error| TelemetryError::Filter {
        filter: filter.to_owned(),
        message: error.to_string(),
    })?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(directives)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_timer(UtcTime::rfc_3339());

    match format {
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    }
    .map_err(|error| TelemetryError::Install(error.to_string()))
}
