//! Error types for the command-line runtime.

use std::io;
use std::path::PathBuf;

use astmatch_yaml::DocumentError;
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("failed to read pattern document {}: {source}", path.display())]
    ReadPattern { path: PathBuf, source: io::Error },
    #[error("failed to read tree from {origin}: {source}")]
    ReadTree { origin: String, source: io::Error },
    #[error("failed to parse tree from {origin} as JSON: {source}")]
    ParseTree {
        origin: String,
        source: serde_json::Error,
    },
    #[error("invalid pattern document {}: {source}", path.display())]
    Document {
        path: PathBuf,
        source: DocumentError,
    },
    #[error("failed to serialise result: {0}")]
    SerialiseOutput(serde_json::Error),
    #[error("failed to write result: {0}")]
    WriteOutput(io::Error),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
}
