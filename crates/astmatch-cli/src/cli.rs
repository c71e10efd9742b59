//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::LogFormat;

/// Matches JSON trees against declarative structural patterns.
#[derive(Parser, Debug)]
#[command(name = "astmatch", version, disable_help_subcommand = true)]
pub(crate) struct Cli {
    /// Tracing filter directive, for example `astmatch_core=trace`.
    #[arg(long, global = true, value_name = "FILTER", default_value = "warn")]
    pub(crate) log_filter: String,
    /// Diagnostic log format written to stderr.
    #[arg(long, global = true, value_name = "FORMAT", default_value_t = LogFormat::Compact)]
    pub(crate) log_format: LogFormat,
    /// The operation to perform.
    #[command(subcommand)]
    pub(crate) command: CliCommand,
}

/// Operations offered by the tool.
#[derive(Subcommand, Debug, Clone)]
pub(crate) enum CliCommand {
    /// Matches the whole tree against the pattern and prints the captures,
    /// or `false` when it does not match.
    Match {
        /// Pattern and tree locations.
        #[command(flatten)]
        input: InputArgs,
    },
    /// Searches every subtree for matches and prints each path with its
    /// captures.
    Search {
        /// Pattern and tree locations.
        #[command(flatten)]
        input: InputArgs,
        /// Stops at the first match in pre-order.
        #[arg(long)]
        first: bool,
    },
}

/// Locations of the pattern document and the tree to inspect.
#[derive(Args, Debug, Clone)]
pub(crate) struct InputArgs {
    /// YAML or JSON pattern document.
    #[arg(long, value_name = "FILE")]
    pub(crate) pattern: PathBuf,
    /// JSON tree to inspect; read from stdin when omitted.
    #[arg(long, value_name = "FILE")]
    pub(crate) tree: Option<PathBuf>,
}
