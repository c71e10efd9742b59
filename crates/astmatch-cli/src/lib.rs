//! Command-line runtime for `astmatch`.
//!
//! The binary matches a JSON tree against a YAML or JSON pattern document
//! (see `astmatch_yaml`) and prints the result as JSON on stdout:
//!
//! - `astmatch match --pattern FILE [--tree FILE]` prints the captures of a
//!   whole-tree match, or `false`;
//! - `astmatch search --pattern FILE [--tree FILE] [--first]` prints every
//!   matching subtree as `{ "path": ..., "captures": ... }`.
//!
//! The tree is read from stdin when `--tree` is omitted. The process exits
//! with 0 when something matched, 1 when nothing did and 2 on any error.
//! The runtime is exposed through [`run`] so tests can substitute the
//! standard streams.

use std::ffi::OsString;
use std::io::{Read, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

mod cli;
mod command;
mod errors;
mod logging;
pub mod telemetry;

use cli::Cli;
use errors::AppError;
pub use logging::LogFormat;

/// Exit status reported for usage, input and output errors.
pub const EXIT_ERROR: u8 = 2;

/// Runs the CLI using the provided arguments and IO handles.
///
/// Help and version requests are written to `stdout` and succeed. Errors
/// are written to `stderr` once and exit with [`EXIT_ERROR`].
#[must_use]
pub fn run<I, R, W, E>(args: I, stdin: &mut R, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) if !error.use_stderr() => {
            return match write!(stdout, "{error}") {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::from(EXIT_ERROR),
            };
        }
        Err(error) => return report(stderr, &AppError::CliUsage(error)),
    };

    match execute(cli, stdin, stdout) {
        Ok(outcome) => outcome.exit_code(),
        Err(error) => report(stderr, &error),
    }
}

fn execute<R, W>(cli: Cli, stdin: &mut R, stdout: &mut W) -> Result<command::Outcome, AppError>
where
    R: Read,
    W: Write,
{
    telemetry::initialise(&cli.log_filter, cli.log_format)?;
    debug!(command = ?cli.command, "running command");
    command::execute(cli.command, stdin, stdout)
}

fn report<E: Write>(stderr: &mut E, error: &AppError) -> ExitCode {
    if let Err(write_error) = writeln!(stderr, "{error}") {
        debug!(%write_error, "failed to report error");
    }
    ExitCode::from(EXIT_ERROR)
}

#[cfg(test)]
mod tests;
