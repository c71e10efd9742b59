//! Execution of the `match` and `search` subcommands.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use std::process::ExitCode;

use astmatch_core::{Found, Node, Pattern, find_all, find_first, is_match};
use astmatch_yaml::parse_document;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::cli::{CliCommand, InputArgs};
use crate::errors::AppError;

/// Exit status reported when nothing matched.
pub(crate) const EXIT_NO_MATCH: u8 = 1;

/// Whether a command found what it was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Matched,
    NoMatch,
}

impl Outcome {
    const fn from_found(found: bool) -> Self {
        if found { Self::Matched } else { Self::NoMatch }
    }

    pub(crate) fn exit_code(self) -> ExitCode {
        match self {
            Self::Matched => ExitCode::SUCCESS,
            Self::NoMatch => ExitCode::from(EXIT_NO_MATCH),
        }
    }
}

pub(crate) fn execute<R, W>(command: CliCommand, stdin: &mut R, stdout: &mut W) -> Result<Outcome, AppError>
where
    R: Read,
    W: Write,
{
    match command {
        CliCommand::Match { input } => {
            let (pattern, tree) = load_inputs(&input, stdin)?;
            let result = is_match(&tree, &pattern);
            info!(matched = result.is_some(), "match finished");
            let outcome = Outcome::from_found(result.is_some());
            let rendered = result.map_or(Value::Bool(false), Node::from);
            emit(stdout, &rendered)?;
            Ok(outcome)
        }
        CliCommand::Search { input, first } => {
            let (pattern, tree) = load_inputs(&input, stdin)?;
            let found: Vec<Found> = if first {
                find_first(&tree, &pattern).into_iter().collect()
            } else {
                find_all(&tree, &pattern)
            };
            info!(matches = found.len(), first, "search finished");
            emit(stdout, &found)?;
            Ok(Outcome::from_found(!found.is_empty()))
        }
    }
}

fn load_inputs<R: Read>(input: &InputArgs, stdin: &mut R) -> Result<(Pattern, Node), AppError> {
    let pattern = load_pattern(&input.pattern)?;
    let tree = load_tree(input.tree.as_deref(), stdin)?;
    Ok((pattern, tree))
}

fn load_pattern(path: &Path) -> Result<Pattern, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::ReadPattern {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read pattern document");
    parse_document(&text).map_err(|source| AppError::Document {
        path: path.to_path_buf(),
        source,
    })
}

fn load_tree<R: Read>(path: Option<&Path>, stdin: &mut R) -> Result<Node, AppError> {
    let origin = path.map_or_else(|| String::from("stdin"), |file| file.display().to_string());
    let read = path.map_or_else(
        || {
            let mut buffer = String::new();
            stdin.read_to_string(&mut buffer).map(|_| buffer)
        },
        fs::read_to_string,
    );
    let text = read.map_err(|source| AppError::ReadTree {
        origin: origin.clone(),
        source,
    })?;
    debug!(%origin, bytes = text.len(), "read tree");
    serde_json::from_str(&text).map_err(|source| AppError::ParseTree { origin, source })
}

fn emit<W, T>(stdout: &mut W, value: &T) -> Result<(), AppError>
where
    W: Write,
    T: Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut *stdout, value).map_err(AppError::SerialiseOutput)?;
    stdout.write_all(b"\n").map_err(AppError::WriteOutput)?;
    stdout.flush().map_err(AppError::WriteOutput)
}
