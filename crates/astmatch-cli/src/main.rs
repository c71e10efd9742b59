//! Entry point for the `astmatch` binary.
//!
//! Delegates to [`astmatch_cli::run`] with the process arguments and the
//! locked standard streams.

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    astmatch_cli::run(std::env::args_os(), &mut stdin, &mut stdout, &mut stderr)
}
