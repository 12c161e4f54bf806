//! Markguard: pre-commit guard that rejects staged changes containing debug markers.
//!
//! This is the main entry point for the `markguard` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes. Diagnostics (the reason a commit is rejected) are the
//! primary output and go to stdout; everything else goes to stderr.

mod cli;
mod commands;
pub mod changeset;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_support;

use cli::{Cli, Command};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Git invokes the pre-commit hook with no arguments, so a bare
    // `markguard` runs the check.
    let command = cli.command.unwrap_or(Command::Check);

    match commands::dispatch(command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
