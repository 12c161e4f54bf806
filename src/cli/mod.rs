//! CLI argument parsing for markguard.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};

/// Markguard: pre-commit guard that rejects staged changes containing debug markers.
///
/// The guard diffs the staged index against the last commit (or the empty
/// tree for a repository with no history yet) and fails when any newly added
/// line contains the debug marker `# xxx` (case-insensitive).
#[derive(Parser, Debug)]
#[command(name = "markguard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    // Optional so a bare `markguard` (how git invokes hooks) runs `check`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands for markguard.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check the staged changes for debug markers.
    ///
    /// Prints one diagnostic per offending added line and exits non-zero
    /// when any are found. This is the default command.
    Check,

    /// Install markguard as this repository's pre-commit hook.
    ///
    /// Writes an executable hook script that runs `markguard check`.
    Install(InstallArgs),
}

/// Arguments for the `install` command.
#[derive(Parser, Debug)]
pub struct InstallArgs {
    /// Overwrite an existing pre-commit hook.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_subcommand() {
        let cli = Cli::try_parse_from(["markguard"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_check() {
        let cli = Cli::try_parse_from(["markguard", "check"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Check)));
    }

    #[test]
    fn parse_install() {
        let cli = Cli::try_parse_from(["markguard", "install"]).unwrap();
        if let Some(Command::Install(args)) = cli.command {
            assert!(!args.force);
        } else {
            panic!("Expected Install command");
        }
    }

    #[test]
    fn parse_install_force() {
        let cli = Cli::try_parse_from(["markguard", "install", "--force"]).unwrap();
        if let Some(Command::Install(args)) = cli.command {
            assert!(args.force);
        } else {
            panic!("Expected Install command");
        }
    }

    #[test]
    fn check_takes_no_arguments() {
        let result = Cli::try_parse_from(["markguard", "check", "extra"]);
        assert!(result.is_err());
    }
}
