//! Command implementations for markguard.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod install;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check => check::cmd_check(),
        Command::Install(args) => install::cmd_install(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarkguardError;
    use crate::exit_codes;
    use crate::test_support::{DirGuard, create_test_repo, write_and_stage};
    use serial_test::serial;

    #[test]
    #[serial]
    fn dispatch_check_passes_on_clean_index() {
        let temp_dir = create_test_repo();
        let _guard = DirGuard::new(temp_dir.path());

        let result = dispatch(Command::Check);
        assert!(result.is_ok());
    }

    #[test]
    #[serial]
    fn dispatch_check_fails_on_staged_marker() {
        let temp_dir = create_test_repo();
        write_and_stage(temp_dir.path(), "app.py", "# xxx wip\n");
        let _guard = DirGuard::new(temp_dir.path());

        let result = dispatch(Command::Check);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, MarkguardError::MarkersFound(_)));
        assert_eq!(err.exit_code(), exit_codes::MARKERS_FOUND);
    }

    #[test]
    #[serial]
    fn dispatch_check_outside_repo_is_a_user_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path());

        let result = dispatch(Command::Check);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().exit_code(), exit_codes::USER_ERROR);
    }
}
