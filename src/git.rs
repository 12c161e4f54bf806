//! Git command runner for markguard.
//!
//! Provides a safe wrapper around git commands with captured stdout/stderr
//! and structured error handling. All git operations should go through this module.

use crate::error::{MarkguardError, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    /// Create a new GitOutput from raw output bytes.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns true if stdout is empty.
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty()
    }
}

/// Run a git command with the specified working directory.
///
/// Stdout is decoded lossily and trimmed, which is right for refs, paths and
/// status listings. Use [`run_git_bytes`] for blob content.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(MarkguardError::GitError)` - On non-zero exit code
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let output = spawn_git(cwd.as_ref(), args)?;
    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(MarkguardError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Run a git command and return raw stdout bytes.
///
/// Blob content must reach the diff engine byte-for-byte: trimming or lossy
/// decoding would shift line numbers. Decoding (and the binary-content
/// fallback) is the caller's concern.
pub fn run_git_bytes<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<Vec<u8>> {
    let output = spawn_git(cwd.as_ref(), args)?;

    if output.status.success() {
        Ok(output.stdout)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        Err(MarkguardError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            stderr
        )))
    }
}

fn spawn_git(cwd: &Path, args: &[&str]) -> Result<Output> {
    Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            MarkguardError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// This works correctly from any location within a git repository,
/// including from within worktrees.
///
/// # Arguments
///
/// * `cwd` - The current working directory to start the search from
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(MarkguardError::UserError)` - If not inside a git repository
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<std::path::PathBuf> {
    let output = run_git_for_repo_detection(cwd.as_ref(), &["rev-parse", "--show-toplevel"])?;
    Ok(std::path::PathBuf::from(&output.stdout))
}

/// Internal helper that returns a UserError instead of GitError for repo detection.
/// "Not in a git repo" is a clean user error, not a git failure.
fn run_git_for_repo_detection<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let output = Command::new("git")
        .current_dir(cwd.as_ref())
        .args(args)
        .output()
        .map_err(|e| {
            MarkguardError::UserError(format!("failed to execute git: {} (is git installed?)", e))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        // Check if this is a "not a git repository" error
        let stderr = &git_output.stderr;
        if stderr.contains("not a git repository") || stderr.contains("fatal:") {
            Err(MarkguardError::UserError(
                "not inside a git repository. Run this command from within a git repository."
                    .to_string(),
            ))
        } else {
            Err(MarkguardError::UserError(format!(
                "git command failed: {}",
                if stderr.is_empty() {
                    &git_output.stdout
                } else {
                    stderr
                }
            )))
        }
    }
}
