//! Implementation of the `markguard install` command.
//!
//! Writes a `pre-commit` hook script into the repository's hooks directory
//! so that `markguard check` runs on every commit. Refuses to clobber an
//! existing hook unless `--force` is given.

use crate::cli::InstallArgs;
use crate::error::{MarkguardError, Result};
use crate::git::{get_repo_root, run_git};
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of the installed hook script.
const HOOK_SCRIPT: &str = "#!/bin/sh\nexec markguard check\n";

/// Execute the `markguard install` command.
pub fn cmd_install(args: InstallArgs) -> Result<()> {
    let repo_root = get_repo_root(".")?;
    let hook_path = run_install(&repo_root, args.force)?;

    println!("Installed pre-commit hook: {}", hook_path.display());
    println!();
    println!("Staged changes will now be checked for debug markers on every commit.");

    Ok(())
}

/// Install the hook for the repository at `repo_root`; returns the hook path.
pub(crate) fn run_install(repo_root: &Path, force: bool) -> Result<PathBuf> {
    let hook_path = pre_commit_hook_path(repo_root)?;

    if hook_path.exists() && !force {
        return Err(MarkguardError::UserError(format!(
            "a pre-commit hook already exists at {}.\n\
             Re-run with --force to overwrite it.",
            hook_path.display()
        )));
    }

    write_hook(&hook_path)?;
    Ok(hook_path)
}

/// Resolve the hook location through git so worktrees, relocated git dirs,
/// and `core.hooksPath` are all handled.
fn pre_commit_hook_path(repo_root: &Path) -> Result<PathBuf> {
    let output = run_git(repo_root, &["rev-parse", "--git-path", "hooks"])?;
    let hooks_dir = PathBuf::from(&output.stdout);
    // --git-path output is relative to the directory the command ran in.
    let hooks_dir = if hooks_dir.is_absolute() {
        hooks_dir
    } else {
        repo_root.join(hooks_dir)
    };
    Ok(hooks_dir.join("pre-commit"))
}

fn write_hook(hook_path: &Path) -> Result<()> {
    if let Some(parent) = hook_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            MarkguardError::UserError(format!(
                "failed to create hooks directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    fs::write(hook_path, HOOK_SCRIPT).map_err(|e| {
        MarkguardError::UserError(format!(
            "failed to write hook '{}': {}",
            hook_path.display(),
            e
        ))
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(hook_path, fs::Permissions::from_mode(0o755)).map_err(|e| {
            MarkguardError::UserError(format!(
                "failed to mark hook '{}' executable: {}",
                hook_path.display(),
                e
            ))
        })?;
    }

    Ok(())
}
