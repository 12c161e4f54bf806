//! Staged changeset retrieval for markguard.
//!
//! Builds the list of files whose staged content differs from the committed
//! baseline, supplying each file's old and new text to the scanning pipeline.
//! The baseline is `HEAD`, or the well-known empty tree for a repository with
//! no history yet (the very first commit).
//!
//! The core never talks to git: it receives plain [`ChangeEntry`] values and
//! can be exercised with synthetic text pairs.

use crate::error::{MarkguardError, Result};
use crate::git::{run_git, run_git_bytes};
use std::path::Path;

/// Object id of the empty tree, the diff baseline for an unborn branch.
pub const EMPTY_TREE_OID: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

/// One changed file: its display path and both content versions.
///
/// A newly added file has empty `old_text`. Deleted files never become
/// entries, and binary content on either side decodes to the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntry {
    /// Repository-relative file path (the new-side path for renames).
    pub path: String,
    /// Content at the baseline, or empty for an added file.
    pub old_text: String,
    /// Staged content.
    pub new_text: String,
}

/// Resolve the commit the staged index is compared against.
///
/// Falls back to the empty tree when `HEAD` cannot be resolved (no commits
/// yet). The fallback is a deliberate recovery, never an error.
pub fn baseline_ref<P: AsRef<Path>>(cwd: P) -> String {
    match run_git(&cwd, &["rev-parse", "--verify", "HEAD"]) {
        Ok(output) => output.stdout,
        Err(_) => EMPTY_TREE_OID.to_string(),
    }
}

/// Collect the staged changeset of the repository at `cwd`.
///
/// Runs `git diff --cached --name-status -z {baseline}` (NUL-separated so
/// paths with unusual characters survive) and reads both blob versions for
/// every surviving entry:
///
/// * `D*` (deleted) entries are skipped entirely.
/// * `A*` (added) entries get empty old text.
/// * `R*`/`C*` (renamed/copied) entries read old text from the baseline's
///   old path and report the new path.
/// * Content that is not valid UTF-8 decodes to the empty string.
pub fn staged_changes<P: AsRef<Path>>(cwd: P) -> Result<Vec<ChangeEntry>> {
    let cwd = cwd.as_ref();
    let baseline = baseline_ref(cwd);
    let output = run_git(cwd, &["diff", "--cached", "--name-status", "-z", &baseline])?;

    if output.is_empty() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    let mut tokens = output.stdout.split('\0').filter(|t| !t.is_empty());

    while let Some(status) = tokens.next() {
        match status.chars().next() {
            Some('D') => {
                // File was deleted; nothing is being added.
                next_path(&mut tokens, status)?;
            }
            Some('A') => {
                let path = next_path(&mut tokens, status)?;
                let new_text = read_staged_blob(cwd, &path)?;
                entries.push(ChangeEntry {
                    path,
                    old_text: String::new(),
                    new_text,
                });
            }
            Some('R') | Some('C') => {
                let old_path = next_path(&mut tokens, status)?;
                let new_path = next_path(&mut tokens, status)?;
                let old_text = read_tree_blob(cwd, &baseline, &old_path)?;
                let new_text = read_staged_blob(cwd, &new_path)?;
                entries.push(ChangeEntry {
                    path: new_path,
                    old_text,
                    new_text,
                });
            }
            Some(_) => {
                let path = next_path(&mut tokens, status)?;
                let old_text = read_tree_blob(cwd, &baseline, &path)?;
                let new_text = read_staged_blob(cwd, &path)?;
                entries.push(ChangeEntry {
                    path,
                    old_text,
                    new_text,
                });
            }
            None => {}
        }
    }

    Ok(entries)
}

fn next_path<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    status: &str,
) -> Result<String> {
    tokens.next().map(str::to_string).ok_or_else(|| {
        MarkguardError::GitError(format!(
            "truncated --name-status output: status '{}' without a path",
            status
        ))
    })
}

/// Read a blob from a committed tree, degrading binary content to "".
fn read_tree_blob(cwd: &Path, rev: &str, path: &str) -> Result<String> {
    let spec = format!("{}:{}", rev, path);
    let bytes = run_git_bytes(cwd, &["show", &spec])?;
    Ok(decode_text(bytes))
}

/// Read a blob from the staged index (stage 0), degrading binary content to "".
fn read_staged_blob(cwd: &Path, path: &str) -> Result<String> {
    let spec = format!(":0:{}", path);
    let bytes = run_git_bytes(cwd, &["show", &spec])?;
    Ok(decode_text(bytes))
}

/// Decode blob bytes as UTF-8; anything else is treated as a non-text file
/// and becomes empty text rather than an error.
fn decode_text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_default()
}
