//! Implementation of the `markguard check` command.
//!
//! Thin orchestration over the core pipeline: for every staged file whose
//! content changed, diff old against new, attribute the added lines, and
//! scan each one for the debug marker. Diagnostics accumulate across files
//! in discovery order and are printed to stdout, one per line; a clean run
//! prints nothing (hook etiquette).

use crate::changeset::{self, ChangeEntry};
use crate::error::{MarkguardError, Result};
use crate::git::get_repo_root;
use crate::validate::{Diagnostic, MarkerPattern, scan_entry};
use std::path::Path;

/// Execute the `markguard check` command against the enclosing repository.
pub fn cmd_check() -> Result<()> {
    let repo_root = get_repo_root(".")?;
    let diagnostics = run_check(&repo_root)?;

    if diagnostics.is_empty() {
        return Ok(());
    }

    for diagnostic in &diagnostics {
        println!("{}", diagnostic);
    }

    Err(MarkguardError::MarkersFound(format!(
        "{} debug marker(s) detected in staged changes",
        diagnostics.len()
    )))
}

/// Collect diagnostics for every staged file.
///
/// Split out from [`cmd_check`] so tests can drive it against a repository
/// path directly without touching the process working directory.
pub(crate) fn run_check(repo_root: &Path) -> Result<Vec<Diagnostic>> {
    let pattern = MarkerPattern::new()?;
    let entries = changeset::staged_changes(repo_root)?;

    let mut diagnostics = Vec::new();
    for entry in &entries {
        if !should_scan(entry) {
            continue;
        }
        diagnostics.extend(scan_entry(&pattern, entry)?);
    }

    Ok(diagnostics)
}

/// Only entries whose content actually changed are worth diffing. Binary
/// files decode to empty text on both sides and are filtered out here too.
fn should_scan(entry: &ChangeEntry) -> bool {
    entry.old_text != entry.new_text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{create_empty_repo, create_test_repo, git, write_and_stage};

    #[test]
    fn clean_index_yields_no_diagnostics() {
        let temp_dir = create_test_repo();
        let diagnostics = run_check(temp_dir.path()).unwrap();
        assert!(diagnostics.is_empty());
    }

    /// The end-to-end scenario: staging a marker between two kept lines is
    /// reported at its staged position, and restoring the original content
    /// clears the report.
    #[test]
    fn staged_marker_is_reported_then_cleared() {
        let temp_dir = create_test_repo();
        write_and_stage(temp_dir.path(), "file.txt", "a\nb\n");
        git(temp_dir.path(), &["commit", "-m", "Add file"]);

        write_and_stage(temp_dir.path(), "file.txt", "a\n# xxx debug\nb\n");
        let diagnostics = run_check(temp_dir.path()).unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].to_string(),
            "Debug marker detected at file.txt:2"
        );

        write_and_stage(temp_dir.path(), "file.txt", "a\nb\n");
        let diagnostics = run_check(temp_dir.path()).unwrap();
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn diagnostics_accumulate_across_files() {
        let temp_dir = create_test_repo();
        write_and_stage(temp_dir.path(), "alpha.py", "# xxx one\n");
        write_and_stage(temp_dir.path(), "beta.py", "ok\n# XXX two\n");

        let diagnostics = run_check(temp_dir.path()).unwrap();

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].file_path, "alpha.py");
        assert_eq!(diagnostics[0].line_number, 1);
        assert_eq!(diagnostics[1].file_path, "beta.py");
        assert_eq!(diagnostics[1].line_number, 2);
    }

    #[test]
    fn deleting_a_marker_passes() {
        let temp_dir = create_test_repo();
        write_and_stage(temp_dir.path(), "app.py", "a\n# xxx debug\nb\n");
        git(temp_dir.path(), &["commit", "-m", "Add app"]);

        write_and_stage(temp_dir.path(), "app.py", "a\nb\n");

        let diagnostics = run_check(temp_dir.path()).unwrap();
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn deleted_file_with_marker_passes() {
        let temp_dir = create_test_repo();
        write_and_stage(temp_dir.path(), "app.py", "# xxx debug\n");
        git(temp_dir.path(), &["commit", "-m", "Add app"]);

        git(temp_dir.path(), &["rm", "app.py"]);

        let diagnostics = run_check(temp_dir.path()).unwrap();
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn binary_file_passes() {
        let temp_dir = create_test_repo();
        std::fs::write(temp_dir.path().join("blob.bin"), [0u8, 159, 146, 150, 35]).unwrap();
        git(temp_dir.path(), &["add", "blob.bin"]);

        let diagnostics = run_check(temp_dir.path()).unwrap();
        assert!(diagnostics.is_empty());
    }

    /// A repository with no history diffs against the empty tree, so the
    /// very first commit is guarded too.
    #[test]
    fn first_commit_is_guarded() {
        let temp_dir = create_empty_repo();
        write_and_stage(temp_dir.path(), "main.py", "print('hi')\n# xxx remove me\n");

        let diagnostics = run_check(temp_dir.path()).unwrap();

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].to_string(),
            "Debug marker detected at main.py:2"
        );
    }
}
