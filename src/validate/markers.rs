//! Debug-marker detection over added lines.
//!
//! The check is deliberately narrow: a single fixed token, matched
//! case-insensitively as a substring, applied only to lines a commit would
//! *add*. Removing a marker is always allowed; the guard must never block
//! the cleanup commit.

use crate::changeset::ChangeEntry;
use crate::diff::{AddedLine, added_lines, diff_lines};
use crate::error::{MarkguardError, Result};
use regex::Regex;
use std::fmt;

/// The fixed debug-marker pattern: a comment-style `#` prefix followed by
/// the word "xxx", any case, anywhere in the line. Not configurable.
pub const DEBUG_MARKER_PATTERN: &str = r"(?i)# xxx";

/// Compiled marker pattern for matching added lines.
///
/// Compile once per run and reuse across files.
#[derive(Debug)]
pub struct MarkerPattern {
    regex: Regex,
}

impl MarkerPattern {
    /// Compile the fixed debug-marker pattern.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(DEBUG_MARKER_PATTERN).map_err(|e| {
            MarkguardError::UserError(format!(
                "invalid debug marker pattern '{}': {}",
                DEBUG_MARKER_PATTERN, e
            ))
        })?;
        Ok(Self { regex })
    }

    /// Check whether a line contains the debug marker.
    pub fn is_match(&self, content: &str) -> bool {
        self.regex.is_match(content)
    }
}

/// A single debug-marker finding.
///
/// The line number is 1-based and points into the *new* (staged) version of
/// the file, so the developer can jump straight to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Repository-relative file path.
    pub file_path: String,
    /// Line number in the staged file (1-based).
    pub line_number: usize,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Debug marker detected at {}:{}",
            self.file_path, self.line_number
        )
    }
}

/// Scan one attributed added line. Pure predicate: no counters, no state.
pub fn scan_line(pattern: &MarkerPattern, path: &str, line: &AddedLine) -> Option<Diagnostic> {
    if pattern.is_match(&line.content) {
        Some(Diagnostic {
            file_path: path.to_string(),
            line_number: line.line_number,
        })
    } else {
        None
    }
}

/// Run the per-file pipeline for one changeset entry.
pub fn scan_entry(pattern: &MarkerPattern, entry: &ChangeEntry) -> Result<Vec<Diagnostic>> {
    scan_changes(pattern, &entry.path, &entry.old_text, &entry.new_text)
}

/// Diff `old` against `new`, attribute the additions, and scan each one.
///
/// Takes plain text so the whole pipeline can be exercised with synthetic
/// content pairs, independent of any repository.
pub fn scan_changes(
    pattern: &MarkerPattern,
    path: &str,
    old: &str,
    new: &str,
) -> Result<Vec<Diagnostic>> {
    let old_lines: Vec<&str> = old.lines().collect();
    let new_lines: Vec<&str> = new.lines().collect();

    let diff = diff_lines(&old_lines, &new_lines);
    let added = added_lines(&diff)?;

    Ok(added
        .iter()
        .filter_map(|line| scan_line(pattern, path, line))
        .collect())
}
