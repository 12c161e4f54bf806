//! Line attribution: map each added diff line to its 1-based position in the
//! new version of the file.

use crate::error::{MarkguardError, Result};

use super::engine::DiffLine;

/// A single added line with its position in the new file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedLine {
    /// Line number in the new file (1-based).
    pub line_number: usize,
    /// The content of the added line (without leading '+').
    pub content: String,
}

/// Extract every addition from a diff, paired with its new-file line number.
///
/// The running counter is owned by this invocation: each file's attribution
/// starts fresh and state never leaks across files. Every hunk header resets
/// the counter to the hunk's new-file start; each recorded addition (and any
/// context line) advances it by one; deletions leave it untouched.
///
/// # Errors
///
/// * `MarkguardError::MalformedHunkHeader` - a hunk header does not match the
///   expected shape. The engine never produces such output, so this is an
///   internal-consistency failure.
pub fn added_lines(diff: &[DiffLine]) -> Result<Vec<AddedLine>> {
    let mut result = Vec::new();
    // Always overwritten before first use: every non-empty diff opens with a
    // hunk header.
    let mut next_line: usize = 1;

    for line in diff {
        match line {
            DiffLine::HunkHeader(raw) => {
                next_line = parse_hunk_header(raw)?;
            }
            DiffLine::Addition(raw) => {
                // The engine's own `+++` file header starts with '+' but is
                // not content.
                if raw.trim() == "+++" {
                    continue;
                }
                result.push(AddedLine {
                    line_number: next_line,
                    content: raw.strip_prefix('+').unwrap_or(raw).to_string(),
                });
                next_line += 1;
            }
            DiffLine::Context(_) => {
                next_line += 1;
            }
            DiffLine::Deletion(_) => {}
        }
    }

    Ok(result)
}

/// Parse a hunk header and return the starting line number in the new file.
///
/// Accepted shape: exactly four space-separated tokens whose third token is
/// `+<start>` or `+<start>,<count>`, e.g. `@@ -14,0 +20,3 @@` -> 20.
pub(super) fn parse_hunk_header(raw: &str) -> Result<usize> {
    let tokens: Vec<&str> = raw.split(' ').collect();
    if tokens.len() != 4 {
        return Err(malformed(raw));
    }

    let new_range = tokens[2].strip_prefix('+').ok_or_else(|| malformed(raw))?;
    let (start, count) = match new_range.split_once(',') {
        Some((start, count)) => (start, Some(count)),
        None => (new_range, None),
    };

    if let Some(count) = count {
        count.parse::<usize>().map_err(|_| malformed(raw))?;
    }
    start.parse::<usize>().map_err(|_| malformed(raw))
}

fn malformed(raw: &str) -> MarkguardError {
    MarkguardError::MalformedHunkHeader(raw.to_string())
}
