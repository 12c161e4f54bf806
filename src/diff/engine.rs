//! Zero-context line diff engine.
//!
//! Computes a minimal edit script between two line slices with the `similar`
//! crate (Myers algorithm) and renders it in unified-diff shape: hunk headers
//! followed by the `-`/`+` lines of each change block, with no surrounding
//! context.

use similar::{Algorithm, ChangeTag, TextDiff};

/// One line of diff engine output, tagged by kind.
///
/// Every variant carries the raw line text, including the leading
/// `+`/`-`/space marker for addition/deletion/context lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffLine {
    /// `@@ -<oldStart>[,<oldCount>] +<newStart>[,<newCount>] @@`
    HunkHeader(String),
    /// A line present only in the new text, prefixed with `+`.
    Addition(String),
    /// A line present only in the old text, prefixed with `-`.
    Deletion(String),
    /// An unchanged line, prefixed with a space. Never produced in
    /// zero-context mode; the variant exists so consumers stay correct
    /// against any unified diff.
    #[allow(dead_code)]
    Context(String),
}

/// Compute the zero-context unified diff of `old` → `new`.
///
/// Identical inputs produce an empty sequence. A non-empty diff starts with
/// the conventional bare `---`/`+++` file-header pair, then one hunk header
/// per change block; within a replaced block, deletions precede the
/// additions that replace them.
pub fn diff_lines(old: &[&str], new: &[&str]) -> Vec<DiffLine> {
    if old == new {
        return Vec::new();
    }

    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_slices(old, new);

    let mut lines = Vec::new();
    // Change lines of the hunk being assembled, plus the 0-based old/new
    // positions where it starts. A hunk is a maximal run of non-equal
    // changes; any equal line closes it.
    let mut hunk: Vec<DiffLine> = Vec::new();
    let mut hunk_start = (0, 0);
    let mut old_line = 0;
    let mut new_line = 0;

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Equal => {
                flush_hunk(&mut lines, &mut hunk, hunk_start, (old_line, new_line));
                old_line += 1;
                new_line += 1;
            }
            ChangeTag::Delete => {
                if hunk.is_empty() {
                    hunk_start = (old_line, new_line);
                }
                hunk.push(DiffLine::Deletion(format!("-{}", change.value())));
                old_line += 1;
            }
            ChangeTag::Insert => {
                if hunk.is_empty() {
                    hunk_start = (old_line, new_line);
                }
                hunk.push(DiffLine::Addition(format!("+{}", change.value())));
                new_line += 1;
            }
        }
    }
    flush_hunk(&mut lines, &mut hunk, hunk_start, (old_line, new_line));

    lines
}

/// Emit the assembled hunk, preceded by its header (and, for the first hunk
/// of the diff, the bare `---`/`+++` file-header pair).
fn flush_hunk(
    lines: &mut Vec<DiffLine>,
    hunk: &mut Vec<DiffLine>,
    start: (usize, usize),
    end: (usize, usize),
) {
    if hunk.is_empty() {
        return;
    }

    if lines.is_empty() {
        lines.push(DiffLine::Deletion("---".to_string()));
        lines.push(DiffLine::Addition("+++".to_string()));
    }

    lines.push(DiffLine::HunkHeader(format!(
        "@@ -{} +{} @@",
        format_range(start.0, end.0),
        format_range(start.1, end.1),
    )));
    lines.append(hunk);
}

/// Render one side of a hunk header range from 0-based start/end positions.
///
/// Standard unified convention: a one-line range shows only its 1-based
/// start; an empty range anchors at the line *before* the block and shows an
/// explicit `,0`.
fn format_range(start: usize, end: usize) -> String {
    let len = end - start;
    match len {
        0 => format!("{},0", start),
        1 => format!("{}", start + 1),
        _ => format!("{},{}", start + 1, len),
    }
}
