//! Validation module for markguard.
//!
//! Currently a single check: debug-marker detection over the added lines of
//! the staged changeset.

pub mod markers;

pub use markers::{Diagnostic, MarkerPattern, scan_changes, scan_entry, scan_line};
