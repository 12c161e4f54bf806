//! Exit code constants for the markguard CLI.
//!
//! The hook contract fixes the first two codes: git runs the pre-commit hook
//! and aborts the commit on any non-zero status, and callers distinguish
//! "markers found" (1) from environment faults (2+).
//! - 0: Success, no debug markers in the staged changes
//! - 1: One or more debug markers detected
//! - 2: User error (bad invocation, not a git repository)
//! - 3: Git operation failure
//! - 4: Internal consistency error (malformed diff output)

/// Successful execution, no diagnostics.
pub const SUCCESS: i32 = 0;

/// Debug markers were detected in the staged changes.
pub const MARKERS_FOUND: i32 = 1;

/// User error: bad arguments or invalid state.
pub const USER_ERROR: i32 = 2;

/// Git operation failure: a git subprocess exited non-zero.
pub const GIT_FAILURE: i32 = 3;

/// Internal consistency error: the diff engine produced output the
/// attributor cannot parse.
pub const INTERNAL_ERROR: i32 = 4;
