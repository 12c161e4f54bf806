//! Error types for the markguard CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for markguard operations.
///
/// Each variant maps to a specific exit code. `MarkersFound` is the policy
/// failure every pre-commit run exists to report; the remaining variants are
/// environment or logic faults.
#[derive(Error, Debug)]
pub enum MarkguardError {
    /// One or more debug markers were detected in the staged changes.
    /// The diagnostics themselves have already been printed to stdout.
    #[error("{0}")]
    MarkersFound(String),

    /// User provided invalid arguments or the system is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// The diff engine emitted a hunk header the attributor cannot parse.
    /// This indicates a logic fault, not anything the user did.
    #[error("malformed hunk header: {0}")]
    MalformedHunkHeader(String),
}

impl MarkguardError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MarkguardError::MarkersFound(_) => exit_codes::MARKERS_FOUND,
            MarkguardError::UserError(_) => exit_codes::USER_ERROR,
            MarkguardError::GitError(_) => exit_codes::GIT_FAILURE,
            MarkguardError::MalformedHunkHeader(_) => exit_codes::INTERNAL_ERROR,
        }
    }
}

/// Result type alias for markguard operations.
pub type Result<T> = std::result::Result<T, MarkguardError>;
