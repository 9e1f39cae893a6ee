//! Error types for progress-sync.
//!
//! Uses thiserror for derive macros. Every variant is fatal; the run stops
//! at the first error and exits with the variant's exit code.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for progress-sync operations.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Invalid invocation, config, or an unreadable/unwritable file.
    #[error("{0}")]
    UserError(String),

    /// The notes directory could not be listed.
    #[error("failed to scan notes directory '{}': {source}", path.display())]
    ScanError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A section header in the progress document is malformed.
    #[error("line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),
}

impl SyncError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SyncError::UserError(_) => exit_codes::USER_ERROR,
            SyncError::ScanError { .. } => exit_codes::USER_ERROR,
            SyncError::ParseError { .. } => exit_codes::PARSE_FAILURE,
            SyncError::GitError(_) => exit_codes::GIT_FAILURE,
        }
    }
}

/// Result type alias for progress-sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;
