//! Error types and handling for Postport
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Per-file failures during a migration run are recorded in the run summary
//! and never surface as these errors; only failures outside the per-file
//! loop terminate the process.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Postport operations
#[derive(Error, Diagnostic, Debug)]
pub enum PostportError {
    #[error("Source directory not found: {path}")]
    #[diagnostic(
        code(postport::source::not_found),
        help("Check that the source path exists and points at a directory of Markdown posts")
    )]
    SourceRootNotFound { path: String },

    #[error("Failed to create destination directory: {path}: {reason}")]
    #[diagnostic(
        code(postport::dest::create_failed),
        help("Check that the destination path is writable")
    )]
    DestRootCreateFailed { path: String, reason: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(postport::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(postport::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Invalid filename pattern: {reason}")]
    #[diagnostic(code(postport::pattern::invalid))]
    PatternInvalid { reason: String },
}

impl From<regex::Error> for PostportError {
    fn from(err: regex::Error) -> Self {
        PostportError::PatternInvalid {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PostportError>;
