//! Error types for stacksort
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::services::brace::BraceError;

/// Result type alias for stacksort operations
pub type StackResult<T> = Result<T, StackError>;

/// Main error type for stacksort operations
#[derive(Error, Debug)]
pub enum StackError {
    /// Malformed brace syntax in a supplied pattern
    #[error("invalid pattern '{pattern}': {reason}")]
    PatternSyntax { pattern: String, reason: BraceError },

    /// Pattern expanded fine but is not a valid glob
    #[error("invalid glob '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Writing results failed
    #[error("failed to write results to {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StackError {
    /// Short title used for CI annotations
    pub fn title(&self) -> &'static str {
        match self {
            StackError::PatternSyntax { .. } | StackError::InvalidGlob { .. } => "Invalid pattern",
            StackError::InvalidConfig { .. } => "Invalid configuration",
            StackError::Output { .. } => "Output error",
            StackError::Io(_) => "IO error",
        }
    }
}
