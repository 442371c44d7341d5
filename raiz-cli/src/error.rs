//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Stems differ from the expected list
    CheckFailed {
        /// Number of words whose stem differs
        mismatches: usize,
        /// Number of words compared
        total: usize,
    },
    /// Vocabulary and expected list have different lengths
    LineCountMismatch {
        /// Lines in the vocabulary
        vocabulary: usize,
        /// Lines in the expected list
        expected: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::CheckFailed { mismatches, total } => {
                write!(f, "Check failed: {mismatches} of {total} stems differ")
            }
            CliError::LineCountMismatch {
                vocabulary,
                expected,
            } => write!(
                f,
                "Line count mismatch: {vocabulary} vocabulary lines, {expected} expected lines"
            ),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
