//! Core error types (deterministic only)

use core::fmt;

/// Core stemming errors
///
/// Stemming itself never fails. The only rejected input is one that is not
/// text at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Input bytes are not valid UTF-8
    InvalidInput {
        /// Byte offset of the first invalid sequence
        position: usize,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidInput { position } => {
                write!(f, "invalid input: not UTF-8 text at byte {position}")
            }
        }
    }
}

impl From<core::str::Utf8Error> for CoreError {
    fn from(err: core::str::Utf8Error) -> Self {
        CoreError::InvalidInput {
            position: err.valid_up_to(),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
