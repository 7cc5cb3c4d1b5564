//! Error types for Recomendar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Recomendar operations.
///
/// Covers the failure modes of the vector-space model: vectors built against
/// different vocabulary snapshots, stop-word stream failures, and generic
/// pipeline errors.
///
/// # Examples
///
/// ```
/// use recomendar::error::RecomendarError;
///
/// let err = RecomendarError::DimensionMismatch {
///     expected: 12,
///     actual: 7,
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum RecomendarError {
    /// Two vectors passed to a similarity computation have different lengths.
    ///
    /// Vectors of different lengths were built against different vocabulary
    /// snapshots and are incomparable; callers must not rank on this.
    DimensionMismatch {
        /// Length of the first vector
        expected: usize,
        /// Length of the second vector
        actual: usize,
    },

    /// I/O error (failed stop-word stream, file not found, etc.).
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for RecomendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecomendarError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Vector dimension mismatch: expected {expected}, got {actual}"
                )
            }
            RecomendarError::Io(e) => write!(f, "I/O error: {e}"),
            RecomendarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RecomendarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecomendarError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RecomendarError {
    fn from(err: std::io::Error) -> Self {
        RecomendarError::Io(err)
    }
}

impl From<&str> for RecomendarError {
    fn from(msg: &str) -> Self {
        RecomendarError::Other(msg.to_string())
    }
}

impl From<String> for RecomendarError {
    fn from(msg: String) -> Self {
        RecomendarError::Other(msg)
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, RecomendarError>;
