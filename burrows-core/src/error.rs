//! Error types for Burrows transforms.
//!
//! Every failure is synchronous and local to the call that raised it. The
//! taxonomy is deliberately small: callers either passed something that can
//! never be valid ([`BurrowsError::InvalidArgument`]), handed us a stream the
//! matching encoder could not have produced ([`BurrowsError::CorruptStream`]),
//! or the underlying reader/writer failed ([`BurrowsError::Io`]).

use std::io;
use thiserror::Error;

/// The main error type for Burrows operations.
#[derive(Debug, Error)]
pub enum BurrowsError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A required argument is outside the domain of the operation.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the offending argument.
        message: String,
    },

    /// An index query fell outside `[0, len)`.
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Length of the indexed sequence.
        len: usize,
    },

    /// Input that cannot have been produced by the matching encode step.
    #[error("Corrupt stream: {message}")]
    CorruptStream {
        /// Description of the corruption.
        message: String,
    },
}

/// Result type alias for Burrows operations.
pub type Result<T> = std::result::Result<T, BurrowsError>;

impl BurrowsError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an index out of range error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a corrupt stream error.
    pub fn corrupt_stream(message: impl Into<String>) -> Self {
        Self::CorruptStream {
            message: message.into(),
        }
    }

    /// True for argument errors, including out-of-range index queries.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::IndexOutOfRange { .. }
        )
    }

    /// True for malformed-input errors.
    pub fn is_corrupt_stream(&self) -> bool {
        matches!(self, Self::CorruptStream { .. })
    }
}

impl From<BurrowsError> for io::Error {
    fn from(err: BurrowsError) -> Self {
        match err {
            BurrowsError::Io(e) => e,
            BurrowsError::CorruptStream { .. } => io::Error::new(io::ErrorKind::InvalidData, err),
            other => io::Error::new(io::ErrorKind::InvalidInput, other),
        }
    }
}
