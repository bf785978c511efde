//! Error types for octbuf.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = BufferError> = std::result::Result<T, E>;

/// Errors that can occur when building, reading or combining buffers.
///
/// Every error is raised before any state is touched, so a failed call
/// leaves the receiver exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// A width, count or key argument violates its precondition.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// A proposed element value lies outside `0..=255`.
    #[error("invalid byte value: {value}")]
    ByteOutOfRange {
        /// The rejected value.
        value: i128,
    },

    /// An index is not below the buffer size.
    #[error("index {index} out of bounds for size {size}")]
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// The size of the buffer at the time of the call.
        size: usize,
    },

    /// An integer does not fit the requested big-endian width.
    #[error("value out of range for {width}-byte big-endian integer")]
    ValueOutOfRange {
        /// The width in bytes.
        width: usize,
    },
}

impl BufferError {
    pub(crate) const fn invalid(message: &'static str) -> Self {
        BufferError::InvalidArgument { message }
    }

    pub(crate) fn check_index(index: usize, size: usize) -> Result<()> {
        if index >= size {
            return Err(BufferError::IndexOutOfBounds { index, size });
        }
        Ok(())
    }
}
