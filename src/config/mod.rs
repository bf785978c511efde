//! Width configuration for slicing and integer conversion.
//!
//! - [`DEFAULT_WIDTH`] - Width used when the caller has no preference
//! - `Width` - The crate-internal validated, non-zero slice width
//!
//! # Example
//!
//! ```
//! use octbuf::{Buffer, DEFAULT_WIDTH};
//!
//! let buf = Buffer::new(40);
//! let widths: Vec<usize> = buf.blocks().map(|b| b.len()).collect();
//! assert_eq!(widths, [DEFAULT_WIDTH, DEFAULT_WIDTH, 8]);
//! ```

use crate::error::{BufferError, Result};

/// Default width in bytes for slices, chunks and big-endian integers.
///
/// Sixteen bytes hold exactly one `u128`.
pub const DEFAULT_WIDTH: usize = 16;

/// A slice or chunk width in bytes. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Width(usize);

impl Width {
    /// Fails with [`BufferError::InvalidArgument`] if `n` is zero.
    pub(crate) const fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(BufferError::invalid("width must be positive"));
        }
        Ok(Self(n))
    }

    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

impl Default for Width {
    fn default() -> Self {
        Self(DEFAULT_WIDTH)
    }
}
