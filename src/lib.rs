//! octbuf
//!
//! Fixed-length octet buffers for Rust.
//!
//! `octbuf` provides a single value type, [`Buffer`], with a small, strict
//! algebra for low-level binary work:
//!
//! - big-endian integer conversion and counter increment
//! - XOR with a byte or a repeating key
//! - concatenation and joining
//! - clipped slicing and fixed-width chunking
//!
//! The crate intentionally:
//! - does NOT do I/O
//! - does NOT grow or shrink a buffer in place
//! - does NOT lock; freeze a buffer to share it
//!
//! # Example
//!
//! ```
//! use octbuf::{buffer, Buffer, BufferError};
//!
//! fn main() -> Result<(), BufferError> {
//!     let nonce = Buffer::from_int(255, 4)?;
//!     let next = nonce.succ();
//!     assert_eq!(next, buffer![0x00, 0x00, 0x01, 0x00]?);
//!     assert_eq!(next.to_u128()?, 256);
//!
//!     let masked = Buffer::unpack(b"abc").xor(&buffer![0x20, 0x40]?)?;
//!     assert_eq!(masked.to_string(), "41-22-43");
//!
//!     for part in masked.slices(2)? {
//!         println!("{:?}", part);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Freezing
//!
//! [`Buffer::freeze`] turns a buffer into a [`Frozen`], which keeps every
//! read operation and drops every write:
//!
//! ```
//! use octbuf::buffer;
//!
//! let key = buffer![0x20]?.freeze();
//! let out = buffer![0x61]?.xor(&key)?;
//! assert_eq!(out.get(0)?, 0x41);
//! # Ok::<(), octbuf::BufferError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod config;
mod error;
mod hash;
mod octet;

mod util; // internal helpers

//
// Public surface
//

pub use buffer::{Buffer, Frozen, Slices, XorOperand};
pub use config::DEFAULT_WIDTH;
pub use error::{BufferError, Result};
pub use hash::Fnv1a;
pub use octet::IntoOctet;

pub use num_bigint::{BigInt, BigUint};

#[cfg(feature = "hash-blake3")]
pub use hash::Digest;

/// Builds a [`Buffer`] from a list of octet values.
///
/// Expands to a [`Result`], failing with
/// [`BufferError::ByteOutOfRange`] if any value is outside `0..=255`.
///
/// ```
/// use octbuf::{buffer, BufferError};
///
/// let buf = buffer![0x00, 0xFF]?;
/// assert_eq!(buf.len(), 2);
/// assert!(buffer![]?.is_empty());
/// assert_eq!(buffer![256], Err(BufferError::ByteOutOfRange { value: 256 }));
/// # Ok::<(), BufferError>(())
/// ```
#[macro_export]
macro_rules! buffer {
    () => {
        ::core::result::Result::<$crate::Buffer, $crate::BufferError>::Ok($crate::Buffer::new(0))
    };
    ($($b:expr),+ $(,)?) => {
        $crate::Buffer::from_octets([$($b),+])
    };
}
