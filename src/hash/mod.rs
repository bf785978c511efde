//! Content hashing for buffers.
//!
//! - [`Fnv1a`] - The structural hash behind [`Buffer::fnv_hash`](crate::Buffer::fnv_hash)
//!   and the `std::hash::Hash` impl
//! - [`Digest`] - 32-byte BLAKE3 digest (requires `hash-blake3` feature)

mod fnv;

#[cfg(feature = "hash-blake3")]
mod blake3;
#[cfg(feature = "hash-blake3")]
mod digest;

pub use fnv::Fnv1a;

#[cfg(feature = "hash-blake3")]
pub(crate) use self::blake3::Blake3Hasher;
#[cfg(feature = "hash-blake3")]
pub use digest::Digest;
