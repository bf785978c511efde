//! The buffer types.
//!
//! - [`Buffer`] - Owned, fixed-length, mutable octet sequence
//! - [`Frozen`] - Immutable, cheaply shareable form of a buffer
//! - [`Slices`] - Iterator over consecutive fixed-width slices
//! - [`XorOperand`] - Operands accepted by [`Buffer::xor`]

mod core;
mod frozen;
mod int;
mod ops;
mod slice;

pub use self::core::Buffer;
pub use frozen::Frozen;
pub use ops::XorOperand;
pub use slice::Slices;
