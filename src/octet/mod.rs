//! Octet validation.
//!
//! Callers hand integers of any primitive width to the constructors and to
//! [`Buffer::set`](crate::Buffer::set). [`IntoOctet`] narrows them to `u8`,
//! rejecting anything outside `0..=255` with
//! [`BufferError::ByteOutOfRange`].

use crate::error::{BufferError, Result};

/// A value that can be checked into a single octet.
///
/// Implemented for every primitive integer type except `u128`, whose range
/// cannot be reported losslessly in [`BufferError::ByteOutOfRange`].
///
/// # Example
///
/// ```
/// use octbuf::{BufferError, IntoOctet};
///
/// assert_eq!(0x20_i32.into_octet(), Ok(0x20));
/// assert_eq!(256_i32.into_octet(), Err(BufferError::ByteOutOfRange { value: 256 }));
/// ```
pub trait IntoOctet: Copy {
    /// Converts `self` to an octet, or fails with `ByteOutOfRange`.
    fn into_octet(self) -> Result<u8>;
}

macro_rules! impl_into_octet {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoOctet for $ty {
                #[inline]
                fn into_octet(self) -> Result<u8> {
                    u8::try_from(self).map_err(|_| BufferError::ByteOutOfRange {
                        value: self as i128,
                    })
                }
            }
        )*
    };
}

impl_into_octet!(i8, i16, i32, i64, i128, isize, u16, u32, u64, usize);

impl IntoOctet for u8 {
    #[inline]
    fn into_octet(self) -> Result<u8> {
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_accepted() {
        assert_eq!(0i128.into_octet(), Ok(0x00));
        assert_eq!(255usize.into_octet(), Ok(0xFF));
        assert_eq!(0xABu8.into_octet(), Ok(0xAB));
        assert_eq!(0x7Fi8.into_octet(), Ok(0x7F));
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(
            (-1i32).into_octet(),
            Err(BufferError::ByteOutOfRange { value: -1 })
        );
        assert_eq!(
            (-128i8).into_octet(),
            Err(BufferError::ByteOutOfRange { value: -128 })
        );
    }

    #[test]
    fn test_too_large_rejected() {
        assert_eq!(
            256u16.into_octet(),
            Err(BufferError::ByteOutOfRange { value: 256 })
        );
        assert_eq!(
            u64::MAX.into_octet(),
            Err(BufferError::ByteOutOfRange {
                value: u64::MAX as i128
            })
        );
    }
}
