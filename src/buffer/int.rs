//! Big-endian integer conversion and the counter successor.
//!
//! [`Buffer::from_int`] and [`Buffer::to_int`] work on arbitrary-precision
//! [`BigUint`] values, so every buffer has an integer value whatever its
//! length. [`Buffer::from_u128`] and [`Buffer::to_u128`] are the
//! allocation-light forms for the default width.

use num_bigint::{BigInt, BigUint};

use crate::error::{BufferError, Result};

use super::Buffer;

/// Bytes in a `u128`.
const U128_BYTES: usize = u128::BITS as usize / 8;

impl Buffer {
    /// Encodes `k` as an unsigned big-endian integer in exactly `n` bytes.
    ///
    /// A width of zero is valid only for zero and yields an empty buffer.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::ValueOutOfRange`] if `k` is negative or
    /// `k >= 256^n`.
    ///
    /// # Example
    ///
    /// ```
    /// use octbuf::{buffer, BigUint, Buffer};
    ///
    /// assert_eq!(Buffer::from_int(16777215, 3)?, buffer![0xFF, 0xFF, 0xFF]?);
    /// assert!(Buffer::from_int(16777216, 3).is_err());
    /// assert!(Buffer::from_int(-1, 16).is_err());
    ///
    /// let big: BigUint = BigUint::from(1u8) << 200;
    /// assert_eq!(Buffer::from_int(big.clone(), 26)?.to_int(), big);
    /// # Ok::<(), octbuf::BufferError>(())
    /// ```
    pub fn from_int<K>(k: K, n: usize) -> Result<Self>
    where
        K: Into<BigInt>,
    {
        let out_of_range = || BufferError::ValueOutOfRange { width: n };
        let k = BigUint::try_from(k.into()).map_err(|_| out_of_range())?;
        if k.bits() > (n as u64).saturating_mul(8) {
            return Err(out_of_range());
        }

        let mut bytes = vec![0x00; n];
        if k.bits() > 0 {
            let be = k.to_bytes_be();
            bytes[n - be.len()..].copy_from_slice(&be);
        }
        Ok(Self::from_vec(bytes))
    }

    /// Encodes `k` in [`DEFAULT_WIDTH`](crate::DEFAULT_WIDTH) bytes. Every `u128` fits.
    pub fn from_u128(k: u128) -> Self {
        Self::from_vec(k.to_be_bytes().to_vec())
    }

    /// Interprets the whole buffer as an unsigned big-endian integer.
    ///
    /// An empty buffer is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use octbuf::{BigUint, Buffer};
    ///
    /// let max = Buffer::filled(32, 0xFF)?;
    /// assert_eq!(max.to_int(), (BigUint::from(1u8) << 256) - 1u8);
    /// # Ok::<(), octbuf::BufferError>(())
    /// ```
    pub fn to_int(&self) -> BigUint {
        BigUint::from_bytes_be(self.as_slice())
    }

    /// Interprets the buffer as a big-endian `u128`.
    ///
    /// Leading zero bytes are ignored, so buffers longer than 16 bytes
    /// convert as long as the value fits.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::ValueOutOfRange`] if the value needs more
    /// than 128 bits.
    pub fn to_u128(&self) -> Result<u128> {
        let bytes = self.as_slice();
        let leading = bytes.len().saturating_sub(U128_BYTES);
        if bytes[..leading].iter().any(|&b| b != 0) {
            return Err(BufferError::ValueOutOfRange { width: U128_BYTES });
        }
        Ok(bytes[leading..]
            .iter()
            .fold(0u128, |acc, &b| (acc << 8) | u128::from(b)))
    }

    /// Returns a copy advanced by one as a big-endian counter.
    pub fn succ(&self) -> Buffer {
        let mut next = self.duplicate();
        next.succ_mut();
        next
    }

    /// Advances the buffer by one as a big-endian counter.
    ///
    /// The carry runs from the last byte toward the first. When every byte
    /// is `0xFF` the counter wraps to all zeros; the length never changes.
    ///
    /// # Example
    ///
    /// ```
    /// use octbuf::buffer;
    ///
    /// let mut counter = buffer![0x00, 0xFF, 0xFF]?;
    /// counter.succ_mut();
    /// assert_eq!(counter, buffer![0x01, 0x00, 0x00]?);
    /// # Ok::<(), octbuf::BufferError>(())
    /// ```
    pub fn succ_mut(&mut self) {
        for byte in self.as_mut_slice().iter_mut().rev() {
            let (next, carry) = byte.overflowing_add(1);
            *byte = next;
            if !carry {
                return;
            }
        }
        tracing::trace!(len = self.len(), "counter wrapped to zero");
    }
}
