//! XOR and concatenation.

use std::ops::Add;

use crate::error::{BufferError, Result};
use crate::octet::IntoOctet;
use crate::util::concat_slices;

use super::{Buffer, Frozen};

/// Right-hand operands accepted by [`Buffer::xor`].
///
/// A single octet is applied to every byte; a buffer is cycled as a
/// repeating key. Operands of any other kind do not type-check.
pub trait XorOperand {
    /// Combines `buffer` with this operand.
    fn xor_with(self, buffer: &Buffer) -> Result<Buffer>;
}

impl<B: IntoOctet> XorOperand for B {
    fn xor_with(self, buffer: &Buffer) -> Result<Buffer> {
        buffer.xor_byte(self)
    }
}

impl XorOperand for &Buffer {
    fn xor_with(self, buffer: &Buffer) -> Result<Buffer> {
        buffer.xor_key(self)
    }
}

impl XorOperand for &Frozen {
    fn xor_with(self, buffer: &Buffer) -> Result<Buffer> {
        buffer.xor_key(self)
    }
}

impl Buffer {
    /// Returns `self` followed by `other`.
    pub fn concat(&self, other: &Buffer) -> Buffer {
        Buffer::from_vec(concat_slices(&[self.as_slice(), other.as_slice()]))
    }

    /// XORs with a single octet or a repeating key buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use octbuf::buffer;
    ///
    /// let text = buffer![0x61, 0x62, 0x63]?;
    /// assert_eq!(text.xor(0x20)?, buffer![0x41, 0x42, 0x43]?);
    /// assert_eq!(text.xor(&buffer![0x20, 0x40]?)?, buffer![0x41, 0x22, 0x43]?);
    /// # Ok::<(), octbuf::BufferError>(())
    /// ```
    pub fn xor(&self, operand: impl XorOperand) -> Result<Buffer> {
        operand.xor_with(self)
    }

    /// XORs every byte with `b`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::ByteOutOfRange`] if `b` is not an octet.
    pub fn xor_byte(&self, b: impl IntoOctet) -> Result<Buffer> {
        let b = b.into_octet()?;
        Ok(Buffer::from_vec(self.iter().map(|x| x ^ b).collect()))
    }

    /// XORs byte `i` with `key[i % key.len()]`.
    ///
    /// The result has the length of `self`; the key need not divide it.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `key` is empty.
    pub fn xor_key(&self, key: &Buffer) -> Result<Buffer> {
        if key.is_empty() {
            return Err(BufferError::invalid("xor key must not be empty"));
        }
        let bytes = self
            .iter()
            .zip(key.iter().cycle())
            .map(|(x, k)| x ^ k)
            .collect();
        Ok(Buffer::from_vec(bytes))
    }
}

impl Add<&Buffer> for &Buffer {
    type Output = Buffer;

    fn add(self, rhs: &Buffer) -> Buffer {
        self.concat(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Buffer {
        Buffer::unpack(b"abc")
    }

    #[test]
    fn test_concat() {
        let a = Buffer::unpack(b"a");
        let bc = Buffer::unpack(b"bc");
        assert_eq!(a.concat(&bc), abc());
        assert_eq!(&a + &bc, abc());
        assert_eq!(a, Buffer::unpack(b"a"));
        assert_eq!(&Buffer::new(0) + &Buffer::new(0), Buffer::new(0));
    }

    #[test]
    fn test_xor_byte() {
        assert_eq!(abc().xor(0x20).unwrap(), Buffer::unpack(b"ABC"));
        assert_eq!(
            abc().xor(256),
            Err(BufferError::ByteOutOfRange { value: 256 })
        );
        assert_eq!(
            abc().xor_byte(-1),
            Err(BufferError::ByteOutOfRange { value: -1 })
        );
    }

    #[test]
    fn test_xor_key_cycles() {
        let key = Buffer::unpack([0x20u8, 0x40]);
        assert_eq!(
            abc().xor(&key).unwrap(),
            Buffer::unpack([0x41u8, 0x22, 0x43])
        );
    }

    #[test]
    fn test_xor_key_longer_than_input() {
        let key = Buffer::unpack([0x01u8, 0x02, 0x03, 0x04]);
        assert_eq!(
            Buffer::unpack([0x00u8, 0x00]).xor(&key).unwrap(),
            Buffer::unpack([0x01u8, 0x02])
        );
    }

    #[test]
    fn test_xor_empty_key_rejected() {
        assert_eq!(
            abc().xor(&Buffer::new(0)),
            Err(BufferError::InvalidArgument {
                message: "xor key must not be empty"
            })
        );
        assert!(Buffer::new(0).xor_key(&Buffer::new(0)).is_err());
    }

    #[test]
    fn test_xor_with_frozen_key() {
        let key = Buffer::unpack([0x20u8]).freeze();
        assert_eq!(abc().xor(&key).unwrap(), Buffer::unpack(b"ABC"));
    }
}
