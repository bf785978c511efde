//! The Buffer type - construction, access and formatting.

use std::fmt;
use std::hash::{Hash, Hasher};

use bytes::Bytes;

use crate::error::{BufferError, Result};
use crate::hash::Fnv1a;
use crate::octet::IntoOctet;
use crate::util::concat_slices;

use super::Frozen;

/// A fixed-length sequence of octets.
///
/// A buffer's length is set at construction and never changes. Individual
/// bytes may be overwritten with [`set`](Buffer::set) or advanced as a
/// counter with [`succ_mut`](Buffer::succ_mut); everything else derives a
/// new buffer. Call [`freeze`](Buffer::freeze) to obtain an immutable,
/// shareable [`Frozen`].
///
/// # Example
///
/// ```
/// use octbuf::{buffer, Buffer};
///
/// let mut buf = buffer![0x61, 0x62, 0x63]?;
/// buf.set(1, 0x20)?;
///
/// assert_eq!(buf.to_string(), "61-20-63");
/// assert_eq!(format!("{:?}", buf), "Buffer[0x61, 0x20, 0x63]");
/// # Ok::<(), octbuf::BufferError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Buffer {
    bytes: Vec<u8>,
}

impl Buffer {
    /// Creates a buffer of `n` zero bytes.
    pub fn new(n: usize) -> Self {
        Self { bytes: vec![0x00; n] }
    }

    /// Creates a buffer of `n` copies of `b`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::ByteOutOfRange`] if `b` is not an octet.
    pub fn filled(n: usize, b: impl IntoOctet) -> Result<Self> {
        let b = b.into_octet()?;
        Ok(Self { bytes: vec![b; n] })
    }

    /// Creates a buffer of `n` bytes where byte `i` is `f(i)`.
    ///
    /// `f` is called once per index in ascending order. The first value that
    /// is not an octet stops construction.
    ///
    /// # Example
    ///
    /// ```
    /// use octbuf::{buffer, Buffer};
    ///
    /// let buf = Buffer::from_fn(3, |i| 0x30 + i)?;
    /// assert_eq!(buf, buffer![0x30, 0x31, 0x32]?);
    ///
    /// assert!(Buffer::from_fn(3, |_| 256).is_err());
    /// # Ok::<(), octbuf::BufferError>(())
    /// ```
    pub fn from_fn<B, F>(n: usize, mut f: F) -> Result<Self>
    where
        B: IntoOctet,
        F: FnMut(usize) -> B,
    {
        let mut bytes = Vec::with_capacity(n);
        for i in 0..n {
            bytes.push(f(i).into_octet()?);
        }
        Ok(Self { bytes })
    }

    /// Creates a buffer holding exactly the given values, in order.
    ///
    /// The [`buffer!`](crate::buffer!) macro is the variadic form.
    pub fn from_octets<B, I>(values: I) -> Result<Self>
    where
        B: IntoOctet,
        I: IntoIterator<Item = B>,
    {
        let bytes = values
            .into_iter()
            .map(IntoOctet::into_octet)
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self { bytes })
    }

    /// Concatenates `buffers` in order. No buffers yields an empty buffer.
    pub fn join<'a, I>(buffers: I) -> Self
    where
        I: IntoIterator<Item = &'a Buffer>,
    {
        let parts: Vec<&[u8]> = buffers.into_iter().map(Buffer::as_slice).collect();
        Self {
            bytes: concat_slices(&parts),
        }
    }

    /// Creates a buffer from the raw bytes of a byte string.
    ///
    /// Inverse of [`pack`](Buffer::pack).
    pub fn unpack(s: impl AsRef<[u8]>) -> Self {
        Self {
            bytes: s.as_ref().to_vec(),
        }
    }

    /// Returns an independent copy.
    ///
    /// Writes to the copy never show through to `self`, and the copy of a
    /// [`Frozen`] buffer is mutable again.
    pub fn duplicate(&self) -> Buffer {
        self.clone()
    }

    /// Returns the number of bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the byte at `i`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::IndexOutOfBounds`] if `i >= len()`.
    pub fn get(&self, i: usize) -> Result<u8> {
        BufferError::check_index(i, self.len())?;
        Ok(self.bytes[i])
    }

    /// Alias of [`get`](Buffer::get).
    pub fn byte(&self, i: usize) -> Result<u8> {
        self.get(i)
    }

    /// Overwrites the byte at `i`.
    ///
    /// The index is checked before the value; nothing is written unless
    /// both are valid.
    ///
    /// # Errors
    ///
    /// - [`BufferError::IndexOutOfBounds`] if `i >= len()`
    /// - [`BufferError::ByteOutOfRange`] if `b` is not an octet
    pub fn set(&mut self, i: usize, b: impl IntoOctet) -> Result<()> {
        BufferError::check_index(i, self.len())?;
        self.bytes[i] = b.into_octet()?;
        Ok(())
    }

    /// Returns a copy of the bytes.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Borrows the bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Iterates over the bytes in index order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, u8>> {
        self.bytes.iter().copied()
    }

    /// Calls `f` with each byte in index order.
    pub fn each_byte<F: FnMut(u8)>(&self, f: F) {
        self.iter().for_each(f);
    }

    /// Encodes the buffer as a byte string.
    pub fn pack(&self) -> Bytes {
        Bytes::copy_from_slice(&self.bytes)
    }

    /// Returns the FNV-1a hash of the content, widened to 64 bits.
    ///
    /// Equal buffers always hash equal.
    pub fn fnv_hash(&self) -> u64 {
        Fnv1a::hash(&self.bytes)
    }

    /// Converts into an immutable buffer without copying the bytes.
    ///
    /// A [`Frozen`] buffer has no mutable access, even through a `mut`
    /// binding:
    ///
    /// ```compile_fail
    /// use octbuf::buffer;
    ///
    /// let mut frozen = buffer![0x61, 0x62, 0x63]?.freeze();
    /// frozen.set(1, 0x20)?;
    /// # Ok::<(), octbuf::BufferError>(())
    /// ```
    ///
    /// ```compile_fail
    /// use octbuf::buffer;
    ///
    /// let mut frozen = buffer![0x00, 0xFF]?.freeze();
    /// frozen.succ_mut();
    /// # Ok::<(), octbuf::BufferError>(())
    /// ```
    ///
    /// The same calls compile on the thawed copy:
    ///
    /// ```
    /// use octbuf::buffer;
    ///
    /// let frozen = buffer![0x61, 0x62, 0x63]?.freeze();
    /// let mut copy = frozen.duplicate();
    /// copy.set(1, 0x20)?;
    /// copy.succ_mut();
    /// assert_eq!(frozen.get(1)?, 0x62);
    /// # Ok::<(), octbuf::BufferError>(())
    /// ```
    pub fn freeze(self) -> Frozen {
        tracing::trace!(len = self.len(), "buffer frozen");
        Frozen::from_buffer(self)
    }

    /// Returns the BLAKE3 digest of the content.
    #[cfg(feature = "hash-blake3")]
    pub fn digest(&self) -> crate::hash::Digest {
        crate::hash::Blake3Hasher::hash(&self.bytes)
    }

    /// Returns the keyed BLAKE3 digest of the content.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] unless `key` is exactly
    /// 32 bytes long.
    #[cfg(feature = "hash-blake3")]
    pub fn keyed_digest(&self, key: &Buffer) -> Result<crate::hash::Digest> {
        let key: &[u8; crate::hash::Digest::SIZE] = key
            .as_slice()
            .try_into()
            .map_err(|_| BufferError::invalid("digest key must be 32 bytes"))?;
        let mut hasher = crate::hash::Blake3Hasher::new_keyed(key);
        hasher.update(&self.bytes);
        Ok(hasher.finalize())
    }

    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl Hash for Buffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.fnv_hash());
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<'a> IntoIterator for &'a Buffer {
    type Item = u8;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<&[u8]> for Buffer {
    fn from(bytes: &[u8]) -> Self {
        Self::unpack(bytes)
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_vec(bytes)
    }
}

impl From<Bytes> for Buffer {
    fn from(bytes: Bytes) -> Self {
        Self::from_vec(bytes.into())
    }
}

impl From<Buffer> for Bytes {
    fn from(buffer: Buffer) -> Self {
        Bytes::from(buffer.bytes)
    }
}

#[cfg(feature = "hash-blake3")]
impl From<crate::hash::Digest> for Buffer {
    fn from(digest: crate::hash::Digest) -> Self {
        Self::unpack(digest.as_bytes())
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Buffer[")?;
        for (i, b) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "0x{:02X}", b)?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}
