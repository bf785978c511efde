//! Slicing and chunking.
//!
//! - [`Buffer::slice`] - One clipped window starting at a valid index
//! - [`Buffer::chunks`] - Lazy iterator over consecutive fixed-width slices
//! - [`Buffer::blocks`] - The same at [`DEFAULT_WIDTH`](crate::DEFAULT_WIDTH)
//! - [`Buffer::slices`] / [`Buffer::each_slice`] - Eager and visitor forms

use std::iter::FusedIterator;

use crate::config::Width;
use crate::error::{BufferError, Result};

use super::Buffer;

impl Buffer {
    /// Returns up to `n` bytes starting at index `i`.
    ///
    /// The window is clipped at the end of the buffer, but `i` itself must
    /// point at an existing byte, so every slice of an empty buffer fails.
    ///
    /// # Errors
    ///
    /// - [`BufferError::InvalidArgument`] if `n` is zero
    /// - [`BufferError::IndexOutOfBounds`] if `i >= len()`
    ///
    /// # Example
    ///
    /// ```
    /// use octbuf::buffer;
    ///
    /// let buf = buffer![0x61, 0x62, 0x63]?;
    /// assert_eq!(buf.slice(2, 2)?, buffer![0x63]?);
    /// assert!(buf.slice(3, 2).is_err());
    /// # Ok::<(), octbuf::BufferError>(())
    /// ```
    pub fn slice(&self, i: usize, n: usize) -> Result<Buffer> {
        let width = Width::new(n)?;
        BufferError::check_index(i, self.len())?;
        let end = i.saturating_add(width.get()).min(self.len());
        Ok(Buffer::unpack(&self.as_slice()[i..end]))
    }

    /// Returns an iterator over consecutive slices of `n` bytes.
    ///
    /// The last slice may be shorter. An empty buffer yields nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `n` is zero.
    pub fn chunks(&self, n: usize) -> Result<Slices<'_>> {
        Ok(self.slices_of(Width::new(n)?))
    }

    /// Returns an iterator over consecutive 16-byte slices.
    ///
    /// The default width is always valid, so this cannot fail.
    pub fn blocks(&self) -> Slices<'_> {
        self.slices_of(Width::default())
    }

    /// Splits the buffer into consecutive slices of `n` bytes.
    ///
    /// Joining the result gives back the original buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use octbuf::{buffer, Buffer};
    ///
    /// let buf = buffer![0x61, 0x62, 0x63]?;
    /// let parts = buf.slices(2)?;
    /// assert_eq!(parts, vec![buffer![0x61, 0x62]?, buffer![0x63]?]);
    /// assert_eq!(Buffer::join(&parts), buf);
    /// # Ok::<(), octbuf::BufferError>(())
    /// ```
    pub fn slices(&self, n: usize) -> Result<Vec<Buffer>> {
        Ok(self.chunks(n)?.collect())
    }

    /// Calls `f` with each slice of `n` bytes, in order.
    ///
    /// `n` is validated before `f` is first called.
    pub fn each_slice<F: FnMut(Buffer)>(&self, n: usize, f: F) -> Result<()> {
        self.chunks(n)?.for_each(f);
        Ok(())
    }

    fn slices_of(&self, width: Width) -> Slices<'_> {
        Slices {
            rest: self.as_slice(),
            width: width.get(),
        }
    }
}

/// Iterator returned by [`Buffer::chunks`].
///
/// Each item is a freshly allocated [`Buffer`] independent of the source.
#[derive(Debug, Clone)]
pub struct Slices<'a> {
    rest: &'a [u8],
    width: usize,
}

impl Iterator for Slices<'_> {
    type Item = Buffer;

    fn next(&mut self) -> Option<Buffer> {
        if self.rest.is_empty() {
            return None;
        }
        let take = self.width.min(self.rest.len());
        let (head, tail) = self.rest.split_at(take);
        self.rest = tail;
        Some(Buffer::unpack(head))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.rest.len().div_ceil(self.width);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Slices<'_> {}

impl FusedIterator for Slices<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Buffer {
        Buffer::unpack(b"abc")
    }

    #[test]
    fn test_slice_clips_at_end() {
        assert_eq!(abc().slice(2, 2).unwrap(), Buffer::unpack(b"c"));
        assert_eq!(abc().slice(0, 2).unwrap(), Buffer::unpack(b"ab"));
        assert_eq!(abc().slice(1, usize::MAX).unwrap(), Buffer::unpack(b"bc"));
    }

    #[test]
    fn test_slice_start_must_be_in_bounds() {
        assert_eq!(
            abc().slice(3, 2),
            Err(BufferError::IndexOutOfBounds { index: 3, size: 3 })
        );
        assert_eq!(
            Buffer::new(0).slice(0, 16),
            Err(BufferError::IndexOutOfBounds { index: 0, size: 0 })
        );
    }

    #[test]
    fn test_slice_zero_width_checked_first() {
        assert!(matches!(
            abc().slice(5, 0),
            Err(BufferError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_slices() {
        let parts = abc().slices(2).unwrap();
        assert_eq!(parts, vec![Buffer::unpack(b"ab"), Buffer::unpack(b"c")]);
        assert_eq!(abc().slices(16).unwrap(), vec![abc()]);
        assert!(Buffer::new(0).slices(4).unwrap().is_empty());
        assert!(abc().slices(0).is_err());
    }

    #[test]
    fn test_each_slice() {
        let mut seen = Vec::new();
        abc().each_slice(1, |s| seen.push(s)).unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(Buffer::join(&seen), abc());

        let mut called = false;
        assert!(abc().each_slice(0, |_| called = true).is_err());
        assert!(!called);
    }

    #[test]
    fn test_blocks_use_default_width() {
        let buf = Buffer::from_fn(40, |i| i).unwrap();
        let blocks: Vec<Buffer> = buf.blocks().collect();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].len(), 16);
        assert_eq!(blocks[2].len(), 8);
        assert_eq!(blocks, buf.slices(16).unwrap());
        assert_eq!(Buffer::new(0).blocks().len(), 0);
    }

    #[test]
    fn test_chunks_size_hint() {
        let buf = Buffer::new(10);
        let mut chunks = buf.chunks(4).unwrap();
        assert_eq!(chunks.len(), 3);
        chunks.next();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks.last().map(|b| b.len()), Some(2));
    }
}
