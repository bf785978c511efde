//! Immutable buffers.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

use bytes::Bytes;

use super::Buffer;

/// A buffer that can no longer be mutated.
///
/// Created by [`Buffer::freeze`]. Every read operation of [`Buffer`] is
/// available through `Deref`; `set` and `succ_mut` are not, so a write to a
/// frozen buffer is a compile error rather than a runtime failure.
///
/// Cloning is cheap and shares storage, which is safe because nothing can
/// write to it. [`Buffer::duplicate`] gives back an independent, mutable copy.
///
/// # Example
///
/// ```
/// use octbuf::buffer;
///
/// let frozen = buffer![0x61, 0x62, 0x63]?.freeze();
/// let shared = frozen.clone();
///
/// let handle = std::thread::spawn(move || shared.to_string());
/// assert_eq!(handle.join().unwrap(), "61-62-63");
///
/// let mut thawed = frozen.duplicate();
/// thawed.set(1, 0x20)?;
/// assert_eq!(frozen.get(1)?, 0x62);
/// # Ok::<(), octbuf::BufferError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Frozen {
    inner: Arc<Buffer>,
}

impl Frozen {
    pub(crate) fn from_buffer(buffer: Buffer) -> Self {
        Self {
            inner: Arc::new(buffer),
        }
    }
}

impl Deref for Frozen {
    type Target = Buffer;

    fn deref(&self) -> &Buffer {
        &self.inner
    }
}

impl AsRef<[u8]> for Frozen {
    fn as_ref(&self) -> &[u8] {
        self.inner.as_slice()
    }
}

impl AsRef<Buffer> for Frozen {
    fn as_ref(&self) -> &Buffer {
        &self.inner
    }
}

impl Hash for Frozen {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl PartialEq<Buffer> for Frozen {
    fn eq(&self, other: &Buffer) -> bool {
        *self.inner == *other
    }
}

impl PartialEq<Frozen> for Buffer {
    fn eq(&self, other: &Frozen) -> bool {
        *self == *other.inner
    }
}

impl From<Frozen> for Bytes {
    fn from(frozen: Frozen) -> Self {
        frozen.pack()
    }
}

impl fmt::Debug for Frozen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

impl fmt::Display for Frozen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, f)
    }
}
