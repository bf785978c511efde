//! BLAKE3 content digests.

use super::Digest;

/// A hasher that computes BLAKE3 digests.
#[derive(Debug, Clone)]
pub(crate) struct Blake3Hasher {
    state: blake3::Hasher,
}

impl Blake3Hasher {
    /// Creates a hasher in keyed mode.
    pub(crate) fn new_keyed(key: &[u8; Digest::SIZE]) -> Self {
        Self {
            state: blake3::Hasher::new_keyed(key),
        }
    }

    pub(crate) fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    pub(crate) fn finalize(&self) -> Digest {
        Digest::new(self.state.finalize().into())
    }

    /// Hashes `data` in one shot.
    pub(crate) fn hash(data: &[u8]) -> Digest {
        Digest::new(blake3::hash(data).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash() {
        let digest = Blake3Hasher::hash(b"abc");
        assert_eq!(digest, Blake3Hasher::hash(b"abc"));
        assert_ne!(digest, Blake3Hasher::hash(b"abd"));
    }

    #[test]
    fn test_keyed_differs_from_plain() {
        let mut hasher = Blake3Hasher::new_keyed(&[7u8; 32]);
        hasher.update(b"abc");
        assert_ne!(hasher.finalize(), Blake3Hasher::hash(b"abc"));
    }

    #[test]
    fn test_keyed_matches_reference() {
        let key = [0x42u8; 32];
        let mut hasher = Blake3Hasher::new_keyed(&key);
        hasher.update(b"ab");
        hasher.update(b"c");
        let expected: [u8; 32] = blake3::keyed_hash(&key, b"abc").into();
        assert_eq!(hasher.finalize().as_bytes(), &expected);
    }
}
