//! FNV-1a over octets, widened to 64 bits.
//!
//! The parameters are those of 32-bit FNV-1a, but the running state is never
//! truncated to 32 bits: each step is computed modulo 2^64. That matches an
//! arbitrary-precision computation masked to 64 bits at the end, because
//! both XOR with a byte and multiplication commute with reduction mod 2^64.

/// Initial state.
pub const FNV_OFFSET_BASIS: u64 = 0x811C_9DC5;

/// Multiplier applied after each byte.
pub const FNV_PRIME: u64 = 0x0100_0193;

/// Incremental FNV-1a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv1a {
    state: u64,
}

impl Fnv1a {
    /// Creates a new hasher.
    pub const fn new() -> Self {
        Self {
            state: FNV_OFFSET_BASIS,
        }
    }

    /// Feeds more data.
    pub fn update(&mut self, data: &[u8]) {
        for &b in data {
            self.state = (self.state ^ u64::from(b)).wrapping_mul(FNV_PRIME);
        }
    }

    /// Returns the hash of everything fed so far.
    pub const fn finalize(&self) -> u64 {
        self.state
    }

    /// Resets to the initial state.
    pub fn reset(&mut self) {
        self.state = FNV_OFFSET_BASIS;
    }

    /// Hashes `data` in one shot.
    pub fn hash(data: &[u8]) -> u64 {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}

impl Default for Fnv1a {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_offset_basis() {
        assert_eq!(Fnv1a::hash(b""), FNV_OFFSET_BASIS);
    }

    #[test]
    fn test_known_values() {
        // Wider than 32 bits after a single byte.
        assert_eq!(Fnv1a::hash(b"a"), 0x0081_1D68_E40C_292C);
        assert_eq!(Fnv1a::hash(b"abc"), 0x5F17_1ED7_1A47_E90B);

        let all: Vec<u8> = (0..=255).collect();
        assert_eq!(Fnv1a::hash(&all), 0x3EE8_612D_90A4_58C5);
    }

    #[test]
    fn test_incremental_hashing() {
        let mut hasher = Fnv1a::new();
        hasher.update(b"a");
        hasher.update(b"bc");
        assert_eq!(hasher.finalize(), Fnv1a::hash(b"abc"));
    }

    #[test]
    fn test_reset() {
        let mut hasher = Fnv1a::new();
        hasher.update(b"some data");

        hasher.reset();
        hasher.update(b"abc");
        assert_eq!(hasher.finalize(), Fnv1a::hash(b"abc"));
    }
}
