//! Internal utility functions and helpers.
//!
//! This module contains small helper functions used throughout the crate.
//! It is an implementation detail and not part of the public API.

/// Concatenates byte slices into one freshly allocated vector.
///
/// Used by both [`Buffer::join`](crate::Buffer::join) and
/// [`Buffer::concat`](crate::Buffer::concat), so derived buffers never share
/// storage with their inputs.
pub(crate) fn concat_slices(parts: &[&[u8]]) -> Vec<u8> {
    let total = parts.iter().map(|p| p.len()).sum();
    let mut combined = Vec::with_capacity(total);
    for part in parts {
        combined.extend_from_slice(part);
    }
    combined
}
