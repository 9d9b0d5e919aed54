//! Byte-slice to word conversion.
//!
//! Multi-byte words are little-endian on the wire: the first byte of a
//! word is its least significant. Word widths of 3 and 6 bytes (the 24-
//! and 48-bit configurations) make the built-in `from_le_bytes` family
//! unusable, so assembly is done a byte at a time for every width.

/// Assembles a word from a little-endian byte slice.
///
/// # Parameters
/// - `bytes`: The word's bytes, least significant first; 2 to 8 bytes.
///
/// # Returns
/// The word value in `u64` storage with all bytes above `bytes.len()` zero.
#[inline]
pub(crate) fn read_word(bytes: &[u8]) -> u64 {
    let mut value: u64 = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        value |= (byte as u64) << (8 * i);
    }
    value
}

/// Writes the low `out.len()` bytes of a word, least significant first.
///
/// # Parameters
/// - `out`: Destination slice; its length selects how many bytes to write.
/// - `value`: The word value to serialize.
#[inline]
pub(crate) fn write_word(out: &mut [u8], value: u64) {
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = (value >> (8 * i)) as u8;
    }
}
