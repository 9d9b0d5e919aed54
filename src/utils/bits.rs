//! Width-generic word arithmetic.
//!
//! Simon and Speck operate on words of 16, 24, 32, 48 or 64 bits. The 24-
//! and 48-bit widths have no native machine representation, so every word
//! is carried in `u64` storage and re-masked to its logical width after
//! each operation. This module is the only place that masking lives;
//! everything above it is written purely in terms of these operations and
//! never needs to know a word is narrower than its storage.
//!
//! Invariant: given operands with all bits above `word_size` clear, every
//! function returns a value with all bits above `word_size` clear.

/// Returns the all-ones mask for a logical word of `word_size` bits.
#[inline]
pub(crate) fn mask(word_size: u32) -> u64 {
    if word_size >= 64 {
        u64::MAX
    } else {
        (1u64 << word_size) - 1
    }
}

/// Rotates a word left by `shift` bit positions within its logical width.
///
/// The shift amount is reduced modulo `word_size` before use.
#[inline]
pub(crate) fn rotl(value: u64, shift: u32, word_size: u32) -> u64 {
    let shift = shift % word_size;
    if shift == 0 {
        return value & mask(word_size);
    }
    ((value << shift) | (value >> (word_size - shift))) & mask(word_size)
}

/// Rotates a word right by `shift` bit positions within its logical width.
///
/// The shift amount is reduced modulo `word_size` before use.
#[inline]
pub(crate) fn rotr(value: u64, shift: u32, word_size: u32) -> u64 {
    let shift = shift % word_size;
    if shift == 0 {
        return value & mask(word_size);
    }
    ((value >> shift) | (value << (word_size - shift))) & mask(word_size)
}

/// Adds two words modulo 2^`word_size`.
#[inline]
pub(crate) fn add(a: u64, b: u64, word_size: u32) -> u64 {
    a.wrapping_add(b) & mask(word_size)
}

/// Subtracts `b` from `a` modulo 2^`word_size`.
#[inline]
pub(crate) fn sub(a: u64, b: u64, word_size: u32) -> u64 {
    a.wrapping_sub(b) & mask(word_size)
}
