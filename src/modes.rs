//! Modes of operation.
//!
//! Drives a single-block transform over a message that is a whole number
//! of blocks, implementing ECB, CTR, CBC, CFB and OFB chaining. The block
//! transform is supplied by the caller as a closure pair, so this layer
//! never branches on cipher family or word size.
//!
//! Chain state (previous ciphertext block, keystream block, or counter) is
//! mutated in place after every block, so successive calls on the same
//! state continue the stream.

use crate::error::SimonSpeckError;

/// The five supported modes of operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    /// Electronic codebook: each block independent. No chain value.
    Ecb,
    /// Counter: XOR with encrypted big-endian counter. Requires a counter.
    Ctr,
    /// Cipher block chaining. Requires an IV.
    Cbc,
    /// Cipher feedback. Requires an IV.
    Cfb,
    /// Output feedback. Requires an IV.
    Ofb,
}

impl CipherMode {
    /// Whether the mode chains on an initialization vector.
    #[must_use]
    pub const fn requires_iv(self) -> bool {
        matches!(self, CipherMode::Cbc | CipherMode::Cfb | CipherMode::Ofb)
    }

    /// Whether the mode consumes a counter block.
    #[must_use]
    pub const fn requires_counter(self) -> bool {
        matches!(self, CipherMode::Ctr)
    }
}

/// Rejects buffers the block layer cannot process.
///
/// # Errors
/// Returns [`SimonSpeckError::InvalidLength`] if `len` is zero or not a
/// multiple of `block_bytes`.
pub(crate) fn check_alignment(len: usize, block_bytes: usize) -> Result<(), SimonSpeckError> {
    if len == 0 || !len.is_multiple_of(block_bytes) {
        return Err(SimonSpeckError::InvalidLength);
    }
    Ok(())
}

/// Increments a counter block as one big-endian integer, wrapping to all
/// zeros on overflow.
pub(crate) fn increment_counter(counter: &mut [u8]) {
    for byte in counter.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
}

/// XORs `src` into `dst` byte-wise.
#[inline]
fn xor_into(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}

/// Encrypts a block-aligned message, advancing `chain` in place.
///
/// `forward` is the single-block encryption transform; every mode's
/// encryption direction is built from it alone. For ECB `chain` is empty
/// and untouched.
pub(crate) fn encrypt_blocks<F>(
    mode: CipherMode,
    block_bytes: usize,
    chain: &mut [u8],
    input: &[u8],
    output: &mut [u8],
    mut forward: F,
) where
    F: FnMut(&[u8], &mut [u8]),
{
    let mut scratch = vec![0u8; block_bytes];

    for (pt, ct) in input
        .chunks_exact(block_bytes)
        .zip(output.chunks_exact_mut(block_bytes))
    {
        match mode {
            CipherMode::Ecb => forward(pt, ct),
            CipherMode::Cbc => {
                scratch.copy_from_slice(pt);
                xor_into(&mut scratch, chain);
                forward(&scratch, ct);
                chain.copy_from_slice(ct);
            }
            CipherMode::Cfb => {
                forward(chain, &mut scratch);
                ct.copy_from_slice(pt);
                xor_into(ct, &scratch);
                chain.copy_from_slice(ct);
            }
            CipherMode::Ofb => {
                forward(chain, &mut scratch);
                chain.copy_from_slice(&scratch);
                ct.copy_from_slice(pt);
                xor_into(ct, &scratch);
            }
            CipherMode::Ctr => {
                forward(chain, &mut scratch);
                ct.copy_from_slice(pt);
                xor_into(ct, &scratch);
                increment_counter(chain);
            }
        }
    }
}

/// Decrypts a block-aligned message, advancing `chain` in place.
///
/// `forward` is the single-block encryption transform (CFB, OFB and CTR
/// decrypt with it); `inverse` is the decryption transform, used only by
/// ECB and CBC.
pub(crate) fn decrypt_blocks<F, I>(
    mode: CipherMode,
    block_bytes: usize,
    chain: &mut [u8],
    input: &[u8],
    output: &mut [u8],
    mut forward: F,
    mut inverse: I,
) where
    F: FnMut(&[u8], &mut [u8]),
    I: FnMut(&[u8], &mut [u8]),
{
    let mut scratch = vec![0u8; block_bytes];

    for (ct, pt) in input
        .chunks_exact(block_bytes)
        .zip(output.chunks_exact_mut(block_bytes))
    {
        match mode {
            CipherMode::Ecb => inverse(ct, pt),
            CipherMode::Cbc => {
                inverse(ct, pt);
                xor_into(pt, chain);
                chain.copy_from_slice(ct);
            }
            CipherMode::Cfb => {
                forward(chain, &mut scratch);
                pt.copy_from_slice(ct);
                xor_into(pt, &scratch);
                chain.copy_from_slice(ct);
            }
            CipherMode::Ofb => {
                forward(chain, &mut scratch);
                chain.copy_from_slice(&scratch);
                pt.copy_from_slice(ct);
                xor_into(pt, &scratch);
            }
            CipherMode::Ctr => {
                forward(chain, &mut scratch);
                pt.copy_from_slice(ct);
                xor_into(pt, &scratch);
                increment_counter(chain);
            }
        }
    }
}
