//! Speck key schedule and block transform.
//!
//! Speck is a pure ARX design: one round is two rotations, one modular
//! addition and two XORs over the word pair (x, y). The key schedule is
//! the round function itself, iterated over the key words with the round
//! index standing in for the subkey, so both share one code path.

use crate::config::{CipherConfig, CipherFamily};
use crate::utils::{bits, bytes};

/// One forward round: `x = (rotr(x, alpha) + y) ^ k; y = rotl(y, beta) ^ x`.
#[inline]
fn round_enc(x: u64, y: u64, k: u64, alpha: u32, beta: u32, n: u32) -> (u64, u64) {
    let x = bits::add(bits::rotr(x, alpha, n), y, n) ^ k;
    let y = bits::rotl(y, beta, n) ^ x;
    (x, y)
}

/// One inverse round: recovers the pre-round (x, y) from a round output.
#[inline]
fn round_dec(x: u64, y: u64, k: u64, alpha: u32, beta: u32, n: u32) -> (u64, u64) {
    let y = bits::rotr(y ^ x, beta, n);
    let x = bits::rotl(bits::sub(x ^ k, y, n), alpha, n);
    (x, y)
}

/// Expands the master key into one subkey per round.
///
/// The first key word is the running subkey word; the remaining `m - 1`
/// words feed the recurrence in rotation. Each round's subkey is emitted
/// before the round function advances the state, so the transform run on
/// the final round is discarded.
pub(crate) fn expand_key(key: &[u8], config: CipherConfig) -> Vec<u64> {
    let n = config.word_size();
    let word_bytes = config.word_bytes();
    let m = config.key_words();
    let rounds = config.rounds(CipherFamily::Speck);
    let (alpha, beta) = config.speck_rotations();

    let mut k = bytes::read_word(&key[..word_bytes]);
    let mut l: Vec<u64> = key[word_bytes..]
        .chunks_exact(word_bytes)
        .map(bytes::read_word)
        .collect();

    let mut subkeys = Vec::with_capacity(rounds);
    for i in 0..rounds {
        subkeys.push(k);
        let j = i % (m - 1);
        let (nl, nk) = round_enc(l[j], k, i as u64, alpha, beta, n);
        l[j] = nl;
        k = nk;
    }
    subkeys
}

/// Encrypts one block into `output`.
///
/// `input` and `output` are one block long; the block holds the word pair
/// as little-endian (y, x).
pub(crate) fn encrypt_block(
    subkeys: &[u64],
    word_size: u32,
    alpha: u32,
    beta: u32,
    input: &[u8],
    output: &mut [u8],
) {
    let word_bytes = input.len() / 2;
    let mut y = bytes::read_word(&input[..word_bytes]);
    let mut x = bytes::read_word(&input[word_bytes..]);

    for &k in subkeys {
        let (nx, ny) = round_enc(x, y, k, alpha, beta, word_size);
        x = nx;
        y = ny;
    }

    bytes::write_word(&mut output[..word_bytes], y);
    bytes::write_word(&mut output[word_bytes..], x);
}

/// Decrypts one block into `output`, consuming subkeys high-to-low.
pub(crate) fn decrypt_block(
    subkeys: &[u64],
    word_size: u32,
    alpha: u32,
    beta: u32,
    input: &[u8],
    output: &mut [u8],
) {
    let word_bytes = input.len() / 2;
    let mut y = bytes::read_word(&input[..word_bytes]);
    let mut x = bytes::read_word(&input[word_bytes..]);

    for &k in subkeys.iter().rev() {
        let (nx, ny) = round_dec(x, y, k, alpha, beta, word_size);
        x = nx;
        y = ny;
    }

    bytes::write_word(&mut output[..word_bytes], y);
    bytes::write_word(&mut output[word_bytes..], x);
}
