//! Simon key schedule and block transform.
//!
//! Simon is a Feistel network: each block is a word pair (x, y), and one
//! round replaces x with `y ^ f(x) ^ k` while the old x becomes the new y.
//! The non-linear function is `f(x) = (rotl(x,1) & rotl(x,8)) ^ rotl(x,2)`
//! with the same three rotation amounts in every published configuration.
//!
//! The key schedule extends the `m` master-key words to one subkey per
//! round with a linear recurrence over the previous subkeys, XORed with a
//! round constant drawn bit-by-bit from one of five published 62-bit
//! periodic sequences.

use crate::config::{CipherConfig, CipherFamily};
use crate::utils::{bits, bytes};

/// The five published 62-bit constant sequences, bit-packed so that bit i
/// of the constant is element i of the sequence.
const Z_SEQUENCES: [u64; 5] = [
    0x19C3_522F_B386_A45F,
    0x1686_4FB8_AD0C_9F71,
    0x3369_F885_192C_0EF5,
    0x3C2C_E512_07A6_35DB,
    0x3DC9_4C3A_046D_678B,
];

/// Non-linear round function.
#[inline]
fn f(x: u64, n: u32) -> u64 {
    (bits::rotl(x, 1, n) & bits::rotl(x, 8, n)) ^ bits::rotl(x, 2, n)
}

/// Expands the master key into one subkey per round.
///
/// The key bytes hold `m` words, least-recent-first: the first word in
/// the byte stream is subkey 0. `key.len()` must equal the configuration's
/// key size; the caller validates this.
pub(crate) fn expand_key(key: &[u8], config: CipherConfig) -> Vec<u64> {
    let n = config.word_size();
    let word_bytes = config.word_bytes();
    let m = config.key_words();
    let rounds = config.rounds(CipherFamily::Simon);
    let z = Z_SEQUENCES[config.simon_sequence()];
    // c = 2^n - 4: the fixed part of every round constant.
    let c = bits::mask(n) ^ 0x3;

    let mut subkeys = vec![0u64; rounds];
    for (i, chunk) in key.chunks_exact(word_bytes).enumerate() {
        subkeys[i] = bytes::read_word(chunk);
    }
    for i in m..rounds {
        let mut tmp = bits::rotr(subkeys[i - 1], 3, n);
        if m == 4 {
            tmp ^= subkeys[i - 3];
        }
        tmp ^= bits::rotr(tmp, 1, n);
        subkeys[i] = subkeys[i - m] ^ tmp ^ c ^ ((z >> ((i - m) % 62)) & 1);
    }
    subkeys
}

/// Encrypts one block in place of `output`.
///
/// `input` and `output` are one block long; the block holds the word pair
/// as little-endian (y, x).
pub(crate) fn encrypt_block(subkeys: &[u64], word_size: u32, input: &[u8], output: &mut [u8]) {
    let word_bytes = input.len() / 2;
    let mut y = bytes::read_word(&input[..word_bytes]);
    let mut x = bytes::read_word(&input[word_bytes..]);

    for &k in subkeys {
        let next = y ^ f(x, word_size) ^ k;
        y = x;
        x = next;
    }

    bytes::write_word(&mut output[..word_bytes], y);
    bytes::write_word(&mut output[word_bytes..], x);
}

/// Decrypts one block in place of `output`.
///
/// The Feistel structure makes the inverse the same per-round update with
/// the operands swapped and the subkeys consumed high-to-low.
pub(crate) fn decrypt_block(subkeys: &[u64], word_size: u32, input: &[u8], output: &mut [u8]) {
    let word_bytes = input.len() / 2;
    let mut y = bytes::read_word(&input[..word_bytes]);
    let mut x = bytes::read_word(&input[word_bytes..]);

    for &k in subkeys.iter().rev() {
        let next = x ^ f(y, word_size) ^ k;
        x = y;
        y = next;
    }

    bytes::write_word(&mut output[..word_bytes], y);
    bytes::write_word(&mut output[word_bytes..], x);
}
