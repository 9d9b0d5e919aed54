//! Simon and Speck lightweight block ciphers.
//!
//! This crate implements both NSA lightweight block-cipher families across
//! their full published parameter space: ten (key size, block size)
//! configurations per family, from 32-bit up to 128-bit blocks, with five
//! classic modes of operation (ECB, CTR, CBC, CFB, OFB). Output is
//! bit-exact with the published reference vectors for every configuration.
//!
//! # Architecture
//!
//! ```text
//! utils::bits   (word arithmetic — rotate/add/sub masked to 16..64 bits)
//!     ↑ used by
//! simon / speck (key schedule + single-block round transforms)
//!     ↑ driven by
//! modes         (ECB/CTR/CBC/CFB/OFB chaining over whole messages)
//!     ↑ owned by
//! Cipher        (context — configuration + key schedule + chain state)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with Simon128/128 in CTR mode:
//!
//! ```
//! use simonspeck::{Cipher, CipherConfig, CipherFamily, CipherMode};
//!
//! let key = *b"my 16-byte key!!";
//! let counter = [0u8; 16];
//!
//! let mut encryptor = Cipher::new(
//!     CipherFamily::Simon,
//!     CipherConfig::Cfg128_128,
//!     CipherMode::Ctr,
//!     &key,
//!     None,
//!     Some(&counter),
//! )
//! .unwrap();
//!
//! let plaintext = *b"exactly two blocks of plaintext!";
//! let ciphertext = encryptor.encrypt(&plaintext).unwrap();
//!
//! let mut decryptor = Cipher::new(
//!     CipherFamily::Simon,
//!     CipherConfig::Cfg128_128,
//!     CipherMode::Ctr,
//!     &key,
//!     None,
//!     Some(&counter),
//! )
//! .unwrap();
//! assert_eq!(decryptor.decrypt(&ciphertext).unwrap(), plaintext);
//! ```
//!
//! Resolve a configuration from raw sizes:
//!
//! ```
//! use simonspeck::CipherConfig;
//!
//! assert!(CipherConfig::from_sizes(96, 48).is_ok());
//! assert!(CipherConfig::from_sizes(80, 48).is_err());
//! ```
//!
//! # Scope
//!
//! The engine works on block-aligned buffers and leaves padding, key/IV
//! generation and transport to the caller. It makes no constant-time
//! guarantees; both families are research ciphers for constrained
//! environments, not hardened production primitives.

#![deny(clippy::all)]

pub mod error;

mod cipher;
mod config;
mod modes;
pub(crate) mod simon;
pub(crate) mod speck;
pub(crate) mod utils;

pub use cipher::Cipher;
pub use config::{CipherConfig, CipherFamily, ALL_CONFIGS};
pub use error::SimonSpeckError;
pub use modes::CipherMode;
