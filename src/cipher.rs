//! The cipher context: configuration, key schedule and mode state.
//!
//! A [`Cipher`] binds one resolved configuration, one expanded key
//! schedule and one mode of operation, and exposes encryption and
//! decryption over block-aligned byte buffers as its only operations.
//! Chaining modes advance their IV/counter state in place between calls;
//! constructing a fresh context is the only way to rewind a stream.

use crate::config::{CipherConfig, CipherFamily};
use crate::error::SimonSpeckError;
use crate::modes::{self, CipherMode};
use crate::{simon, speck};

/// Family kernel bound at construction: the expanded key schedule plus the
/// per-block transform pair for the resolved word size, so per-call code
/// never re-derives parameters.
enum BlockKernel {
    Simon {
        subkeys: Vec<u64>,
        word_size: u32,
    },
    Speck {
        subkeys: Vec<u64>,
        word_size: u32,
        alpha: u32,
        beta: u32,
    },
}

impl BlockKernel {
    fn encrypt_block(&self, input: &[u8], output: &mut [u8]) {
        match self {
            BlockKernel::Simon { subkeys, word_size } => {
                simon::encrypt_block(subkeys, *word_size, input, output);
            }
            BlockKernel::Speck {
                subkeys,
                word_size,
                alpha,
                beta,
            } => {
                speck::encrypt_block(subkeys, *word_size, *alpha, *beta, input, output);
            }
        }
    }

    fn decrypt_block(&self, input: &[u8], output: &mut [u8]) {
        match self {
            BlockKernel::Simon { subkeys, word_size } => {
                simon::decrypt_block(subkeys, *word_size, input, output);
            }
            BlockKernel::Speck {
                subkeys,
                word_size,
                alpha,
                beta,
            } => {
                speck::decrypt_block(subkeys, *word_size, *alpha, *beta, input, output);
            }
        }
    }
}

/// A Simon or Speck cipher bound to one configuration, key and mode.
///
/// # Examples
///
/// Encrypt and decrypt one block with Speck128/128 in ECB mode:
///
/// ```
/// use simonspeck::{Cipher, CipherConfig, CipherFamily, CipherMode};
///
/// let key = [0u8; 16];
/// let mut encryptor = Cipher::new(
///     CipherFamily::Speck,
///     CipherConfig::Cfg128_128,
///     CipherMode::Ecb,
///     &key,
///     None,
///     None,
/// )
/// .unwrap();
///
/// let plaintext = [0u8; 16];
/// let ciphertext = encryptor.encrypt(&plaintext).unwrap();
/// assert_ne!(ciphertext, plaintext);
///
/// let mut decryptor = Cipher::new(
///     CipherFamily::Speck,
///     CipherConfig::Cfg128_128,
///     CipherMode::Ecb,
///     &key,
///     None,
///     None,
/// )
/// .unwrap();
/// assert_eq!(decryptor.decrypt(&ciphertext).unwrap(), plaintext);
/// ```
///
/// Chaining modes require an IV one block wide:
///
/// ```
/// use simonspeck::{Cipher, CipherConfig, CipherFamily, CipherMode};
///
/// let key = [0x2Au8; 8];
/// let iv = [0x17u8; 4];
/// let mut cipher = Cipher::new(
///     CipherFamily::Simon,
///     CipherConfig::Cfg64_32,
///     CipherMode::Cbc,
///     &key,
///     Some(&iv),
///     None,
/// )
/// .unwrap();
/// let ciphertext = cipher.encrypt(&[0u8; 12]).unwrap();
/// assert_eq!(ciphertext.len(), 12);
/// ```
pub struct Cipher {
    family: CipherFamily,
    config: CipherConfig,
    mode: CipherMode,
    kernel: BlockKernel,
    /// IV, previous block, or counter, depending on the mode; empty for ECB.
    chain: Vec<u8>,
}

impl Cipher {
    /// Creates a cipher context for the given family, configuration and
    /// mode, expanding the key schedule once.
    ///
    /// # Parameters
    /// - `key`: Master key, exactly the configuration's key size.
    /// - `iv`: Initialization vector, one block wide; required by CBC, CFB
    ///   and OFB, ignored otherwise.
    /// - `counter`: Initial counter block, one block wide; required by CTR,
    ///   ignored otherwise.
    ///
    /// # Errors
    /// - [`SimonSpeckError::InvalidKeyLength`] if the key length does not
    ///   match the configuration.
    /// - [`SimonSpeckError::MissingChainValue`] if the mode requires an IV
    ///   or counter that was not supplied.
    /// - [`SimonSpeckError::InvalidLength`] if a supplied IV or counter is
    ///   not exactly one block wide.
    pub fn new(
        family: CipherFamily,
        config: CipherConfig,
        mode: CipherMode,
        key: &[u8],
        iv: Option<&[u8]>,
        counter: Option<&[u8]>,
    ) -> Result<Self, SimonSpeckError> {
        if key.len() != config.key_bytes() {
            return Err(SimonSpeckError::InvalidKeyLength);
        }

        let chain = if mode.requires_iv() {
            Self::check_chain_value(iv, config)?
        } else if mode.requires_counter() {
            Self::check_chain_value(counter, config)?
        } else {
            Vec::new()
        };

        let word_size = config.word_size();
        let kernel = match family {
            CipherFamily::Simon => BlockKernel::Simon {
                subkeys: simon::expand_key(key, config),
                word_size,
            },
            CipherFamily::Speck => {
                let (alpha, beta) = config.speck_rotations();
                BlockKernel::Speck {
                    subkeys: speck::expand_key(key, config),
                    word_size,
                    alpha,
                    beta,
                }
            }
        };

        Ok(Cipher {
            family,
            config,
            mode,
            kernel,
            chain,
        })
    }

    fn check_chain_value(
        value: Option<&[u8]>,
        config: CipherConfig,
    ) -> Result<Vec<u8>, SimonSpeckError> {
        let value = value.ok_or(SimonSpeckError::MissingChainValue)?;
        if value.len() != config.block_bytes() {
            return Err(SimonSpeckError::InvalidLength);
        }
        Ok(value.to_vec())
    }

    /// Encrypts a block-aligned buffer, advancing any chain state.
    ///
    /// # Errors
    /// Returns [`SimonSpeckError::InvalidLength`] if the buffer is empty
    /// or not a whole number of blocks. On error no output is produced and
    /// chain state is untouched.
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>, SimonSpeckError> {
        let block_bytes = self.config.block_bytes();
        modes::check_alignment(plaintext.len(), block_bytes)?;

        let mut ciphertext = vec![0u8; plaintext.len()];
        let kernel = &self.kernel;
        modes::encrypt_blocks(
            self.mode,
            block_bytes,
            &mut self.chain,
            plaintext,
            &mut ciphertext,
            |input, output| kernel.encrypt_block(input, output),
        );
        Ok(ciphertext)
    }

    /// Decrypts a block-aligned buffer, advancing any chain state.
    ///
    /// # Errors
    /// Returns [`SimonSpeckError::InvalidLength`] if the buffer is empty
    /// or not a whole number of blocks. On error no output is produced and
    /// chain state is untouched.
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>, SimonSpeckError> {
        let block_bytes = self.config.block_bytes();
        modes::check_alignment(ciphertext.len(), block_bytes)?;

        let mut plaintext = vec![0u8; ciphertext.len()];
        let kernel = &self.kernel;
        modes::decrypt_blocks(
            self.mode,
            block_bytes,
            &mut self.chain,
            ciphertext,
            &mut plaintext,
            |input, output| kernel.encrypt_block(input, output),
            |input, output| kernel.decrypt_block(input, output),
        );
        Ok(plaintext)
    }

    /// The cipher family this context was built for.
    #[must_use]
    pub fn family(&self) -> CipherFamily {
        self.family
    }

    /// The (key size, block size) configuration of this context.
    #[must_use]
    pub fn config(&self) -> CipherConfig {
        self.config
    }

    /// The mode of operation of this context.
    #[must_use]
    pub fn mode(&self) -> CipherMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_128: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E,
        0x0F,
    ];

    fn speck_ecb() -> Cipher {
        Cipher::new(
            CipherFamily::Speck,
            CipherConfig::Cfg128_128,
            CipherMode::Ecb,
            &KEY_128,
            None,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_wrong_key_length() {
        let result = Cipher::new(
            CipherFamily::Speck,
            CipherConfig::Cfg128_128,
            CipherMode::Ecb,
            &KEY_128[..15],
            None,
            None,
        );
        assert_eq!(result.err(), Some(SimonSpeckError::InvalidKeyLength));
    }

    #[test]
    fn test_new_rejects_missing_iv() {
        let result = Cipher::new(
            CipherFamily::Simon,
            CipherConfig::Cfg128_128,
            CipherMode::Cbc,
            &KEY_128,
            None,
            None,
        );
        assert_eq!(result.err(), Some(SimonSpeckError::MissingChainValue));
    }

    #[test]
    fn test_new_rejects_missing_counter() {
        let result = Cipher::new(
            CipherFamily::Speck,
            CipherConfig::Cfg128_128,
            CipherMode::Ctr,
            &KEY_128,
            Some(&[0u8; 16]),
            None,
        );
        assert_eq!(result.err(), Some(SimonSpeckError::MissingChainValue));
    }

    #[test]
    fn test_new_rejects_missized_iv() {
        let result = Cipher::new(
            CipherFamily::Speck,
            CipherConfig::Cfg128_128,
            CipherMode::Ofb,
            &KEY_128,
            Some(&[0u8; 8]),
            None,
        );
        assert_eq!(result.err(), Some(SimonSpeckError::InvalidLength));
    }

    #[test]
    fn test_encrypt_rejects_empty_buffer() {
        let mut cipher = speck_ecb();
        assert_eq!(
            cipher.encrypt(&[]).err(),
            Some(SimonSpeckError::InvalidLength)
        );
    }

    #[test]
    fn test_encrypt_rejects_unaligned_buffer() {
        let mut cipher = speck_ecb();
        assert_eq!(
            cipher.encrypt(&[0u8; 20]).err(),
            Some(SimonSpeckError::InvalidLength)
        );
        assert_eq!(
            cipher.decrypt(&[0u8; 20]).err(),
            Some(SimonSpeckError::InvalidLength)
        );
    }

    #[test]
    fn test_accessors() {
        let cipher = speck_ecb();
        assert_eq!(cipher.family(), CipherFamily::Speck);
        assert_eq!(cipher.config(), CipherConfig::Cfg128_128);
        assert_eq!(cipher.mode(), CipherMode::Ecb);
    }
}
