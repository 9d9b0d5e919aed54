//! Cipher families and the published parameter table.
//!
//! Simon and Speck are each published in ten (key size, block size)
//! configurations. Everything that varies per configuration (word size,
//! round count, Speck rotation amounts, Simon constant-sequence selector)
//! is fixed published data looked up here, never recomputed.

use crate::error::SimonSpeckError;

/// The two supported cipher families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherFamily {
    /// Feistel construction built on AND, rotation and XOR.
    Simon,
    /// ARX construction built on modular addition, rotation and XOR.
    Speck,
}

/// One of the ten published (key size, block size) configurations.
///
/// Variant names read `Cfg<key bits>_<block bits>`. The same ten pairs
/// exist for both families; only round counts and round-function
/// parameters differ between Simon and Speck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherConfig {
    /// 64-bit key, 32-bit block.
    Cfg64_32,
    /// 72-bit key, 48-bit block.
    Cfg72_48,
    /// 96-bit key, 48-bit block.
    Cfg96_48,
    /// 96-bit key, 64-bit block.
    Cfg96_64,
    /// 128-bit key, 64-bit block.
    Cfg128_64,
    /// 96-bit key, 96-bit block.
    Cfg96_96,
    /// 144-bit key, 96-bit block.
    Cfg144_96,
    /// 128-bit key, 128-bit block.
    Cfg128_128,
    /// 192-bit key, 128-bit block.
    Cfg192_128,
    /// 256-bit key, 128-bit block.
    Cfg256_128,
}

/// All configurations, in published table order.
pub const ALL_CONFIGS: [CipherConfig; 10] = [
    CipherConfig::Cfg64_32,
    CipherConfig::Cfg72_48,
    CipherConfig::Cfg96_48,
    CipherConfig::Cfg96_64,
    CipherConfig::Cfg128_64,
    CipherConfig::Cfg96_96,
    CipherConfig::Cfg144_96,
    CipherConfig::Cfg128_128,
    CipherConfig::Cfg192_128,
    CipherConfig::Cfg256_128,
];

impl CipherConfig {
    /// Resolves a (key size, block size) pair in bits to a configuration.
    ///
    /// # Errors
    /// Returns [`SimonSpeckError::UnsupportedConfiguration`] if the pair
    /// is not one of the ten published combinations.
    ///
    /// # Examples
    ///
    /// ```
    /// use simonspeck::CipherConfig;
    ///
    /// let cfg = CipherConfig::from_sizes(128, 128).unwrap();
    /// assert_eq!(cfg, CipherConfig::Cfg128_128);
    /// assert!(CipherConfig::from_sizes(128, 96).is_err());
    /// ```
    pub fn from_sizes(key_size: u32, block_size: u32) -> Result<Self, SimonSpeckError> {
        match (key_size, block_size) {
            (64, 32) => Ok(CipherConfig::Cfg64_32),
            (72, 48) => Ok(CipherConfig::Cfg72_48),
            (96, 48) => Ok(CipherConfig::Cfg96_48),
            (96, 64) => Ok(CipherConfig::Cfg96_64),
            (128, 64) => Ok(CipherConfig::Cfg128_64),
            (96, 96) => Ok(CipherConfig::Cfg96_96),
            (144, 96) => Ok(CipherConfig::Cfg144_96),
            (128, 128) => Ok(CipherConfig::Cfg128_128),
            (192, 128) => Ok(CipherConfig::Cfg192_128),
            (256, 128) => Ok(CipherConfig::Cfg256_128),
            _ => Err(SimonSpeckError::UnsupportedConfiguration),
        }
    }

    /// Key size in bits.
    #[must_use]
    pub const fn key_size(self) -> u32 {
        match self {
            CipherConfig::Cfg64_32 => 64,
            CipherConfig::Cfg72_48 => 72,
            CipherConfig::Cfg96_48 | CipherConfig::Cfg96_64 | CipherConfig::Cfg96_96 => 96,
            CipherConfig::Cfg128_64 | CipherConfig::Cfg128_128 => 128,
            CipherConfig::Cfg144_96 => 144,
            CipherConfig::Cfg192_128 => 192,
            CipherConfig::Cfg256_128 => 256,
        }
    }

    /// Block size in bits.
    #[must_use]
    pub const fn block_size(self) -> u32 {
        match self {
            CipherConfig::Cfg64_32 => 32,
            CipherConfig::Cfg72_48 | CipherConfig::Cfg96_48 => 48,
            CipherConfig::Cfg96_64 | CipherConfig::Cfg128_64 => 64,
            CipherConfig::Cfg96_96 | CipherConfig::Cfg144_96 => 96,
            CipherConfig::Cfg128_128 | CipherConfig::Cfg192_128 | CipherConfig::Cfg256_128 => 128,
        }
    }

    /// Word size in bits (half the block size).
    #[must_use]
    pub const fn word_size(self) -> u32 {
        self.block_size() / 2
    }

    /// Word size in bytes.
    #[must_use]
    pub const fn word_bytes(self) -> usize {
        (self.word_size() / 8) as usize
    }

    /// Block size in bytes.
    #[must_use]
    pub const fn block_bytes(self) -> usize {
        (self.block_size() / 8) as usize
    }

    /// Key size in bytes.
    #[must_use]
    pub const fn key_bytes(self) -> usize {
        (self.key_size() / 8) as usize
    }

    /// Number of words in the master key.
    #[must_use]
    pub const fn key_words(self) -> usize {
        (self.key_size() / self.word_size()) as usize
    }

    /// Published round count for the given family.
    ///
    /// Round counts differ between families for the same configuration.
    #[must_use]
    pub const fn rounds(self, family: CipherFamily) -> usize {
        match family {
            CipherFamily::Simon => match self {
                CipherConfig::Cfg64_32 => 32,
                CipherConfig::Cfg72_48 | CipherConfig::Cfg96_48 => 36,
                CipherConfig::Cfg96_64 => 42,
                CipherConfig::Cfg128_64 => 44,
                CipherConfig::Cfg96_96 => 52,
                CipherConfig::Cfg144_96 => 54,
                CipherConfig::Cfg128_128 => 68,
                CipherConfig::Cfg192_128 => 69,
                CipherConfig::Cfg256_128 => 72,
            },
            CipherFamily::Speck => match self {
                CipherConfig::Cfg64_32 | CipherConfig::Cfg72_48 => 22,
                CipherConfig::Cfg96_48 => 23,
                CipherConfig::Cfg96_64 => 26,
                CipherConfig::Cfg128_64 => 27,
                CipherConfig::Cfg96_96 => 28,
                CipherConfig::Cfg144_96 => 29,
                CipherConfig::Cfg128_128 => 32,
                CipherConfig::Cfg192_128 => 33,
                CipherConfig::Cfg256_128 => 34,
            },
        }
    }

    /// Speck rotation amounts (alpha, beta).
    ///
    /// The 32-bit-block configuration uses (7, 2); all others use (8, 3).
    #[must_use]
    pub(crate) const fn speck_rotations(self) -> (u32, u32) {
        match self {
            CipherConfig::Cfg64_32 => (7, 2),
            _ => (8, 3),
        }
    }

    /// Index of the Simon key-schedule constant sequence for this
    /// configuration.
    #[must_use]
    pub(crate) const fn simon_sequence(self) -> usize {
        match self {
            CipherConfig::Cfg64_32 | CipherConfig::Cfg72_48 => 0,
            CipherConfig::Cfg96_48 => 1,
            CipherConfig::Cfg96_64 | CipherConfig::Cfg96_96 | CipherConfig::Cfg128_128 => 2,
            CipherConfig::Cfg128_64 | CipherConfig::Cfg144_96 | CipherConfig::Cfg192_128 => 3,
            CipherConfig::Cfg256_128 => 4,
        }
    }
}
