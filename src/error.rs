//! Error types for the simonspeck library.

use std::fmt;

/// Errors produced by the simonspeck library.
///
/// Every variant is a deterministic rejection of caller input, detected
/// before any cryptographic work begins. There is no transient-failure
/// class: once a [`Cipher`](crate::Cipher) is constructed, encryption and
/// decryption of block-aligned input cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimonSpeckError {
    /// The (key size, block size) pair is not one of the ten published
    /// configurations.
    UnsupportedConfiguration,
    /// Key length does not match the configuration's key size.
    InvalidKeyLength,
    /// The selected mode requires an IV or counter that was not supplied.
    MissingChainValue,
    /// Buffer length is zero or not a multiple of the block size, or a
    /// supplied IV/counter is not exactly one block wide.
    InvalidLength,
}

impl fmt::Display for SimonSpeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimonSpeckError::UnsupportedConfiguration => {
                write!(f, "Key/block size pair is not a published configuration")
            }
            SimonSpeckError::InvalidKeyLength => {
                write!(f, "Key length does not match the configuration's key size")
            }
            SimonSpeckError::MissingChainValue => {
                write!(f, "Mode requires an IV or counter that was not supplied")
            }
            SimonSpeckError::InvalidLength => {
                write!(f, "Buffer length is not a positive multiple of the block size")
            }
        }
    }
}

impl std::error::Error for SimonSpeckError {}
