//! # Derivation Errors
//!
//! Error types for mnemonic validation, key derivation and keygen.
//!
//! No error here is transient: every operation is a pure function of its
//! inputs, so a failure on one input fails the same way on retry.

use crate::domain::algorithm::AlgorithmTag;
use thiserror::Error;

/// Why a mnemonic phrase was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MnemonicFault {
    /// Word count is not 12, 15, 18, 21 or 24
    #[error("invalid word count {0}")]
    WordCount(usize),

    /// Word at this index is not in the wordlist
    #[error("unknown word at index {0}")]
    UnknownWord(usize),

    /// Checksum bits do not match the entropy
    #[error("checksum mismatch")]
    Checksum,

    /// Any other BIP-39 parse failure
    #[error("{0}")]
    Other(String),
}

impl From<bip39::Error> for MnemonicFault {
    fn from(err: bip39::Error) -> Self {
        match err {
            bip39::Error::BadWordCount(count) => MnemonicFault::WordCount(count),
            bip39::Error::UnknownWord(index) => MnemonicFault::UnknownWord(index),
            bip39::Error::InvalidChecksum => MnemonicFault::Checksum,
            other => MnemonicFault::Other(other.to_string()),
        }
    }
}

/// Errors that can occur while deriving or constructing keys.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DerivationError {
    /// The mnemonic failed BIP-39 validation (caller input error)
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(#[from] MnemonicFault),

    /// The algorithm tag is not registered
    #[error("Unsupported signing algorithm: {tag}")]
    UnsupportedAlgorithm { tag: AlgorithmTag },

    /// The keyed hash primitive could not consume the seed
    #[error("Seed expansion failed: {reason}")]
    SeedExpansionFailed { reason: String },

    /// Derived bytes are not a valid secp256k1 private key
    #[error("Derived bytes are not a valid secp256k1 scalar")]
    InvalidScalar,

    /// Keygen was asked to build a key for a different algorithm
    #[error("Signing algorithm must be {expected}, got {received}")]
    AlgorithmMismatch {
        expected: AlgorithmTag,
        received: AlgorithmTag,
    },

    /// The hierarchical path could not be parsed or walked
    #[error("Invalid HD path '{path}': {reason}")]
    InvalidHdPath { path: String, reason: String },

    /// Raw key bytes have the wrong length
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// The same tag was registered twice
    #[error("Signing algorithm registered twice: {tag}")]
    DuplicateAlgorithm { tag: AlgorithmTag },
}

/// Result alias for derivation operations.
pub type DerivationResult<T> = Result<T, DerivationError>;
