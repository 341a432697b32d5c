//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// The MAC primitive rejected its key or input
    #[error("MAC computation failed: {0}")]
    MacFailed(String),

    /// Scalar is zero or not below the curve order
    #[error("Invalid private key")]
    InvalidPrivateKey,
}
