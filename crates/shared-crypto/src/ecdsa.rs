//! # secp256k1 Secret Scalars
//!
//! Validation and canonical serialization of secp256k1 private keys.
//!
//! ## Security Properties
//!
//! - Scalars outside `1..n` are rejected
//! - Constant-time operations (k256)
//! - Secret material zeroized on drop
//!
//! ## Use Cases
//!
//! - Normalizing HMAC output into an Ethereum-compatible private key
//! - Deriving the compressed public key for a stored private key

use crate::CryptoError;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::SecretKey;
use zeroize::Zeroizing;

/// secp256k1 secret key length in bytes.
pub const SECRET_KEY_LEN: usize = 32;

/// Compressed secp256k1 public key (33 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1PublicKey([u8; 33]);

impl Secp256k1PublicKey {
    /// Get raw compressed bytes.
    pub fn as_bytes(&self) -> &[u8; 33] {
        &self.0
    }
}

/// A validated secp256k1 secret scalar.
#[derive(Clone)]
pub struct Secp256k1SecretKey {
    inner: SecretKey,
}

impl Secp256k1SecretKey {
    /// Create from big-endian scalar bytes.
    ///
    /// Fails with [`CryptoError::InvalidPrivateKey`] if the scalar is zero
    /// or not below the curve order.
    pub fn from_bytes(bytes: &[u8; SECRET_KEY_LEN]) -> Result<Self, CryptoError> {
        let inner =
            SecretKey::from_bytes(bytes.into()).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { inner })
    }

    /// Canonical 32-byte big-endian serialization.
    pub fn to_bytes(&self) -> Zeroizing<[u8; SECRET_KEY_LEN]> {
        Zeroizing::new(self.inner.to_bytes().into())
    }

    /// Get public key (compressed, 33 bytes).
    pub fn public_key(&self) -> Secp256k1PublicKey {
        let point = self.inner.public_key().to_encoded_point(true);
        // SEC1 compressed encoding is always 33 bytes
        let mut bytes = [0u8; 33];
        bytes.copy_from_slice(point.as_bytes());
        Secp256k1PublicKey(bytes)
    }
}

impl std::fmt::Debug for Secp256k1SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secp256k1SecretKey")
            .field("scalar", &"[REDACTED]")
            .finish()
    }
}
