//! # Keygen / Validator
//!
//! Wraps derived bytes into a [`TypedPrivateKey`] after checking that the
//! caller's algorithm tag is the one this keygen is bound to.

use crate::domain::algorithm::AlgorithmTag;
use crate::domain::errors::{DerivationError, DerivationResult};
use crate::domain::keys::{PrivateKeyBytes, TypedPrivateKey};

/// Key constructor bound to exactly one algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keygen {
    algorithm: AlgorithmTag,
}

impl Keygen {
    /// Create a keygen that only accepts `algorithm`.
    pub fn bound_to(algorithm: AlgorithmTag) -> Self {
        Self { algorithm }
    }

    /// Keygen for `eth_secp256k1` keys.
    pub fn eth_secp256k1() -> Self {
        Self::bound_to(AlgorithmTag::ETH_SECP256K1)
    }

    /// The algorithm this keygen accepts.
    pub fn algorithm(&self) -> &AlgorithmTag {
        &self.algorithm
    }

    /// Construct a typed key from raw bytes.
    ///
    /// No cryptographic transformation happens here; derivation is done
    /// upstream.
    ///
    /// # Errors
    /// * `AlgorithmMismatch` - `tag` differs from the bound algorithm (checked first)
    /// * `InvalidKeyLength` - `bytes` is not 32 bytes long
    pub fn construct(&self, bytes: &[u8], tag: &AlgorithmTag) -> DerivationResult<TypedPrivateKey> {
        if *tag != self.algorithm {
            return Err(DerivationError::AlgorithmMismatch {
                expected: self.algorithm.clone(),
                received: tag.clone(),
            });
        }

        let bytes = PrivateKeyBytes::from_slice(bytes)?;
        Ok(TypedPrivateKey::new(self.algorithm.clone(), bytes))
    }
}
