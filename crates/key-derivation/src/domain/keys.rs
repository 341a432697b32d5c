//! # Key Material
//!
//! Raw derived scalars and algorithm-tagged private keys.

use crate::domain::algorithm::AlgorithmTag;
use crate::domain::errors::{DerivationError, DerivationResult};
use shared_crypto::{Secp256k1PublicKey, Secp256k1SecretKey, SECRET_KEY_LEN};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Registered name of the Ethereum-compatible private key type.
pub const ETH_PRIV_KEY_NAME: &str = "ethermint/PrivKeySecp256k1";

/// Registered name of the Ethereum-compatible public key type.
pub const ETH_PUB_KEY_NAME: &str = "ethermint/PubKeySecp256k1";

/// Registered name of the standard private key type.
pub const STD_PRIV_KEY_NAME: &str = "tendermint/PrivKeySecp256k1";

/// Registered name of the standard public key type.
pub const STD_PUB_KEY_NAME: &str = "tendermint/PubKeySecp256k1";

/// 32-byte secp256k1 scalar produced by a derivation strategy.
pub struct PrivateKeyBytes(Zeroizing<[u8; SECRET_KEY_LEN]>);

impl PrivateKeyBytes {
    /// Wrap scalar bytes.
    pub fn new(bytes: [u8; SECRET_KEY_LEN]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    /// Copy from a slice, checking the length.
    pub fn from_slice(bytes: &[u8]) -> DerivationResult<Self> {
        let array: [u8; SECRET_KEY_LEN] =
            bytes.try_into().map_err(|_| DerivationError::InvalidKeyLength {
                expected: SECRET_KEY_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self::new(array))
    }

    /// Raw scalar bytes.
    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_LEN] {
        &self.0
    }
}

impl PartialEq for PrivateKeyBytes {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes()[..].ct_eq(&other.as_bytes()[..]).into()
    }
}

impl Eq for PrivateKeyBytes {}

impl std::fmt::Debug for PrivateKeyBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PrivateKeyBytes").field(&"[REDACTED]").finish()
    }
}

/// Private key tagged with the algorithm it was constructed under.
///
/// Only [`Keygen`](crate::domain::keygen::Keygen) builds these, after
/// checking the tag, so the tag always matches the strategy that produced
/// the bytes.
#[derive(PartialEq, Eq)]
pub struct TypedPrivateKey {
    algorithm: AlgorithmTag,
    bytes: PrivateKeyBytes,
}

impl TypedPrivateKey {
    pub(crate) fn new(algorithm: AlgorithmTag, bytes: PrivateKeyBytes) -> Self {
        Self { algorithm, bytes }
    }

    /// Algorithm this key belongs to.
    pub fn algorithm(&self) -> &AlgorithmTag {
        &self.algorithm
    }

    /// Raw scalar bytes.
    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_LEN] {
        self.bytes.as_bytes()
    }

    /// Registered type name for this key, if the algorithm has one.
    pub fn type_name(&self) -> Option<&'static str> {
        self.type_names().map(|(private, _)| private)
    }

    /// Registered type name for the matching public key.
    pub fn public_key_type_name(&self) -> Option<&'static str> {
        self.type_names().map(|(_, public)| public)
    }

    fn type_names(&self) -> Option<(&'static str, &'static str)> {
        if self.algorithm == AlgorithmTag::ETH_SECP256K1 {
            Some((ETH_PRIV_KEY_NAME, ETH_PUB_KEY_NAME))
        } else if self.algorithm == AlgorithmTag::SECP256K1 {
            Some((STD_PRIV_KEY_NAME, STD_PUB_KEY_NAME))
        } else {
            None
        }
    }

    /// Compressed secp256k1 public key.
    ///
    /// # Errors
    /// * `DerivationError::InvalidScalar` - bytes are not a valid secp256k1 key
    pub fn public_key(&self) -> DerivationResult<Secp256k1PublicKey> {
        let secret = Secp256k1SecretKey::from_bytes(self.bytes.as_bytes())
            .map_err(|_| DerivationError::InvalidScalar)?;
        Ok(secret.public_key())
    }
}

impl std::fmt::Debug for TypedPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedPrivateKey")
            .field("algorithm", &self.algorithm)
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
