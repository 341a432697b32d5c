//! # Signing Algorithm Tags
//!
//! Opaque identifiers naming a signing algorithm. The hosting keyring
//! passes these through as plain strings; only the registry decides
//! which ones are legal.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Opaque signing-algorithm identifier, compared by exact value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlgorithmTag(Cow<'static, str>);

impl AlgorithmTag {
    /// Standard secp256k1 with BIP-32 hierarchical derivation.
    pub const SECP256K1: AlgorithmTag = AlgorithmTag(Cow::Borrowed("secp256k1"));

    /// Ethereum-compatible secp256k1, single key per mnemonic.
    pub const ETH_SECP256K1: AlgorithmTag = AlgorithmTag(Cow::Borrowed("eth_secp256k1"));

    /// Wrap an arbitrary tag. Whether it is supported is up to the registry.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Cow::Owned(tag.into()))
    }

    /// Tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlgorithmTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AlgorithmTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for AlgorithmTag {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}
