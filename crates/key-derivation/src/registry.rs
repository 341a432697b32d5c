//! # Algorithm Registry
//!
//! Maps each supported [`AlgorithmTag`] to its derivation strategy and
//! keygen. Built once, then shared read-only (usually behind an `Arc`).
//!
//! ## Invariants
//!
//! - Every supported tag has exactly one entry
//! - The ledger subset only names supported tags
//! - Lookups outside the set fail; there is no default algorithm

use crate::domain::algorithm::AlgorithmTag;
use crate::domain::errors::{DerivationError, DerivationResult};
use crate::domain::keygen::Keygen;
use crate::domain::keys::{PrivateKeyBytes, TypedPrivateKey};
use crate::domain::strategy::DerivationStrategy;
use std::sync::Arc;
use tracing::warn;

/// One registered algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlgorithmEntry {
    tag: AlgorithmTag,
    strategy: DerivationStrategy,
    keygen: Keygen,
}

impl AlgorithmEntry {
    /// Register `tag` with `strategy`; the keygen is bound to `tag`.
    pub fn new(tag: AlgorithmTag, strategy: DerivationStrategy) -> Self {
        let keygen = Keygen::bound_to(tag.clone());
        Self {
            tag,
            strategy,
            keygen,
        }
    }

    /// Registered tag.
    pub fn tag(&self) -> &AlgorithmTag {
        &self.tag
    }

    /// Derivation strategy for this tag.
    pub fn strategy(&self) -> DerivationStrategy {
        self.strategy
    }

    /// Keygen bound to this tag.
    pub fn keygen(&self) -> &Keygen {
        &self.keygen
    }
}

/// Immutable registry of supported signing algorithms.
#[derive(Debug)]
pub struct AlgorithmRegistry {
    entries: Vec<AlgorithmEntry>,
    supported: Vec<AlgorithmTag>,
    supported_ledger: Vec<AlgorithmTag>,
}

impl AlgorithmRegistry {
    /// Build a registry from entries in registration order.
    ///
    /// # Errors
    /// * `DuplicateAlgorithm` - a tag appears twice in `entries`
    /// * `UnsupportedAlgorithm` - `ledger` names a tag not in `entries`
    pub fn new(entries: Vec<AlgorithmEntry>, ledger: Vec<AlgorithmTag>) -> DerivationResult<Self> {
        let mut supported: Vec<AlgorithmTag> = Vec::with_capacity(entries.len());
        for entry in &entries {
            if supported.contains(&entry.tag) {
                return Err(DerivationError::DuplicateAlgorithm {
                    tag: entry.tag.clone(),
                });
            }
            supported.push(entry.tag.clone());
        }

        if let Some(unknown) = ledger.iter().find(|tag| !supported.contains(tag)) {
            return Err(DerivationError::UnsupportedAlgorithm {
                tag: unknown.clone(),
            });
        }

        Ok(Self {
            entries,
            supported,
            supported_ledger: ledger,
        })
    }

    /// Ethereum-compatible keyring: `eth_secp256k1` then `secp256k1`,
    /// both also allowed on ledger devices.
    pub fn ethermint() -> Self {
        let supported = vec![AlgorithmTag::ETH_SECP256K1, AlgorithmTag::SECP256K1];
        let entries = vec![
            AlgorithmEntry::new(AlgorithmTag::ETH_SECP256K1, DerivationStrategy::EthCompatible),
            AlgorithmEntry::new(AlgorithmTag::SECP256K1, DerivationStrategy::Standard),
        ];

        Self {
            entries,
            supported_ledger: supported.clone(),
            supported,
        }
    }

    /// Look up the entry for `tag`.
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - `tag` is not registered
    pub fn resolve(&self, tag: &AlgorithmTag) -> DerivationResult<&AlgorithmEntry> {
        self.entries
            .iter()
            .find(|entry| entry.tag == *tag)
            .ok_or_else(|| {
                warn!(algorithm = %tag, "unsupported signing algorithm requested");
                DerivationError::UnsupportedAlgorithm { tag: tag.clone() }
            })
    }

    /// Whether `tag` is registered.
    pub fn is_supported(&self, tag: &AlgorithmTag) -> bool {
        self.supported.contains(tag)
    }

    /// Supported tags in registration order.
    pub fn supported_algorithms(&self) -> &[AlgorithmTag] {
        &self.supported
    }

    /// Tags allowed for hardware signers.
    pub fn supported_algorithms_ledger(&self) -> &[AlgorithmTag] {
        &self.supported_ledger
    }

    /// Resolve `tag` and derive with its strategy.
    pub fn derive_key(
        &self,
        mnemonic: &str,
        passphrase: &str,
        hd_path: &str,
        tag: &AlgorithmTag,
    ) -> DerivationResult<PrivateKeyBytes> {
        self.resolve(tag)?
            .strategy
            .derive(mnemonic, passphrase, hd_path)
    }

    /// Resolve `tag` and construct a key with its keygen.
    pub fn keygen(&self, bytes: &[u8], tag: &AlgorithmTag) -> DerivationResult<TypedPrivateKey> {
        self.resolve(tag)?.keygen.construct(bytes, tag)
    }
}

/// Everything a keyring framework needs to plug in this registry.
#[derive(Clone, Debug)]
pub struct KeyringOptions {
    /// The framework's single keygen; only accepts `eth_secp256k1`.
    pub keygen: Keygen,
    /// Registry backing the derive function.
    pub registry: Arc<AlgorithmRegistry>,
    /// Algorithms offered for software keys.
    pub supported_algorithms: Vec<AlgorithmTag>,
    /// Algorithms offered for ledger keys.
    pub supported_algorithms_ledger: Vec<AlgorithmTag>,
}

impl KeyringOptions {
    /// Options for an Ethereum-compatible keyring over `registry`.
    pub fn eth_secp256k1(registry: Arc<AlgorithmRegistry>) -> Self {
        Self {
            keygen: Keygen::eth_secp256k1(),
            supported_algorithms: registry.supported_algorithms().to_vec(),
            supported_algorithms_ledger: registry.supported_algorithms_ledger().to_vec(),
            registry,
        }
    }

    /// The derive function handed to the keyring.
    pub fn derive_key(
        &self,
        mnemonic: &str,
        passphrase: &str,
        hd_path: &str,
        tag: &AlgorithmTag,
    ) -> DerivationResult<PrivateKeyBytes> {
        self.registry.derive_key(mnemonic, passphrase, hd_path, tag)
    }
}
