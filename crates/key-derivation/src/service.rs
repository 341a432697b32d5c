//! # Keyring Derivation Service
//!
//! Application service layer that implements the `KeyDerivationApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`KeyDerivationApi`)
//! - Resolves algorithms once through a shared, immutable registry
//! - Delegates derivation and keygen to the domain layer

use crate::config::KeyringConfig;
use crate::domain::algorithm::AlgorithmTag;
use crate::domain::errors::DerivationResult;
use crate::domain::keys::{PrivateKeyBytes, TypedPrivateKey};
use crate::ports::inbound::KeyDerivationApi;
use crate::registry::AlgorithmRegistry;
use std::sync::Arc;
use tracing::{debug, warn};

/// Keyring Derivation Service.
///
/// Holds an explicit registry handle instead of consulting process-wide
/// state, so several keyrings with different algorithm sets can coexist.
#[derive(Debug, Clone)]
pub struct KeyringService {
    registry: Arc<AlgorithmRegistry>,
    config: KeyringConfig,
}

impl KeyringService {
    /// Create a service over `registry`.
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - the configured default is not registered
    pub fn new(registry: Arc<AlgorithmRegistry>, config: KeyringConfig) -> DerivationResult<Self> {
        config.validate(&registry)?;
        Ok(Self { registry, config })
    }

    /// Registry backing this service.
    pub fn registry(&self) -> &Arc<AlgorithmRegistry> {
        &self.registry
    }

    /// Active configuration.
    pub fn config(&self) -> &KeyringConfig {
        &self.config
    }

    /// Derive with the configured default algorithm and HD path.
    pub fn derive_default(
        &self,
        mnemonic: &str,
        passphrase: &str,
    ) -> DerivationResult<PrivateKeyBytes> {
        self.derive_key(
            mnemonic,
            passphrase,
            &self.config.default_hd_path,
            &self.config.default_algorithm,
        )
    }

    /// Derive and wrap in one step, using the same tag for both.
    pub fn derive_typed(
        &self,
        mnemonic: &str,
        passphrase: &str,
        hd_path: &str,
        tag: &AlgorithmTag,
    ) -> DerivationResult<TypedPrivateKey> {
        let bytes = self.derive_key(mnemonic, passphrase, hd_path, tag)?;
        self.keygen(bytes.as_bytes(), tag)
    }
}

impl KeyDerivationApi for KeyringService {
    fn derive_key(
        &self,
        mnemonic: &str,
        passphrase: &str,
        hd_path: &str,
        tag: &AlgorithmTag,
    ) -> DerivationResult<PrivateKeyBytes> {
        let entry = self.registry.resolve(tag)?;
        debug!(
            algorithm = %tag,
            hierarchical = entry.strategy().is_hierarchical(),
            "deriving private key"
        );

        entry
            .strategy()
            .derive(mnemonic, passphrase, hd_path)
            .map_err(|e| {
                warn!(algorithm = %tag, error = %e, "key derivation failed");
                e
            })
    }

    fn keygen(&self, bytes: &[u8], tag: &AlgorithmTag) -> DerivationResult<TypedPrivateKey> {
        self.registry.keygen(bytes, tag)
    }

    fn supported_algorithms(&self) -> Vec<AlgorithmTag> {
        self.registry.supported_algorithms().to_vec()
    }

    fn supported_algorithms_ledger(&self) -> Vec<AlgorithmTag> {
        self.registry.supported_algorithms_ledger().to_vec()
    }
}

// =============================================================================
// TESTS
// =============================================================================
