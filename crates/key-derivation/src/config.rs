//! Keyring derivation configuration.

use crate::domain::algorithm::AlgorithmTag;
use crate::domain::errors::{DerivationError, DerivationResult};
use crate::domain::hd_path::{bip44_path, DEFAULT_ETH_HD_PATH, ETH_COIN_TYPE};
use crate::registry::AlgorithmRegistry;
use serde::{Deserialize, Serialize};

/// Defaults applied when the caller does not pick an algorithm or path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyringConfig {
    /// Algorithm used when none is given
    pub default_algorithm: AlgorithmTag,
    /// HD path used when none is given
    pub default_hd_path: String,
    /// SLIP-44 coin type for generated BIP-44 paths
    pub coin_type: u32,
}

impl Default for KeyringConfig {
    fn default() -> Self {
        Self {
            default_algorithm: AlgorithmTag::ETH_SECP256K1,
            default_hd_path: DEFAULT_ETH_HD_PATH.to_string(),
            coin_type: ETH_COIN_TYPE, // Ethereum
        }
    }
}

impl KeyringConfig {
    /// Check the defaults against what `registry` supports.
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - the default algorithm is not registered
    pub fn validate(&self, registry: &AlgorithmRegistry) -> DerivationResult<()> {
        if !registry.is_supported(&self.default_algorithm) {
            return Err(DerivationError::UnsupportedAlgorithm {
                tag: self.default_algorithm.clone(),
            });
        }
        Ok(())
    }

    /// BIP-44 path for `account`/`index` under the configured coin type.
    pub fn hd_path_for(&self, account: u32, index: u32) -> String {
        bip44_path(self.coin_type, account, index)
    }
}
