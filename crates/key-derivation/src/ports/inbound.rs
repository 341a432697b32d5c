//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem, as called by the
//! keyring framework or a CLI host.

use crate::domain::algorithm::AlgorithmTag;
use crate::domain::errors::DerivationResult;
use crate::domain::keys::{PrivateKeyBytes, TypedPrivateKey};

/// Primary Key Derivation API.
///
/// Implementations must be thread-safe (`Send + Sync`); every call is a
/// pure function of its arguments.
pub trait KeyDerivationApi: Send + Sync {
    /// Derive private key bytes for `tag`.
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - `tag` is not registered
    /// * `InvalidMnemonic` - BIP-39 validation failed
    /// * `InvalidHdPath` - hierarchical strategy got a bad path
    /// * `SeedExpansionFailed` / `InvalidScalar` - primitive failures
    fn derive_key(
        &self,
        mnemonic: &str,
        passphrase: &str,
        hd_path: &str,
        tag: &AlgorithmTag,
    ) -> DerivationResult<PrivateKeyBytes>;

    /// Wrap raw bytes into a typed key for `tag`.
    fn keygen(&self, bytes: &[u8], tag: &AlgorithmTag) -> DerivationResult<TypedPrivateKey>;

    /// Supported algorithms in registration order.
    fn supported_algorithms(&self) -> Vec<AlgorithmTag>;

    /// Algorithms allowed for ledger devices.
    fn supported_algorithms_ledger(&self) -> Vec<AlgorithmTag>;
}
