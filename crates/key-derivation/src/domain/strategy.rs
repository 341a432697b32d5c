//! # Derivation Strategies
//!
//! One strategy per supported algorithm, each mapping
//! (mnemonic, passphrase, HD path) to a 32-byte secp256k1 scalar.
//!
//! ```text
//!              mnemonic + passphrase
//!                       │
//!                  BIP-39 seed
//!            ┌──────────┴──────────┐
//!            ▼                     ▼
//!   Standard (BIP-32)       EthCompatible
//!   walk the HD path        HMAC-SHA512("Bitcoin seed", seed)[..32]
//!                           HD path ignored
//! ```
//!
//! ## HD path on the Ethereum-compatible strategy
//!
//! The Ethereum-compatible strategy produces a single key per mnemonic and
//! passphrase. The HD path argument is accepted and never read, so every
//! path (including a malformed one) yields the same key. The result equals
//! the BIP-32 master private key. There is no multi-account support on this
//! strategy; callers needing several accounts must use `secp256k1`.

use crate::domain::errors::{DerivationError, DerivationResult};
use crate::domain::hd_path::parse_hd_path;
use crate::domain::keys::PrivateKeyBytes;
use crate::domain::seed::generate_seed;
use bip32::XPrv;
use shared_crypto::{hmac_sha512, Secp256k1SecretKey, HMAC_SHA512_LEN, SECRET_KEY_LEN};
use tracing::debug;
use zeroize::Zeroizing;

/// HMAC key used to expand the seed in the Ethereum-compatible strategy.
pub const ETH_MASTER_SECRET: &[u8] = b"Bitcoin seed";

/// Closed set of derivation strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DerivationStrategy {
    /// BIP-32 hierarchical derivation along the supplied path.
    Standard,
    /// Single key from the HMAC-expanded seed; ignores the path.
    EthCompatible,
}

impl DerivationStrategy {
    /// Derive a private scalar.
    pub fn derive(
        &self,
        mnemonic: &str,
        passphrase: &str,
        hd_path: &str,
    ) -> DerivationResult<PrivateKeyBytes> {
        match self {
            DerivationStrategy::Standard => derive_standard(mnemonic, passphrase, hd_path),
            DerivationStrategy::EthCompatible => {
                derive_eth_secp256k1(mnemonic, passphrase, hd_path)
            }
        }
    }

    /// Whether the HD path influences the output.
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, DerivationStrategy::Standard)
    }
}

/// BIP-32 derivation along `hd_path`.
///
/// # Errors
/// * `InvalidMnemonic` - checked first, before the path is parsed
/// * `InvalidHdPath` - malformed path or depth overflow
/// * `InvalidScalar` - a child key fell outside the curve order
pub fn derive_standard(
    mnemonic: &str,
    passphrase: &str,
    hd_path: &str,
) -> DerivationResult<PrivateKeyBytes> {
    let seed = generate_seed(mnemonic, passphrase)?;
    let path = parse_hd_path(hd_path)?;

    let xprv = XPrv::derive_from_path(seed.as_bytes(), &path).map_err(|e| match e {
        bip32::Error::Depth => DerivationError::InvalidHdPath {
            path: hd_path.to_string(),
            reason: e.to_string(),
        },
        _ => DerivationError::InvalidScalar,
    })?;

    let bytes: [u8; SECRET_KEY_LEN] = xprv.private_key().to_bytes().into();
    Ok(PrivateKeyBytes::new(bytes))
}

/// Ethereum-compatible derivation: HMAC-SHA512 over the seed with key
/// `"Bitcoin seed"`, left 32 bytes as the scalar. `hd_path` is only logged.
///
/// # Errors
/// * `InvalidMnemonic` - BIP-39 validation failed
/// * `SeedExpansionFailed` - the HMAC primitive rejected its input
/// * `InvalidScalar` - the left half is zero or not below the curve order
pub fn derive_eth_secp256k1(
    mnemonic: &str,
    passphrase: &str,
    hd_path: &str,
) -> DerivationResult<PrivateKeyBytes> {
    if !hd_path.is_empty() {
        debug!(hd_path, "eth_secp256k1 derivation ignores the HD path");
    }

    let seed = generate_seed(mnemonic, passphrase)?;
    let expanded = hmac_sha512(ETH_MASTER_SECRET, seed.as_bytes()).map_err(|e| {
        DerivationError::SeedExpansionFailed {
            reason: e.to_string(),
        }
    })?;

    scalar_from_expansion(&expanded)
}

/// Take the left half of an HMAC-SHA512 expansion as a secp256k1 scalar,
/// validated and re-serialized canonically. The chain code is discarded.
pub(crate) fn scalar_from_expansion(
    expanded: &[u8; HMAC_SHA512_LEN],
) -> DerivationResult<PrivateKeyBytes> {
    let mut candidate = Zeroizing::new([0u8; SECRET_KEY_LEN]);
    candidate.copy_from_slice(&expanded[..SECRET_KEY_LEN]);

    let secret =
        Secp256k1SecretKey::from_bytes(&candidate).map_err(|_| DerivationError::InvalidScalar)?;
    Ok(PrivateKeyBytes::new(*secret.to_bytes()))
}
