//! # Seed Generator
//!
//! BIP-39 mnemonic-to-seed transformation (PBKDF2-HMAC-SHA512, 2048 rounds,
//! salt `"mnemonic" || passphrase`).
//!
//! The mnemonic checksum is validated before any hashing takes place.

use crate::domain::errors::{DerivationResult, MnemonicFault};
use bip39::Mnemonic;
use zeroize::Zeroizing;

/// BIP-39 seed length in bytes.
pub const SEED_LEN: usize = 64;

/// 64-byte BIP-39 seed, zeroized on drop.
pub struct Seed(Zeroizing<[u8; SEED_LEN]>);

impl Seed {
    /// Raw seed bytes.
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }
}

// Never print seed bytes
impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seed").field("bytes", &"[REDACTED]").finish()
    }
}

/// Turn a mnemonic phrase and optional passphrase into a seed.
///
/// The PBKDF2 input is the parsed word list joined by single spaces, not
/// the caller's raw string. `"  a  b "` and `"a b"` therefore yield the same
/// seed, whereas go-bip39 `NewSeed` hashes the raw string and would not.
///
/// # Errors
/// * `DerivationError::InvalidMnemonic` - word count, wordlist or checksum failure
pub fn generate_seed(mnemonic: &str, passphrase: &str) -> DerivationResult<Seed> {
    let parsed = Mnemonic::parse(mnemonic).map_err(MnemonicFault::from)?;

    Ok(Seed(Zeroizing::new(parsed.to_seed(passphrase))))
}
