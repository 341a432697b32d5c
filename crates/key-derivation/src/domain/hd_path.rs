//! # HD Paths
//!
//! BIP-44 path constants and helpers (`m/44'/coin'/account'/change/index`).
//! Only the hierarchical strategy interprets these.

use crate::domain::errors::{DerivationError, DerivationResult};
use bip32::DerivationPath;
use std::str::FromStr;

/// SLIP-44 coin type for Ethereum.
pub const ETH_COIN_TYPE: u32 = 60;

/// SLIP-44 coin type for Cosmos.
pub const COSMOS_COIN_TYPE: u32 = 118;

/// Default Ethereum account path.
pub const DEFAULT_ETH_HD_PATH: &str = "m/44'/60'/0'/0/0";

/// Default Cosmos account path.
pub const DEFAULT_COSMOS_HD_PATH: &str = "m/44'/118'/0'/0/0";

/// Build a BIP-44 path with hardened purpose/coin/account and an external chain.
pub fn bip44_path(coin_type: u32, account: u32, index: u32) -> String {
    format!("m/44'/{}'/{}'/0/{}", coin_type, account, index)
}

/// Parse a path string into BIP-32 child numbers.
pub fn parse_hd_path(path: &str) -> DerivationResult<DerivationPath> {
    DerivationPath::from_str(path).map_err(|e| DerivationError::InvalidHdPath {
        path: path.to_string(),
        reason: e.to_string(),
    })
}
