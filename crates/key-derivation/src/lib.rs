//! # Key Derivation Subsystem
//!
//! Turns a BIP-39 mnemonic into a secp256k1 private key, with the derivation
//! scheme selected by a signing-algorithm tag.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure derivation logic, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for the inbound interface
//! - **Registry** (`registry.rs`): Tag → (strategy, keygen), built once
//! - **Service Layer** (`service.rs`): Wires the registry to the port
//!
//! ## Supported Algorithms
//!
//! | Tag | Strategy | HD path |
//! |-----|----------|---------|
//! | `eth_secp256k1` | HMAC-SHA512("Bitcoin seed", seed)[..32] | ignored |
//! | `secp256k1` | BIP-32 | required |
//!
//! ## Security Notes
//!
//! - Seeds and scalars are zeroized on drop
//! - Mnemonics, passphrases and key bytes are never logged
//! - Debug output of key types is redacted

pub mod config;
pub mod domain;
pub mod ports;
pub mod registry;
pub mod service;

// Re-export public API
pub use config::KeyringConfig;
pub use domain::algorithm::AlgorithmTag;
pub use domain::errors::{DerivationError, DerivationResult, MnemonicFault};
pub use domain::hd_path::{
    bip44_path, COSMOS_COIN_TYPE, DEFAULT_COSMOS_HD_PATH, DEFAULT_ETH_HD_PATH, ETH_COIN_TYPE,
};
pub use domain::keygen::Keygen;
pub use domain::keys::{
    PrivateKeyBytes, TypedPrivateKey, ETH_PRIV_KEY_NAME, ETH_PUB_KEY_NAME, STD_PRIV_KEY_NAME,
    STD_PUB_KEY_NAME,
};
pub use domain::seed::{generate_seed, Seed, SEED_LEN};
pub use domain::strategy::{derive_eth_secp256k1, derive_standard, DerivationStrategy};
pub use ports::inbound::KeyDerivationApi;
pub use registry::{AlgorithmEntry, AlgorithmRegistry, KeyringOptions};
pub use service::KeyringService;
