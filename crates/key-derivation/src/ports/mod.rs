//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that the keyring framework calls
//!
//! Outbound primitives (BIP-39, HMAC-SHA512, secp256k1) are plain library
//! calls into `bip39`, `bip32` and `shared-crypto`.

pub mod inbound;
