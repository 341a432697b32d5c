//! # Shared Crypto - Derivation Primitives
//!
//! Low-level primitives consumed by the key derivation subsystem.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | HMAC-SHA512 | Seed expansion |
//! | `ecdsa` | secp256k1 | Secret scalar validation, public keys |
//!
//! ## Security Properties
//!
//! - **HMAC-SHA512**: 512-bit output, split into scalar and chain code
//! - **secp256k1**: scalars checked against `0 < k < n` before use
//! - Secret material is zeroized on drop

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;

// Re-exports
pub use ecdsa::{Secp256k1PublicKey, Secp256k1SecretKey, SECRET_KEY_LEN};
pub use errors::CryptoError;
pub use hashing::{hmac_sha512, HMAC_SHA512_LEN};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
