//! # Keyring Test Suite
//!
//! Cross-crate tests for the key derivation subsystem.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── vectors.rs    # Published BIP-39 / BIP-32 reference keys
//!     └── flows.rs      # Registry → service → typed key flows
//! tests/benches/
//! └── derivation_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p keyring-tests
//! cargo test -p keyring-tests integration::flows
//!
//! # Benchmarks
//! cargo bench -p keyring-tests
//! ```

pub mod integration;
