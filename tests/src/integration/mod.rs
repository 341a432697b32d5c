//! Integration tests across `shared-crypto` and `key-derivation`.

pub mod flows;
