//! # Domain Layer
//!
//! Pure derivation logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod algorithm;
pub mod errors;
pub mod hd_path;
pub mod keygen;
pub mod keys;
pub mod seed;
pub mod strategy;
