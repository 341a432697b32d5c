//! # HMAC-SHA512
//!
//! Keyed hashing used to expand a BIP-39 seed into key material.
//!
//! The 64-byte output is conventionally split into a 32-byte secret
//! scalar (left half) and a 32-byte chain code (right half).

use crate::CryptoError;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::Zeroizing;

type HmacSha512 = Hmac<Sha512>;

/// HMAC-SHA512 output length in bytes.
pub const HMAC_SHA512_LEN: usize = 64;

/// Compute HMAC-SHA512 of `data` under `key`.
///
/// The output is wrapped in [`Zeroizing`] since callers feed it straight
/// into secret key construction.
pub fn hmac_sha512(
    key: &[u8],
    data: &[u8],
) -> Result<Zeroizing<[u8; HMAC_SHA512_LEN]>, CryptoError> {
    let mut mac =
        HmacSha512::new_from_slice(key).map_err(|e| CryptoError::MacFailed(e.to_string()))?;
    mac.update(data);

    let mut output = Zeroizing::new([0u8; HMAC_SHA512_LEN]);
    output.copy_from_slice(&mac.finalize().into_bytes());
    Ok(output)
}
