//! Helpers for the Ed25519 scalar field that the rest of the crate needs but
//! `curve25519-dalek`'s `Scalar` does not expose directly: canonical decoding
//! that rejects encodings `>= ℓ`, and uniform sampling from a caller-supplied
//! randomness source (spec.md §3, §4.1).

use curve25519_dalek::scalar::Scalar;
use rand_core::{CryptoRng, RngCore};

use crate::error::Error;

/// Decodes 32 little-endian bytes as a scalar, rejecting any encoding that
/// is not already reduced modulo the Ed25519 group order ℓ.
pub(crate) fn decode_canonical(bytes: &[u8; 32]) -> Result<Scalar, Error> {
    Option::from(Scalar::from_canonical_bytes(*bytes)).ok_or(Error::MalformedEncoding)
}

/// Draws a scalar uniformly from `[0, ℓ)`.
///
/// Uses wide reduction over 64 bytes of randomness rather than rejection
/// sampling 32 bytes at a time, so every byte the caller's randomness source
/// produces is used and no retry loop is needed.
pub(crate) fn sample<R: RngCore + CryptoRng>(rng: &mut R) -> Scalar {
    let mut wide = [0u8; 64];
    rng.fill_bytes(&mut wide);
    Scalar::from_bytes_mod_order_wide(&wide)
}
