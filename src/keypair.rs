// -*- mode: rust; -*-
//
// This file is part of mixin-cosi.
// See LICENSE for licensing information.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Error;
use crate::point::Point;
use crate::scalar;
use crate::Scalar;

/// A private scalar `x`, zeroized on drop.
///
/// Kept as a distinct type rather than a bare `Scalar` so that every place
/// a private key is held in memory is visible at a glance.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretScalar(Scalar);

impl SecretScalar {
    /// The scalar value. `Scalar` is `Copy`; copying it out does not affect
    /// this wrapper's zeroize-on-drop guarantee over its own storage.
    pub fn scalar(&self) -> Scalar {
        self.0
    }
}

/// A signer's keypair: a private scalar `x` and its public point `A = x·G`
/// (spec.md §3 `KeyPair`).
///
/// Key generation and distribution are out of scope for this crate (spec.md
/// §1 Non-goals); a `KeyPair` is always constructed from an externally
/// supplied secret scalar.
pub struct KeyPair {
    secret: SecretScalar,
    public: Point,
}

impl KeyPair {
    /// Builds a keypair from an already-derived private scalar.
    pub fn from_secret_scalar(x: Scalar) -> Self {
        let public = Point::basepoint_mul(&x);
        KeyPair {
            secret: SecretScalar(x),
            public,
        }
    }

    /// Builds a keypair from a canonical 32-byte scalar encoding.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, Error> {
        scalar::decode_canonical(bytes).map(Self::from_secret_scalar)
    }

    /// The public point `A`.
    pub fn public(&self) -> Point {
        self.public
    }

    /// The private scalar `x`.
    pub fn secret_scalar(&self) -> Scalar {
        self.secret.scalar()
    }
}

/// Derives a private scalar from a 32-byte seed for use in test fixtures
/// only.
///
/// This reproduces the expand step of the end-to-end vector in spec.md §8
/// (`original_source/crypto/cosi_test.go`'s `NewKeyFromSeed(seed ‖ seed)`):
/// the seed is duplicated into a 64-byte buffer and reduced modulo ℓ via
/// wide reduction. Key generation is out of this crate's public scope (spec
/// Non-goals), so this helper is only reachable under the `test-utils`
/// feature.
#[cfg(feature = "test-utils")]
pub fn derive_for_test(seed: [u8; 32]) -> Scalar {
    let mut wide = [0u8; 64];
    wide[..32].copy_from_slice(&seed);
    wide[32..].copy_from_slice(&seed);
    Scalar::from_bytes_mod_order_wide(&wide)
}
