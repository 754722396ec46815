//! Per-signer commitment randomness (spec.md §4.1): a freshly sampled
//! scalar `r` and its point `R = r·G`. Must never be reused across distinct
//! signatures and is zeroized once the signer has emitted its response.

use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::point::Point;
use crate::scalar;
use crate::Scalar;

/// A signer's private commitment scalar, paired lazily with its public
/// point via [`Nonce::point`].
///
/// Zeroized on drop; the inner scalar is never exposed by reference, only
/// copied out via [`Nonce::scalar`] when a response must be computed.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Nonce(Scalar);

impl Nonce {
    /// Draws a fresh, uniformly random nonce from `rng` (spec.md §4.1
    /// `Commit`).
    pub fn commit<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Nonce(scalar::sample(rng))
    }

    /// The nonce's public commitment point `R = r·G`.
    pub fn point(&self) -> Point {
        Point::basepoint_mul(&self.0)
    }

    /// The private scalar `r`, copied out for use in `Response` (spec.md
    /// §4.4). `Scalar` is `Copy`, so this does not disturb the nonce's own
    /// zeroize-on-drop guarantee.
    pub fn scalar(&self) -> Scalar {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    use super::*;

    #[test]
    fn distinct_commits_yield_distinct_scalars() {
        let mut rng = ChaCha20Rng::seed_from_u64(99);
        let a = Nonce::commit(&mut rng);
        let b = Nonce::commit(&mut rng);
        assert_ne!(a.scalar(), b.scalar());
    }

    #[test]
    fn point_matches_basepoint_multiplication() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let nonce = Nonce::commit(&mut rng);
        assert_eq!(nonce.point(), Point::basepoint_mul(&nonce.scalar()));
    }
}
