//! Verification of a sealed artifact (spec.md §4.7): aggregate-public-key
//! derivation, the Schnorr equation, the threshold predicate, and the
//! combined `FullVerify` entry point.

use crate::artifact::Sealed;
use crate::error::Error;
use crate::hash;
use crate::mask::Mask;
use crate::point::Point;
use crate::Scalar;

/// `AggregatePublicKey` (spec.md §4.7): `A_mask = Σ publics[i]` for
/// `i ∈ mask`.
pub fn aggregate_public_key(publics: &[Point], mask: &Mask) -> Result<Point, Error> {
    let mut sum = Point::identity();
    for i in mask.keys() {
        let p = publics
            .get(i)
            .ok_or(Error::IndexOutOfRange(i as u32, publics.len() as u32))?;
        sum = sum + *p;
    }
    Ok(sum)
}

/// `Verify` (spec.md §4.7): recomputes the challenge `c` and checks the
/// Schnorr equation `s·G ?= R + c·A_mask`. Point equality is by canonical
/// 32-byte encoding (spec.md §3).
pub fn verify(a_mask: Point, message: &[u8], r: Point, s: Scalar) -> bool {
    let c = hash::challenge(&r.encode(), &a_mask.encode(), message);
    Point::basepoint_mul(&s) == r + (a_mask * c)
}

impl Sealed {
    /// `AggregatePublicKey` over this artifact's own mask.
    pub fn aggregate_public_key(&self, publics: &[Point]) -> Result<Point, Error> {
        aggregate_public_key(publics, &self.mask)
    }

    /// `Verify` against the aggregate public key derived from `publics` and
    /// this artifact's mask. Returns [`Error::SignatureInvalid`] rather than
    /// a bare boolean so callers get a uniform `Result`-based API across the
    /// crate (spec.md §7 "all errors are returned to the caller").
    pub fn verify(&self, publics: &[Point], message: &[u8]) -> Result<(), Error> {
        let a_mask = self.aggregate_public_key(publics)?;
        if verify(a_mask, message, self.r, self.s) {
            Ok(())
        } else {
            Err(Error::SignatureInvalid)
        }
    }

    /// `ThresholdVerify` (spec.md §4.7): `mask.Count() ≥ threshold`. Purely
    /// structural, touches no curve arithmetic. The predicate is `≥`, not
    /// `>` (spec.md tie-break).
    pub fn threshold_verify(&self, threshold: usize) -> bool {
        self.mask.count() >= threshold
    }

    /// `FullVerify` (spec.md §4.7): the threshold predicate must hold
    /// first, then the aggregate Schnorr equation.
    pub fn full_verify(&self, publics: &[Point], threshold: usize, message: &[u8]) -> Result<(), Error> {
        if !self.threshold_verify(threshold) {
            return Err(Error::BelowThreshold);
        }
        self.verify(publics, message)
    }
}
