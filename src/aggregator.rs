//! The aggregator: combines per-signer commitments into one artifact
//! (spec.md §4.3), computes and verifies per-signer responses (§4.4-§4.5),
//! and folds verified responses into the sealed artifact (§4.6).

use std::collections::BTreeMap;

use crate::artifact::{CommitOpen, Sealed};
use crate::error::Error;
use crate::hash;
use crate::mask::Mask;
use crate::point::Point;
use crate::verifier::aggregate_public_key;
use crate::Scalar;

/// Computes the Schnorr challenge for an artifact's `R`, the aggregate
/// public key over its mask, and a message (spec.md §4.4 step 2). Shares
/// `AggregatePublicKey` with the verifier (spec.md §4.7) since both phases
/// derive the same `A_mask` from the same mask.
fn challenge(r: Point, publics: &[Point], mask: &Mask, message: &[u8]) -> Result<Scalar, Error> {
    let a_mask = aggregate_public_key(publics, mask)?;
    Ok(hash::challenge(&r.encode(), &a_mask.encode(), message))
}

/// `AggregateCommitment` (spec.md §4.3): combines per-signer commitment
/// points into one aggregate, building the participant mask from the
/// contributing indices.
///
/// The sum is computed by folding over the map in whatever order the
/// standard library iterates it; curve addition is commutative and
/// associative, so the result does not depend on that order (spec.md §4.3
/// "Ordering", §8 property 2). Rejects a map whose values fail point
/// decoding or whose keys exceed the mask's 640-signer ceiling.
pub fn aggregate_commitment(commitments: &BTreeMap<usize, Point>) -> Result<CommitOpen, Error> {
    let mask = Mask::from_indices(commitments.keys().copied())?;
    let r = commitments.values().copied().sum();
    Ok(CommitOpen { r, mask })
}

/// `AggregateCommitment` taking commitments as canonical 32-byte point
/// encodings, as they would arrive over the wire (spec.md §4.3 step 2:
/// "Decode each R_i from its 32-byte form; reject if any decoding fails").
pub fn aggregate_commitment_bytes(
    commitments: &BTreeMap<usize, [u8; 32]>,
) -> Result<CommitOpen, Error> {
    let mut decoded = BTreeMap::new();
    for (&i, bytes) in commitments {
        decoded.insert(i, Point::decode(bytes)?);
    }
    aggregate_commitment(&decoded)
}

impl CommitOpen {
    /// `Response` (spec.md §4.4): a single signer's contribution
    /// `s_i = r_i + c·x_i mod ℓ`, where `c` is the challenge over this
    /// artifact's `R`, the aggregate public key over its mask, and
    /// `message`. Does not mutate the artifact.
    pub fn response(
        &self,
        index: usize,
        secret: Scalar,
        nonce: Scalar,
        publics: &[Point],
        message: &[u8],
    ) -> Result<Scalar, Error> {
        if !self.mask.contains(index) {
            return Err(Error::IndexOutOfRange(index as u32, publics.len() as u32));
        }
        let c = challenge(self.r, publics, &self.mask, message)?;
        Ok(nonce + c * secret)
    }

    /// `VerifyResponse` (spec.md §4.5): checks `s_i·G ?= R_i + c·publics[i]`
    /// for one signer's response, isolating a misbehaving contributor
    /// before its `s_i` can pollute the aggregate. The caller supplies
    /// `r_i`, the pre-aggregation commitment point for `index`; an
    /// orchestrator that retains the commitment map from
    /// [`aggregate_commitment`] can look it up there.
    pub fn verify_response(
        &self,
        r_i: Point,
        publics: &[Point],
        index: usize,
        s_i: Scalar,
        message: &[u8],
    ) -> Result<(), Error> {
        let a_i = publics
            .get(index)
            .ok_or(Error::IndexOutOfRange(index as u32, publics.len() as u32))?;
        let c = challenge(self.r, publics, &self.mask, message)?;
        let lhs = Point::basepoint_mul(&s_i);
        let rhs = r_i + (*a_i * c);
        if lhs == rhs {
            Ok(())
        } else {
            Err(Error::ResponseInvalid(index as u32))
        }
    }

    /// `AggregateResponse` (spec.md §4.6): folds verified per-signer
    /// responses into the artifact's aggregate `s`, sealing it.
    ///
    /// In `strict` mode (the default, spec.md §9 Open Question), the
    /// response map's keys must equal the mask's contributor set exactly;
    /// any mismatch is rejected without touching the artifact.
    ///
    /// In non-strict mode, a response map that is a *subset* of the mask is
    /// tolerated: the sealed artifact's `R` and mask are recomputed from
    /// only the actual responders' retained commitments, per spec.md §4.6
    /// step 1. A response for an index outside the original mask is always
    /// rejected in both modes — that index was never sent a challenge
    /// computed over this artifact's `R`, so there is nothing to verify it
    /// against. Every response, in either mode, is still verified via
    /// [`Self::verify_response`] against this artifact's *original* `R` and
    /// mask before being summed — that is the challenge every responder
    /// actually signed against (spec.md §4.4), and it does not change when
    /// a later responder drops out. One consequence of recomputing `R` and
    /// the mask afterward (see DESIGN.md): the sealed artifact's own
    /// `Verify` recomputes its challenge fresh from the *recomputed* `R` and
    /// mask, which in general will not equal the challenge the responses
    /// were actually computed against, so a non-strict aggregate of a
    /// proper subset will not itself pass `Verify`/`FullVerify`. Non-strict
    /// mode is implemented here because spec.md §4.6 names the mechanical
    /// steps explicitly; whether its output is a useful signature is a
    /// question for the surrounding consensus kernel, not this crate.
    ///
    /// On any error the artifact is returned unchanged (alongside the
    /// error) so the caller may retry with corrected inputs (spec.md §4.7
    /// "Terminal on failure").
    pub fn aggregate_response(
        self,
        commitments: &BTreeMap<usize, Point>,
        publics: &[Point],
        responses: &BTreeMap<usize, Scalar>,
        message: &[u8],
        strict: bool,
    ) -> Result<Sealed, (Self, Error)> {
        let response_keys: Vec<usize> = responses.keys().copied().collect();
        if strict {
            let mask_keys: Vec<usize> = self.mask.keys().collect();
            if mask_keys != response_keys {
                return Err((self, Error::ContributorMismatch));
            }
        } else if !response_keys.iter().all(|&i| self.mask.contains(i)) {
            return Err((self, Error::ContributorMismatch));
        }

        let mut s = Scalar::from(0u64);
        let mut actual_r = Point::identity();
        for (&i, &s_i) in responses {
            let r_i = match commitments.get(&i) {
                Some(r_i) => *r_i,
                None => return Err((self, Error::ContributorMismatch)),
            };
            if let Err(e) = self.verify_response(r_i, publics, i, s_i, message) {
                return Err((self, e));
            }
            s = s + s_i;
            actual_r = actual_r + r_i;
        }

        if strict {
            Ok(self.seal(s))
        } else {
            let mask = match Mask::from_indices(response_keys) {
                Ok(mask) => mask,
                Err(e) => return Err((self, e)),
            };
            Ok(CommitOpen { r: actual_r, mask }.seal(s))
        }
    }
}
