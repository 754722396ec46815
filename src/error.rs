// -*- mode: rust; -*-
//
// This file is part of mixin-cosi.
// See LICENSE for licensing information.

#[cfg(feature = "std")]
use thiserror::Error;

/// An error arising from the CoSi core.
///
/// Every error attributable to a specific signer carries that signer's
/// index, so the surrounding kernel can blame the right participant
/// instead of failing the whole ceremony opaquely.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "std", derive(Error))]
pub enum Error {
    /// A 32-byte point or scalar failed canonical decoding.
    #[cfg_attr(feature = "std", error("malformed point or scalar encoding"))]
    MalformedEncoding,
    /// A mask index exceeds the fixed 640-signer ceiling.
    #[cfg_attr(
        feature = "std",
        error("index {0} exceeds the mask's 640-signer ceiling")
    )]
    MaskOverflow(u32),
    /// An index was out of range for the supplied signer list.
    #[cfg_attr(feature = "std", error("index {0} is out of range for {1} signers"))]
    IndexOutOfRange(u32, u32),
    /// A duplicate contributor index was supplied to commitment aggregation.
    ///
    /// `aggregate_commitment` takes its input as a `BTreeMap<usize, Point>`,
    /// whose keys are structurally unique, so this crate's own entry points
    /// never construct this variant. It is kept in the taxonomy for a
    /// caller that builds its contributor list from a non-deduplicating
    /// source (e.g. a raw `Vec` of wire entries) before reaching this API.
    #[cfg_attr(feature = "std", error("duplicate contributor index {0}"))]
    DuplicateIndex(u32),
    /// A single signer's response failed the per-signer Schnorr check.
    #[cfg_attr(
        feature = "std",
        error("response from signer {0} failed verification")
    )]
    ResponseInvalid(u32),
    /// The contributor set did not match the artifact's mask under strict
    /// aggregation, or a retained commitment was missing for a contributor.
    #[cfg_attr(
        feature = "std",
        error("contributor set does not match the artifact's mask")
    )]
    ContributorMismatch,
    /// The aggregate Schnorr equation did not hold.
    #[cfg_attr(feature = "std", error("aggregate signature is invalid"))]
    SignatureInvalid,
    /// The mask's popcount is below a verifier's required threshold.
    #[cfg_attr(
        feature = "std",
        error("mask popcount is below the required threshold")
    )]
    BelowThreshold,
    /// The operation is not valid for the artifact's current state, e.g.
    /// aggregating responses into an already-sealed artifact.
    #[cfg_attr(
        feature = "std",
        error("operation invalid in the artifact's current state")
    )]
    StateViolation,
}
