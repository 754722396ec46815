//! The aggregated CoSi object and its canonical wire encoding (spec.md §3
//! `CosiArtifact`, §6 "Canonical artifact encoding").
//!
//! The artifact has exactly two states, modelled as distinct types rather
//! than a flag on one struct (spec.md §9 "Dynamic dispatch → tagged
//! variants"): [`CommitOpen`] holds an aggregate commitment with no response
//! yet, [`Sealed`] additionally holds the aggregate response `s`. Only
//! `CommitOpen` exposes the response-aggregation operations of §4.4-§4.6;
//! only `Sealed` exposes the verification operations of §4.7. A caller that
//! does not know which state a decoded artifact is in works with
//! [`CosiArtifact`], the tagged union of the two, whose
//! [`CosiArtifact::aggregate_response`] reports [`Error::StateViolation`]
//! if called on an already-sealed value (spec.md §7).

use crate::error::Error;
use crate::mask::{Mask, MASK_BYTES};
use crate::point::Point;
use crate::Scalar;

/// Wire size of a commit-open artifact: `R` (32 bytes) ‖ mask (80 bytes).
pub const COMMIT_OPEN_BYTES: usize = 32 + MASK_BYTES;

/// Wire size of a sealed artifact: `R` ‖ `s` (32 bytes) ‖ mask.
pub const SEALED_BYTES: usize = 32 + 32 + MASK_BYTES;

/// An aggregate commitment awaiting responses (spec.md §4.7 "Commit-open").
///
/// Carries no `s`; the wire form omits it entirely rather than padding with
/// zero bytes (spec.md §6).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitOpen {
    pub(crate) r: Point,
    pub(crate) mask: Mask,
}

impl CommitOpen {
    /// The aggregate commitment point.
    pub fn r(&self) -> Point {
        self.r
    }

    /// The participant mask.
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Encodes this artifact as its 112-byte commit-open wire form.
    pub fn encode(&self) -> [u8; COMMIT_OPEN_BYTES] {
        let mut out = [0u8; COMMIT_OPEN_BYTES];
        out[..32].copy_from_slice(&self.r.encode());
        out[32..].copy_from_slice(&self.mask.encode());
        out
    }

    /// Decodes a commit-open artifact from its exact 112-byte wire form.
    pub fn decode(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != COMMIT_OPEN_BYTES {
            return Err(Error::MalformedEncoding);
        }
        let mut r_bytes = [0u8; 32];
        r_bytes.copy_from_slice(&bytes[..32]);
        let mut mask_bytes = [0u8; MASK_BYTES];
        mask_bytes.copy_from_slice(&bytes[32..]);
        Ok(CommitOpen {
            r: Point::decode(&r_bytes)?,
            mask: Mask::decode(&mask_bytes),
        })
    }

    /// Seals this artifact with an aggregate response, consuming it.
    pub(crate) fn seal(self, s: Scalar) -> Sealed {
        Sealed {
            r: self.r,
            s,
            mask: self.mask,
        }
    }
}

/// A complete artifact: aggregate commitment, aggregate response, and mask
/// (spec.md §4.7 "Sealed"). Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sealed {
    pub(crate) r: Point,
    pub(crate) s: Scalar,
    pub(crate) mask: Mask,
}

impl Sealed {
    /// The aggregate commitment point.
    pub fn r(&self) -> Point {
        self.r
    }

    /// The aggregate response scalar.
    pub fn s(&self) -> Scalar {
        self.s
    }

    /// The participant mask.
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Encodes this artifact as its 144-byte sealed wire form.
    pub fn encode(&self) -> [u8; SEALED_BYTES] {
        let mut out = [0u8; SEALED_BYTES];
        out[..32].copy_from_slice(&self.r.encode());
        out[32..64].copy_from_slice(&self.s.to_bytes());
        out[64..].copy_from_slice(&self.mask.encode());
        out
    }

    /// Decodes a sealed artifact from its exact 144-byte wire form.
    pub fn decode(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != SEALED_BYTES {
            return Err(Error::MalformedEncoding);
        }
        let mut r_bytes = [0u8; 32];
        r_bytes.copy_from_slice(&bytes[..32]);
        let mut s_bytes = [0u8; 32];
        s_bytes.copy_from_slice(&bytes[32..64]);
        let mut mask_bytes = [0u8; MASK_BYTES];
        mask_bytes.copy_from_slice(&bytes[64..]);
        Ok(Sealed {
            r: Point::decode(&r_bytes)?,
            s: crate::scalar::decode_canonical(&s_bytes)?,
            mask: Mask::decode(&mask_bytes),
        })
    }
}

/// The artifact in either of its two states, for callers that receive bytes
/// off the wire without knowing in advance which size (112 or 144) to
/// expect (spec.md §6 "Implementations MUST accept both sizes").
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CosiArtifact {
    /// Aggregate commitment only; `s` not yet computed.
    CommitOpen(CommitOpen),
    /// Complete, sealed artifact.
    Sealed(Sealed),
}

impl CosiArtifact {
    /// Encodes the artifact at whichever size matches its current state.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            CosiArtifact::CommitOpen(a) => a.encode().to_vec(),
            CosiArtifact::Sealed(a) => a.encode().to_vec(),
        }
    }

    /// Decodes an artifact, dispatching on length: 112 bytes decodes as
    /// commit-open, 144 as sealed, anything else is malformed.
    pub fn decode(bytes: &[u8]) -> Result<Self, Error> {
        match bytes.len() {
            COMMIT_OPEN_BYTES => Ok(CosiArtifact::CommitOpen(CommitOpen::decode(bytes)?)),
            SEALED_BYTES => Ok(CosiArtifact::Sealed(Sealed::decode(bytes)?)),
            _ => Err(Error::MalformedEncoding),
        }
    }

    /// The participant mask, present in both states.
    pub fn mask(&self) -> &Mask {
        match self {
            CosiArtifact::CommitOpen(a) => &a.mask,
            CosiArtifact::Sealed(a) => &a.mask,
        }
    }

    /// `Ok(())` unless this artifact is already sealed.
    pub(crate) fn require_commit_open(self) -> Result<CommitOpen, Error> {
        match self {
            CosiArtifact::CommitOpen(a) => Ok(a),
            CosiArtifact::Sealed(_) => Err(Error::StateViolation),
        }
    }

    /// Aggregates responses into a sealed artifact without the caller
    /// having to unwrap the tagged union by hand first: delegates to
    /// [`CommitOpen::aggregate_response`] if this artifact is still open,
    /// or reports [`Error::StateViolation`] if it is already sealed.
    pub fn aggregate_response(
        self,
        commitments: &std::collections::BTreeMap<usize, Point>,
        publics: &[Point],
        responses: &std::collections::BTreeMap<usize, Scalar>,
        message: &[u8],
        strict: bool,
    ) -> Result<Sealed, (CosiArtifact, Error)> {
        match self {
            CosiArtifact::CommitOpen(open) => open
                .aggregate_response(commitments, publics, responses, message, strict)
                .map_err(|(open, e)| (CosiArtifact::CommitOpen(open), e)),
            CosiArtifact::Sealed(sealed) => {
                Err((CosiArtifact::Sealed(sealed), Error::StateViolation))
            }
        }
    }
}
