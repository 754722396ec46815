//! CoSi: a threshold Schnorr multi-signature scheme over Ed25519 in which a
//! dynamic subset of a known signer set jointly produces one compact
//! signature plus a bitmask identifying who contributed (spec.md §1, §2).
//!
//! This crate is exactly the CoSi primitive: commitment generation
//! ([`Nonce::commit`]), commitment aggregation with participant mask
//! ([`aggregate_commitment`]), per-signer response computation and
//! verification ([`CommitOpen::response`], [`CommitOpen::verify_response`]),
//! response aggregation ([`CommitOpen::aggregate_response`]),
//! aggregate-public-key derivation and signature/threshold verification
//! ([`aggregate_public_key`], [`Sealed::verify`], [`Sealed::full_verify`]).
//! Key generation and distribution, network choreography of commit/respond
//! rounds, and persistence of intermediate state are deliberately out of
//! scope (spec.md §1 Non-goals); this library is a pure computation over
//! caller-supplied bytes and a caller-supplied randomness source (spec.md
//! §5).

#![deny(missing_docs)]

mod aggregator;
mod artifact;
mod error;
mod hash;
mod keypair;
mod mask;
mod nonce;
mod point;
mod scalar;
mod verifier;

/// The Ed25519 scalar field element type used throughout this crate.
pub type Scalar = curve25519_dalek::scalar::Scalar;

pub use aggregator::{aggregate_commitment, aggregate_commitment_bytes};
pub use artifact::{CommitOpen, CosiArtifact, Sealed, COMMIT_OPEN_BYTES, SEALED_BYTES};
pub use error::Error;
pub use hash::hash;
pub use keypair::KeyPair;
pub use mask::{Mask, MASK_BYTES, MAX_SIGNERS};
pub use nonce::Nonce;
pub use point::Point;
pub use verifier::{aggregate_public_key, verify};

#[cfg(feature = "test-utils")]
pub use keypair::derive_for_test;
