//! The fixed 32-byte digest used both as a general content hash and as the
//! Schnorr challenge hash (spec.md §2.2, §6). The hash is not pluggable
//! (spec.md §9 "Polymorphism"): every participant in a signing session must
//! agree on it byte-for-byte, so there is exactly one implementation —
//! BLAKE3, matching the kernel's own `crypto.NewHash` (see DESIGN.md; the
//! §8 reference vectors pin this choice).

use curve25519_dalek::scalar::Scalar;

/// Hashes arbitrary bytes to a 32-byte digest.
pub fn hash(data: &[u8]) -> [u8; 32] {
    blake3::hash(data).into()
}

/// Computes the Schnorr challenge `c = H(R ‖ A_mask ‖ message) mod ℓ`.
///
/// The three inputs are concatenated with no length prefix (spec.md §6); the
/// resulting digest is read as a little-endian integer and reduced modulo
/// the Ed25519 group order.
pub fn challenge(r: &[u8; 32], a_mask: &[u8; 32], message: &[u8]) -> Scalar {
    let mut state = blake3::Hasher::new();
    state.update(r);
    state.update(a_mask);
    state.update(message);
    let digest: [u8; 32] = state.finalize().into();
    Scalar::from_bytes_mod_order(digest)
}
