use core::ops::{Add, Mul};

use curve25519_dalek::{
    constants::ED25519_BASEPOINT_TABLE,
    edwards::{CompressedEdwardsY, EdwardsPoint},
    scalar::Scalar,
};

use crate::error::Error;

/// An Ed25519 curve point, canonically encoded as 32 compressed bytes.
///
/// Equality and hashing are always performed on the canonical encoding
/// (spec.md §3), never on the internal (projective) representation, so two
/// `Point`s compare equal iff their encodings are byte-identical.
#[derive(Copy, Clone, Debug)]
pub struct Point(EdwardsPoint);

impl Point {
    /// The group identity element.
    pub fn identity() -> Self {
        Point(EdwardsPoint::identity())
    }

    /// Computes `scalar * G` for the Ed25519 basepoint `G`.
    pub fn basepoint_mul(scalar: &Scalar) -> Self {
        Point(scalar * ED25519_BASEPOINT_TABLE)
    }

    /// Decodes a canonical 32-byte compressed Ed25519 point.
    ///
    /// Decoding is total over canonical encodings and fails closed on
    /// anything else: the point is re-compressed after decompression and
    /// must match the input bytes exactly, which rejects the non-canonical
    /// `y`-coordinate encodings that a bare `decompress()` would accept.
    pub fn decode(bytes: &[u8; 32]) -> Result<Self, Error> {
        let point = CompressedEdwardsY(*bytes)
            .decompress()
            .ok_or(Error::MalformedEncoding)?;
        if point.compress().to_bytes() != *bytes {
            return Err(Error::MalformedEncoding);
        }
        Ok(Point(point))
    }

    /// Encodes this point as its canonical 32-byte compressed form.
    pub fn encode(&self) -> [u8; 32] {
        self.0.compress().to_bytes()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.encode() == other.encode()
    }
}

impl Eq for Point {}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point(self.0 + rhs.0)
    }
}

impl Mul<Scalar> for Point {
    type Output = Point;

    fn mul(self, rhs: Scalar) -> Point {
        Point(self.0 * rhs)
    }
}

impl core::iter::Sum for Point {
    fn sum<I: Iterator<Item = Point>>(iter: I) -> Self {
        iter.fold(Point::identity(), Add::add)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

    use super::Point;

    impl Serialize for Point {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.encode().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Point {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let bytes = <[u8; 32]>::deserialize(deserializer)?;
            Point::decode(&bytes).map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_encodes_to_known_bytes() {
        let mut expected = [0u8; 32];
        expected[0] = 1;
        assert_eq!(Point::identity().encode(), expected);
    }

    #[test]
    fn round_trips_through_canonical_bytes() {
        let scalar = Scalar::from(424242u64);
        let point = Point::basepoint_mul(&scalar);
        let decoded = Point::decode(&point.encode()).unwrap();
        assert_eq!(point, decoded);
    }

    #[test]
    fn rejects_non_canonical_y_coordinate() {
        // `p` itself (2^255 - 19), little-endian, sign bit clear: decompresses
        // to the same point as `y = 0`, but `0x7f ff .. ff ed` is not how a
        // canonical encoder would ever produce that point.
        let mut bytes = [0xffu8; 32];
        bytes[0] = 0xed;
        bytes[31] = 0x7f;
        assert_eq!(Point::decode(&bytes), Err(Error::MalformedEncoding));
    }

    #[test]
    fn addition_is_commutative() {
        let a = Point::basepoint_mul(&Scalar::from(3u64));
        let b = Point::basepoint_mul(&Scalar::from(5u64));
        assert_eq!(a + b, b + a);
    }
}
