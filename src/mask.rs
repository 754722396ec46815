//! A compact encoding of "which indices of the known signer list
//! participated" (spec.md §4.2).

use crate::error::Error;

/// Design ceiling on signer-list size: ten 64-bit words (spec.md §3, §4.2).
pub const MAX_SIGNERS: usize = 640;

/// On-wire width of the mask bitmap.
pub const MASK_BYTES: usize = 80;

const WORDS: usize = MASK_BYTES / 8;

/// A fixed-width 640-bit participant bitmap.
///
/// `Keys()` always returns indices in ascending order, so aggregation is
/// independent of the order in which contributors were reported (spec.md
/// §4.2 invariant, §8 property 2).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Mask {
    words: [u64; WORDS],
}

impl Mask {
    /// The empty mask.
    pub fn new() -> Self {
        Mask { words: [0; WORDS] }
    }

    /// Builds a mask from an iterator of indices, rejecting any index that
    /// exceeds [`MAX_SIGNERS`].
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Result<Self, Error> {
        let mut mask = Mask::new();
        for i in indices {
            mask.set(i)?;
        }
        Ok(mask)
    }

    /// Marks index `i` as a contributor.
    pub fn set(&mut self, i: usize) -> Result<(), Error> {
        let (word, bit) = Self::locate(i)?;
        self.words[word] |= 1 << bit;
        Ok(())
    }

    /// Clears index `i`.
    pub fn clear(&mut self, i: usize) -> Result<(), Error> {
        let (word, bit) = Self::locate(i)?;
        self.words[word] &= !(1 << bit);
        Ok(())
    }

    /// Whether index `i` is set. Indices at or beyond [`MAX_SIGNERS`] are
    /// simply absent, not an error, since membership queries are total.
    pub fn contains(&self, i: usize) -> bool {
        match Self::locate(i) {
            Ok((word, bit)) => self.words[word] & (1 << bit) != 0,
            Err(_) => false,
        }
    }

    /// Contributor indices, ascending.
    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            let mut remaining = word;
            core::iter::from_fn(move || {
                if remaining == 0 {
                    return None;
                }
                let bit = remaining.trailing_zeros() as usize;
                remaining &= remaining - 1;
                Some(w * 64 + bit)
            })
        })
    }

    /// Popcount: the number of contributing signers.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Encodes the mask as ten 64-bit words, widest-index word first, so the
    /// wire form's trailing bytes carry the lowest participant indices —
    /// matching the original kernel's single-word mask field, which this
    /// format extends (spec.md §6; see DESIGN.md for the derivation).
    pub fn encode(&self) -> [u8; MASK_BYTES] {
        let mut out = [0u8; MASK_BYTES];
        for (i, word) in self.words.iter().enumerate() {
            out[i * 8..i * 8 + 8].copy_from_slice(&word.to_le_bytes());
        }
        out.reverse();
        out
    }

    /// Decodes a mask from its exact 80-byte wire form.
    pub fn decode(bytes: &[u8; MASK_BYTES]) -> Self {
        let mut reversed = *bytes;
        reversed.reverse();
        let mut words = [0u64; WORDS];
        for (i, word) in words.iter_mut().enumerate() {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(&reversed[i * 8..i * 8 + 8]);
            *word = u64::from_le_bytes(buf);
        }
        Mask { words }
    }

    fn locate(i: usize) -> Result<(usize, usize), Error> {
        if i >= MAX_SIGNERS {
            return Err(Error::MaskOverflow(i as u32));
        }
        Ok((i / 64, i % 64))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Mask, MASK_BYTES};

    impl Serialize for Mask {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.encode().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Mask {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let bytes = <[u8; MASK_BYTES]>::deserialize(deserializer)?;
            Ok(Mask::decode(&bytes))
        }
    }
}
