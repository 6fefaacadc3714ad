//! The key order used to sort index keys and to lay them out on a ring.
//!
//! Keys are compared symbol by symbol in alphabet rank order, shorter keys first
//! when one is a prefix of the other. An optional rotation origin turns the line
//! into a ring: the origin becomes position zero, keys after it follow, and keys
//! before it wrap around to the end.
//!
//! `compare` never fails. Keys containing bytes outside the alphabet sort after
//! every well-formed key (ascending), and among themselves by plain byte value,
//! so a sorted structure with a few corrupted entries stays walkable.

use crate::alphabet::{Alphabet, AlphabetVariant};
use crate::error::{OrderError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort direction of a [`KeyOrder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    #[inline]
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// Position of a key relative to the rotation origin.
///
/// Declaration order is ring order: the origin itself, then everything after it,
/// then everything before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Side {
    At,
    After,
    Before,
}

/// Every signature code with the order it names.
const SIGNATURES: [(&str, Direction, AlphabetVariant); 4] = [
    ("bu", Direction::Ascending, AlphabetVariant::Standard),
    ("bd", Direction::Descending, AlphabetVariant::Standard),
    ("Bu", Direction::Ascending, AlphabetVariant::PathSafe),
    ("Bd", Direction::Descending, AlphabetVariant::PathSafe),
];

/// A total order over arbitrary byte keys, based on a 64-symbol alphabet.
///
/// Cloning copies the rotation origin by value. To give each ring view its own
/// origin, clone first and rotate the clone (see [`KeyOrder::rotated`]); a shared
/// `KeyOrder` is never mutated behind another reader's back since `rotate`
/// needs `&mut self`.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyOrder {
    direction: Direction,
    alphabet: &'static Alphabet,
    origin: Option<Vec<u8>>,
}

impl KeyOrder {
    pub fn new(direction: Direction, variant: AlphabetVariant) -> Self {
        KeyOrder {
            direction,
            alphabet: Alphabet::get(variant),
            origin: None,
        }
    }

    /// Ascending order over the standard alphabet.
    pub fn standard() -> Self {
        Self::new(Direction::Ascending, AlphabetVariant::Standard)
    }

    /// Ascending order over the path-safe alphabet.
    pub fn path_safe() -> Self {
        Self::new(Direction::Ascending, AlphabetVariant::PathSafe)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn alphabet(&self) -> &'static Alphabet {
        self.alphabet
    }

    pub fn variant(&self) -> AlphabetVariant {
        self.alphabet.variant()
    }

    pub fn origin(&self) -> Option<&[u8]> {
        self.origin.as_deref()
    }

    /// Makes `origin` position zero of the ring.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::MalformedOrigin`] if the origin contains a byte outside
    /// the alphabet. The current origin is left untouched in that case.
    pub fn rotate(&mut self, origin: &[u8]) -> Result<()> {
        if !self.alphabet.well_formed(origin) {
            return Err(OrderError::MalformedOrigin(
                String::from_utf8_lossy(origin).into_owned(),
            ));
        }
        self.origin = Some(origin.to_vec());
        Ok(())
    }

    /// Returns an independent copy of this order rotated to `origin`.
    pub fn rotated(&self, origin: &[u8]) -> Result<Self> {
        let mut view = self.clone();
        view.rotate(origin)?;
        Ok(view)
    }

    /// Turns the ring back into a line.
    pub fn clear_rotation(&mut self) {
        self.origin = None;
    }

    /// Returns true iff every byte of `key` is an alphabet symbol.
    pub fn well_formed(&self, key: &[u8]) -> bool {
        self.alphabet.well_formed(key)
    }

    /// Checks `length` bytes of `key` starting at `offset`.
    ///
    /// A range reaching past the end of `key` is reported as not well-formed.
    pub fn well_formed_range(&self, key: &[u8], offset: usize, length: usize) -> bool {
        match sub_slice(key, offset, length) {
            Some(range) if range.len() == length => self.well_formed(range),
            _ => false,
        }
    }

    /// Exact byte equality, independent of alphabet and direction.
    #[inline]
    pub fn equal(&self, a: &[u8], b: &[u8]) -> bool {
        a == b
    }

    /// Compares `length` bytes of `a` at `a_offset` with `length` bytes of `b` at `b_offset`.
    ///
    /// Ranges reaching past the end of either key are unequal.
    pub fn equal_range(
        &self,
        a: &[u8],
        a_offset: usize,
        b: &[u8],
        b_offset: usize,
        length: usize,
    ) -> bool {
        match (a.get(a_offset..), b.get(b_offset..)) {
            (Some(a), Some(b)) if a.len() >= length && b.len() >= length => {
                a[..length] == b[..length]
            }
            _ => false,
        }
    }

    /// Compares two keys. Total over all byte sequences, never panics on bad input.
    pub fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        match (self.well_formed(a), self.well_formed(b)) {
            (true, true) => self.direction.apply(self.compare_well_formed(a, b)),
            (true, false) => self.direction.apply(Ordering::Less),
            (false, true) => self.direction.apply(Ordering::Greater),
            (false, false) => self.direction.apply(natural_compare(a, b)),
        }
    }

    /// Compares `a[a_offset..a_offset + a_length]` with the matching range of `b`.
    ///
    /// Lengths are clamped to the bytes actually available; an offset past the end
    /// yields an empty range.
    pub fn compare_range(
        &self,
        a: &[u8],
        a_offset: usize,
        a_length: usize,
        b: &[u8],
        b_offset: usize,
        b_length: usize,
    ) -> Ordering {
        let a = sub_slice(a, a_offset, a_length).unwrap_or_default();
        let b = sub_slice(b, b_offset, b_length).unwrap_or_default();
        self.compare(a, b)
    }

    /// Sorts keys in place with this order.
    pub fn sort<K: AsRef<[u8]>>(&self, keys: &mut [K]) {
        keys.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }

    /// Two-character code naming direction and alphabet variant.
    pub fn signature(&self) -> &'static str {
        SIGNATURES
            .iter()
            .find(|(_, direction, variant)| {
                *direction == self.direction && *variant == self.variant()
            })
            .map(|(code, _, _)| *code)
            .unwrap_or_default()
    }

    /// Builds the order named by a signature code.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::UnsupportedSignature`] for any unknown code; there is no
    /// fallback order, since reading a sorted structure with the wrong order would
    /// silently scramble it.
    pub fn from_signature(signature: &str) -> Result<Self> {
        SIGNATURES
            .iter()
            .find(|(code, _, _)| *code == signature)
            .map(|&(_, direction, variant)| KeyOrder::new(direction, variant))
            .ok_or_else(|| OrderError::UnsupportedSignature(signature.to_string()))
    }

    /// Ascending comparison of two well-formed keys, honouring the origin.
    fn compare_well_formed(&self, a: &[u8], b: &[u8]) -> Ordering {
        let Some(origin) = self.origin.as_deref() else {
            return self.compare_linear(a, b);
        };
        let side_a = self.side_of(a, origin);
        let side_b = self.side_of(b, origin);
        if side_a == side_b {
            self.compare_linear(a, b)
        } else {
            side_a.cmp(&side_b)
        }
    }

    fn side_of(&self, key: &[u8], origin: &[u8]) -> Side {
        let origin = &origin[..key.len().min(origin.len())];
        match self.compare_linear(key, origin) {
            Ordering::Less => Side::Before,
            Ordering::Equal => Side::At,
            Ordering::Greater => Side::After,
        }
    }

    /// Symbol-rank lexicographic order, shorter first on a common prefix.
    ///
    /// Both keys must be well-formed.
    fn compare_linear(&self, a: &[u8], b: &[u8]) -> Ordering {
        let table = self.alphabet.table();
        for (&x, &y) in a.iter().zip(b) {
            if x == y {
                continue;
            }
            return match table.probe(x, y) {
                Some(ordering) => ordering,
                None => panic!(
                    "comparison table has no verdict for well-formed symbols {:?} and {:?} ({})",
                    char::from(x),
                    char::from(y),
                    self.variant()
                ),
            };
        }
        a.len().cmp(&b.len())
    }
}

/// Plain byte-value order, used for keys that are not well-formed.
#[inline]
pub fn natural_compare(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}

fn sub_slice(key: &[u8], offset: usize, length: usize) -> Option<&[u8]> {
    let tail = key.get(offset..)?;
    Some(&tail[..length.min(tail.len())])
}

impl Default for KeyOrder {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromStr for KeyOrder {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_signature(s)
    }
}

impl fmt::Debug for KeyOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyOrder")
            .field("signature", &self.signature())
            .field("origin", &self.origin.as_deref().map(String::from_utf8_lossy))
            .finish()
    }
}

impl fmt::Display for KeyOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            Direction::Ascending => "ascending",
            Direction::Descending => "descending",
        };
        write!(f, "{} ({}, {})", self.signature(), direction, self.variant())
    }
}
