//! Projection of keys onto the numeric ring `[0, 2^63)`.
//!
//! A cardinal packs the ranks of a key's first ten symbols into 60 bits, shifts
//! them left by three and sets the low three bits. Keys sharing a longer prefix
//! land closer together. With a rotation origin set, cardinals measure the
//! distance travelled clockwise from the origin, which is what decides which
//! ring participant owns a key.

use crate::alphabet::Alphabet;
use crate::order::KeyOrder;

/// Largest cardinal; the ring has `MAX_CARDINAL` positions and wraps back to 0.
pub const MAX_CARDINAL: u64 = i64::MAX as u64;

/// Number of leading symbols that contribute to a cardinal.
pub const CARDINAL_SYMBOLS: usize = 10;

const TAG_BITS: u32 = 3;
const TAG: u64 = 0b111;

/// Cardinal of a key on the unrotated line.
///
/// Keys shorter than ten symbols are padded with rank 0; symbols past the tenth
/// are ignored. Returns `None` if one of the leading ten bytes is not a symbol.
pub fn raw_cardinal(alphabet: &Alphabet, key: &[u8]) -> Option<u64> {
    let mut packed = 0u64;
    for position in 0..CARDINAL_SYMBOLS {
        let rank = match key.get(position) {
            Some(&byte) => alphabet.decode_symbol(byte)?,
            None => 0,
        };
        packed = (packed << 6) | u64::from(rank);
    }
    Some((packed << TAG_BITS) | TAG)
}

impl KeyOrder {
    /// Position of `key` on the ring, or on the line if no origin is set.
    ///
    /// With an origin `z` and key `k` (both as raw cardinals), keys past the origin
    /// map to `k - z` and the rest wrap around to `MAX_CARDINAL - z + k`. A key whose
    /// raw cardinal equals the origin's maps to `MAX_CARDINAL`, the same ring
    /// position as 0.
    ///
    /// Keys with non-symbol bytes among their first ten map to `MAX_CARDINAL`, the
    /// end of the line, matching where ascending order puts malformed keys.
    pub fn cardinal(&self, key: &[u8]) -> u64 {
        let Some(k) = raw_cardinal(self.alphabet(), key) else {
            tracing::trace!(
                key = %String::from_utf8_lossy(key),
                "key is not well-formed, placing it at the end of the ring"
            );
            return MAX_CARDINAL;
        };
        let Some(origin) = self.origin() else {
            return k;
        };
        // rotate() only accepts well-formed origins
        let z = raw_cardinal(self.alphabet(), origin).unwrap_or(0);
        if k > z {
            k - z
        } else {
            MAX_CARDINAL - z + k
        }
    }

    /// Cardinal of `length` bytes of `key` starting at `offset`, clamped to the key.
    pub fn cardinal_range(&self, key: &[u8], offset: usize, length: usize) -> u64 {
        let range = key
            .get(offset..)
            .map(|tail| &tail[..length.min(tail.len())])
            .unwrap_or_default();
        self.cardinal(range)
    }

    /// Cardinal scaled into `[0.0, 1.0]`.
    pub fn normalized_cardinal(&self, key: &[u8]) -> f64 {
        self.cardinal(key) as f64 / MAX_CARDINAL as f64
    }

    /// Approximate inverse of [`raw_cardinal`].
    ///
    /// Yields the ten symbols encoded in `cardinal` followed by two rank-63
    /// placeholders. Only the leading ten symbols are recovered; anything a key
    /// had beyond them is lost.
    pub fn uncardinal(&self, cardinal: u64) -> Vec<u8> {
        let alphabet = self.alphabet();
        let mut packed = cardinal >> TAG_BITS;
        let mut key = vec![0u8; CARDINAL_SYMBOLS + 2];
        for position in (0..CARDINAL_SYMBOLS).rev() {
            key[position] = alphabet.encode_symbol((packed & 0x3f) as u8);
            packed >>= 6;
        }
        key[CARDINAL_SYMBOLS] = alphabet.max_symbol();
        key[CARDINAL_SYMBOLS + 1] = alphabet.max_symbol();
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_raw_cardinal_of_zero_key() {
        let alphabet = Alphabet::standard();
        assert_eq!(raw_cardinal(alphabet, b""), Some(7));
        assert_eq!(raw_cardinal(alphabet, b"AAAAAAAAAA"), Some(7));
        assert_eq!(raw_cardinal(alphabet, b"AAAAAAAAAB"), Some((1 << 3) | 7));
    }

    #[test]
    fn test_raw_cardinal_of_max_key() {
        let alphabet = Alphabet::standard();
        assert_eq!(raw_cardinal(alphabet, b"//////////"), Some(MAX_CARDINAL));
        assert_eq!(raw_cardinal(alphabet, b"//////////AAAA"), Some(MAX_CARDINAL));
    }

    #[test]
    fn test_raw_cardinal_packs_big_endian() {
        let alphabet = Alphabet::standard();
        // 'B' has rank 1 and sits in the most significant 6 bits
        assert_eq!(raw_cardinal(alphabet, b"B"), Some((1u64 << 57) | 7));
    }

    #[test]
    fn test_raw_cardinal_only_checks_leading_symbols() {
        let alphabet = Alphabet::standard();
        assert_eq!(raw_cardinal(alphabet, b"AAAAA!"), None);
        assert!(raw_cardinal(alphabet, b"AAAAAAAAAA!").is_some());
    }

    #[test]
    fn test_cardinal_follows_order() {
        let order = KeyOrder::standard();
        let keys: [&[u8]; 6] = [b"A", b"AB", b"Az", b"A0", b"B", b"/"];
        for pair in keys.windows(2) {
            assert_eq!(order.compare(pair[0], pair[1]), Ordering::Less);
            assert!(order.cardinal(pair[0]) < order.cardinal(pair[1]));
        }
    }

    #[test]
    fn test_malformed_key_maps_to_end() {
        let order = KeyOrder::standard();
        assert_eq!(order.cardinal(b"A!"), MAX_CARDINAL);
    }

    #[test]
    fn test_rotated_cardinal_wraps() {
        let order = KeyOrder::standard().rotated(b"gAAAAAAAAA").unwrap();
        let z = raw_cardinal(order.alphabet(), b"gAAAAAAAAA").unwrap();

        let after = order.cardinal(b"gAAAAAAAAB");
        assert_eq!(after, 1 << 3);

        let before = order.cardinal(b"f/////////");
        let k = raw_cardinal(order.alphabet(), b"f/////////").unwrap();
        assert_eq!(before, MAX_CARDINAL - (z - k));
        assert!(before > MAX_CARDINAL - 16);

        assert_eq!(order.cardinal(b"gAAAAAAAAA"), MAX_CARDINAL);
    }

    #[test]
    fn test_cardinal_range() {
        let order = KeyOrder::standard();
        assert_eq!(order.cardinal_range(b"!!AB!!", 2, 2), order.cardinal(b"AB"));
        assert_eq!(order.cardinal_range(b"AB", 9, 2), order.cardinal(b""));
    }

    #[test]
    fn test_normalized_cardinal() {
        let order = KeyOrder::standard();
        assert_eq!(order.normalized_cardinal(b"//////////"), 1.0);
        assert!(order.normalized_cardinal(b"A") < 1e-15);
        let middle = order.normalized_cardinal(b"g");
        assert!((middle - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_uncardinal_recovers_leading_symbols() {
        let order = KeyOrder::path_safe();
        let key = b"Hello-World_";
        let restored = order.uncardinal(order.cardinal(key));
        assert_eq!(restored.len(), 12);
        assert_eq!(&restored[..10], &key[..10]);
        assert_eq!(&restored[10..], b"__");
    }

    #[test]
    fn test_uncardinal_pads_short_keys_with_rank_zero() {
        let order = KeyOrder::standard();
        assert_eq!(order.uncardinal(order.cardinal(b"xyz")), b"xyzAAAAAAA//".to_vec());
    }
}
