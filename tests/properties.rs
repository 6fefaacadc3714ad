//! Property-based tests for the key order and codecs.
//!
//! Uses proptest to check that ordering and encoding identities hold for
//! arbitrary keys, including keys with bytes outside the alphabet.

use proptest::prelude::*;
use ring_order::{Alphabet, AlphabetVariant, Direction, KeyOrder, MAX_CARDINAL, raw_cardinal};
use std::cmp::Ordering;

fn any_order() -> impl Strategy<Value = KeyOrder> {
    prop::sample::select(vec!["bu", "bd", "Bu", "Bd"])
        .prop_map(|code| KeyOrder::from_signature(code).unwrap())
}

fn any_variant() -> impl Strategy<Value = AlphabetVariant> {
    prop::sample::select(AlphabetVariant::all().to_vec())
}

/// Keys drawn from the path-safe alphabet.
fn path_safe_key(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..64, 0..max_len)
        .prop_map(|ranks| {
            let alphabet = Alphabet::path_safe();
            ranks.into_iter().map(|r| alphabet.encode_symbol(r)).collect()
        })
}

/// Keys that mostly consist of symbols but may contain arbitrary bytes.
fn mixed_key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        path_safe_key(12),
        prop::collection::vec(any::<u8>(), 0..12),
        prop::collection::vec(prop::sample::select(b"AB-_+/=!".to_vec()), 0..6),
    ]
}

// =============================================================================
// Order Properties
// =============================================================================

proptest! {
    /// compare(a, b) == -compare(b, a)
    #[test]
    fn prop_antisymmetric(order in any_order(), a in mixed_key(), b in mixed_key()) {
        prop_assert_eq!(order.compare(&a, &b), order.compare(&b, &a).reverse());
    }

    /// Antisymmetry also holds on a ring.
    #[test]
    fn prop_antisymmetric_rotated(
        order in any_order(),
        origin in path_safe_key(8),
        a in mixed_key(),
        b in mixed_key(),
    ) {
        let order = match order.variant() {
            AlphabetVariant::PathSafe => order.rotated(&origin).unwrap(),
            AlphabetVariant::Standard => order,
        };
        prop_assert_eq!(order.compare(&a, &b), order.compare(&b, &a).reverse());
    }

    /// compare(a, a) == 0 and equal(a, a)
    #[test]
    fn prop_reflexive(order in any_order(), a in mixed_key()) {
        prop_assert_eq!(order.compare(&a, &a), Ordering::Equal);
        prop_assert!(order.equal(&a, &a));
    }

    /// Only identical keys compare equal.
    #[test]
    fn prop_equal_iff_identical(order in any_order(), a in mixed_key(), b in mixed_key()) {
        prop_assert_eq!(order.compare(&a, &b) == Ordering::Equal, a == b);
    }

    /// Transitivity over three arbitrary keys.
    #[test]
    fn prop_transitive(order in any_order(), a in mixed_key(), b in mixed_key(), c in mixed_key()) {
        let mut keys = [a, b, c];
        keys.sort_by(|x, y| order.compare(x, y));
        prop_assert_ne!(order.compare(&keys[0], &keys[1]), Ordering::Greater);
        prop_assert_ne!(order.compare(&keys[1], &keys[2]), Ordering::Greater);
        prop_assert_ne!(order.compare(&keys[0], &keys[2]), Ordering::Greater);
    }

    /// A well-formed key sorts before any malformed key in ascending order.
    #[test]
    fn prop_malformed_dominance(
        variant in any_variant(),
        a in path_safe_key(12),
        b in prop::collection::vec(any::<u8>(), 0..12),
        bad in prop::sample::select(vec![b'!', b'=', b' ', 0u8, 0x80, 0xff]),
        at in any::<prop::sample::Index>(),
    ) {
        let order = KeyOrder::new(Direction::Ascending, variant);
        let a: Vec<u8> = a.into_iter().filter(|&s| order.alphabet().is_symbol(s)).collect();
        let mut b = b;
        let position = at.index(b.len() + 1);
        b.insert(position, bad);
        prop_assert_eq!(order.compare(&a, &b), Ordering::Less);
        prop_assert_eq!(order.compare(&b, &a), Ordering::Greater);
    }
}

// =============================================================================
// Cardinal Properties
// =============================================================================

proptest! {
    /// Order and cardinal agree on keys of at most ten symbols.
    #[test]
    fn prop_cardinal_monotonic(a in path_safe_key(11), b in path_safe_key(11)) {
        let order = KeyOrder::path_safe();
        if order.compare(&a, &b) == Ordering::Less {
            prop_assert!(order.cardinal(&a) <= order.cardinal(&b));
        }
    }

    /// Cardinals stay within [0, 2^63).
    #[test]
    fn prop_cardinal_in_range(origin in path_safe_key(12), key in mixed_key()) {
        let order = KeyOrder::path_safe().rotated(&origin).unwrap();
        prop_assert!(order.cardinal(&key) <= MAX_CARDINAL);
        prop_assert!(KeyOrder::path_safe().cardinal(&key) <= MAX_CARDINAL);
    }

    /// Keys right after the origin are near 0, keys right before it near MAX_CARDINAL.
    #[test]
    fn prop_ring_wraps_around_origin(origin in path_safe_key(11)) {
        let order = KeyOrder::path_safe();
        let z = raw_cardinal(order.alphabet(), &origin).unwrap();
        prop_assume!(z > 7 && z < MAX_CARDINAL);

        let ring = order.rotated(&origin).unwrap();
        let after = order.uncardinal(z + 8);
        let before = order.uncardinal(z - 8);
        prop_assert_eq!(ring.cardinal(&after), 8);
        prop_assert_eq!(ring.cardinal(&before), MAX_CARDINAL - 8);
    }

    /// uncardinal keeps the leading ten symbols.
    #[test]
    fn prop_uncardinal_prefix(key in path_safe_key(16)) {
        let order = KeyOrder::path_safe();
        let restored = order.uncardinal(order.cardinal(&key));
        let shown = key.len().min(10);
        prop_assert_eq!(&restored[..shown], &key[..shown]);
        prop_assert_eq!(order.cardinal(&restored), order.cardinal(&key));
    }
}

// =============================================================================
// Codec Properties
// =============================================================================

proptest! {
    /// decode_bytes(encode_bytes(bs)) == bs for both alphabets
    #[test]
    fn prop_bytes_round_trip(
        variant in any_variant(),
        data in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        let alphabet = Alphabet::get(variant);
        let encoded = alphabet.encode_bytes(&data);
        prop_assert_eq!(alphabet.decode_bytes(&encoded), data);
    }

    /// Encoded payloads only contain symbols, plus padding for the standard alphabet.
    #[test]
    fn prop_encoded_is_well_formed(
        variant in any_variant(),
        data in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let alphabet = Alphabet::get(variant);
        let encoded = alphabet.encode_bytes(&data);
        let trimmed = encoded.trim_end_matches('=');
        prop_assert!(alphabet.well_formed(trimmed.as_bytes()));
        if alphabet.padding().is_some() {
            prop_assert_eq!(encoded.len() % 4, 0);
        }
    }

    /// encode_prefix is a prefix of encode_bytes.
    #[test]
    fn prop_encode_prefix(
        variant in any_variant(),
        data in prop::collection::vec(any::<u8>(), 0..40),
        len in 0usize..64,
    ) {
        let alphabet = Alphabet::get(variant);
        let full = alphabet.encode_bytes(&data);
        let expected = &full.as_bytes()[..len.min(full.len())];
        prop_assert_eq!(alphabet.encode_prefix(&data, len), expected.to_vec());
    }

    /// decode_long(encode_long(v, w)) == v whenever v fits into w symbols
    #[test]
    fn prop_fixed_width_round_trip(
        variant in any_variant(),
        width in 1usize..=10,
        value in any::<u64>(),
    ) {
        let alphabet = Alphabet::get(variant);
        let value = value & Alphabet::max_value(width);
        let encoded = alphabet.encode_long(value, width);
        prop_assert_eq!(encoded.len(), width);
        prop_assert_eq!(alphabet.decode_long(&encoded), value);
    }

    /// Saturating encoding never wraps.
    #[test]
    fn prop_saturating_clamps(width in 1usize..=10, value in any::<u64>()) {
        let alphabet = Alphabet::standard();
        let decoded = alphabet.decode_long(&alphabet.encode_long_saturating(value, width));
        prop_assert_eq!(decoded, value.min(Alphabet::max_value(width)));
    }
}
