use proptest::prelude::*;
use std::collections::BTreeSet;
use varbits::bit_width::packed_len;
use varbits::{bit_width, group16, SymbolIndex, VarBitContainer, HEADER_SIZE};

proptest! {
    #[test]
    fn test_container_round_trip_property(
        mut positions in prop::collection::vec(any::<u64>(), 1..200),
        tail in 1..u64::MAX,
    ) {
        // A nonzero final position cannot be mistaken for padding.
        if let Some(last) = positions.last_mut() {
            *last = tail;
        }
        let c: VarBitContainer = positions.iter().copied().collect();
        let back = VarBitContainer::deserialize(&c.serialize()).unwrap();

        prop_assert_eq!(back.positions(), positions.as_slice());
        prop_assert_eq!(back.max_value(), c.max_value());
    }

    #[test]
    fn test_ascending_round_trip_property(
        set in prop::collection::btree_set(0..100_000u64, 1..300),
    ) {
        let positions: Vec<u64> = set.into_iter().collect();
        let c: VarBitContainer = positions.iter().copied().collect();
        let bytes = c.serialize();
        prop_assert_eq!(bytes.len(), HEADER_SIZE + c.size_in_bytes());

        let back = VarBitContainer::deserialize(&bytes).unwrap();
        prop_assert_eq!(back, c);
    }

    #[test]
    fn test_size_in_bytes_property(
        positions in prop::collection::vec(0..5000u64, 0..200),
    ) {
        let c: VarBitContainer = positions.iter().copied().collect();
        let max = positions.iter().copied().max().unwrap_or(0);
        let w = bit_width(max) as usize;
        prop_assert_eq!(c.size_in_bytes(), (w * positions.len()).div_ceil(8));
        prop_assert_eq!(c.size_in_bytes(), packed_len(c.bit_width(), c.len()));
    }

    #[test]
    fn test_bit_width_property(v in 1..u64::MAX) {
        let w = bit_width(v);
        prop_assert!(v >> (w - 1) == 1);
    }

    #[test]
    fn test_group16_length_property(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let symbols = group16(&bytes);
        prop_assert_eq!(symbols.len(), bytes.len().div_ceil(2));
        for (i, &s) in symbols.iter().enumerate() {
            let hi = bytes[2 * i];
            let lo = bytes.get(2 * i + 1).copied().unwrap_or(0);
            prop_assert_eq!(s, (u16::from(hi) << 8) | u16::from(lo));
        }
    }

    #[test]
    fn test_index_completeness_property(
        bytes in prop::collection::vec(0..4u8, 0..2048),
    ) {
        let symbols = group16(&bytes);
        let index = SymbolIndex::build(&symbols);
        let n = symbols.len();

        let mut seen = BTreeSet::new();
        let mut total = 0usize;
        for (&symbol, container) in &index {
            for &p in container.positions() {
                prop_assert_eq!(symbols[p as usize], symbol);
                prop_assert!(seen.insert(p));
                total += 1;
            }
            prop_assert!(container.positions().windows(2).all(|w| w[0] < w[1]));
        }
        prop_assert_eq!(total, n);
        prop_assert_eq!(seen, (0..n as u64).collect::<BTreeSet<_>>());

        let keys: Vec<_> = index.iter().map(|(&s, _)| s).collect();
        prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_index_containers_round_trip_property(
        bytes in prop::collection::vec(any::<u8>(), 0..1024),
    ) {
        let index = SymbolIndex::from_bytes(&bytes);
        for (_, container) in &index {
            let back = VarBitContainer::deserialize(&container.serialize()).unwrap();
            prop_assert_eq!(&back, container);
        }
    }

    #[test]
    fn test_truncated_input_property(bytes in prop::collection::vec(any::<u8>(), 0..HEADER_SIZE)) {
        let err = VarBitContainer::deserialize(&bytes).unwrap_err();
        prop_assert!(err.is_format());
    }

    #[test]
    fn test_deserialize_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = VarBitContainer::deserialize(&bytes);
    }
}
