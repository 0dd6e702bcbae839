use proptest::prelude::*;
use sequin::{sequence, Joined, SequenceExt, SequenceOf, Sticky};

proptest! {
    #[test]
    fn filtering_preserves_relative_order(
        items in proptest::collection::vec(-1000i64..1000, 0..64),
    ) {
        let seq = SequenceOf::from(items.clone()).filtered(|n| n % 2 == 0);
        let expected: Vec<i64> = items.into_iter().filter(|n| n % 2 == 0).collect();
        prop_assert_eq!(seq.to_vec(), expected);
    }

    #[test]
    fn mapping_preserves_source_order(
        items in proptest::collection::vec(any::<i32>(), 0..64),
    ) {
        let seq = SequenceOf::from(items.clone()).mapped(|n| i64::from(n) * 3);
        let expected: Vec<i64> = items.into_iter().map(|n| i64::from(n) * 3).collect();
        prop_assert_eq!(seq.to_vec(), expected);
    }

    #[test]
    fn skip_then_limit_agrees_with_slicing(
        items in proptest::collection::vec(any::<u8>(), 0..64),
        skip in 0usize..80,
        limit in 0usize..80,
    ) {
        let seq = SequenceOf::from(items.clone()).skipped(skip).limited(limit);
        let expected: Vec<u8> = items.into_iter().skip(skip).take(limit).collect();
        prop_assert_eq!(seq.to_vec(), expected);
    }

    #[test]
    fn skip_zero_and_generous_limit_are_identity(
        items in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let identity = SequenceOf::from(items.clone())
            .skipped(0)
            .limited(items.len() + 1);
        prop_assert_eq!(identity.to_vec(), items);
    }

    #[test]
    fn joining_is_associative_in_element_order(
        a in proptest::collection::vec(any::<i16>(), 0..24),
        b in proptest::collection::vec(any::<i16>(), 0..24),
        c in proptest::collection::vec(any::<i16>(), 0..24),
    ) {
        let left_grouped = Joined::pair(
            Joined::pair(SequenceOf::from(a.clone()), SequenceOf::from(b.clone())),
            Joined::pair(SequenceOf::from(c.clone()), SequenceOf::from(vec![])),
        );
        let flat = Joined::new(vec![
            SequenceOf::from(a),
            SequenceOf::from(b),
            SequenceOf::from(c),
        ]);
        prop_assert!(sequence::eq(&left_grouped, &flat));
    }

    #[test]
    fn sticky_replays_identically_k_times(
        items in proptest::collection::vec(any::<u16>(), 0..64),
        k in 1usize..5,
    ) {
        let sticky = Sticky::new(SequenceOf::from(items.clone()));
        for _ in 0..k {
            prop_assert_eq!(sticky.to_vec(), items.clone());
        }
    }

    #[test]
    fn partitions_flatten_back_to_the_origin(
        items in proptest::collection::vec(any::<u8>(), 0..64),
        size in 1usize..9,
    ) {
        let seq = SequenceOf::from(items.clone()).partitioned(size).unwrap();
        let chunks = seq.to_vec();
        for chunk in chunks.iter().take(chunks.len().saturating_sub(1)) {
            prop_assert_eq!(chunk.len(), size);
        }
        let flat: Vec<u8> = chunks.into_iter().flatten().collect();
        prop_assert_eq!(flat, items);
    }

    #[test]
    fn structural_equality_matches_buffer_equality(
        a in proptest::collection::vec(any::<i32>(), 0..32),
        b in proptest::collection::vec(any::<i32>(), 0..32),
    ) {
        let sa = SequenceOf::from(a.clone());
        let sb = SequenceOf::from(b.clone());
        prop_assert_eq!(sequence::eq(&sa, &sb), a == b);
    }
}
