// Copyright 2025 the Rankwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::*;

use alloc::vec::Vec;
use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
enum Op {
    Insert(i16, u32),
    Remove(i16),
    RemoveMin,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (any::<i16>(), any::<u32>()).prop_map(|(k, v)| Op::Insert(k % 512, v)),
        2 => any::<i16>().prop_map(|k| Op::Remove(k % 512)),
        1 => Just(Op::RemoveMin),
    ]
}

fn assert_matches_model(bst: &Bst<i16, u32>, model: &BTreeMap<i16, u32>) {
    bst.assert_invariants();
    assert_eq!(bst.len(), model.len());
    assert_eq!(bst.min(), model.keys().next());
    assert_eq!(bst.max(), model.keys().next_back());
    let entries: Vec<(i16, u32)> = bst.iter().map(|(k, v)| (*k, *v)).collect();
    let expected: Vec<(i16, u32)> = model.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(entries, expected);
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn operations_match_btreemap(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut bst = Bst::new();
        let mut model = BTreeMap::new();
        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    prop_assert_eq!(bst.insert(k, v), model.insert(k, v));
                }
                Op::Remove(k) => {
                    prop_assert_eq!(bst.remove(&k), model.remove(&k));
                    prop_assert_eq!(bst.search(&k), None);
                }
                Op::RemoveMin => {
                    prop_assert_eq!(bst.remove_min(), model.pop_first());
                }
            }
            assert_matches_model(&bst, &model);
        }
    }

    #[test]
    fn rank_counts_strictly_smaller_keys(
        keys in prop::collection::btree_set(-1000_i32..1000, 0..150),
        probe in -1100_i32..1100,
    ) {
        let bst: Bst<i32, ()> = keys.iter().map(|k| (*k, ())).collect();
        let expected = keys.iter().filter(|k| **k < probe).count();
        prop_assert_eq!(bst.rank(&probe), expected);
        prop_assert_eq!(bst.rank(&1000), bst.len());
    }

    #[test]
    fn nth_and_rank_are_inverse(keys in prop::collection::vec(any::<u16>(), 1..150)) {
        let bst: Bst<u16, usize> = keys.iter().enumerate().map(|(i, k)| (*k, i)).collect();
        for (position, key) in bst.keys().enumerate() {
            prop_assert_eq!(bst.rank(key), position);
            prop_assert_eq!(bst.nth(position), Some(key));
        }
        prop_assert_eq!(bst.nth(bst.len()), None);
    }

    #[test]
    fn duplicate_insert_keeps_size(
        keys in prop::collection::vec(any::<u8>(), 1..100),
        value in any::<u32>(),
    ) {
        let mut bst: Bst<u8, u32> = keys.iter().map(|k| (*k, 0)).collect();
        let len = bst.len();
        for k in &keys {
            bst.insert(*k, value);
            prop_assert_eq!(bst.len(), len);
            prop_assert_eq!(bst.search(k), Some(&value));
        }
        bst.assert_invariants();
    }
}
