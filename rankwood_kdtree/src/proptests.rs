// Copyright 2025 the Rankwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::*;

use alloc::vec::Vec;
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Small coordinate range so ties on a single axis are common.
fn coord() -> impl Strategy<Value = i8> {
    -20_i8..20
}

fn bounds() -> impl Strategy<Value = ([i8; 2], [i8; 2])> {
    (coord(), coord(), 1_i8..30, 1_i8..30)
        .prop_map(|(x, y, w, h)| ([x, y], [x.saturating_add(w), y.saturating_add(h)]))
}

fn brute_force(model: &BTreeMap<[i8; 2], u32>, low: [i8; 2], high: [i8; 2]) -> Vec<u32> {
    let mut out: Vec<u32> = model
        .iter()
        .filter(|(p, _)| (0..2).all(|axis| low[axis] < p[axis] && p[axis] < high[axis]))
        .map(|(_, v)| *v)
        .collect();
    out.sort_unstable();
    out
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn range_search_matches_brute_force(
        points in prop::collection::vec(((coord(), coord()), any::<u32>()), 0..200),
        queries in prop::collection::vec(bounds(), 1..8),
    ) {
        let mut tree: KdTree<i8, u32> = KdTree::new(2).unwrap();
        let mut model = BTreeMap::new();
        for ((x, y), v) in points {
            prop_assert_eq!(tree.insert([x, y], v).unwrap(), model.insert([x, y], v));
        }
        prop_assert_eq!(tree.len(), model.len());
        tree.assert_invariants();

        for (low, high) in queries {
            let mut hits: Vec<u32> = tree
                .range_search_2d(&low, &high)
                .unwrap()
                .into_iter()
                .copied()
                .collect();
            hits.sort_unstable();
            prop_assert_eq!(hits, brute_force(&model, low, high));
        }
    }

    #[test]
    fn every_inserted_point_is_retrievable(
        dimensions in 1_usize..5,
        raw in prop::collection::vec(prop::collection::vec(coord(), 4), 0..120),
    ) {
        let mut tree: KdTree<i8, usize> = KdTree::new(dimensions).unwrap();
        let mut model = BTreeMap::new();
        for (i, components) in raw.into_iter().enumerate() {
            let key: Vec<i8> = components[..dimensions].to_vec();
            prop_assert_eq!(tree.insert(key.clone(), i).unwrap(), model.insert(key, i));
        }
        prop_assert_eq!(tree.len(), model.len());
        prop_assert_eq!(tree.iter().count(), model.len());
        tree.assert_invariants();
        for (key, value) in &model {
            prop_assert_eq!(tree.get(key), Some(value));
        }
    }

    #[test]
    fn inverted_bounds_always_fail(
        low in (coord(), coord()),
        high in (coord(), coord()),
    ) {
        let tree: KdTree<i8, ()> = KdTree::new(2).unwrap();
        let (low, high) = ([low.0, low.1], [high.0, high.1]);
        let result = tree.range_search_2d(&low, &high);
        if low[0] >= high[0] {
            prop_assert_eq!(result, Err(KdTreeError::InvalidRange { axis: 0 }));
        } else if low[1] >= high[1] {
            prop_assert_eq!(result, Err(KdTreeError::InvalidRange { axis: 1 }));
        } else {
            prop_assert_eq!(result, Ok(Vec::new()));
        }
    }
}
