/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Property-based tests for the range tree using `proptest`.

#[cfg(not(miri))]
mod proptests {
    use point_set::Point;
    use proptest::prelude::*;
    use range_tree::{LeafItem, LeafView, QueryBias, RangeTree};

    type Rows = Vec<Vec<i8>>;

    /// Rows of `k` locations in a narrow range, so that duplicates are common.
    fn rows(max_points: usize) -> impl Strategy<Value = (usize, Rows)> {
        (1usize..=3).prop_flat_map(move |k| {
            (
                Just(k),
                proptest::collection::vec(proptest::collection::vec(-20i8..20, k), 1..max_points),
            )
        })
    }

    fn rows_and_bounds() -> impl Strategy<Value = ((usize, Rows), Vec<(i8, i8)>)> {
        rows(48).prop_flat_map(|(k, rows)| {
            (
                Just((k, rows)),
                proptest::collection::vec((-25i8..25, -25i8..25), k),
            )
        })
    }

    fn build(k: usize, rows: Rows) -> RangeTree<i8, usize> {
        let points = rows
            .into_iter()
            .enumerate()
            .map(|(i, locations)| Point::new(locations, i))
            .collect();
        RangeTree::build(points, k).unwrap()
    }

    fn split_bounds(pairs: &[(i8, i8)]) -> (Vec<i8>, Vec<i8>) {
        pairs.iter().map(|&(a, b)| (a.min(b), a.max(b))).unzip()
    }

    proptest::proptest! {
        #[test]
        fn prop_range_search_matches_scan(((k, rows), pairs) in rows_and_bounds()) {
            let tree = build(k, rows);
            let (mins, maxes) = split_bounds(&pairs);

            let mut found = tree.range_search_ids(&mins, &maxes).unwrap();
            found.sort_unstable();
            let expected = tree.points().scan(&mins, &maxes).unwrap();
            prop_assert_eq!(found, expected);
        }

        #[test]
        fn prop_every_point_finds_itself((k, rows) in rows(48)) {
            let tree = build(k, rows);
            for (id, point) in tree.points().iter() {
                let found = tree.range_search_ids(point.locations(), point.locations()).unwrap();
                // Duplicated points find each other, but always themselves.
                prop_assert!(found.contains(&id));
                for other in found {
                    prop_assert_eq!(tree.point(other).locations(), point.locations());
                }
            }
        }

        #[test]
        fn prop_invariants_hold((k, rows) in rows(64)) {
            build(k, rows).check_invariants();
        }

        #[test]
        fn prop_successor_query_finds_first_location_at_or_after_target(
            (k, rows) in rows(48),
            target in -25i8..25,
        ) {
            let tree = build(k, rows);
            for dimension in 0..tree.dimensionality() {
                let root = tree.root_at_dimension(dimension).unwrap();
                let leaf = tree.query(&target, root, QueryBias::Successor);
                let location = *tree.node(leaf).location();

                let column = || {
                    tree.points()
                        .iter()
                        .filter_map(move |(_, p)| p.location(dimension).copied())
                };
                match column().filter(|l| *l >= target).min() {
                    Some(expected) => prop_assert_eq!(location, expected),
                    // Nothing at or after the target: the descent ends on the last leaf.
                    None => prop_assert_eq!(Some(location), column().max()),
                }
            }
        }

        #[test]
        fn prop_canonical_subsets_are_disjoint(((k, rows), pairs) in rows_and_bounds()) {
            let tree = build(k, rows);
            let (mins, maxes) = split_bounds(&pairs);

            let subsets = tree
                .canonical_subsets(tree.root_index(), &mins[0], &maxes[0])
                .unwrap();
            let mut points: Vec<_> = subsets
                .iter()
                .flat_map(|&subset| tree.leaves(subset, LeafView::Node))
                .map(|leaf| match leaf {
                    LeafItem::Node(idx) => tree.node(idx).point(),
                    other => panic!("unexpected leaf view {other:?}"),
                })
                .collect();
            let total = points.len();
            points.sort_unstable();
            points.dedup();
            prop_assert_eq!(points.len(), total);
        }
    }
}
