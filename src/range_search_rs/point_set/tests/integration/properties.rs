/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Property-based tests for point sets and projections using `proptest`.

#[cfg(not(miri))]
mod proptests {
    use point_set::{Point, PointSet, Projection};
    use proptest::prelude::*;

    fn point_set(max_points: usize) -> impl Strategy<Value = PointSet<i16, usize>> {
        (1usize..4).prop_flat_map(move |k| {
            proptest::collection::vec(proptest::collection::vec(-50i16..50, k), 1..max_points)
                .prop_map(move |rows| {
                    let points = rows
                        .into_iter()
                        .enumerate()
                        .map(|(i, locations)| Point::new(locations, i))
                        .collect();
                    PointSet::new(points, k).unwrap()
                })
        })
    }

    proptest::proptest! {
        #[test]
        fn prop_sorted_rows_follow_dimension_order(set in point_set(64), pick in 0usize..3) {
            let dimension = pick % set.dimensionality();
            let mut projection = Projection::new(&set);
            projection.sort_rows_by(dimension);

            let keys: Vec<_> = (0..projection.len())
                .map(|row| projection.key(row, dimension))
                .collect();
            prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));

            // Every column still describes the same point on each row.
            for d in 0..set.dimensionality() {
                for (row, projected) in projection.column(d).enumerate() {
                    prop_assert_eq!(projected.point, keys[row].point);
                    prop_assert_eq!(
                        set.point(projected.point).location(d),
                        Some(projected.location)
                    );
                }
            }
        }

        #[test]
        fn prop_scan_matches_every_bound(set in point_set(64), a in -60i16..60, b in -60i16..60) {
            let (lo, hi) = (a.min(b), a.max(b));
            let mins = vec![lo; set.dimensionality()];
            let maxes = vec![hi; set.dimensionality()];
            let hits = set.scan(&mins, &maxes).unwrap();

            for (id, point) in set.iter() {
                let inside = point.locations().iter().all(|l| lo <= *l && *l <= hi);
                prop_assert_eq!(inside, hits.contains(&id));
            }
        }

        #[test]
        fn prop_successor_is_first_in_sorted_column(set in point_set(64), x in -60i16..60) {
            for d in 0..set.dimensionality() {
                let expected = Projection::new(&set)
                    .sorted_column(d)
                    .into_iter()
                    .find(|p| p.location >= x)
                    .map(|p| p.point);
                prop_assert_eq!(set.successor(d, &x).unwrap(), expected);
            }
        }
    }
}
