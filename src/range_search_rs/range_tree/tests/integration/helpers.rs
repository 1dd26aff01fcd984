/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Shared test helpers for the range tree integration tests.

use point_set::Point;
use range_tree::RangeTree;

/// Build a tree whose payloads are the points' input positions.
pub fn tree_from(coordinates: &[&[i32]]) -> RangeTree<i32, usize> {
    let dimensionality = coordinates.first().map_or(1, |c| c.len());
    let points = coordinates
        .iter()
        .enumerate()
        .map(|(i, c)| Point::new(c.to_vec(), i))
        .collect();
    RangeTree::build(points, dimensionality).expect("valid points")
}

/// The five-point, two-dimensional set used across the tests.
pub fn five_points() -> RangeTree<i32, usize> {
    tree_from(&[&[10, 10], &[30, 70], &[50, 50], &[70, 30], &[90, 90]])
}

/// Payloads found by a range search, sorted.
pub fn search(tree: &RangeTree<i32, usize>, mins: &[i32], maxes: &[i32]) -> Vec<usize> {
    tree.range_search_sorted(mins, maxes)
        .expect("valid bounds")
        .into_iter()
        .copied()
        .collect()
}

/// Payloads found by a brute-force scan, sorted.
pub fn scan(tree: &RangeTree<i32, usize>, mins: &[i32], maxes: &[i32]) -> Vec<usize> {
    let mut found: Vec<usize> = tree
        .points()
        .scan(mins, maxes)
        .expect("valid bounds")
        .into_iter()
        .map(|id| *tree.payload(id))
        .collect();
    found.sort_unstable();
    found
}
