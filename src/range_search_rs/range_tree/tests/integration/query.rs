/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for single-dimension queries and point location.

use point_set::PointSetError;
use pretty_assertions::assert_eq;
use range_tree::{Direction, QueryBias, RangeTreeError};
use rstest::rstest;

use super::helpers::{five_points, tree_from};

#[rstest]
#[case::exact_match(50, 50)]
#[case::successor(51, 70)]
#[case::below_everything(-5, 10)]
#[case::above_everything(95, 90)]
#[case::first(10, 10)]
fn successor_query_in_first_dimension(#[case] target: i32, #[case] expected: i32) {
    let tree = five_points();
    let leaf = tree.query(&target, tree.root_index(), QueryBias::Successor);
    assert!(tree.node(leaf).is_leaf());
    assert_eq!(tree.node(leaf).location(), &expected);
}

#[rstest]
#[case::exact_match_moves_past(50, 70)]
#[case::between(60, 70)]
#[case::below_everything(-5, 10)]
#[case::above_everything(95, 90)]
fn predecessor_query_ends_past_target(#[case] target: i32, #[case] expected: i32) {
    let tree = five_points();
    let leaf = tree.query(&target, tree.root_index(), QueryBias::Predecessor);
    assert_eq!(tree.node(leaf).location(), &expected);
}

#[test]
fn query_in_second_dimension() {
    let tree = five_points();
    let root = tree.root_at_dimension(1).unwrap();
    let leaf = tree.query(&31, root, QueryBias::default());
    assert_eq!(tree.node(leaf).location(), &50);
    assert_eq!(*tree.payload(tree.node(leaf).point()), 2);
}

#[test]
fn path_records_every_internal_node() {
    let tree = five_points();
    let path = tree.query_path(&30, tree.root_index(), QueryBias::Successor);

    let directions: Vec<Direction> = path.steps.iter().map(|s| s.direction).collect();
    assert_eq!(
        directions,
        vec![Direction::Left, Direction::Left, Direction::Right]
    );
    assert_eq!(path.steps[0].node, tree.root_index());
    assert_eq!(tree.node(path.leaf).location(), &30);

    // Each step's node is the parent of the next one.
    for pair in path.steps.windows(2) {
        assert_eq!(tree.node(pair[1].node).parent_index(), Some(pair[0].node));
    }
}

#[test]
fn single_leaf_layer_has_empty_path() {
    let tree = tree_from(&[&[7]]);
    let path = tree.query_path(&0, tree.root_index(), QueryBias::Successor);
    assert!(path.steps.is_empty());
    assert_eq!(path.leaf, tree.root_index());
}

#[test]
fn locate_returns_the_whole_point() {
    let tree = five_points();

    let point = tree.locate(&70, 1).unwrap();
    assert_eq!(point.locations(), &[30, 70]);
    assert_eq!(*point.payload(), 1);

    let point = tree.locate(&45, 0).unwrap();
    assert_eq!(point.locations(), &[50, 50]);
}

#[test]
fn locate_rejects_out_of_bounds_dimension() {
    let tree = five_points();
    assert!(matches!(
        tree.locate(&10, 5),
        Err(RangeTreeError::PointSet(
            PointSetError::InvalidDimensionality { dimension: 5, .. }
        ))
    ));
}

#[test]
fn repeated_queries_agree() {
    let tree = five_points();
    let first = tree.query_path(&42, tree.root_index(), QueryBias::Successor);
    for _ in 0..3 {
        assert_eq!(
            tree.query_path(&42, tree.root_index(), QueryBias::Successor),
            first
        );
    }
}
