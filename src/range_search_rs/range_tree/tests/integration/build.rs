/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for range tree construction.

use point_set::{Point, PointId, PointSetError};
use pretty_assertions::assert_eq;
use range_tree::{LeafItem, LeafView, RangeTree, RangeTreeError, RangeTreeNode};

use super::helpers::{five_points, tree_from};

#[test]
fn single_point_has_one_leaf_per_dimension() {
    let tree = tree_from(&[&[4, 2]]);

    let root = tree.root();
    assert!(root.is_leaf());
    assert_eq!(root.dimension(), 0);
    assert_eq!(root.location(), &4);

    let next = root.next_dimension_subtree().expect("dimension 1 layer");
    let next = tree.node(next);
    assert!(next.is_leaf());
    assert_eq!(next.dimension(), 1);
    assert_eq!(next.location(), &2);
    assert_eq!(next.next_dimension_subtree(), None);

    assert_eq!(tree.num_nodes(), 2);
    tree.check_invariants();
}

#[test]
fn empty_point_set_is_rejected() {
    let result = RangeTree::<i32, ()>::build(Vec::new(), 2);
    assert_eq!(
        result.unwrap_err(),
        RangeTreeError::PointSet(PointSetError::EmptyDataset)
    );
}

#[test]
fn zero_dimensionality_is_rejected() {
    let result = RangeTree::build(vec![Point::new(Vec::<i32>::new(), ())], 0);
    assert!(matches!(
        result,
        Err(RangeTreeError::PointSet(
            PointSetError::InvalidDimensionality { .. }
        ))
    ));
}

#[test]
fn ragged_points_are_rejected() {
    let result = RangeTree::build(
        vec![Point::new(vec![1, 2], 'a'), Point::new(vec![1, 2, 3], 'b')],
        2,
    );
    assert!(matches!(
        result,
        Err(RangeTreeError::PointSet(
            PointSetError::MismatchedDimensionality { .. }
        ))
    ));
}

#[test]
fn split_keys_are_medians() {
    let tree = five_points();

    // x: 10, 30, 50, 70, 90 -> the left half keeps 10, 30, 50.
    let root = tree.root();
    assert_eq!(root.location(), &50);
    assert_eq!(root.point(), PointId::new(2));

    let RangeTreeNode::Internal(internal) = root else {
        panic!("root of five points must be internal");
    };
    assert_eq!(tree.node(internal.left_index()).location(), &30);
    assert_eq!(tree.node(internal.right_index()).location(), &70);

    // y: 10, 30, 50, 70, 90 belong to points 0, 3, 2, 1, 4.
    let y_root = tree.root_at_dimension(1).unwrap();
    assert_eq!(tree.node(y_root).location(), &50);
    assert_eq!(tree.node(y_root).dimension(), 1);
}

#[test]
fn every_node_carries_a_layer_of_its_points() {
    let tree = five_points();

    // Dimension 0 holds 9 nodes. Each of them roots a dimension-1 layer with
    // `2m - 1` nodes for its `m` leaves: 9 + 5 + 3 + 1 + 1 + 1 + 3 + 1 + 1.
    assert_eq!(tree.num_nodes(), 9 + 25);
    tree.check_invariants();
}

#[test]
fn root_at_dimension_rejects_out_of_bounds() {
    let tree = five_points();
    assert_eq!(
        tree.root_at_dimension(2).unwrap_err(),
        RangeTreeError::PointSet(PointSetError::InvalidDimensionality {
            dimension: 2,
            dimensionality: 2,
        })
    );
}

#[test]
fn duplicate_locations_are_ordered_by_input_position() {
    let tree = tree_from(&[&[5], &[5], &[5], &[1]]);
    tree.check_invariants();

    // Sorted keys: (1, #3), (5, #0), (5, #1), (5, #2). The median is (5, #0).
    assert_eq!(tree.root().location(), &5);
    assert_eq!(tree.root().point(), PointId::new(0));
}

#[test]
fn parents_lead_back_to_the_layer_root() {
    let tree = five_points();
    let root = tree.root_index();

    for node in &tree {
        if node.parent_index().is_none() {
            assert!(std::ptr::eq(node, tree.root()));
        }
    }

    let leaf = tree.leaves(root, LeafView::Node).last();
    let Some(LeafItem::Node(leaf)) = leaf else {
        panic!("expected a node view");
    };
    let ancestors: Vec<_> = tree.ancestors(leaf).collect();
    assert_eq!(ancestors.last(), Some(&root));
    assert_eq!(ancestors.len(), 2);
}
