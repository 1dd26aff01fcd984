/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for the layer iterators.

use pretty_assertions::assert_eq;
use range_tree::{LeafItem, LeafView, RangeTree};
use rstest::rstest;

use super::helpers::{five_points, tree_from};

fn locations(tree: &RangeTree<i32, usize>, root: range_tree::NodeIndex) -> Vec<i32> {
    tree.leaves(root, LeafView::Location)
        .map(|leaf| match leaf {
            LeafItem::Location(location) => *location,
            other => panic!("unexpected leaf view {other:?}"),
        })
        .collect()
}

#[test]
fn leaves_are_sorted_in_every_dimension() {
    let tree = five_points();
    assert_eq!(
        locations(&tree, tree.root_index()),
        vec![10, 30, 50, 70, 90]
    );
    let y_root = tree.root_at_dimension(1).unwrap();
    assert_eq!(locations(&tree, y_root), vec![10, 30, 50, 70, 90]);
}

#[test]
fn payload_view_follows_leaf_order() {
    let tree = five_points();
    let y_root = tree.root_at_dimension(1).unwrap();
    let payloads: Vec<usize> = tree
        .leaves(y_root, LeafView::Payload)
        .map(|leaf| match leaf {
            LeafItem::Payload(payload) => *payload,
            other => panic!("unexpected leaf view {other:?}"),
        })
        .collect();
    assert_eq!(payloads, vec![0, 3, 2, 1, 4]);
}

#[test]
fn node_view_yields_leaves_only() {
    let tree = five_points();
    let leaves: Vec<LeafItem<'_, i32, usize>> =
        tree.leaves(tree.root_index(), LeafView::Node).collect();
    assert_eq!(leaves.len(), 5);
    for leaf in leaves {
        let LeafItem::Node(idx) = leaf else {
            panic!("unexpected leaf view {leaf:?}");
        };
        assert!(tree.node(idx).is_leaf());
    }
}

#[test]
fn leaves_of_a_leaf_is_the_leaf() {
    let tree = five_points();
    let leaf = tree.query(&70, tree.root_index(), Default::default());
    assert_eq!(locations(&tree, leaf), vec![70]);
}

#[rstest]
fn pre_order_visits_each_layer_node_once(#[values(1, 2, 3, 7, 16)] n: i32) {
    let coordinates: Vec<Vec<i32>> = (0..n).map(|i| vec![i * 3, -i]).collect();
    let refs: Vec<&[i32]> = coordinates.iter().map(Vec::as_slice).collect();
    let tree = tree_from(&refs);

    let visited: Vec<_> = tree.iter().collect();
    assert_eq!(visited.len() as i32, 2 * n - 1);
    assert!(std::ptr::eq(visited[0], tree.root()));
    assert_eq!((&tree).into_iter().count(), visited.len());

    // Leaves come out in ascending order.
    let leaf_locations: Vec<i32> = visited
        .iter()
        .filter(|node| node.is_leaf())
        .map(|node| *node.location())
        .collect();
    assert_eq!(leaf_locations, (0..n).map(|i| i * 3).collect::<Vec<_>>());
}

#[test]
fn ancestors_of_the_root_are_empty() {
    let tree = five_points();
    assert_eq!(tree.ancestors(tree.root_index()).count(), 0);
}

#[test]
fn pre_order_from_a_layer_root_stays_in_its_layer() {
    let tree = five_points();
    let y_root = tree.root_at_dimension(1).unwrap();

    let visited: Vec<_> = tree.iter_from(y_root).collect();
    assert_eq!(visited.len(), 9);
    assert!(std::ptr::eq(visited[0], tree.node(y_root)));
    assert!(visited.iter().all(|node| node.dimension() == 1));

    let leaf_locations: Vec<i32> = visited
        .iter()
        .filter(|node| node.is_leaf())
        .map(|node| *node.location())
        .collect();
    assert_eq!(leaf_locations, vec![10, 30, 50, 70, 90]);
}
