/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Structural invariant checks for the range tree.
//!
//! Under the `unittest` feature these checks run after every construction.
//! They walk every layer, so they cost far more than a query.

use std::fmt::Debug;

use point_set::{PointId, Projected};

use super::RangeTree;
use crate::RangeTreeNode;
use crate::arena::NodeIndex;

/// What a subtree looks like from its parent.
struct SubtreeSummary<'a, L> {
    /// Smallest key among the subtree's leaves.
    first: &'a Projected<L>,
    /// Largest key among the subtree's leaves.
    last: &'a Projected<L>,
    /// The subtree's points, sorted by id.
    points: Vec<PointId>,
    height: u32,
}

impl<L: Ord + Debug, P> RangeTree<L, P> {
    /// Assert every structural invariant of the tree.
    ///
    /// # Panics
    ///
    /// Panics with a description of the first violated invariant:
    /// - split keys must be the rightmost key of their left subtree, and
    ///   every left key must be smaller than every right key;
    /// - children must point back to their parent, layer roots to nothing;
    /// - next-dimension subtrees must cover exactly the same points, and
    ///   exist in every dimension but the last;
    /// - each layer must have height `ceil(log2(leaves))`, at most;
    /// - every node in the arena must be reachable exactly once.
    pub fn check_invariants(&self) {
        let mut visited = 0;
        let summary = self.check_layer(self.root, 0, &mut visited);

        let expected: Vec<PointId> = self.points.iter().map(|(id, _)| id).collect();
        assert_eq!(
            summary.points, expected,
            "dimension-0 layer must hold every point exactly once"
        );
        assert_eq!(
            visited,
            self.nodes.len(),
            "arena holds {} nodes but only {visited} are reachable",
            self.nodes.len(),
        );
    }

    fn check_layer(
        &self,
        root: NodeIndex,
        dimension: usize,
        visited: &mut usize,
    ) -> SubtreeSummary<'_, L> {
        assert!(
            self.nodes[root].parent_index().is_none(),
            "layer root {root:?} of dimension {dimension} has a parent"
        );
        self.check_node(root, dimension, visited)
    }

    fn check_node(
        &self,
        idx: NodeIndex,
        dimension: usize,
        visited: &mut usize,
    ) -> SubtreeSummary<'_, L> {
        *visited += 1;
        let node = &self.nodes[idx];
        assert_eq!(
            node.dimension(),
            dimension,
            "node {idx:?} is in the layer of dimension {dimension} but orders by {}",
            node.dimension()
        );

        let summary = match node {
            RangeTreeNode::Leaf(leaf) => SubtreeSummary {
                first: leaf.key(),
                last: leaf.key(),
                points: vec![leaf.key().point],
                height: 0,
            },
            RangeTreeNode::Internal(internal) => {
                for child in [internal.left_index(), internal.right_index()] {
                    assert_eq!(
                        self.nodes[child].parent_index(),
                        Some(idx),
                        "child {child:?} does not point back to its parent {idx:?}"
                    );
                }
                let left = self.check_node(internal.left_index(), dimension, visited);
                let right = self.check_node(internal.right_index(), dimension, visited);

                assert_eq!(
                    left.last,
                    internal.key(),
                    "split key of {idx:?} is not the rightmost key of its left subtree"
                );
                assert!(
                    left.last < right.first,
                    "node {idx:?}: left keys reach {:?} but right keys start at {:?}",
                    left.last,
                    right.first
                );

                let mut points = left.points;
                points.extend(right.points);
                points.sort_unstable();
                SubtreeSummary {
                    first: left.first,
                    last: right.last,
                    points,
                    height: 1 + left.height.max(right.height),
                }
            }
        };

        let max_height = summary.points.len().next_power_of_two().trailing_zeros();
        assert!(
            summary.height <= max_height,
            "subtree {idx:?} with {} leaves has height {}, expected at most {max_height}",
            summary.points.len(),
            summary.height
        );

        match node.next_dimension_subtree() {
            Some(next) => {
                assert!(
                    dimension + 1 < self.dimensionality(),
                    "node {idx:?} in the last dimension links to a next-dimension subtree"
                );
                let nested = self.check_layer(next, dimension + 1, visited);
                assert_eq!(
                    nested.points, summary.points,
                    "next-dimension subtree of {idx:?} covers different points"
                );
            }
            None => assert_eq!(
                dimension + 1,
                self.dimensionality(),
                "node {idx:?} of dimension {dimension} has no next-dimension subtree"
            ),
        }

        summary
    }
}
