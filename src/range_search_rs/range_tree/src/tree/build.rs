/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Construction: median splits per dimension, deepest layer first.
//!
//! Building the layer of dimension `d` over a subset of points first builds
//! the layer of dimension `d + 1` over the same subset, so that the new
//! layer's root can link to it. The subset is then sorted by dimension `d`
//! and split at the median; both halves recurse into the same procedure.

use std::fmt::Debug;

use point_set::{Point, PointSet, Projection};
use tracing::debug;

use super::RangeTree;
use crate::arena::{NodeArena, NodeIndex};
use crate::node::{InternalNode, LeafNode};
use crate::{RangeTreeError, RangeTreeNode};

impl<L: Ord + Clone + Debug, P> RangeTree<L, P> {
    /// Build a range tree over `points`, each carrying `dimensionality` locations.
    ///
    /// # Errors
    ///
    /// - [`PointSetError::EmptyDataset`](point_set::PointSetError::EmptyDataset)
    ///   if `points` is empty.
    /// - [`PointSetError::InvalidDimensionality`](point_set::PointSetError::InvalidDimensionality)
    ///   if `dimensionality` is zero.
    /// - [`PointSetError::MismatchedDimensionality`](point_set::PointSetError::MismatchedDimensionality)
    ///   if a point carries the wrong number of locations.
    pub fn build(
        points: Vec<Point<L, P>>,
        dimensionality: usize,
    ) -> Result<Self, RangeTreeError> {
        Self::from_point_set(PointSet::new(points, dimensionality)?)
    }

    /// Build a range tree over an already validated point set.
    ///
    /// # Errors
    ///
    /// [`RangeTreeError::CapacityExceeded`] if the layers need more nodes
    /// than the arena can address.
    pub fn from_point_set(points: PointSet<L, P>) -> Result<Self, RangeTreeError> {
        let projection = Projection::new(&points);
        let mut builder = LayerBuilder {
            nodes: NodeArena::with_capacity(2 * points.len()),
            num_points: points.len(),
        };
        let root = builder.build_layer(projection, 0)?;

        let tree = Self {
            root,
            nodes: builder.nodes,
            points,
        };
        debug!(
            points = tree.len(),
            dimensionality = tree.dimensionality(),
            nodes = tree.num_nodes(),
            "built range tree"
        );

        #[cfg(all(feature = "unittest", not(miri)))]
        tree.check_invariants();

        Ok(tree)
    }
}

struct LayerBuilder<L> {
    nodes: NodeArena<L>,
    num_points: usize,
}

impl<L: Ord + Clone> LayerBuilder<L> {
    /// Build the layer of `dimension` over the rows of `projection`.
    ///
    /// Returns the index of the layer's root.
    fn build_layer(
        &mut self,
        mut projection: Projection<L>,
        dimension: usize,
    ) -> Result<NodeIndex, RangeTreeError> {
        let next_dimension = if dimension + 1 < projection.dimensionality() {
            Some(self.build_layer(projection.clone(), dimension + 1)?)
        } else {
            None
        };

        projection.sort_rows_by(dimension);

        if projection.len() == 1 {
            let leaf = RangeTreeNode::Leaf(LeafNode {
                key: projection.key(0, dimension),
                dimension,
                parent: None,
                next_dimension,
            });
            return self.insert(leaf);
        }

        // The left half keeps the median, which becomes the split key.
        let median = (projection.len() - 1) / 2;
        let key = projection.key(median, dimension);
        let (left, right) = projection.split_at(median + 1);

        let left = self.build_layer(left, dimension)?;
        let right = self.build_layer(right, dimension)?;
        let internal = self.insert(RangeTreeNode::Internal(InternalNode {
            key,
            dimension,
            parent: None,
            next_dimension,
            left,
            right,
        }))?;

        self.nodes[left].set_parent(internal);
        self.nodes[right].set_parent(internal);
        Ok(internal)
    }

    fn insert(&mut self, node: RangeTreeNode<L>) -> Result<NodeIndex, RangeTreeError> {
        self.nodes
            .insert(node)
            .ok_or(RangeTreeError::CapacityExceeded {
                points: self.num_points,
            })
    }
}
