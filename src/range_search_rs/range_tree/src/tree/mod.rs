/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Layered range tree implementation.
//!
//! The implementation is split into sub-modules by concern:
//! - [`build`]: Construction (per-dimension median splits, next-dimension subtrees)
//! - [`query`]: Single-dimension descent (successor and predecessor routing)
//! - [`search`]: Orthogonal range search (canonical subset decomposition)

mod build;
mod invariants;
mod query;
mod search;

pub use query::{Direction, PathStep, QueryBias, SearchPath};

use point_set::{Point, PointId, PointSet};

use crate::arena::{NodeArena, NodeIndex};
use crate::iter::{Ancestors, LeafView, Leaves, PreOrderDfsIterator};
use crate::{RangeTreeError, RangeTreeNode};

/// A layered range tree over a static set of k-dimensional points.
///
/// # Arena Storage
///
/// The nodes of every dimension layer are stored in one [`NodeArena`] and
/// reference each other by [`NodeIndex`]. Parent links are weak lookups
/// used to walk back up a layer; the arena is the only owner.
///
/// # Layers
///
/// The tree reachable from [`RangeTree::root_index`] orders every point by
/// dimension 0. Each node links to a tree over the same subset of points
/// ordered by the next dimension, down to the last dimension. A node of
/// dimension `d` covering `m` points therefore owns a chain of `k - d`
/// trees with `m` leaves each.
#[derive(Debug)]
pub struct RangeTree<L, P> {
    /// The root node index of the dimension-0 layer.
    root: NodeIndex,
    /// Arena holding the nodes of every layer.
    nodes: NodeArena<L>,
    /// The indexed points. Leaves refer to them by [`PointId`].
    points: PointSet<L, P>,
}

impl<L, P> RangeTree<L, P> {
    /// Resolve a [`NodeIndex`] to a shared reference to the node.
    pub fn node(&self, idx: NodeIndex) -> &RangeTreeNode<L> {
        &self.nodes[idx]
    }

    /// Get a reference to the root node.
    pub fn root(&self) -> &RangeTreeNode<L> {
        &self.nodes[self.root]
    }

    /// Get the root node index.
    pub const fn root_index(&self) -> NodeIndex {
        self.root
    }

    /// Get the root of the layer covering every point, ordered by `dimension`.
    ///
    /// # Errors
    ///
    /// [`PointSetError::InvalidDimensionality`](point_set::PointSetError::InvalidDimensionality)
    /// if `dimension` is not below the tree's dimensionality.
    pub fn root_at_dimension(&self, dimension: usize) -> Result<NodeIndex, RangeTreeError> {
        self.points.check_dimension(dimension)?;
        let mut idx = self.root;
        for current in 0..dimension {
            idx = self.nodes[idx].next_dimension_subtree().ok_or_else(|| {
                RangeTreeError::StructuralIntegrity {
                    dimension: current,
                    target: format!("layer root of dimension {dimension}"),
                    detail: "root has no next-dimension subtree".to_owned(),
                }
            })?;
        }
        Ok(idx)
    }

    /// The indexed points.
    pub const fn points(&self) -> &PointSet<L, P> {
        &self.points
    }

    pub fn point(&self, id: PointId) -> &Point<L, P> {
        self.points.point(id)
    }

    pub fn payload(&self, id: PointId) -> &P {
        self.points.payload(id)
    }

    pub const fn dimensionality(&self) -> usize {
        self.points.dimensionality()
    }

    /// Get the number of indexed points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a tree cannot be built over zero points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the number of nodes across every layer.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over the leaves under `node`, left to right, projected by `view`.
    pub fn leaves(&self, node: NodeIndex, view: LeafView) -> Leaves<'_, L, P> {
        Leaves::new(self, node, view)
    }

    /// Iterate over the ancestors of `node` within its layer, nearest first.
    pub fn ancestors(&self, node: NodeIndex) -> Ancestors<'_, L, P> {
        Ancestors::new(self, node)
    }

    /// Returns an iterator over the layer rooted at `node` (pre-order traversal).
    pub fn iter_from(&self, node: NodeIndex) -> PreOrderDfsIterator<'_, L, P> {
        PreOrderDfsIterator::from_node(self, node)
    }

    /// Returns an iterator over the dimension-0 layer (pre-order traversal).
    pub fn iter(&self) -> PreOrderDfsIterator<'_, L, P> {
        PreOrderDfsIterator::new(self)
    }
}
