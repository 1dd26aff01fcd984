/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read path: single-dimension descent.
//!
//! A query walks one layer from a given root down to a leaf, comparing the
//! target against each split key's location. The walk never fails: every
//! internal node has two children, so a leaf is always reached.

use std::fmt::Debug;

use point_set::Point;
use tracing::{error, trace};

use super::RangeTree;
use crate::arena::NodeIndex;
use crate::{RangeTreeError, RangeTreeNode};

/// Which side a descent takes when the target is not stored in the layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryBias {
    /// Go left iff `target <= split key`.
    ///
    /// The descent ends on the leftmost leaf with a location `>= target`, or
    /// on the last leaf if every location is smaller.
    #[default]
    Successor,
    /// Go right iff `target >= split key`.
    ///
    /// The descent ends on the leftmost leaf with a location `> target`, or
    /// on the last leaf if no location is greater. Every leaf before it has
    /// a location `<= target`.
    Predecessor,
}

impl QueryBias {
    fn direction<L: Ord>(self, target: &L, split: &L) -> Direction {
        let go_left = match self {
            Self::Successor => target <= split,
            Self::Predecessor => target < split,
        };
        if go_left {
            Direction::Left
        } else {
            Direction::Right
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// One step of a descent: the internal node visited and the side taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    pub direction: Direction,
    pub node: NodeIndex,
}

/// The full route of a descent from a layer root to a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    /// Every internal node traversed, root first.
    pub steps: Vec<PathStep>,
    /// The leaf the descent ended on.
    pub leaf: NodeIndex,
}

impl<L: Ord, P> RangeTree<L, P> {
    /// Descend the layer rooted at `root` towards `target`.
    ///
    /// Returns the leaf holding `target`, or its neighbour in the direction
    /// selected by `bias` when `target` is absent.
    pub fn query(&self, target: &L, root: NodeIndex, bias: QueryBias) -> NodeIndex {
        self.descend(target, root, bias, |_| {})
    }

    /// Like [`RangeTree::query`], also reporting every step taken.
    pub fn query_path(&self, target: &L, root: NodeIndex, bias: QueryBias) -> SearchPath {
        let mut steps = Vec::new();
        let leaf = self.descend(target, root, bias, |step| steps.push(step));
        SearchPath { steps, leaf }
    }

    fn descend(
        &self,
        target: &L,
        mut node_idx: NodeIndex,
        bias: QueryBias,
        mut visit: impl FnMut(PathStep),
    ) -> NodeIndex {
        loop {
            match &self.nodes[node_idx] {
                RangeTreeNode::Leaf(_) => return node_idx,
                RangeTreeNode::Internal(internal) => {
                    let direction = bias.direction(target, &internal.key().location);
                    visit(PathStep {
                        direction,
                        node: node_idx,
                    });
                    node_idx = match direction {
                        Direction::Left => internal.left_index(),
                        Direction::Right => internal.right_index(),
                    };
                }
            }
        }
    }
}

impl<L: Ord + Debug, P> RangeTree<L, P> {
    /// Find the point stored at `target` in `dimension`, or its successor.
    ///
    /// The leaf found in `dimension` is followed down its chain of
    /// next-dimension subtrees, each of which must hold the same point.
    ///
    /// # Errors
    ///
    /// - [`PointSetError::InvalidDimensionality`](point_set::PointSetError::InvalidDimensionality)
    ///   if `dimension` is not below the tree's dimensionality.
    /// - [`RangeTreeError::StructuralIntegrity`] if the chain below the leaf
    ///   is broken.
    pub fn locate(&self, target: &L, dimension: usize) -> Result<&Point<L, P>, RangeTreeError> {
        let root = self.root_at_dimension(dimension)?;
        let leaf = self.query(target, root, QueryBias::Successor);
        let point = self.nodes[leaf].point();
        trace!(?target, dimension, %point, "located point");

        let mut current = leaf;
        for deeper in dimension + 1..self.dimensionality() {
            let node = &self.nodes[current];
            let next = node.next_dimension_subtree().filter(|&next| {
                let next = &self.nodes[next];
                next.is_leaf() && next.point() == point && next.dimension() == deeper
            });
            current = next.ok_or_else(|| {
                error!(?target, dimension = deeper, %point, "broken next-dimension chain");
                RangeTreeError::StructuralIntegrity {
                    dimension: deeper,
                    target: format!("{target:?}"),
                    detail: format!("leaf of point {point} has no matching next-dimension leaf"),
                }
            })?;
        }

        Ok(self.point(point))
    }
}
