/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read path: orthogonal range search.
//!
//! In each dimension the query interval `[min, max]` is decomposed into
//! canonical subsets: subtrees whose leaves all lie inside the interval.
//! Every canonical subset then continues in its next-dimension subtree,
//! which covers exactly the same points. In the last dimension the leaves
//! of each canonical subset are the answer.
//!
//! # Decomposition
//!
//! The lower bound is routed with [`QueryBias::Successor`] and the upper
//! bound with [`QueryBias::Predecessor`]. The two paths share a prefix and
//! then part ways at the split node, their lowest common ancestor. Below
//! the split node:
//!
//! - on the lower path, each left turn leaves a right subtree whose keys
//!   lie between the lower bound and the split key;
//! - on the upper path, each right turn leaves a left subtree whose keys
//!   lie between the split key and the upper bound.
//!
//! The two leaves the paths end on are tested individually. If the paths
//! never part, they end on the same leaf, which is the only candidate.

use std::fmt::Debug;

use point_set::{PointId, check_range_bounds};
use tracing::{error, trace};

use super::{Direction, QueryBias, RangeTree};
use crate::RangeTreeError;
use crate::arena::NodeIndex;

impl<L: Ord + Debug, P> RangeTree<L, P> {
    /// Return the payload of every point inside the box `[mins, maxes]`.
    ///
    /// Both bounds are inclusive. The order of the results is unspecified;
    /// see [`RangeTree::range_search_sorted`] for a deterministic order.
    ///
    /// # Errors
    ///
    /// [`PointSetError::MismatchedRangeLength`](point_set::PointSetError::MismatchedRangeLength)
    /// if `mins` and `maxes` differ in length or are shorter than the
    /// dimensionality. This is checked before any traversal.
    pub fn range_search(&self, mins: &[L], maxes: &[L]) -> Result<Vec<&P>, RangeTreeError> {
        Ok(self
            .range_search_ids(mins, maxes)?
            .into_iter()
            .map(|id| self.payload(id))
            .collect())
    }

    /// Like [`RangeTree::range_search`], reporting point ids instead of payloads.
    pub fn range_search_ids(
        &self,
        mins: &[L],
        maxes: &[L],
    ) -> Result<Vec<PointId>, RangeTreeError> {
        let dimensionality = self.dimensionality();
        check_range_bounds(mins, maxes, dimensionality)?;

        let mut found = Vec::new();
        if mins
            .iter()
            .zip(maxes)
            .take(dimensionality)
            .any(|(min, max)| min > max)
        {
            return Ok(found);
        }

        self.search_layer(self.root, mins, maxes, &mut found)?;
        trace!(?mins, ?maxes, found = found.len(), "range search");
        Ok(found)
    }

    fn search_layer(
        &self,
        root: NodeIndex,
        mins: &[L],
        maxes: &[L],
        found: &mut Vec<PointId>,
    ) -> Result<(), RangeTreeError> {
        let dimension = self.nodes[root].dimension();
        for subset in self.canonical_subsets(root, &mins[dimension], &maxes[dimension])? {
            match self.nodes[subset].next_dimension_subtree() {
                Some(next) => self.search_layer(next, mins, maxes, found)?,
                None if dimension + 1 == self.dimensionality() => {
                    found.extend(self.leaf_indices(subset).map(|leaf| self.nodes[leaf].point()));
                }
                None => {
                    error!(dimension, ?mins, ?maxes, "canonical subset without next layer");
                    return Err(RangeTreeError::StructuralIntegrity {
                        dimension,
                        target: format!("{mins:?}..={maxes:?}"),
                        detail: format!(
                            "canonical subset rooted at {subset:?} has no next-dimension subtree"
                        ),
                    });
                }
            }
        }
        Ok(())
    }

    /// Decompose `[min, max]` within the layer rooted at `root`.
    ///
    /// Returns the roots of disjoint subtrees whose leaves are exactly the
    /// leaves of the layer with a location inside `[min, max]`.
    pub fn canonical_subsets(
        &self,
        root: NodeIndex,
        min: &L,
        max: &L,
    ) -> Result<Vec<NodeIndex>, RangeTreeError> {
        let lower = self.query_path(min, root, QueryBias::Successor);
        let upper = self.query_path(max, root, QueryBias::Predecessor);
        let mut subsets = Vec::new();

        let Some(split) = lower
            .steps
            .iter()
            .zip(&upper.steps)
            .position(|(l, u)| l.direction != u.direction)
        else {
            // Both paths end on the same leaf.
            if self.leaf_in_range(lower.leaf, min, max) {
                subsets.push(lower.leaf);
            }
            return Ok(subsets);
        };

        if lower.steps[split].direction != Direction::Left {
            let dimension = self.nodes[root].dimension();
            error!(dimension, ?min, ?max, "bounds diverge in the wrong direction");
            return Err(RangeTreeError::StructuralIntegrity {
                dimension,
                target: format!("{min:?}..={max:?}"),
                detail: format!(
                    "lower bound turns right at split node {:?}",
                    lower.steps[split].node
                ),
            });
        }

        for step in &lower.steps[split + 1..] {
            if step.direction == Direction::Left
                && let Some(right) = self.nodes[step.node].right_index()
            {
                subsets.push(right);
            }
        }
        if self.leaf_in_range(lower.leaf, min, max) {
            subsets.push(lower.leaf);
        }

        for step in &upper.steps[split + 1..] {
            if step.direction == Direction::Right
                && let Some(left) = self.nodes[step.node].left_index()
            {
                subsets.push(left);
            }
        }
        if self.leaf_in_range(upper.leaf, min, max) {
            subsets.push(upper.leaf);
        }

        Ok(subsets)
    }

    fn leaf_in_range(&self, leaf: NodeIndex, min: &L, max: &L) -> bool {
        let location = self.nodes[leaf].location();
        min <= location && location <= max
    }
}

impl<L: Ord + Debug, P: Ord> RangeTree<L, P> {
    /// Like [`RangeTree::range_search`], with results ordered by payload.
    pub fn range_search_sorted(&self, mins: &[L], maxes: &[L]) -> Result<Vec<&P>, RangeTreeError> {
        let mut found = self.range_search(mins, maxes)?;
        found.sort_unstable();
        Ok(found)
    }
}
