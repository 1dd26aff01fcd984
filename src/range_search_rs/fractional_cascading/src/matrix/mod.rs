/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! The fractional cascading matrix.
//!
//! The implementation is split into sub-modules by concern:
//! - [`build`]: Promotion, merging and foreign-neighbour assignment
//! - [`search`]: Cascaded successor search and the bisection baseline
//! - [`invariants`]: Structural checks

mod build;
mod invariants;
mod search;

use std::collections::BTreeMap;

use point_set::{PointId, PointSet};

use crate::arena::{FcArena, FcNodeIndex};
use crate::{CascadeError, FcList, FcNode, ListIter};

/// Construction options for an [`FcMatrix`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FcMatrixConfig {
    /// Largest point count for which [`FcMatrix::search`] records its
    /// per-dimension results. Larger matrices still perform the full walk
    /// but return an unrecorded [`Successors`], which keeps timing runs
    /// free of bookkeeping. `None` always records.
    pub record_limit: Option<usize>,
}

/// A fractional cascading matrix over a static point set.
///
/// List `d` holds every dimension-`d` location as a local node, merged with
/// promoted copies of the nodes at even positions of list `d + 1`. The list
/// of the last dimension has no promoted nodes. With `n` points, list `d`
/// therefore holds `n + ceil(|list d+1| / 2)` nodes, and list 0 never
/// exceeds `2n`.
#[derive(Debug)]
pub struct FcMatrix<L, P> {
    /// Arena holding the nodes of every list.
    nodes: FcArena<L>,
    /// One list per dimension.
    lists: Vec<FcList>,
    /// List 0 in order, for binary search.
    first: Vec<FcNodeIndex>,
    /// The local nodes of each dimension in order, for the bisection baseline.
    locals: Vec<Vec<FcNodeIndex>>,
    points: PointSet<L, P>,
    config: FcMatrixConfig,
}

impl<L, P> FcMatrix<L, P> {
    /// Resolve an [`FcNodeIndex`] to a shared reference to the node.
    pub fn node(&self, idx: FcNodeIndex) -> &FcNode<L> {
        &self.nodes[idx]
    }

    /// The payload of the point a node belongs to.
    pub fn payload(&self, idx: FcNodeIndex) -> &P {
        self.points.payload(self.nodes[idx].point())
    }

    /// The list of `dimension`.
    ///
    /// # Errors
    ///
    /// [`PointSetError::InvalidDimensionality`](point_set::PointSetError::InvalidDimensionality)
    /// if `dimension` is not below the dimensionality.
    pub fn list(&self, dimension: usize) -> Result<&FcList, CascadeError> {
        self.points.check_dimension(dimension)?;
        Ok(&self.lists[dimension])
    }

    /// Walk the list of `dimension` from head to tail.
    pub fn iter_list(&self, dimension: usize) -> Result<ListIter<'_, L>, CascadeError> {
        let list = self.list(dimension)?;
        Ok(ListIter::new(self.nodes.as_slice(), list.head()))
    }

    /// The number of nodes in the list of `dimension`.
    pub fn list_len(&self, dimension: usize) -> Result<usize, CascadeError> {
        Ok(self.list(dimension)?.len())
    }

    pub const fn points(&self) -> &PointSet<L, P> {
        &self.points
    }

    pub const fn dimensionality(&self) -> usize {
        self.points.dimensionality()
    }

    /// Get the number of indexed points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a matrix cannot be built over zero points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the number of nodes across every list.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// The point ids found by a search, in dimension order.
    pub fn successor_points(&self, successors: &Successors) -> Vec<(usize, PointId)> {
        successors
            .iter()
            .map(|(dimension, idx)| (dimension, self.nodes[idx].point()))
            .collect()
    }

    pub const fn config(&self) -> &FcMatrixConfig {
        &self.config
    }

    fn records_results(&self) -> bool {
        self.config
            .record_limit
            .is_none_or(|limit| self.len() <= limit)
    }
}

/// Per-dimension results of a successor search.
///
/// Dimensions without a location at or after the searched value are
/// absent. An unrecorded result holds no entries at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Successors {
    found: BTreeMap<usize, FcNodeIndex>,
    recorded: bool,
}

impl Successors {
    fn new(recorded: bool) -> Self {
        Self {
            found: BTreeMap::new(),
            recorded,
        }
    }

    fn insert(&mut self, dimension: usize, idx: FcNodeIndex) {
        if self.recorded {
            self.found.insert(dimension, idx);
        }
    }

    /// The local node found in `dimension`.
    pub fn get(&self, dimension: usize) -> Option<FcNodeIndex> {
        self.found.get(&dimension).copied()
    }

    /// `(dimension, node)` pairs in dimension order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, FcNodeIndex)> + '_ {
        self.found.iter().map(|(&dimension, &idx)| (dimension, idx))
    }

    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    /// Whether results were recorded, see [`FcMatrixConfig::record_limit`].
    pub const fn is_recorded(&self) -> bool {
        self.recorded
    }
}
