/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Construction: deepest list first, each shallower list merging its own
//! locations with every second node of the list below it.

use std::fmt::Debug;

use point_set::{Point, PointSet, Projection};
use tracing::debug;

use super::{FcMatrix, FcMatrixConfig};
use crate::arena::{FcArena, FcNodeIndex};
use crate::{CascadeError, FcList, FcNode, NodeStatus};

impl<L: Ord + Clone + Debug, P> FcMatrix<L, P> {
    /// Build a matrix over `points`, each carrying `dimensionality` locations.
    ///
    /// # Errors
    ///
    /// [`CascadeError::PointSet`] if the points are empty, `dimensionality`
    /// is zero, or a point carries the wrong number of locations.
    pub fn build(points: Vec<Point<L, P>>, dimensionality: usize) -> Result<Self, CascadeError> {
        Self::from_point_set(PointSet::new(points, dimensionality)?)
    }

    /// Build a matrix over an already validated point set.
    pub fn from_point_set(points: PointSet<L, P>) -> Result<Self, CascadeError> {
        Self::with_config(points, FcMatrixConfig::default())
    }

    /// Build a matrix over an already validated point set, with options.
    ///
    /// # Errors
    ///
    /// [`CascadeError::CapacityExceeded`] if the lists need more nodes than
    /// the arena can address.
    pub fn with_config(
        points: PointSet<L, P>,
        config: FcMatrixConfig,
    ) -> Result<Self, CascadeError> {
        let dimensionality = points.dimensionality();
        let projection = Projection::new(&points);
        let mut nodes = FcArena::with_capacity(dimensionality * points.len() * 2);
        let insert = |nodes: &mut FcArena<L>, node| {
            nodes.insert(node).ok_or_else(|| CascadeError::CapacityExceeded {
                points: points.len(),
            })
        };

        let mut locals = Vec::with_capacity(dimensionality);
        for dimension in 0..dimensionality {
            let column = projection.sorted_column(dimension);
            let mut local = Vec::with_capacity(column.len());
            for key in column {
                local.push(insert(&mut nodes, FcNode::local(key, dimension))?);
            }
            locals.push(local);
        }

        let mut lists = vec![FcList::default(); dimensionality];
        let mut deeper = locals[dimensionality - 1].clone();
        lists[dimensionality - 1] = FcList::from_nodes(&mut nodes, &deeper);

        for dimension in (0..dimensionality - 1).rev() {
            // Every second node of the list below, starting with its head.
            let mut promoted = Vec::with_capacity(deeper.len().div_ceil(2));
            for &higher in deeper.iter().step_by(2) {
                let copy = nodes[higher].promoted_from(higher);
                promoted.push(insert(&mut nodes, copy)?);
            }

            let merged = merge(&nodes, &locals[dimension], &promoted);
            lists[dimension] = FcList::from_nodes(&mut nodes, &merged);
            assign_foreign_neighbours(&mut nodes, &merged);
            deeper = merged;
        }

        let matrix = Self {
            nodes,
            lists,
            first: deeper,
            locals,
            points,
            config,
        };
        debug!(
            points = matrix.len(),
            dimensionality,
            nodes = matrix.num_nodes(),
            first_list = matrix.first.len(),
            "built fractional cascading matrix"
        );

        #[cfg(all(feature = "unittest", not(miri)))]
        matrix.check_invariants();

        Ok(matrix)
    }
}

/// Merge two location-sorted node sequences.
///
/// On equal locations local nodes come first.
fn merge<L: Ord>(
    nodes: &FcArena<L>,
    local: &[FcNodeIndex],
    promoted: &[FcNodeIndex],
) -> Vec<FcNodeIndex> {
    let mut merged = Vec::with_capacity(local.len() + promoted.len());
    let (mut l, mut p) = (0, 0);
    while l < local.len() && p < promoted.len() {
        if nodes[local[l]].location() <= nodes[promoted[p]].location() {
            merged.push(local[l]);
            l += 1;
        } else {
            merged.push(promoted[p]);
            p += 1;
        }
    }
    merged.extend_from_slice(&local[l..]);
    merged.extend_from_slice(&promoted[p..]);
    merged
}

/// Point every node of `list` at the nearest node of the opposite status
/// on either side.
fn assign_foreign_neighbours<L>(nodes: &mut FcArena<L>, list: &[FcNodeIndex]) {
    let mut last_local = None;
    let mut last_promoted = None;
    // Nodes still waiting for their next foreign neighbour.
    let mut pending_local = Vec::new();
    let mut pending_promoted = Vec::new();

    for &idx in list {
        match nodes[idx].status() {
            NodeStatus::Local => {
                nodes[idx].prev_foreign = last_promoted;
                for waiting in pending_promoted.drain(..) {
                    nodes[waiting].next_foreign = Some(idx);
                }
                pending_local.push(idx);
                last_local = Some(idx);
            }
            NodeStatus::Promoted => {
                nodes[idx].prev_foreign = last_local;
                for waiting in pending_local.drain(..) {
                    nodes[waiting].next_foreign = Some(idx);
                }
                pending_promoted.push(idx);
                last_promoted = Some(idx);
            }
        }
    }
}
