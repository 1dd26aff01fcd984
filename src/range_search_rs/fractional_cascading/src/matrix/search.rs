/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read path: cascaded successor search.
//!
//! Only list 0 is binary searched. The position found there is carried to
//! each deeper list through the promoted nodes around it: the last promoted
//! node before the position and the first one at or after it are copies of
//! nodes of the next list that bracket the same position there, at most two
//! steps apart.

use std::fmt::Debug;

use tracing::{error, trace};

use super::{FcMatrix, Successors};
use crate::arena::FcNodeIndex;
use crate::{CascadeError, NodeStatus};

/// Most nodes a bracketed walk may step over in the next list.
///
/// Promoted nodes are copies of every second node of the next list, so two
/// consecutive brackets are two positions apart there.
const MAX_BRACKET_STEPS: usize = 2;

impl<L: Ord + Debug, P> FcMatrix<L, P> {
    /// Find, in every dimension, the local node with the smallest location
    /// `>= x`.
    ///
    /// Dimensions in which every location is smaller than `x` are absent
    /// from the result.
    ///
    /// # Errors
    ///
    /// [`CascadeError::StructuralIntegrity`] if the links between the lists
    /// do not lead where the construction guarantees they do.
    pub fn search(&self, x: &L) -> Result<Successors, CascadeError> {
        let mut successors = Successors::new(self.records_results());

        let position = self
            .first
            .partition_point(|&idx| self.nodes[idx].location() < x);
        let mut cursor = self.first.get(position).copied();

        for dimension in 0..self.dimensionality() {
            if let Some(found) = self.local_at_or_after(cursor, dimension, x)? {
                successors.insert(dimension, found);
            }
            if dimension + 1 < self.dimensionality() {
                cursor = self.descend(cursor, dimension, x)?;
            }
        }

        trace!(?x, found = successors.len(), "cascaded search");
        Ok(successors)
    }

    /// Find, in every dimension, the local node with the smallest location
    /// `>= x`, by binary searching each dimension independently.
    ///
    /// Produces the same result as [`FcMatrix::search`] without using the
    /// cascading links.
    pub fn search_by_bisection(&self, x: &L) -> Successors {
        let mut successors = Successors::new(self.records_results());
        for (dimension, local) in self.locals.iter().enumerate() {
            let position = local.partition_point(|&idx| self.nodes[idx].location() < x);
            if let Some(&found) = local.get(position) {
                successors.insert(dimension, found);
            }
        }
        successors
    }

    /// The first local node at or after `cursor`, the first node of list
    /// `dimension` with a location `>= x`.
    fn local_at_or_after(
        &self,
        cursor: Option<FcNodeIndex>,
        dimension: usize,
        x: &L,
    ) -> Result<Option<FcNodeIndex>, CascadeError> {
        let Some(cursor) = cursor else {
            return Ok(None);
        };
        let node = &self.nodes[cursor];
        if node.dimension() != dimension {
            return Err(self.integrity_error(
                dimension,
                x,
                format!("cursor {cursor:?} sits in list {}", node.dimension()),
            ));
        }

        let candidate = match node.status() {
            NodeStatus::Local => cursor,
            NodeStatus::Promoted => match node.next_foreign() {
                Some(candidate) => candidate,
                None => return Ok(None),
            },
        };

        let found = &self.nodes[candidate];
        if !found.is_local() || found.dimension() != dimension || found.location() < x {
            return Err(self.integrity_error(
                dimension,
                x,
                format!(
                    "foreign neighbour {candidate:?} of {cursor:?} is {:?} in list {} at {:?}",
                    found.status(),
                    found.dimension(),
                    found.location()
                ),
            ));
        }
        Ok(Some(candidate))
    }

    /// Carry `cursor` from list `dimension` to list `dimension + 1`.
    fn descend(
        &self,
        cursor: Option<FcNodeIndex>,
        dimension: usize,
        x: &L,
    ) -> Result<Option<FcNodeIndex>, CascadeError> {
        // The last promoted node before the cursor, and the first one at or after it.
        let (before, after) = match cursor {
            Some(cursor) => {
                let node = &self.nodes[cursor];
                match node.status() {
                    NodeStatus::Local => (node.prev_foreign(), node.next_foreign()),
                    NodeStatus::Promoted => (
                        node.prev().and_then(|prev| self.promoted_at_or_before(prev)),
                        Some(cursor),
                    ),
                }
            }
            None => (
                self.lists[dimension]
                    .tail()
                    .and_then(|tail| self.promoted_at_or_before(tail)),
                None,
            ),
        };

        let low = match before {
            Some(promoted) => Some(self.higher(promoted, dimension, x)?),
            None => self.lists[dimension + 1].head(),
        };
        let high = match after {
            Some(promoted) => Some(self.higher(promoted, dimension, x)?),
            None => None,
        };

        let mut current = low;
        for _ in 0..=MAX_BRACKET_STEPS {
            let Some(idx) = current else {
                break;
            };
            let node = &self.nodes[idx];
            if node.location() >= x {
                return Ok(Some(idx));
            }
            if current == high {
                return Err(self.integrity_error(
                    dimension + 1,
                    x,
                    format!("upper bracket {idx:?} lies before the target"),
                ));
            }
            current = node.next();
        }

        match (current, high) {
            (None, None) => Ok(None),
            (None, Some(high)) => Err(self.integrity_error(
                dimension + 1,
                x,
                format!("list ended before reaching upper bracket {high:?}"),
            )),
            (Some(idx), _) => Err(self.integrity_error(
                dimension + 1,
                x,
                format!("walk from {low:?} passed {idx:?} short of the target"),
            )),
        }
    }

    fn promoted_at_or_before(&self, idx: FcNodeIndex) -> Option<FcNodeIndex> {
        let node = &self.nodes[idx];
        match node.status() {
            NodeStatus::Promoted => Some(idx),
            NodeStatus::Local => node.prev_foreign(),
        }
    }

    fn higher(
        &self,
        promoted: FcNodeIndex,
        dimension: usize,
        x: &L,
    ) -> Result<FcNodeIndex, CascadeError> {
        self.nodes[promoted].higher().ok_or_else(|| {
            self.integrity_error(
                dimension,
                x,
                format!("promoted node {promoted:?} has no higher-dimension variant"),
            )
        })
    }

    fn integrity_error(&self, dimension: usize, x: &L, detail: String) -> CascadeError {
        error!(dimension, ?x, %detail, "fractional cascading integrity violated");
        CascadeError::StructuralIntegrity {
            dimension,
            target: format!("{x:?}"),
            detail,
        }
    }
}
