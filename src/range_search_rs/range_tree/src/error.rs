/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use point_set::PointSetError;
use thiserror::Error;

/// Errors returned by [`RangeTree`](crate::RangeTree) construction and queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeTreeError {
    /// The input points or the query bounds were rejected.
    #[error(transparent)]
    PointSet(#[from] PointSetError),
    /// The layered tree needs more nodes than a [`NodeIndex`](crate::NodeIndex)
    /// can address.
    #[error("range tree over {points} points needs more than {} nodes", u32::MAX)]
    CapacityExceeded { points: usize },
    /// A tree invariant was violated. This signals a construction defect,
    /// never a bad input.
    #[error(
        "range tree integrity violated in dimension {dimension} while searching for {target}: {detail}"
    )]
    StructuralIntegrity {
        dimension: usize,
        target: String,
        detail: String,
    },
}
