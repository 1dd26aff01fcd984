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

/// Errors returned by [`FcMatrix`](crate::FcMatrix) construction and search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CascadeError {
    /// The input points or the requested dimension were rejected.
    #[error(transparent)]
    PointSet(#[from] PointSetError),
    /// The lists need more nodes than an [`FcNodeIndex`](crate::FcNodeIndex)
    /// can address.
    #[error(
        "cascading lists over {points} points need more than {} nodes",
        u32::MAX
    )]
    CapacityExceeded { points: usize },
    /// A cascading invariant was violated, e.g. a foreign neighbour that
    /// should lead to a local node of the right dimension does not. This
    /// signals a construction defect, never a bad input.
    #[error(
        "cascading integrity violated in dimension {dimension} while searching for {target}: {detail}"
    )]
    StructuralIntegrity {
        dimension: usize,
        target: String,
        detail: String,
    },
}
