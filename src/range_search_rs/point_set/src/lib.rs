/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Static sets of k-dimensional points, shared by the range search structures.
//!
//! A [`PointSet`] is a validated, immutable collection of [`Point`]s that all
//! carry the same number of locations. Structures built on top of it refer to
//! points through [`PointId`]s, which are positions in the input order and
//! double as the deterministic tie-break whenever two locations compare equal.
//!
//! [`Projection`] splits a point set into one column per dimension so that
//! recursive constructions can sort and slice every dimension in lockstep.
//!
//! # Example
//!
//! ```
//! use point_set::{Point, PointSet};
//!
//! let set = PointSet::new(
//!     vec![
//!         Point::new(vec![10, 10], "a"),
//!         Point::new(vec![30, 70], "b"),
//!         Point::new(vec![50, 50], "c"),
//!     ],
//!     2,
//! )
//! .unwrap();
//!
//! let hits = set.scan(&[20, 20], &[80, 80]).unwrap();
//! assert_eq!(hits.len(), 2);
//! ```

mod point;
mod projection;
mod set;

pub use point::{Point, PointId};
pub use projection::{Projected, Projection};
pub use set::PointSet;

use thiserror::Error;

/// Errors raised while validating a point set or a query against it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointSetError {
    /// Construction was attempted with zero points.
    #[error("cannot build over an empty point set")]
    EmptyDataset,
    /// The requested dimensionality (or dimension index) is out of bounds.
    #[error(
        "dimension {dimension} is out of bounds for dimensionality {dimensionality}"
    )]
    InvalidDimensionality {
        dimension: usize,
        dimensionality: usize,
    },
    /// The set holds more points than a [`PointId`] can address.
    #[error("{count} points exceed the addressable maximum of {}", u32::MAX)]
    TooManyPoints { count: usize },
    /// A point does not carry one location per dimension.
    #[error("point {point} has {found} locations, expected {expected}")]
    MismatchedDimensionality {
        point: PointId,
        expected: usize,
        found: usize,
    },
    /// Range bounds do not describe a box in every dimension.
    #[error(
        "range bounds have {mins} minimums and {maxes} maximums, expected {dimensionality} of each"
    )]
    MismatchedRangeLength {
        mins: usize,
        maxes: usize,
        dimensionality: usize,
    },
}

/// Validate a pair of range bounds against the given dimensionality.
///
/// Both slices must hold at least `dimensionality` values and be of equal
/// length. Values past `dimensionality` are ignored by every search.
pub fn check_range_bounds<L>(
    mins: &[L],
    maxes: &[L],
    dimensionality: usize,
) -> Result<(), PointSetError> {
    if mins.len() != maxes.len() || mins.len() < dimensionality {
        return Err(PointSetError::MismatchedRangeLength {
            mins: mins.len(),
            maxes: maxes.len(),
            dimensionality,
        });
    }
    Ok(())
}
