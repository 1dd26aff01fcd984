/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Validated point sets and the brute-force baselines that run over them.

use crate::{Point, PointId, PointSetError, check_range_bounds};

/// A non-empty, immutable set of points sharing one dimensionality.
#[derive(Debug, Clone)]
pub struct PointSet<L, P> {
    points: Vec<Point<L, P>>,
    dimensionality: usize,
}

impl<L, P> PointSet<L, P> {
    /// Validate `points` and wrap them into a set.
    ///
    /// # Errors
    ///
    /// - [`PointSetError::EmptyDataset`] if `points` is empty.
    /// - [`PointSetError::InvalidDimensionality`] if `dimensionality` is zero.
    /// - [`PointSetError::TooManyPoints`] if a [`PointId`] cannot address
    ///   every point.
    /// - [`PointSetError::MismatchedDimensionality`] if a point does not
    ///   carry exactly `dimensionality` locations.
    pub fn new(points: Vec<Point<L, P>>, dimensionality: usize) -> Result<Self, PointSetError> {
        if points.is_empty() {
            return Err(PointSetError::EmptyDataset);
        }
        if dimensionality == 0 {
            return Err(PointSetError::InvalidDimensionality {
                dimension: 0,
                dimensionality,
            });
        }
        if u32::try_from(points.len()).is_err() {
            return Err(PointSetError::TooManyPoints {
                count: points.len(),
            });
        }
        if let Some((position, point)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| p.dimensionality() != dimensionality)
        {
            return Err(PointSetError::MismatchedDimensionality {
                point: PointId::new(position as u32),
                expected: dimensionality,
                found: point.dimensionality(),
            });
        }
        Ok(Self {
            points,
            dimensionality,
        })
    }

    /// The number of points. Always at least one.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: empty sets are rejected by [`PointSet::new`].
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub const fn dimensionality(&self) -> usize {
        self.dimensionality
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this set.
    pub fn point(&self, id: PointId) -> &Point<L, P> {
        &self.points[id.index()]
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this set.
    pub fn payload(&self, id: PointId) -> &P {
        self.points[id.index()].payload()
    }

    /// Iterate over all points in input order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (PointId, &Point<L, P>)> {
        self.points
            .iter()
            .enumerate()
            .map(|(position, point)| (PointId::new(position as u32), point))
    }

    /// Check that `dimension` is a valid dimension index for this set.
    pub fn check_dimension(&self, dimension: usize) -> Result<(), PointSetError> {
        if dimension >= self.dimensionality {
            return Err(PointSetError::InvalidDimensionality {
                dimension,
                dimensionality: self.dimensionality,
            });
        }
        Ok(())
    }
}

impl<L: Ord, P> PointSet<L, P> {
    /// Brute-force orthogonal range search.
    ///
    /// Returns every point whose location lies in `[mins[d], maxes[d]]` for
    /// each dimension `d`, in input order. Runs in `O(n * k)`.
    ///
    /// # Errors
    ///
    /// [`PointSetError::MismatchedRangeLength`] if the bounds are of unequal
    /// length or shorter than the dimensionality.
    pub fn scan(&self, mins: &[L], maxes: &[L]) -> Result<Vec<PointId>, PointSetError> {
        check_range_bounds(mins, maxes, self.dimensionality)?;
        Ok(self
            .iter()
            .filter(|(_, point)| {
                point
                    .locations()
                    .iter()
                    .zip(mins.iter().zip(maxes))
                    .all(|(location, (min, max))| min <= location && location <= max)
            })
            .map(|(id, _)| id)
            .collect())
    }

    /// The point with the smallest location `>= x` in `dimension`.
    ///
    /// Equal locations resolve to the lowest [`PointId`]. Returns `Ok(None)`
    /// when every location in `dimension` is smaller than `x`.
    pub fn successor(&self, dimension: usize, x: &L) -> Result<Option<PointId>, PointSetError> {
        self.check_dimension(dimension)?;
        Ok(self
            .iter()
            .filter_map(|(id, point)| point.location(dimension).map(|location| (location, id)))
            .filter(|(location, _)| *location >= x)
            .min()
            .map(|(_, id)| id))
    }
}
