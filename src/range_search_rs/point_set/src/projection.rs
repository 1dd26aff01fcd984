/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Per-dimension projection of a point set.
//!
//! A [`Projection`] is a row-aligned matrix: row `j` holds every location of
//! one point, and column `d` is the projected sequence of dimension `d`.
//! Sorting and splitting always move whole rows, so every column keeps
//! describing the same subset of points.

use crate::{PointId, PointSet};

/// A point's location in a single dimension.
///
/// Ordering is by location first and [`PointId`] second. The id breaks ties
/// between equal locations, which makes the order total over a point set
/// even when locations repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Projected<L> {
    pub location: L,
    pub point: PointId,
}

impl<L> Projected<L> {
    pub const fn new(location: L, point: PointId) -> Self {
        Self { location, point }
    }
}

#[derive(Debug, Clone)]
struct Row<L> {
    point: PointId,
    locations: Vec<L>,
}

/// Row-aligned per-dimension view over a subset of a point set.
#[derive(Debug, Clone)]
pub struct Projection<L> {
    rows: Vec<Row<L>>,
    dimensionality: usize,
}

impl<L: Ord + Clone> Projection<L> {
    /// Project every point of `set`, keeping the input order.
    pub fn new<P>(set: &PointSet<L, P>) -> Self {
        let rows = set
            .iter()
            .map(|(point, p)| Row {
                point,
                locations: p.locations().to_vec(),
            })
            .collect();
        Self {
            rows,
            dimensionality: set.dimensionality(),
        }
    }

    /// Reorder all rows by their location in `dimension`.
    ///
    /// Equal locations keep first-occurrence order, so the result does not
    /// depend on the order the rows were in before the call.
    ///
    /// # Panics
    ///
    /// Panics if `dimension >= self.dimensionality()`.
    pub fn sort_rows_by(&mut self, dimension: usize) {
        self.rows.sort_by(|a, b| {
            a.locations[dimension]
                .cmp(&b.locations[dimension])
                .then(a.point.cmp(&b.point))
        });
    }

    /// The projected key of row `row` in `dimension`.
    pub fn key(&self, row: usize, dimension: usize) -> Projected<L> {
        let row = &self.rows[row];
        Projected::new(row.locations[dimension].clone(), row.point)
    }

    /// Column `dimension`, in the current row order.
    pub fn column(&self, dimension: usize) -> impl Iterator<Item = Projected<&L>> + '_ {
        self.rows
            .iter()
            .map(move |row| Projected::new(&row.locations[dimension], row.point))
    }

    /// Column `dimension`, sorted by location, without reordering the rows.
    pub fn sorted_column(&self, dimension: usize) -> Vec<Projected<L>> {
        let mut column: Vec<_> = self
            .column(dimension)
            .map(|p| Projected::new(p.location.clone(), p.point))
            .collect();
        column.sort();
        column
    }
}

impl<L> Projection<L> {
    /// Split into rows `[0, mid)` and `[mid, len)`, keeping every column aligned.
    ///
    /// # Panics
    ///
    /// Panics if `mid > self.len()`.
    pub fn split_at(mut self, mid: usize) -> (Self, Self) {
        let right = self.rows.split_off(mid);
        let dimensionality = self.dimensionality;
        (
            self,
            Self {
                rows: right,
                dimensionality,
            },
        )
    }

    /// The number of rows, i.e. the size of the point subset.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub const fn dimensionality(&self) -> usize {
        self.dimensionality
    }

    /// The points covered by this projection, in row order.
    pub fn points(&self) -> impl Iterator<Item = PointId> + '_ {
        self.rows.iter().map(|row| row.point)
    }
}
