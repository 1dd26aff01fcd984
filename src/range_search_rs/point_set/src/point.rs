/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Point - a payload plus one location per dimension.

use std::fmt;

/// Identifier of a point inside a [`PointSet`](crate::PointSet).
///
/// The identifier is the point's position in the input order, so ordering
/// two ids reproduces first-occurrence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PointId(u32);

impl PointId {
    /// Create an id from a raw position.
    pub const fn new(position: u32) -> Self {
        Self(position)
    }

    /// The position of the point in the input order.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<PointId> for u32 {
    fn from(id: PointId) -> Self {
        id.0
    }
}

/// A point in k-dimensional space carrying an opaque payload.
///
/// Points are immutable once built: a structure that needs different
/// coordinates is rebuilt from a new point set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point<L, P> {
    locations: Vec<L>,
    payload: P,
}

impl<L, P> Point<L, P> {
    /// Create a point from its per-dimension locations and payload.
    pub const fn new(locations: Vec<L>, payload: P) -> Self {
        Self { locations, payload }
    }

    /// All locations, indexed by dimension.
    pub fn locations(&self) -> &[L] {
        &self.locations
    }

    /// The location in dimension `dimension`, if the point has one.
    pub fn location(&self, dimension: usize) -> Option<&L> {
        self.locations.get(dimension)
    }

    pub const fn payload(&self) -> &P {
        &self.payload
    }

    /// The number of locations carried by this point.
    pub fn dimensionality(&self) -> usize {
        self.locations.len()
    }
}
