/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Supporting types and functions for benchmarking range search and
//! cascading successor search.

use rand::{Rng as _, SeedableRng as _, rngs::StdRng, seq::index};

use point_set::Point;

pub use bencher::{OperationBencher, SetupError};

pub mod bencher;

/// The location type used by every benchmark.
pub type Location = i64;

/// An axis-aligned query box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBox {
    pub mins: Vec<Location>,
    pub maxes: Vec<Location>,
}

/// Generate `n` points with `dimensionality` locations each.
///
/// Within a dimension every location is distinct, drawn from `0..n * 10`.
/// The payload of a point is its position in the output. The same `seed`
/// always yields the same points.
pub fn generate_points(n: usize, dimensionality: usize, seed: u64) -> Vec<Point<Location, usize>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let columns: Vec<Vec<usize>> = (0..dimensionality)
        .map(|_| index::sample(&mut rng, n * 10, n).into_vec())
        .collect();

    (0..n)
        .map(|i| {
            let locations = columns.iter().map(|column| column[i] as Location).collect();
            Point::new(locations, i)
        })
        .collect()
}

/// Generate `count` query boxes within `0..upper` in every dimension.
///
/// Each side spans between 1% and 25% of `upper`, so most boxes select a
/// small fraction of uniformly spread points.
pub fn random_ranges(
    count: usize,
    dimensionality: usize,
    upper: Location,
    seed: u64,
) -> Vec<QueryBox> {
    let mut rng = StdRng::seed_from_u64(seed);
    let smallest = (upper / 100).max(1);
    let largest = (upper / 4).max(smallest + 1);

    (0..count)
        .map(|_| {
            let (mins, maxes) = (0..dimensionality)
                .map(|_| {
                    let width = rng.random_range(smallest..largest);
                    let min = rng.random_range(0..(upper - width).max(1));
                    (min, min + width)
                })
                .unzip();
            QueryBox { mins, maxes }
        })
        .collect()
}

/// Generate `count` successor search targets within `0..upper`.
pub fn random_targets(count: usize, upper: Location, seed: u64) -> Vec<Location> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.random_range(0..upper)).collect()
}
