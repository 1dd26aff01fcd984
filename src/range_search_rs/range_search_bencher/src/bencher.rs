/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::{hint::black_box, time::Duration};

use criterion::{BatchSize, BenchmarkGroup, Criterion, measurement::WallTime};
use fractional_cascading::{CascadeError, FcMatrix};
use point_set::{Point, PointSet, PointSetError};
use range_tree::{RangeTree, RangeTreeError};
use thiserror::Error;

use crate::{Location, QueryBox};

/// A helper struct for benchmarking the range tree and the cascading
/// matrix against their brute-force baselines, over the same points.
#[derive(Debug)]
pub struct OperationBencher {
    prefix: String,
    points: PointSet<Location, usize>,
    tree: RangeTree<Location, usize>,
    matrix: FcMatrix<Location, usize>,
    measurement_time: Option<Duration>,
}

/// Failure to build the structures under benchmark.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid benchmark points: {0}")]
    Points(#[from] PointSetError),
    #[error("range tree construction failed: {0}")]
    Tree(#[from] RangeTreeError),
    #[error("matrix construction failed: {0}")]
    Matrix(#[from] CascadeError),
}

impl OperationBencher {
    /// Build both structures over `points`.
    ///
    /// Every benchmark group name starts with `prefix`.
    pub fn new(
        prefix: String,
        points: Vec<Point<Location, usize>>,
        dimensionality: usize,
        measurement_time: Option<Duration>,
    ) -> Result<Self, SetupError> {
        let points = PointSet::new(points, dimensionality)?;
        let tree = RangeTree::from_point_set(points.clone())?;
        let matrix = FcMatrix::from_point_set(points.clone())?;
        Ok(Self {
            prefix,
            points,
            tree,
            matrix,
            measurement_time,
        })
    }

    fn benchmark_group<'a>(
        &self,
        c: &'a mut Criterion,
        label: &str,
    ) -> BenchmarkGroup<'a, WallTime> {
        let mut group = c.benchmark_group(format!("{}|{label}", self.prefix));
        if let Some(duration) = self.measurement_time {
            group.measurement_time(duration);
        }
        group
    }

    /// Benchmark building both structures.
    pub fn build_group(&self, c: &mut Criterion) {
        let mut group = self.benchmark_group(c, "Build");
        group.bench_function("Range tree", |b| {
            b.iter_batched(
                || self.points.clone(),
                |points| RangeTree::from_point_set(black_box(points)),
                BatchSize::LargeInput,
            )
        });
        group.bench_function("Cascading matrix", |b| {
            b.iter_batched(
                || self.points.clone(),
                |points| FcMatrix::from_point_set(black_box(points)),
                BatchSize::LargeInput,
            )
        });
        group.finish();
    }

    /// Benchmark orthogonal range search over `ranges`.
    ///
    /// The benchmark group will be marked with the given label.
    pub fn range_search_group(&self, c: &mut Criterion, ranges: &[QueryBox], label: &str) {
        let mut group = self.benchmark_group(c, label);
        group.bench_function("Scan", |b| {
            b.iter(|| {
                for query in ranges {
                    let _ = black_box(self.points.scan(black_box(&query.mins), &query.maxes));
                }
            })
        });
        group.bench_function("Range tree", |b| {
            b.iter(|| {
                for query in ranges {
                    let _ = black_box(
                        self.tree
                            .range_search_ids(black_box(&query.mins), &query.maxes),
                    );
                }
            })
        });
        group.finish();
    }

    /// Benchmark per-dimension successor search for each of `targets`.
    ///
    /// The benchmark group will be marked with the given label.
    pub fn successor_group(&self, c: &mut Criterion, targets: &[Location], label: &str) {
        let mut group = self.benchmark_group(c, label);
        group.bench_function("Bisection", |b| {
            b.iter(|| {
                for target in targets {
                    let _ = black_box(self.matrix.search_by_bisection(black_box(target)));
                }
            })
        });
        group.bench_function("Cascading", |b| {
            b.iter(|| {
                for target in targets {
                    let _ = black_box(self.matrix.search(black_box(target)));
                }
            })
        });
        group.finish();
    }
}
