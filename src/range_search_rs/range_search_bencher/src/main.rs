/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::time::{Duration, Instant};

use fractional_cascading::FcMatrix;
use point_set::PointSet;
use range_search_bencher::{Location, generate_points, random_ranges, random_targets};
use range_tree::RangeTree;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

const SEED: u64 = 0x5EED;
const DIMENSIONALITY: usize = 3;
const QUERIES: usize = 1_000;
/// Point counts to report on. A layered tree over `n` points in three
/// dimensions holds roughly `2n log2(n)^2` nodes, so the largest size is
/// kept to a few million nodes.
const SIZES: [usize; 3] = [1_000, 4_000, 10_000];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    for n in SIZES {
        compute_and_report_timings(n)?;
    }
    Ok(())
}

/// Build a range tree and a cascading matrix over `n` generated points.
///
/// Report how long each construction took, and how long a batch of
/// queries took against each structure and its brute-force baseline.
fn compute_and_report_timings(n: usize) -> Result<(), Box<dyn std::error::Error>> {
    let upper = (n * 10) as Location;
    let points = PointSet::new(generate_points(n, DIMENSIONALITY, SEED), DIMENSIONALITY)?;

    let (tree, tree_build) = timed(|| RangeTree::from_point_set(points.clone()));
    let tree = tree?;
    let (matrix, matrix_build) = timed(|| FcMatrix::from_point_set(points.clone()));
    let matrix = matrix?;
    info!(
        n,
        nodes = tree.num_nodes(),
        elapsed = ?tree_build,
        "built range tree"
    );
    info!(
        n,
        nodes = matrix.num_nodes(),
        first_list = matrix.list_len(0)?,
        elapsed = ?matrix_build,
        "built cascading matrix"
    );

    let ranges = random_ranges(QUERIES, DIMENSIONALITY, upper, SEED);
    let (scanned, scan_time) = timed(|| {
        ranges
            .iter()
            .map(|query| points.scan(&query.mins, &query.maxes))
            .collect::<Result<Vec<_>, _>>()
    });
    let (searched, search_time) = timed(|| {
        ranges
            .iter()
            .map(|query| tree.range_search_ids(&query.mins, &query.maxes))
            .collect::<Result<Vec<_>, _>>()
    });
    let (scanned, mut searched) = (scanned?, searched?);

    // Sanity check
    for (expected, found) in scanned.iter().zip(searched.iter_mut()) {
        found.sort_unstable();
        assert_eq!(
            expected, found,
            "range tree disagrees with the brute-force scan"
        );
    }
    let reported: usize = scanned.iter().map(Vec::len).sum();
    info!(
        n,
        queries = QUERIES,
        reported,
        scan = ?scan_time,
        range_tree = ?search_time,
        "range search"
    );

    let targets = random_targets(QUERIES, upper, SEED);
    let (bisected, bisection_time) = timed(|| {
        targets
            .iter()
            .map(|x| matrix.search_by_bisection(x))
            .collect::<Vec<_>>()
    });
    let (cascaded, cascade_time) = timed(|| {
        targets
            .iter()
            .map(|x| matrix.search(x))
            .collect::<Result<Vec<_>, _>>()
    });

    // Sanity check
    assert_eq!(
        bisected, cascaded?,
        "cascading search disagrees with bisection"
    );
    info!(
        n,
        queries = QUERIES,
        bisection = ?bisection_time,
        cascading = ?cascade_time,
        "successor search"
    );
    Ok(())
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}
