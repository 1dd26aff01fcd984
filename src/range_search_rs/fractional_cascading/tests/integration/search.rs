/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for cascaded successor search.

use fractional_cascading::FcMatrixConfig;
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::helpers::{four_points, four_points_3d, locations, matrix_from, matrix_with_config};

#[test]
fn exact_location_is_its_own_successor() {
    let matrix = matrix_from(&[&[5, 40], &[15, 30], &[25, 20], &[35, 10]]);
    let successors = matrix.search(&15).unwrap();

    let in_x = successors.get(0).unwrap();
    assert_eq!(matrix.node(in_x).location(), &15);
    assert_eq!(matrix.payload(in_x), &1);
}

#[test]
fn between_locations_finds_the_next_one() {
    let matrix = four_points();
    let successors = matrix.search(&17).unwrap();
    assert_eq!(locations(&matrix, &successors), vec![(0, 25), (1, 20)]);
    assert_eq!(matrix.payload(successors.get(0).unwrap()), &2);
    assert_eq!(matrix.payload(successors.get(1).unwrap()), &2);
}

#[rstest]
#[case::below_everything(0, vec![(0, 1), (1, 2), (2, 3)])]
#[case::between(6, vec![(0, 7), (1, 8), (2, 6)])]
#[case::exact_everywhere(5, vec![(0, 7), (1, 5), (2, 6)])]
#[case::past_first_dimension(11, vec![(1, 11), (2, 12)])]
#[case::past_two_dimensions(12, vec![(2, 12)])]
#[case::past_everything(13, vec![])]
fn successors_in_three_dimensions(#[case] x: i32, #[case] expected: Vec<(usize, i32)>) {
    let matrix = four_points_3d();
    let successors = matrix.search(&x).unwrap();
    assert_eq!(locations(&matrix, &successors), expected);
}

#[rstest]
#[case(0)]
#[case(15)]
#[case(17)]
#[case(25)]
#[case(36)]
#[case(41)]
fn cascading_agrees_with_bisection(#[case] x: i32) {
    let matrix = four_points();
    assert_eq!(matrix.search(&x).unwrap(), matrix.search_by_bisection(&x));
}

#[test]
fn duplicates_resolve_to_the_lowest_point() {
    let matrix = matrix_from(&[&[8, 1], &[3, 8], &[8, 8]]);
    let successors = matrix.search(&8).unwrap();

    assert_eq!(matrix.successor_points(&successors).len(), 2);
    assert_eq!(matrix.payload(successors.get(0).unwrap()), &0);
    assert_eq!(matrix.payload(successors.get(1).unwrap()), &1);
}

#[test]
fn repeated_searches_are_identical() {
    let matrix = four_points_3d();
    let first = matrix.search(&6).unwrap();
    for _ in 0..3 {
        assert_eq!(matrix.search(&6).unwrap(), first);
    }
}

#[test]
fn record_limit_suppresses_results() {
    let coordinates: &[&[i32]] = &[&[5, 40], &[15, 30], &[25, 20], &[35, 10]];

    let quiet = matrix_with_config(
        coordinates,
        FcMatrixConfig {
            record_limit: Some(3),
        },
    );
    assert_eq!(quiet.config().record_limit, Some(3));
    let successors = quiet.search(&17).unwrap();
    assert!(!successors.is_recorded());
    assert!(successors.is_empty());
    assert!(!quiet.search_by_bisection(&17).is_recorded());

    let recorded = matrix_with_config(
        coordinates,
        FcMatrixConfig {
            record_limit: Some(4),
        },
    );
    let successors = recorded.search(&17).unwrap();
    assert!(successors.is_recorded());
    assert_eq!(successors.len(), 2);
}

#[test]
fn single_point_search() {
    let matrix = matrix_from(&[&[7, 3]]);
    assert_eq!(
        locations(&matrix, &matrix.search(&3).unwrap()),
        vec![(0, 7), (1, 3)]
    );
    assert_eq!(
        locations(&matrix, &matrix.search(&5).unwrap()),
        vec![(0, 7)]
    );
    assert!(matrix.search(&8).unwrap().is_empty());
}

#[test]
fn one_dimension() {
    let matrix = matrix_from(&[&[30], &[10], &[20]]);
    assert_eq!(
        locations(&matrix, &matrix.search(&11).unwrap()),
        vec![(0, 20)]
    );
}

#[test]
fn default_config_always_records() {
    let matrix = four_points();
    assert_eq!(matrix.config(), &FcMatrixConfig::default());
    assert!(matrix.search(&0).unwrap().is_recorded());
}
