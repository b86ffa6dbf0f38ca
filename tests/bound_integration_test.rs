// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end checks of the hull bound against hand-verified values.

mod common;

use common::{context, inclusive_context};
use hull_bound::counting::{
    bound, count_canonical_annotated_path_r, count_canonical_annotated_path_r_d, compute_q0,
};
use hull_bound::errors::CountingError;
use num_bigint::BigUint;

fn big(v: u64) -> BigUint {
    BigUint::from(v)
}

#[test]
fn test_hull_counts_n8() {
    let ctx = context(4, 9);
    let expected = [1u64, 24, 406, 3906, 24726, 99288, 261227, 436803, 504120];
    for (r, &count) in expected.iter().enumerate() {
        assert_eq!(
            count_canonical_annotated_path_r(&ctx, 8, r as u32).unwrap(),
            big(count),
            "S_{}",
            r
        );
    }
}

#[test]
fn test_bound_n8() {
    let ctx = context(4, 9);
    let result = bound(&ctx, 8).unwrap();
    assert_eq!(result.lower_bound, big(293823));
    assert_eq!(result.saturation_radius, 5);

    let cumulative: Vec<BigUint> = result.hulls.iter().map(|h| h.cumulative.clone()).collect();
    let expected: Vec<BigUint> = [0, 65535, 131046, 196151, 257350, 293823, 293823, 293823, 293823]
        .into_iter()
        .map(big)
        .collect();
    assert_eq!(cumulative, expected);
    assert!(result
        .hulls
        .iter()
        .enumerate()
        .all(|(r, h)| h.radius as usize == r));

    assert_eq!(format!("{:.12}", result.normalized(4)), "0.560422897339");
}

#[test]
fn test_bound_other_alphabets() {
    let binary = bound(&context(2, 5), 5).unwrap();
    assert_eq!(binary.lower_bound, big(57));
    assert_eq!(binary.saturation_radius, 2);
    assert_eq!(format!("{:.12}", binary.normalized(2)), "0.356250000000");

    let ternary = bound(&context(3, 6), 6).unwrap();
    assert_eq!(ternary.lower_bound, big(2126));
    assert_eq!(ternary.saturation_radius, 4);
}

#[test]
fn test_inclusive_ending_deletion() {
    // only the radius that saturates sees the difference
    let result = bound(&inclusive_context(4, 9), 8).unwrap();
    assert_eq!(result.lower_bound, big(293508));
    assert_eq!(result.saturation_radius, 5);
    assert_eq!(result.hulls[4].cumulative, big(257350));
}

#[test]
fn test_bound_n2_scenario() {
    let ctx = context(4, 2);
    let result = bound(&ctx, 2).unwrap();
    assert!(result.saturation_radius <= 2);
    let budget = big(2) * (big(4).pow(2) - big(1));
    assert!(result.lower_bound <= budget);
}

#[test]
fn test_bound_range_like_the_cli() {
    // one context sized for n_max serves every n below it
    let ctx = context(4, 17);
    let normalized: Vec<f64> = (1..=16)
        .map(|n| bound(&ctx, n).unwrap().normalized(4))
        .collect();
    assert!(normalized.iter().all(|&v| v > 0.0 && v <= 1.0));
    assert_eq!(normalized[0], 0.75);
    // not monotone in n: 8 edges above 7
    assert!(normalized[7] > normalized[6]);
    assert_eq!(format!("{:.12}", normalized[15]), "0.485718445780");
}

#[test]
fn test_diagonal_paths_only_for_d0() {
    let ctx = context(4, 12);
    for n in 1..=12 {
        for r in 0..=n {
            assert_eq!(
                count_canonical_annotated_path_r_d(&ctx, n, r, 0).unwrap(),
                compute_q0(&ctx, n, r).unwrap()
            );
        }
    }
}

#[test]
fn test_context_too_small() {
    let ctx = context(4, 6);
    assert!(matches!(
        bound(&ctx, 8),
        Err(CountingError::TableTooSmall { .. })
    ));
}
