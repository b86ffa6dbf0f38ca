// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property checks over the counting engine and the script tools.

mod common;

use common::{context, inclusive_context};
use hull_bound::counting::{bound, count_canonical_annotated_path_r};
use hull_bound::memo::{binomial_direct, BinomialTable};
use hull_bound::scripts::{EditDistanceMatrix, EditScript, Operation};
use num_bigint::BigUint;
use num_traits::Zero;
use proptest::prelude::*;

fn arb_script() -> impl Strategy<Value = String> {
    "[MSDI]{0,40}"
}

fn arb_dna(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"ACGT".to_vec()), 0..max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn binomial_zero_outside_triangle(n in 0i64..40, k in -5i64..50) {
        let table = BinomialTable::build(40);
        let value = table.binomial(n, k).unwrap();
        if k < 0 || k > n {
            prop_assert!(value.is_zero());
        } else {
            prop_assert_eq!(value, binomial_direct(n as u64, k as u64));
        }
    }

    #[test]
    fn composition_shifts_binomial(n in 1i64..30, k in 0i64..30) {
        let table = BinomialTable::build(30);
        prop_assert_eq!(table.composition(n, k).unwrap(), table.binomial(n - 1, k - 1).unwrap());
    }

    #[test]
    fn hull_counts_fit_in_alignment_grid(n in 1u32..=12, sigma in 2u32..=5, inclusive in any::<bool>()) {
        let ctx = if inclusive { inclusive_context(sigma, n) } else { context(sigma, n) };
        for r in 0..=n {
            let count = count_canonical_annotated_path_r(&ctx, n, r).unwrap();
            let cap = binomial_direct(2 * u64::from(n), u64::from(r)) * BigUint::from(sigma).pow(r);
            prop_assert!(count <= cap, "n={} r={} sigma={}", n, r, sigma);
        }
        // one substitution is the only cost-1 path
        let first = count_canonical_annotated_path_r(&ctx, n, 1).unwrap();
        prop_assert_eq!(first, BigUint::from(n * (sigma - 1)));
    }

    #[test]
    fn bound_is_monotone_and_budgeted(n in 1u32..=12, sigma in 2u32..=5) {
        let ctx = context(sigma, n);
        let result = bound(&ctx, n).unwrap();
        prop_assert_eq!(result.hulls.len(), n as usize + 1);
        prop_assert!(result.saturation_radius <= n);
        for pair in result.hulls.windows(2) {
            prop_assert!(pair[0].cumulative <= pair[1].cumulative);
        }
        let budget = BigUint::from(n) * (BigUint::from(sigma).pow(n) - 1u32);
        prop_assert!(result.lower_bound <= budget);
        prop_assert_eq!(&result.hulls[n as usize].cumulative, &result.lower_bound);
    }

    #[test]
    fn script_counts_add_up(text in arb_script()) {
        let script: EditScript = text.parse().unwrap();
        let counts = script.counts();
        prop_assert_eq!(counts.matches() + counts.distance(), script.len());
        prop_assert_eq!(script.to_string(), text);

        let rows = counts.matches() + counts.get(Operation::Substitute) + counts.get(Operation::Delete);
        let cols = counts.matches() + counts.get(Operation::Substitute) + counts.get(Operation::Insert);
        prop_assert_eq!(script.cells().last(), Some((rows, cols)));
    }

    #[test]
    fn backtrack_is_optimal(s1 in arb_dna(16), s2 in arb_dna(16)) {
        let matrix = EditDistanceMatrix::compute(&s1, &s2);
        let script = matrix.backtrack();
        prop_assert_eq!(script.distance(), matrix.distance());
        prop_assert_eq!(script.cells().last(), Some((s1.len(), s2.len())));
    }
}
