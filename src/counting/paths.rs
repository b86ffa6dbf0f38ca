// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Counting canonical annotated paths of a fixed shape.
//!
//! A canonical annotated path of cost r is split into two independent
//! choices:
//!
//! - `fd`: where the non-diagonal runs sit on the grid and which diagonal
//!   cells carry substitutions;
//! - `fn`: which insertion/deletion symbols annotate the D segment pairs.
//!
//! The diagonal-only path (D = 0) is counted directly by `compute_q0`.
//!
//! All formulas rely on the zero convention of the binomial table: any
//! infeasible coefficient yields 0 and silently removes its term.

use crate::context::CountingContext;
use crate::counting::params::{Boundary, PathParameters};
use crate::errors::CountingError;
use num_bigint::BigUint;
use num_traits::Zero;

/// Paths that never leave the main diagonal: `C(n, r) (Σ-1)^r`.
pub fn compute_q0(ctx: &CountingContext, n: u32, r: u32) -> Result<BigUint, CountingError> {
    let binom = ctx.binomial(i64::from(n), i64::from(r))?;
    Ok(binom * ctx.substitution_pow(i64::from(r)))
}

/// Placement count of a path shape.
///
/// `C(n-D-1, q-δs-δe) · C(n-D-q+δe, r-2D) · (Σ-1)^(r-2D)`
///
/// The first factor places the q non-diagonal moves between the runs, the
/// second picks the r-2D substituted cells among the remaining diagonal
/// cells and the power annotates them.
pub fn compute_fd(ctx: &CountingContext, p: &PathParameters) -> Result<BigUint, CountingError> {
    let (n, r, d, q) = widen(p);
    let (ds, de) = (p.boundary.s(), p.boundary.e());

    let substitutions = r - 2 * d;
    if substitutions < 0 {
        return Ok(BigUint::zero());
    }
    let runs = ctx.binomial(n - d - 1, q - ds - de)?;
    if runs.is_zero() {
        return Ok(runs);
    }
    let cells = ctx.binomial(n - d - q + de, substitutions)?;
    Ok(runs * cells * ctx.substitution_pow(substitutions))
}

/// Annotation count of a path shape.
///
/// Only D, q and `delta_e` matter here.
///
/// # Without a final wedge (`delta_e = 0`)
///
/// `(Σ-1)^D · Σ_{d=1}^{min(q-1, D)} C(q, d) · comp(D, d) · comp(D, q-d)`
///
/// # With a final wedge (`delta_e = 1`)
///
/// Three parts:
/// 1. ending deletion: `(Σ-1)^D · Σ_d C(q-1, d-1) · comp(D, d) · comp(D, q-d-1)`
///    with `d` ranging as selected by [`EndingDeletionRange`](crate::config::EndingDeletionRange) over
///    `d_bar = min(q-2, D-1)`;
/// 2. ending insertion: `Σ^D · comp(D, q-1)`;
/// 3. `Σ_{i=1}^{min(q-2, D-1)} Σ_{j=1}^{D-i} C(q-1, i) · comp(D-j, i) · comp(D, q-i-1) · Σ^j · Σ^(D-j)`.
///
/// `comp(a, b)` is the number of compositions of a into b parts.
pub fn compute_fn(ctx: &CountingContext, p: &PathParameters) -> Result<BigUint, CountingError> {
    let (_, _, d, q) = widen(p);
    if p.boundary.delta_e {
        with_final_wedge(ctx, d, q)
    } else {
        without_final_wedge(ctx, d, q)
    }
}

fn without_final_wedge(ctx: &CountingContext, d: i64, q: i64) -> Result<BigUint, CountingError> {
    let d_max = (q - 1).min(d);
    let mut count = BigUint::zero();
    for k in 1..=d_max {
        count += ctx.binomial(q, k)? * ctx.composition(d, k)? * ctx.composition(d, q - k)?;
    }
    Ok(count * ctx.substitution_pow(d))
}

fn with_final_wedge(ctx: &CountingContext, d: i64, q: i64) -> Result<BigUint, CountingError> {
    let d_bar = (q - 2).min(d - 1);

    // ending deletion
    let mut deletions = BigUint::zero();
    let (first, last) = ctx.ending_deletion().bounds(d_bar);
    for k in first..=last {
        deletions +=
            ctx.binomial(q - 1, k - 1)? * ctx.composition(d, k)? * ctx.composition(d, q - k - 1)?;
    }
    let mut count = deletions * ctx.substitution_pow(d);

    // ending insertion
    count += ctx.sigma_pow(d) * ctx.composition(d, q - 1)?;

    let i_bar = (q - 2).min(d - 1);
    for i in 1..=i_bar {
        let lead = ctx.binomial(q - 1, i)? * ctx.composition(d, q - i - 1)?;
        if lead.is_zero() {
            continue;
        }
        for j in 1..=(d - i) {
            count += &lead * ctx.composition(d - j, i)? * ctx.sigma_pow(j) * ctx.sigma_pow(d - j);
        }
    }
    Ok(count)
}

/// Paths of one (D, q) shape summed over the four boundary flag pairs.
pub fn sum_over_boundaries(
    ctx: &CountingContext,
    p: &PathParameters,
) -> Result<BigUint, CountingError> {
    let mut count = BigUint::zero();
    for boundary in Boundary::ALL {
        let shape = p.with_boundary(boundary);
        let fd = compute_fd(ctx, &shape)?;
        if fd.is_zero() {
            continue;
        }
        count += fd * compute_fn(ctx, &shape)?;
    }
    Ok(count)
}

#[inline]
fn widen(p: &PathParameters) -> (i64, i64, i64, i64) {
    (
        i64::from(p.n),
        i64::from(p.r),
        i64::from(p.d),
        i64::from(p.q),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CountingConfig, EndingDeletionRange};

    fn ctx(sigma: u32) -> CountingContext {
        CountingContext::new(CountingConfig::new(sigma), 16).unwrap()
    }

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_q0() {
        let ctx = ctx(4);
        assert_eq!(compute_q0(&ctx, 8, 0).unwrap(), big(1));
        assert_eq!(compute_q0(&ctx, 8, 1).unwrap(), big(24));
        assert_eq!(compute_q0(&ctx, 8, 4).unwrap(), big(70 * 81));
        assert_eq!(compute_q0(&ctx, 8, 9).unwrap(), big(0));
    }

    #[test]
    fn test_fd_values() {
        // n=8, r=4, D=2, Σ=4, flags in (δs, δe) order (0,0), (0,1), (1,0), (1,1)
        let ctx = ctx(4);
        let expected = [[10, 5, 5, 1], [10, 10, 10, 5], [5, 10, 10, 10]];
        for (q, row) in (2..=4).zip(expected.iter()) {
            for (boundary, &want) in Boundary::ALL.iter().zip(row.iter()) {
                let p = PathParameters::new(8, 4, 2, q, *boundary);
                assert_eq!(compute_fd(&ctx, &p).unwrap(), big(want), "q={} {:?}", q, boundary);
            }
        }
    }

    #[test]
    fn test_fd_infeasible_is_zero() {
        let ctx = ctx(4);
        // r - 2D < 0
        let p = PathParameters::new(8, 3, 2, 2, Boundary::default());
        assert!(compute_fd(&ctx, &p).unwrap().is_zero());
        // q - δs - δe < 0
        let p = PathParameters::new(8, 4, 2, 1, Boundary::new(true, true));
        assert!(compute_fd(&ctx, &p).unwrap().is_zero());
    }

    #[test]
    fn test_fn_values() {
        // n=8, r=4, D=2, Σ=4: fn depends only on δe
        let ctx = ctx(4);
        let expected = [(2, 18, 16), (3, 54, 48), (4, 54, 48)];
        for &(q, without, with) in &expected {
            for boundary in Boundary::ALL {
                let p = PathParameters::new(8, 4, 2, q, boundary);
                let want = if boundary.delta_e { with } else { without };
                assert_eq!(compute_fn(&ctx, &p).unwrap(), big(want), "q={} {:?}", q, boundary);
            }
        }
    }

    #[test]
    fn test_fn_inclusive_variant() {
        let literal = ctx(4);
        let inclusive = CountingContext::new(
            CountingConfig::new(4).with_ending_deletion(EndingDeletionRange::Inclusive),
            16,
        )
        .unwrap();
        let p = PathParameters::new(8, 4, 2, 3, Boundary::new(false, true));
        assert_eq!(compute_fn(&literal, &p).unwrap(), big(48));
        assert_eq!(compute_fn(&inclusive, &p).unwrap(), big(57));

        let p = PathParameters::new(10, 6, 3, 5, Boundary::new(false, true));
        assert_eq!(compute_fn(&literal, &p).unwrap(), big(1307));
        assert_eq!(compute_fn(&inclusive, &p).unwrap(), big(1739));

        // the variants agree when delta_e = 0
        let p = p.with_boundary(Boundary::new(false, false));
        assert_eq!(compute_fn(&literal, &p).unwrap(), compute_fn(&inclusive, &p).unwrap());
    }

    #[test]
    fn test_sum_over_boundaries() {
        let ctx = ctx(4);
        let sums: Vec<BigUint> = (2..=4)
            .map(|q| sum_over_boundaries(&ctx, &PathParameters::new(8, 4, 2, q, Boundary::default())).unwrap())
            .collect();
        assert_eq!(sums, vec![big(366), big(1800), big(1770)]);
    }
}
