// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sums of path counts over q and D.
//!
//! ```text
//! S_r = Σ_{D=0}^{floor(r/2)} S_{r,D}
//! S_{r,0} = Q0(n, r)
//! S_{r,D} = Σ_{q=2}^{min(2D, n-r+D+1)} Σ_{δs,δe} fd · fn      (D > 0)
//! ```

use crate::context::CountingContext;
use crate::counting::params::{Boundary, PathParameters};
use crate::counting::paths::{compute_q0, sum_over_boundaries};
use crate::errors::CountingError;
use num_bigint::BigUint;
use num_traits::Zero;

/// Canonical annotated paths with cost r, D segment pairs and run length q.
///
/// # Errors
///
/// [`CountingError::InvalidParameters`] when (D, q) is outside the feasible
/// grid (see [`PathParameters::validate`]), and table errors when `n`
/// exceeds the context.
pub fn count_canonical_annotated_path_r_d_q(
    ctx: &CountingContext,
    n: u32,
    r: u32,
    d: u32,
    q: u32,
) -> Result<BigUint, CountingError> {
    let params = PathParameters::new(n, r, d, q, Boundary::default());
    params.validate()?;
    if d == 0 {
        return compute_q0(ctx, n, r);
    }
    sum_over_boundaries(ctx, &params)
}

/// Canonical annotated paths with cost r and D segment pairs, summed over q.
pub fn count_canonical_annotated_path_r_d(
    ctx: &CountingContext,
    n: u32,
    r: u32,
    d: u32,
) -> Result<BigUint, CountingError> {
    if d == 0 {
        let count = compute_q0(ctx, n, r)?;
        tracing::trace!(r, d, q = 0, %count, "path count");
        return Ok(count);
    }
    if d > PathParameters::d_max(r) {
        return Err(CountingError::InvalidParameters {
            n,
            r,
            d,
            q: 0,
            reason: "D exceeds floor(r/2)",
        });
    }

    let mut total = BigUint::zero();
    let q_max = PathParameters::q_max(n, r, d);
    for q in 2..=q_max {
        let q = q as u32;
        let params = PathParameters::new(n, r, d, q, Boundary::default());
        debug_assert!(params.validate().is_ok());
        let count = sum_over_boundaries(ctx, &params)?;
        tracing::trace!(r, d, q, %count, "path count");
        total += count;
    }
    Ok(total)
}

/// Canonical annotated paths of cost r (the hull increment `S_r`).
pub fn count_canonical_annotated_path_r(
    ctx: &CountingContext,
    n: u32,
    r: u32,
) -> Result<BigUint, CountingError> {
    let mut total = BigUint::zero();
    for d in 0..=PathParameters::d_max(r) {
        total += count_canonical_annotated_path_r_d(ctx, n, r, d)?;
    }
    Ok(total)
}
