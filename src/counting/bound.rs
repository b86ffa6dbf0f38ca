// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lower bound on the hulls of a string of length n.
//!
//! # Algorithm
//!
//! The budget starts with the `Σ^n - 1` strings other than the centre. For
//! r = 1, 2, ... every string not yet claimed is charged to radius r, then
//! the `S_r` canonical annotated paths of cost r are removed from the
//! budget:
//!
//! ```text
//! remaining = Σ^n - 1; lb = 0; r = 1
//! while remaining > 0 and r <= n:
//!     lb += remaining
//!     remaining -= S_r
//!     hull[r] = lb
//!     r += 1
//! ```
//!
//! The loop stops when the budget is exhausted (saturation) or every radius
//! up to n has been examined; the saturation radius is the last r visited.

use crate::context::CountingContext;
use crate::counting::aggregate::count_canonical_annotated_path_r;
use crate::errors::CountingError;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{ToPrimitive, Zero};

/// Cumulative bound after examining one radius.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HullBound {
    pub radius: u32,
    pub cumulative: BigUint,
}

/// Outcome of [`bound`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundResult {
    /// String length the bound was computed for.
    pub n: u32,
    /// Accumulated lower bound.
    pub lower_bound: BigUint,
    /// One entry per r = 0..=n. Radii past saturation repeat the final bound.
    pub hulls: Vec<HullBound>,
    /// Last radius examined (at most n).
    pub saturation_radius: u32,
}

impl BoundResult {
    /// `lower_bound / (n · Σ^n)`; 0 for the empty string.
    pub fn normalized(&self, alphabet_size: u32) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        let denominator = BigUint::from(self.n) * BigUint::from(alphabet_size).pow(self.n);
        ratio_to_f64(&self.lower_bound, &denominator)
    }
}

/// Compute the lower bound, the hull sequence and the saturation radius.
///
/// # Errors
///
/// [`CountingError::TableTooSmall`] if the context was built for strings
/// shorter than `n`.
pub fn bound(ctx: &CountingContext, n: u32) -> Result<BoundResult, CountingError> {
    ctx.ensure_covers(n)?;

    let mut remaining: BigInt = BigInt::from(ctx.sigma_pow(i64::from(n))) - 1;
    let mut lower_bound = BigUint::zero();
    let mut hulls = Vec::with_capacity(n as usize + 1);
    hulls.push(HullBound {
        radius: 0,
        cumulative: BigUint::zero(),
    });

    let mut r = 1;
    while remaining.sign() == Sign::Plus && r <= n {
        if let Some(unclaimed) = remaining.to_biguint() {
            lower_bound += unclaimed;
        }
        let hull = count_canonical_annotated_path_r(ctx, n, r)?;
        remaining -= BigInt::from(hull);
        tracing::debug!(n, r, %lower_bound, %remaining, "[bound] radius examined");
        hulls.push(HullBound {
            radius: r,
            cumulative: lower_bound.clone(),
        });
        r += 1;
    }
    let saturation_radius = r - 1;

    for radius in r..=n {
        hulls.push(HullBound {
            radius,
            cumulative: lower_bound.clone(),
        });
    }

    Ok(BoundResult {
        n,
        lower_bound,
        hulls,
        saturation_radius,
    })
}

/// Ratio of two big integers as `f64`, shifting both down when they would
/// not fit the exponent range.
fn ratio_to_f64(numerator: &BigUint, denominator: &BigUint) -> f64 {
    let shift = denominator.bits().max(numerator.bits()).saturating_sub(1000);
    let num = (numerator >> shift).to_f64().unwrap_or(f64::INFINITY);
    let den = (denominator >> shift).to_f64().unwrap_or(f64::INFINITY);
    num / den
}
