// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Approximate counts used to cross-check the exact formulas.
//!
//! None of these are on the path of [`bound`](crate::counting::bound); they
//! feed the self-validation report and the tests.
//!
//! - `compute_phi`: floating point product form of `Q0`
//! - `compute_mu0`: product form of the placements without a final wedge
//! - `tilde_mu`, `tilde_mu_simple`: single-binomial estimates of `fd`
//! - `tilde_psi`: estimate of the annotation count `fn`

use crate::context::CountingContext;
use crate::counting::PathParameters;
use crate::errors::CountingError;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// `Π_{i<r} (Σ-1)(n-i)/(i+1)`, equal to `Q0(n, r)` up to rounding.
pub fn compute_phi(n: u32, r: u32, alphabet_size: u32) -> f64 {
    let sub = f64::from(alphabet_size) - 1.0;
    (0..r).fold(1.0, |prod, i| {
        prod * sub * f64::from(n as i32 - i as i32) / f64::from(i + 1)
    })
}

/// Product form of the placements of a path shape without a final wedge.
///
/// `Π_{l=1}^{q} (n-D-l)/l · Π_{l=1}^{r-2D} (Σ-1)(n-D-q-l+1)/l · (n-D)/q`
pub fn compute_mu0(n: u32, r: u32, q: u32, d: u32, alphabet_size: u32) -> f64 {
    let sub = f64::from(alphabet_size) - 1.0;
    let free = f64::from(n) - f64::from(d);

    let runs = (1..=q).fold(1.0, |prod, l| {
        let l = f64::from(l);
        prod * (free - l) / l
    });
    let substitutions = i64::from(r) - 2 * i64::from(d);
    let cells = (1..=substitutions).fold(1.0, |prod, l| {
        let l = l as f64;
        prod * sub * (free - f64::from(q) - (l - 1.0)) / l
    });
    runs * cells * free / f64::from(q)
}

/// `C(n-r+D, q-δe)`.
pub fn tilde_mu_simple(ctx: &CountingContext, p: &PathParameters) -> Result<f64, CountingError> {
    let (n, r, d, q) = widen(p);
    let value = ctx.binomial(n - r + d, q - p.boundary.e())?;
    Ok(to_f64(&value))
}

/// `C(n-r+D, q-δe) · max(n-D-q+δe, q-δe) / (n-D)`.
pub fn tilde_mu(ctx: &CountingContext, p: &PathParameters) -> Result<f64, CountingError> {
    let (n, _, d, q) = widen(p);
    let de = p.boundary.e();
    let simple = tilde_mu_simple(ctx, p)?;
    let a = (n - d - q + de) as f64;
    let b = (q - de) as f64;
    Ok(simple * a.max(b) / (n - d) as f64)
}

/// Estimate of `compute_fd`: `C(n-D, r-2D) (Σ-1)^(r-2D) · tilde_mu`.
pub fn compute_approx_fd(ctx: &CountingContext, p: &PathParameters) -> Result<f64, CountingError> {
    let (n, r, d, _) = widen(p);
    let substitutions = r - 2 * d;
    if substitutions < 0 {
        return Ok(0.0);
    }
    let cells = ctx.binomial(n - d, substitutions)? * ctx.substitution_pow(substitutions);
    Ok(to_f64(&cells) * tilde_mu(ctx, p)?)
}

/// `C(q, floor(q/2)) · C(2D-2, q-2)`.
pub fn tilde_psi(ctx: &CountingContext, d: u32, q: u32) -> Result<BigUint, CountingError> {
    let (d, q) = (i64::from(d), i64::from(q));
    Ok(ctx.binomial(q, q / 2)? * ctx.binomial(2 * d - 2, q - 2)?)
}

/// Estimate of `compute_fn`: `ρ^D · tilde_psi` with `ρ = Σ` after a final
/// wedge and `Σ-1` otherwise.
pub fn compute_approx_fn(
    ctx: &CountingContext,
    p: &PathParameters,
) -> Result<BigUint, CountingError> {
    let psi = tilde_psi(ctx, p.d, p.q)?;
    if psi.is_zero() {
        return Ok(psi);
    }
    let rho = if p.boundary.delta_e {
        ctx.sigma_pow(i64::from(p.d))
    } else {
        ctx.substitution_pow(i64::from(p.d))
    };
    Ok(rho * psi)
}

fn widen(p: &PathParameters) -> (i64, i64, i64, i64) {
    (
        i64::from(p.n),
        i64::from(p.r),
        i64::from(p.d),
        i64::from(p.q),
    )
}

fn to_f64(value: &BigUint) -> f64 {
    value.to_f64().unwrap_or(f64::INFINITY)
}
