// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Self-validation suite behind `hull-bound --test`.
//!
//! The suite is a value: [`run_self_tests`] returns a [`SelfTestReport`]
//! whose `Display` implementation prints the comparison tables. Only a
//! disagreement between the binomial table and the independent
//! multiplicative computation is an error; the approximation tables are
//! diagnostics.

use crate::approx::{
    compute_approx_fd, compute_approx_fn, compute_mu0, compute_phi, tilde_mu, tilde_mu_simple,
    tilde_psi,
};
use crate::config::CountingConfig;
use crate::context::CountingContext;
use crate::counting::{compute_fd, compute_q0, Boundary, PathParameters};
use crate::errors::CountingError;
use crate::memo::{binomial_direct, BinomialTable};
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use std::fmt;

/// `compute_phi` next to the exact `Q0`.
#[derive(Debug, Clone, PartialEq)]
pub struct PhiRow {
    pub r: u32,
    pub phi: f64,
    pub q0: BigUint,
}

/// `compute_mu0` next to `fd(δs=0, δe=0) + fd(δs=1, δe=0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mu0Row {
    pub shape: PathParameters,
    pub mu0: f64,
    pub fd_00: BigUint,
    pub fd_10: BigUint,
}

impl Mu0Row {
    pub fn difference(&self) -> f64 {
        self.mu0 - to_f64(&self.fd_00) - to_f64(&self.fd_10)
    }
}

/// Placement estimates for `δe = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct TildeMuRow {
    pub shape: PathParameters,
    pub tilde_mu: f64,
    pub tilde_mu_simple: f64,
    pub approx_fd: f64,
}

/// Annotation estimates; `approx_fn` is taken with `δe = 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct TildePsiRow {
    pub shape: PathParameters,
    pub tilde_psi: BigUint,
    pub approx_fn: BigUint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelfTestReport {
    pub n: u32,
    pub alphabet_size: u32,
    pub phi: Vec<PhiRow>,
    pub mu0: Vec<Mu0Row>,
    pub tilde_mu: Vec<TildeMuRow>,
    pub tilde_psi: Vec<TildePsiRow>,
}

/// Compare every `C(i, j)`, `0 <= j <= i <= max_n`, with [`binomial_direct`].
pub fn check_binomial_table(table: &BinomialTable, max_n: usize) -> Result<(), CountingError> {
    for i in 0..=max_n {
        for j in 0..=i {
            let stored = table.binomial(i as i64, j as i64)?;
            let expected = binomial_direct(i as u64, j as u64);
            if stored != expected {
                return Err(CountingError::TableMismatch {
                    n: i,
                    k: j,
                    table: stored.to_string(),
                    expected: expected.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Run the suite for strings of length `n` under `config`.
pub fn run_self_tests(config: CountingConfig, n: u32) -> Result<SelfTestReport, CountingError> {
    let ctx = CountingContext::new(config, n + 1)?;
    check_binomial_table(&ctx.memo, n as usize + 1)?;
    tracing::debug!(n, "[validation] binomial table verified");

    let sigma = ctx.alphabet_size();
    let phi = (0..=n)
        .map(|r| {
            Ok(PhiRow {
                r,
                phi: compute_phi(n, r, sigma),
                q0: compute_q0(&ctx, n, r)?,
            })
        })
        .collect::<Result<Vec<_>, CountingError>>()?;

    let mut mu0 = Vec::new();
    let mut tilde_mu_rows = Vec::new();
    let mut tilde_psi_rows = Vec::new();
    for shape in PathParameters::grid(n) {
        let plain = shape.with_boundary(Boundary::new(false, false));
        mu0.push(Mu0Row {
            shape,
            mu0: compute_mu0(n, shape.r, shape.q, shape.d, sigma),
            fd_00: compute_fd(&ctx, &plain)?,
            fd_10: compute_fd(&ctx, &shape.with_boundary(Boundary::new(true, false)))?,
        });
        tilde_mu_rows.push(TildeMuRow {
            shape,
            tilde_mu: tilde_mu(&ctx, &plain)?,
            tilde_mu_simple: tilde_mu_simple(&ctx, &plain)?,
            approx_fd: compute_approx_fd(&ctx, &plain)?,
        });
        tilde_psi_rows.push(TildePsiRow {
            shape,
            tilde_psi: tilde_psi(&ctx, shape.d, shape.q)?,
            approx_fn: compute_approx_fn(&ctx, &shape.with_boundary(Boundary::new(false, true)))?,
        });
    }

    Ok(SelfTestReport {
        n,
        alphabet_size: sigma,
        phi,
        mu0,
        tilde_mu: tilde_mu_rows,
        tilde_psi: tilde_psi_rows,
    })
}

fn to_f64(value: &BigUint) -> f64 {
    value.to_f64().unwrap_or(f64::INFINITY)
}

impl fmt::Display for SelfTestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**** TESTS FOR phi (n={}, Sigma={}) ****\n", self.n, self.alphabet_size)?;
        for row in &self.phi {
            writeln!(f, "{}\t{}\t{}", row.r, row.phi, row.q0)?;
        }

        writeln!(f, "\n**** TESTS FOR mu0 ****\n")?;
        for row in &self.mu0 {
            writeln!(
                f,
                "{} - ({}+{}) = {}\t {},{},{}",
                row.mu0,
                row.fd_00,
                row.fd_10,
                row.difference(),
                row.shape.r,
                row.shape.q,
                row.shape.d
            )?;
        }

        writeln!(f, "\n**** TESTS FOR tilde_mu ****\n")?;
        writeln!(f, "(n, r, D, q)")?;
        writeln!(f, "----------------------")?;
        for row in &self.tilde_mu {
            let s = row.shape;
            writeln!(
                f,
                "({}, {}, {}, {}) ---> {:.1}\t{}\t{:.1}",
                s.n, s.r, s.d, s.q, row.tilde_mu, row.tilde_mu_simple, row.approx_fd
            )?;
        }

        writeln!(f, "\n**** TESTS FOR tilde_psi ****\n")?;
        writeln!(f, "(n, r, D, q)")?;
        writeln!(f, "----------------------")?;
        for row in &self.tilde_psi {
            let s = row.shape;
            writeln!(
                f,
                "({}, {}, {}, {}) ---> {}\t{}",
                s.n, s.r, s.d, s.q, row.tilde_psi, row.approx_fn
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SELF_TEST_N;

    #[test]
    fn test_table_check_passes() {
        let table = BinomialTable::build(40);
        assert!(check_binomial_table(&table, 40).is_ok());
    }

    #[test]
    fn test_table_check_needs_rows() {
        let table = BinomialTable::build(5);
        assert!(matches!(
            check_binomial_table(&table, 6),
            Err(CountingError::TableTooSmall { .. })
        ));
    }

    #[test]
    fn test_report_shape() {
        let report = run_self_tests(CountingConfig::default(), SELF_TEST_N).unwrap();
        assert_eq!(report.phi.len(), 9);
        assert_eq!(report.mu0.len(), 37);
        assert_eq!(report.tilde_mu.len(), 37);
        assert_eq!(report.tilde_psi.len(), 37);
        for row in &report.phi {
            let q0 = to_f64(&row.q0);
            assert!((row.phi - q0).abs() <= 1e-9 * q0.max(1.0));
        }
    }

    #[test]
    fn test_report_rows() {
        let report = run_self_tests(CountingConfig::default(), 8).unwrap();
        // first shape is (r=2, D=1, q=2)
        let first = &report.mu0[0];
        assert_eq!((first.shape.r, first.shape.d, first.shape.q), (2, 1, 2));
        assert_eq!(first.mu0, 52.5);
        assert_eq!(&first.fd_00 + &first.fd_10, BigUint::from(21u32));

        let text = report.to_string();
        assert!(text.contains("**** TESTS FOR tilde_mu ****"));
        assert!(text.contains("52.5 - ("));
        assert!(text.contains("(8, 4, 2, 3) ---> 10.0\t20\t10.0"));
        assert!(text.contains("(8, 4, 2, 4) ---> 6\t96"));
    }
}
