// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pascal triangle of exact binomial coefficients.
//!
//! The counting formulas evaluate many thousands of coefficients with small
//! arguments, so the whole triangle up to the largest n of the run is built
//! once and then only read.
//!
//! # Conventions
//!
//! - `binomial(n, k)` is a total function: it is 0 whenever `k < 0` or
//!   `k > n` (including every negative `n`). Several formulas rely on this to
//!   zero out infeasible terms.
//! - `composition(n, k)` counts the compositions of `n` into `k` positive
//!   parts, `C(n-1, k-1)`, with the single empty composition of 0.
//! - A feasible query with `n` beyond the built rows is an error, never a
//!   silently wrong value.
//!
//! # Example
//!
//! ```
//! use hull_bound::memo::BinomialTable;
//! use num_bigint::BigUint;
//!
//! let table = BinomialTable::build(10);
//! assert_eq!(table.binomial(10, 3).unwrap(), BigUint::from(120u32));
//! assert_eq!(table.binomial(4, 7).unwrap(), BigUint::from(0u32));
//! assert_eq!(table.composition(5, 2).unwrap(), BigUint::from(4u32));
//! ```

use crate::errors::CountingError;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Triangular table with row `i` holding `C(i, 0..=i)`.
///
/// # Memory
///
/// `(max_n + 1)(max_n + 2) / 2` entries. For the default run (`max_n = 16`)
/// this is 153 small integers; `max_n = 200` still stays well below a few MB.
#[derive(Debug, Clone)]
pub struct BinomialTable {
    rows: Vec<Vec<BigUint>>,
}

impl BinomialTable {
    /// Build the triangle for all `C(i, j)` with `0 <= j <= i <= max_n`.
    pub fn build(max_n: usize) -> Self {
        let mut table = Self { rows: Vec::new() };
        table.extend_to(max_n);
        tracing::debug!("[BinomialTable] Built rows 0..={}", max_n);
        table
    }

    /// Largest n for which the table holds a complete row.
    pub fn max_n(&self) -> usize {
        self.rows.len() - 1
    }

    /// Grow the triangle so it covers `max_n`. Existing rows are kept.
    pub fn extend_to(&mut self, max_n: usize) {
        while self.rows.len() <= max_n {
            let row = match self.rows.last() {
                None => vec![BigUint::one()],
                Some(prev) => {
                    let i = prev.len();
                    let mut row = Vec::with_capacity(i + 1);
                    row.push(BigUint::one());
                    for j in 1..i {
                        row.push(&prev[j - 1] + &prev[j]);
                    }
                    row.push(BigUint::one());
                    row
                }
            };
            self.rows.push(row);
        }
    }

    /// `C(n, k)`, or 0 when `k < 0` or `k > n`.
    ///
    /// # Errors
    ///
    /// [`CountingError::TableTooSmall`] when `0 <= k <= n` but `n` is beyond
    /// [`max_n`](Self::max_n).
    pub fn binomial(&self, n: i64, k: i64) -> Result<BigUint, CountingError> {
        if k < 0 || k > n {
            return Ok(BigUint::zero());
        }
        self.rows
            .get(n as usize)
            .map(|row| row[k as usize].clone())
            .ok_or(CountingError::TableTooSmall {
                n,
                k,
                capacity: self.max_n(),
            })
    }

    /// Number of compositions of `n` into `k` positive parts.
    ///
    /// This reads the same triangle as [`binomial`](Self::binomial) with both
    /// indices shifted down by one; `composition(0, 0) = 1`.
    pub fn composition(&self, n: i64, k: i64) -> Result<BigUint, CountingError> {
        if n == 0 && k == 0 {
            return Ok(BigUint::one());
        }
        self.binomial(n - 1, k - 1)
    }
}

/// Independent multiplicative computation of `C(n, k)`, used to audit the table.
pub fn binomial_direct(n: u64, k: u64) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    let k = k.min(n - k);
    let mut result = BigUint::one();
    for i in 0..k {
        result *= n - i;
        result /= i + 1;
    }
    result
}
