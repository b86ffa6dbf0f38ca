// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Counting context: the binomial table plus the run configuration.
//!
//! Every counting function takes a `&CountingContext` instead of reading a
//! process-wide table. The context is immutable once built, so one instance
//! can serve any number of queries (or threads) for the same alphabet.
//!
//! # Example
//!
//! ```
//! use hull_bound::config::CountingConfig;
//! use hull_bound::context::CountingContext;
//! use hull_bound::counting::count_canonical_annotated_path_r;
//!
//! let ctx = CountingContext::new(CountingConfig::new(4), 8).unwrap();
//! let hull = count_canonical_annotated_path_r(&ctx, 8, 1).unwrap();
//! assert_eq!(hull, 24u32.into());
//! ```

use crate::config::{CountingConfig, EndingDeletionRange};
use crate::errors::CountingError;
use crate::memo::BinomialTable;
use num_bigint::BigUint;

/// Immutable inputs of all counting formulas.
///
/// # Memory Model
///
/// ```text
/// CountingContext {
///     memo: BinomialTable,       // built once for max_n
///     config: CountingConfig,    // Σ and formula variant
///     sigma, sigma_minus_one     // cached BigUint bases for powers
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CountingContext {
    /// Precomputed binomial coefficients.
    pub memo: BinomialTable,
    config: CountingConfig,
    sigma: BigUint,
    sigma_minus_one: BigUint,
}

impl CountingContext {
    /// Validate `config` and build a table covering strings up to `max_n`.
    pub fn new(config: CountingConfig, max_n: u32) -> Result<Self, CountingError> {
        config.validate()?;
        Self::with_memo(config, BinomialTable::build(max_n as usize))
    }

    /// Reuse an existing table (for instance across alphabets).
    pub fn with_memo(config: CountingConfig, memo: BinomialTable) -> Result<Self, CountingError> {
        config.validate()?;
        Ok(Self {
            memo,
            sigma: BigUint::from(config.alphabet_size),
            sigma_minus_one: BigUint::from(config.alphabet_size - 1),
            config,
        })
    }

    pub fn config(&self) -> &CountingConfig {
        &self.config
    }

    /// Alphabet size Σ.
    pub fn alphabet_size(&self) -> u32 {
        self.config.alphabet_size
    }

    pub fn ending_deletion(&self) -> EndingDeletionRange {
        self.config.ending_deletion
    }

    /// Largest string length the table can serve.
    pub fn max_n(&self) -> usize {
        self.memo.max_n()
    }

    /// Grow the table so it covers strings of length `n`.
    pub fn reserve(&mut self, n: u32) {
        if n as usize > self.memo.max_n() {
            self.memo.extend_to(n as usize);
        }
    }

    /// Fail early when a computation for length `n` would run off the table.
    pub fn ensure_covers(&self, n: u32) -> Result<(), CountingError> {
        if n as usize > self.memo.max_n() {
            return Err(CountingError::TableTooSmall {
                n: i64::from(n),
                k: 0,
                capacity: self.memo.max_n(),
            });
        }
        Ok(())
    }

    /// `C(n, k)` with the zero convention of [`BinomialTable::binomial`].
    #[inline]
    pub fn binomial(&self, n: i64, k: i64) -> Result<BigUint, CountingError> {
        self.memo.binomial(n, k)
    }

    /// Compositions of `n` into `k` parts, see [`BinomialTable::composition`].
    #[inline]
    pub fn composition(&self, n: i64, k: i64) -> Result<BigUint, CountingError> {
        self.memo.composition(n, k)
    }

    /// Σ^e. Callers guarantee `e >= 0`.
    pub fn sigma_pow(&self, e: i64) -> BigUint {
        debug_assert!(e >= 0, "negative exponent {}", e);
        self.sigma.pow(e as u32)
    }

    /// (Σ-1)^e, the number of substitution annotations of `e` cells.
    pub fn substitution_pow(&self, e: i64) -> BigUint {
        debug_assert!(e >= 0, "negative exponent {}", e);
        self.sigma_minus_one.pow(e as u32)
    }
}
