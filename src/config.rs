// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration and program defaults.

use crate::errors::CountingError;

/// Largest string length examined when `n_max` is not given.
pub const DEFAULT_N_MAX: u32 = 16;

/// Smallest string length examined when `n_min` is not given.
pub const DEFAULT_N_MIN: u32 = 1;

/// Alphabet size of the bound (DNA).
pub const DEFAULT_ALPHABET_SIZE: u32 = 4;

/// String length used by the self-validation suite.
pub const SELF_TEST_N: u32 = 8;

/// Symbols drawn by the edit script generator.
pub const DEFAULT_SCRIPT_ALPHABET: &str = "ACGT";

/// Which `d` values the "ending deletion" sum of `compute_fn` visits.
///
/// With `d_bar = min(q-2, D-1)` the recorded formula iterates `0..d_bar`,
/// while the matching sum for paths without a final wedge iterates
/// `1..=d_max`. It is not settled which one the derivation intends, so the
/// recorded range is the default and the other one is available for
/// comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndingDeletionRange {
    /// `d` in `0..d_bar`.
    #[default]
    Literal,
    /// `d` in `1..=d_bar`.
    Inclusive,
}

impl EndingDeletionRange {
    /// The `(first, last)` pair of the inclusive range of `d`, possibly empty.
    pub fn bounds(self, d_bar: i64) -> (i64, i64) {
        match self {
            EndingDeletionRange::Literal => (0, d_bar - 1),
            EndingDeletionRange::Inclusive => (1, d_bar),
        }
    }
}

/// Parameters shared by every counting query of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountingConfig {
    /// Alphabet size Σ.
    pub alphabet_size: u32,
    /// Range variant of the ending-deletion sum.
    pub ending_deletion: EndingDeletionRange,
}

impl CountingConfig {
    pub fn new(alphabet_size: u32) -> Self {
        Self {
            alphabet_size,
            ..Self::default()
        }
    }

    pub fn with_ending_deletion(mut self, range: EndingDeletionRange) -> Self {
        self.ending_deletion = range;
        self
    }

    /// Reject alphabets without substitutions (Σ < 2).
    pub fn validate(&self) -> Result<(), CountingError> {
        if self.alphabet_size < 2 {
            return Err(CountingError::InvalidAlphabet(self.alphabet_size));
        }
        Ok(())
    }
}

impl Default for CountingConfig {
    fn default() -> Self {
        Self {
            alphabet_size: DEFAULT_ALPHABET_SIZE,
            ending_deletion: EndingDeletionRange::Literal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CountingConfig::default();
        assert_eq!(config.alphabet_size, 4);
        assert_eq!(config.ending_deletion, EndingDeletionRange::Literal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unary_alphabet() {
        assert_eq!(
            CountingConfig::new(1).validate(),
            Err(CountingError::InvalidAlphabet(1))
        );
        assert!(CountingConfig::new(2).validate().is_ok());
    }

    #[test]
    fn test_ending_deletion_bounds() {
        assert_eq!(EndingDeletionRange::Literal.bounds(3), (0, 2));
        assert_eq!(EndingDeletionRange::Inclusive.bounds(3), (1, 3));
        // empty ranges
        let (lo, hi) = EndingDeletionRange::Literal.bounds(0);
        assert!(lo > hi);
        let (lo, hi) = EndingDeletionRange::Inclusive.bounds(0);
        assert!(lo > hi);
    }
}
