// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the counting engine and the edit script tools.

use thiserror::Error;

/// Errors raised by the counting engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountingError {
    /// A feasible coefficient was requested beyond the rows that were built.
    ///
    /// The table must be sized to at least the largest n queried before
    /// any counting starts.
    #[error("binomial table built for n <= {capacity} cannot answer C({n}, {k})")]
    TableTooSmall { n: i64, k: i64, capacity: usize },

    /// Alphabets with fewer than two symbols have no substitutions.
    #[error("alphabet size must be at least 2, got {0}")]
    InvalidAlphabet(u32),

    /// Path parameters outside the feasible (D, q) region.
    #[error("invalid path parameters (n={n}, r={r}, D={d}, q={q}): {reason}")]
    InvalidParameters {
        n: u32,
        r: u32,
        d: u32,
        q: u32,
        reason: &'static str,
    },

    /// A table entry disagrees with the independently computed coefficient.
    #[error("binomial table entry C({n}, {k}) is {table}, expected {expected}")]
    TableMismatch {
        n: usize,
        k: usize,
        table: String,
        expected: String,
    },
}

/// Errors raised while parsing or tabulating edit scripts.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// A character outside `M`, `S`, `D`, `I`.
    #[error("invalid operation {found:?} at position {position}")]
    InvalidOperation { position: usize, found: char },

    /// A script leaves the (size x size) grid of the statistics.
    #[error("script {script} reaches cell ({row}, {col}) outside a grid of size {size}")]
    OutsideGrid {
        script: usize,
        row: usize,
        col: usize,
        size: usize,
    },

    /// A script never steps over the requested row or column.
    #[error("script {script} never crosses line {line}")]
    NoCrossing { script: usize, line: usize },

    /// Strings cannot be drawn from an empty alphabet.
    #[error("the alphabet for random strings is empty")]
    EmptyAlphabet,

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ScriptError {
    /// Create an I/O error with the offending path.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
