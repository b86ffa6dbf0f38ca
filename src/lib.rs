// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Combinatorial lower bound on the hulls of edit distance.
//!
//! For strings of length n over an alphabet of size Σ, the hull of radius r
//! around a string is the set of strings within edit distance r. Counting
//! canonical annotated alignment paths gives an upper bound on the size of
//! each hull, and therefore a lower bound on the total distance from a
//! string to all others. The normalized bound `lb / (n · Σ^n)` bounds the
//! expected edit distance of two random strings, relative to n.
//!
//! # Architecture
//!
//! The implementation uses a two-tier data model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed before any counting:
//! - Pascal triangle of exact binomial coefficients
//! - Powers Σ and Σ - 1 at hand for exponentiation
//!
//! ## Tier 2: Counts (Pure)
//!
//! Every count is a pure function of the context and its parameters:
//! - `Q0`: diagonal-only paths with r substitutions
//! - `fd`: placements of a path shape on the grid
//! - `fn`: annotations of the non-diagonal runs
//! - sums over q and D, then the bound over r
//!
//! The [`CountingContext`] is passed explicitly to every function; there is
//! no global table.
//!
//! # Edit scripts
//!
//! The [`scripts`] module samples optimal alignments of random strings and
//! tabulates where their paths run on the DP grid, for comparison with the
//! bound.

pub mod approx;
pub mod config;
pub mod context;
pub mod counting;
pub mod errors;
pub mod memo;
pub mod scripts;
pub mod validation;

// Re-export commonly used types
pub use config::{CountingConfig, EndingDeletionRange};
pub use context::CountingContext;
pub use counting::{bound, BoundResult, HullBound, PathParameters};
pub use errors::{CountingError, ScriptError};
