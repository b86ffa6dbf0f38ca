// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable precomputed data.
//!
//! Everything here is computed once per run and only read afterwards:
//! - Pascal triangle of exact binomial coefficients

pub mod binomial;

pub use binomial::{binomial_direct, BinomialTable};
