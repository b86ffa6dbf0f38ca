// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The counting engine.
//!
//! # Organization
//!
//! - `params`: `PathParameters` and boundary flags, with the feasibility rules
//! - `paths`: `compute_q0`, `compute_fd`, `compute_fn`
//! - `aggregate`: sums over q and over D
//! - `bound`: the hull lower bound driven over increasing radius
//!
//! Data flows strictly upwards: `bound` calls `aggregate`, which calls
//! `paths`, which reads the binomial table of the context.

pub mod aggregate;
pub mod bound;
pub mod params;
pub mod paths;

pub use aggregate::{
    count_canonical_annotated_path_r, count_canonical_annotated_path_r_d,
    count_canonical_annotated_path_r_d_q,
};
pub use bound::{bound, BoundResult, HullBound};
pub use params::{Boundary, PathParameters};
pub use paths::{compute_fd, compute_fn, compute_q0};
