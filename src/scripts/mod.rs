// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Edit scripts: parsing, sampling and statistics over the DP grid.
//!
//! - `operation`: `Operation`, `EditScript` and per-script counts
//! - `stats`: operation histograms, cell frequencies, crossings and flows
//! - `generate`: Wagner-Fischer table, backtracking and a seeded sampler
//! - `io`: the line-oriented file formats of the `edit-scripts` binary

pub mod generate;
pub mod io;
pub mod operation;
pub mod stats;

pub use generate::{EditDistanceMatrix, ScriptSampler};
pub use operation::{EditScript, Operation, OperationCounts};
pub use stats::{
    horizontal_cross, horizontal_flow, operations_distribution, script_statistics,
    vertical_cross, vertical_flow, OperationDistribution, ScriptStatistics,
};
