// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tabulation of edit scripts over the dynamic programming grid.
//!
//! For strings of length n the grid has `size = n + 1` rows and columns,
//! cells `(0, 0)` to `(n, n)`. Every histogram here has `size` bins; a
//! script that lands outside them is reported as
//! [`ScriptError::OutsideGrid`], with the bin in both coordinates for the
//! one-dimensional histograms.

use super::operation::{EditScript, Operation};
use crate::errors::ScriptError;
use strum::EnumCount;

/// Histograms of the per-script count of each operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDistribution {
    histograms: [Vec<u64>; Operation::COUNT],
}

impl OperationDistribution {
    fn new(size: usize) -> Self {
        Self {
            histograms: std::array::from_fn(|_| vec![0; size]),
        }
    }

    pub fn size(&self) -> usize {
        self.histograms[0].len()
    }

    /// `histogram(op)[k]` is the number of scripts with exactly k
    /// occurrences of `op`.
    pub fn histogram(&self, op: Operation) -> &[u64] {
        &self.histograms[op as usize]
    }
}

/// Cell visit counts and the maximum-oscillation histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStatistics {
    size: usize,
    frequency: Vec<u64>,
    max_oscillation: Vec<u64>,
}

impl ScriptStatistics {
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of scripts whose path visits `(i, j)`.
    pub fn frequency(&self, i: usize, j: usize) -> u64 {
        self.frequency[i * self.size + j]
    }

    pub fn row(&self, i: usize) -> &[u64] {
        &self.frequency[i * self.size..(i + 1) * self.size]
    }

    /// The whole matrix in row-major order.
    pub fn frequency_matrix(&self) -> &[u64] {
        &self.frequency
    }

    /// `max_oscillation()[k]` counts the scripts whose largest `|j - i|` is k.
    pub fn max_oscillation(&self) -> &[u64] {
        &self.max_oscillation
    }
}

fn bump(histogram: &mut [u64], bin: usize, script: usize) -> Result<(), ScriptError> {
    let size = histogram.len();
    let slot = histogram.get_mut(bin).ok_or(ScriptError::OutsideGrid {
        script,
        row: bin,
        col: bin,
        size,
    })?;
    *slot += 1;
    Ok(())
}

/// Histogram the operation counts of every script.
pub fn operations_distribution(
    size: usize,
    scripts: &[EditScript],
) -> Result<OperationDistribution, ScriptError> {
    let mut dist = OperationDistribution::new(size);
    for (index, script) in scripts.iter().enumerate() {
        let counts = script.counts();
        for op in Operation::ALL {
            bump(&mut dist.histograms[op as usize], counts.get(op), index)?;
        }
    }
    Ok(dist)
}

/// Count visited cells, `(0, 0)` included, and the maximum distance from
/// the main diagonal reached by each script.
pub fn script_statistics(
    size: usize,
    scripts: &[EditScript],
) -> Result<ScriptStatistics, ScriptError> {
    let mut frequency = vec![0u64; size * size];
    let mut max_oscillation = vec![0u64; size];
    for (index, script) in scripts.iter().enumerate() {
        let mut widest = 0;
        for (i, j) in script.cells() {
            if i >= size || j >= size {
                return Err(ScriptError::OutsideGrid {
                    script: index,
                    row: i,
                    col: j,
                    size,
                });
            }
            frequency[i * size + j] += 1;
            widest = widest.max(i.abs_diff(j));
        }
        bump(&mut max_oscillation, widest, index)?;
    }
    tracing::debug!(size, scripts = scripts.len(), "[scripts] statistics tabulated");
    Ok(ScriptStatistics {
        size,
        frequency,
        max_oscillation,
    })
}

/// Walk the script until `leaves` says the next cell is over the line, and
/// return the cell the step starts from.
fn first_crossing(
    script: &EditScript,
    leaves: impl Fn((usize, usize)) -> bool,
) -> Option<(usize, usize)> {
    let mut cells = script.cells();
    let mut current = cells.next()?;
    for next in cells {
        if leaves(next) {
            return Some(current);
        }
        current = next;
    }
    None
}

/// The cell from which the path first steps into a column `>= r`.
pub fn horizontal_cross(script: &EditScript, r: usize) -> Option<(usize, usize)> {
    first_crossing(script, |(_, j)| j >= r)
}

/// The cell from which the path first steps into a row `>= c`.
pub fn vertical_cross(script: &EditScript, c: usize) -> Option<(usize, usize)> {
    first_crossing(script, |(i, _)| i >= c)
}

/// Histogram of the row at which each script crosses into column `r`.
pub fn horizontal_flow(
    size: usize,
    scripts: &[EditScript],
    r: usize,
) -> Result<Vec<u64>, ScriptError> {
    let mut flow = vec![0u64; size];
    for (index, script) in scripts.iter().enumerate() {
        let (i, _) = horizontal_cross(script, r).ok_or(ScriptError::NoCrossing {
            script: index,
            line: r,
        })?;
        bump(&mut flow, i, index)?;
    }
    Ok(flow)
}

/// Histogram of the column at which each script crosses into row `c`.
pub fn vertical_flow(
    size: usize,
    scripts: &[EditScript],
    c: usize,
) -> Result<Vec<u64>, ScriptError> {
    let mut flow = vec![0u64; size];
    for (index, script) in scripts.iter().enumerate() {
        let (_, j) = vertical_cross(script, c).ok_or(ScriptError::NoCrossing {
            script: index,
            line: c,
        })?;
        bump(&mut flow, j, index)?;
    }
    Ok(flow)
}
