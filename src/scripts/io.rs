// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reading script files and writing the statistics tables.
//!
//! All tables are tab or newline separated integers.

use super::operation::{EditScript, Operation};
use super::stats::{OperationDistribution, ScriptStatistics};
use crate::errors::ScriptError;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

fn display(path: &Path) -> String {
    path.display().to_string()
}

/// Parse one script per line; surrounding whitespace is stripped and blank
/// lines are skipped.
pub fn parse_scripts<R: BufRead>(reader: R, source: &str) -> Result<Vec<EditScript>, ScriptError> {
    let mut scripts = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ScriptError::io(source, e))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let script = line.parse::<EditScript>().inspect_err(|_| {
            tracing::warn!(line = number + 1, source, "[scripts] unparseable script");
        })?;
        scripts.push(script);
    }
    Ok(scripts)
}

pub fn read_scripts(path: &Path) -> Result<Vec<EditScript>, ScriptError> {
    let file = File::open(path).map_err(|e| ScriptError::io(display(path), e))?;
    let scripts = parse_scripts(BufReader::new(file), &display(path))?;
    tracing::debug!(count = scripts.len(), path = %path.display(), "[scripts] read");
    Ok(scripts)
}

/// Write one script per line.
pub fn write_scripts(path: &Path, scripts: &[EditScript]) -> Result<(), ScriptError> {
    write_lines(path, scripts.iter().map(|s| s.to_string()))
}

/// Rows `k\tmatch\tsub\tdel\tins`, one per bin.
pub fn write_distribution(path: &Path, dist: &OperationDistribution) -> Result<(), ScriptError> {
    write_lines(
        path,
        (0..dist.size()).map(|k| {
            let counts: Vec<String> = Operation::ALL
                .iter()
                .map(|&op| dist.histogram(op)[k].to_string())
                .collect();
            format!("{}\t{}", k, counts.join("\t"))
        }),
    )
}

/// The frequency matrix, one cell per line in row-major order.
pub fn write_matrix(path: &Path, stats: &ScriptStatistics) -> Result<(), ScriptError> {
    write_vector(path, stats.frequency_matrix())
}

pub fn write_vector(path: &Path, values: &[u64]) -> Result<(), ScriptError> {
    write_lines(path, values.iter().map(u64::to_string))
}

fn write_lines(path: &Path, lines: impl Iterator<Item = String>) -> Result<(), ScriptError> {
    let wrap = |e| ScriptError::io(display(path), e);
    let mut writer = BufWriter::new(File::create(path).map_err(wrap)?);
    for line in lines {
        writeln!(writer, "{}", line).map_err(wrap)?;
    }
    writer.flush().map_err(wrap)
}
