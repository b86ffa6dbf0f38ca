// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Edit operations and edit scripts.
//!
//! # Examples
//!
//! ```
//! use hull_bound::scripts::{EditScript, Operation};
//!
//! let script: EditScript = "MSMDI".parse().unwrap();
//! let counts = script.counts();
//! assert_eq!(counts.distance(), 3);
//! assert_eq!(counts.get(Operation::Match), 2);
//! assert_eq!(script.to_string(), "MSMDI");
//! ```

use crate::errors::ScriptError;
use std::fmt;
use std::str::FromStr;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// One step of an alignment through the (i, j) grid.
///
/// `i` indexes the source string and `j` the target; Delete advances `i`,
/// Insert advances `j`, Match and Substitute advance both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro)]
#[repr(u8)]
pub enum Operation {
    Match,
    Substitute,
    Delete,
    Insert,
}

impl Operation {
    /// In column order of the distribution file.
    pub const ALL: [Operation; Operation::COUNT] = [
        Operation::Match,
        Operation::Substitute,
        Operation::Delete,
        Operation::Insert,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'M' => Some(Operation::Match),
            'S' => Some(Operation::Substitute),
            'D' => Some(Operation::Delete),
            'I' => Some(Operation::Insert),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Operation::Match => 'M',
            Operation::Substitute => 'S',
            Operation::Delete => 'D',
            Operation::Insert => 'I',
        }
    }

    /// Whether the step moves to the next row (`i + 1`).
    pub fn advances_row(self) -> bool {
        !matches!(self, Operation::Insert)
    }

    /// Whether the step moves to the next column (`j + 1`).
    pub fn advances_column(self) -> bool {
        !matches!(self, Operation::Delete)
    }

    /// Every operation except Match costs one.
    pub fn is_edit(self) -> bool {
        !matches!(self, Operation::Match)
    }
}

/// Per-operation counts of one script.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OperationCounts {
    counts: [usize; Operation::COUNT],
}

impl OperationCounts {
    pub fn get(&self, op: Operation) -> usize {
        self.counts[op as usize]
    }

    fn increment(&mut self, op: Operation) {
        self.counts[op as usize] += 1;
    }

    /// Substitutions + deletions + insertions.
    pub fn distance(&self) -> usize {
        self.get(Operation::Substitute) + self.get(Operation::Delete) + self.get(Operation::Insert)
    }

    pub fn matches(&self) -> usize {
        self.get(Operation::Match)
    }

    /// Number of operations, `matches() + distance()`.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// A sequence of operations, written as a string over `M`, `S`, `D`, `I`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct EditScript {
    ops: Vec<Operation>,
}

impl EditScript {
    pub fn new(ops: Vec<Operation>) -> Self {
        Self { ops }
    }

    pub fn operations(&self) -> &[Operation] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Count each kind of operation.
    pub fn counts(&self) -> OperationCounts {
        let mut counts = OperationCounts::default();
        for &op in &self.ops {
            counts.increment(op);
        }
        counts
    }

    /// Grid cells visited by the path, starting with `(0, 0)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        std::iter::once((0, 0)).chain(self.ops.iter().scan((0usize, 0usize), |cell, &op| {
            if op.advances_row() {
                cell.0 += 1;
            }
            if op.advances_column() {
                cell.1 += 1;
            }
            Some(*cell)
        }))
    }

    /// Cost of the script.
    pub fn distance(&self) -> usize {
        self.ops.iter().filter(|op| op.is_edit()).count()
    }
}

impl FromStr for EditScript {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, found)| {
                Operation::from_char(found).ok_or(ScriptError::InvalidOperation { position, found })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(EditScript::new)
    }
}

impl fmt::Display for EditScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.ops {
            write!(f, "{}", op.to_char())?;
        }
        Ok(())
    }
}
