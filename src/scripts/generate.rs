// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Optimal edit scripts between random strings.

use super::operation::{EditScript, Operation};
use crate::errors::ScriptError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Full Wagner-Fischer table, `(n + 1) x (m + 1)`, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDistanceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl EditDistanceMatrix {
    pub fn compute(s1: &[u8], s2: &[u8]) -> Self {
        let (rows, cols) = (s1.len() + 1, s2.len() + 1);
        let mut cells = vec![0; rows * cols];
        for i in 0..rows {
            cells[i * cols] = i;
        }
        for j in 0..cols {
            cells[j] = j;
        }
        for i in 1..rows {
            for j in 1..cols {
                let delta = usize::from(s1[i - 1] != s2[j - 1]);
                let up = cells[(i - 1) * cols + j] + 1;
                let left = cells[i * cols + j - 1] + 1;
                let diagonal = cells[(i - 1) * cols + j - 1] + delta;
                cells[i * cols + j] = up.min(left).min(diagonal);
            }
        }
        Self { rows, cols, cells }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    pub fn distance(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// Recover one optimal script, walking back from `(n, m)`.
    ///
    /// The diagonal is taken whenever it is no worse than both the cell
    /// above and the cell to the left; it is a Match when its value equals
    /// the current cell. Otherwise an insertion is taken when the left cell
    /// beats the diagonal, and a deletion in every other case.
    pub fn backtrack(&self) -> EditScript {
        let mut ops = Vec::with_capacity(self.rows + self.cols);
        let (mut i, mut j) = (self.rows - 1, self.cols - 1);
        while i > 0 && j > 0 {
            let diagonal = self.get(i - 1, j - 1);
            if diagonal <= self.get(i - 1, j) {
                if diagonal <= self.get(i, j - 1) {
                    ops.push(if diagonal == self.get(i, j) {
                        Operation::Match
                    } else {
                        Operation::Substitute
                    });
                    i -= 1;
                    j -= 1;
                } else {
                    ops.push(Operation::Insert);
                    j -= 1;
                }
                continue;
            }
            ops.push(Operation::Delete);
            i -= 1;
        }
        ops.extend(std::iter::repeat(Operation::Delete).take(i));
        ops.extend(std::iter::repeat(Operation::Insert).take(j));
        ops.reverse();
        EditScript::new(ops)
    }
}

/// Draws i.i.d. strings over an alphabet and aligns pairs of them.
pub struct ScriptSampler {
    alphabet: Vec<u8>,
    rng: StdRng,
}

impl ScriptSampler {
    /// Reproducible when `seed` is given, seeded from the OS otherwise.
    pub fn new(alphabet: &str, seed: Option<u64>) -> Result<Self, ScriptError> {
        if alphabet.is_empty() {
            return Err(ScriptError::EmptyAlphabet);
        }
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            alphabet: alphabet.as_bytes().to_vec(),
            rng,
        })
    }

    pub fn random_string(&mut self, n: usize) -> Vec<u8> {
        (0..n)
            .map(|_| self.alphabet[self.rng.gen_range(0..self.alphabet.len())])
            .collect()
    }

    /// Script of an optimal alignment of two fresh strings of length `n`.
    pub fn sample(&mut self, n: usize) -> EditScript {
        let s1 = self.random_string(n);
        let s2 = self.random_string(n);
        EditDistanceMatrix::compute(&s1, &s2).backtrack()
    }
}
