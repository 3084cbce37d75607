use std::fmt;

use itertools::Itertools;
use num_rational::Rational64;
use num_traits::{One, Zero};

use crate::error::{LinalgError, Result};

/// Dense grid of exact rationals. The shape is fixed at construction;
/// entries are overwritten in place by the elementary row operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RationalMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<Rational64>>,
}

impl RationalMatrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![vec![Rational64::zero(); cols]; rows],
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::zeros(n, n);
        for i in 0..n {
            matrix.data[i][i] = Rational64::one();
        }
        matrix
    }

    /// Builds a matrix from row data. Ragged or empty input is rejected
    /// before anything downstream can observe it.
    pub fn from_rows(data: Vec<Vec<Rational64>>) -> Result<Self> {
        if data.is_empty() || data[0].is_empty() {
            return Err(LinalgError::shape(
                "a matrix needs at least one row and one column",
            ));
        }
        let cols = data[0].len();
        for (index, row) in data.iter().enumerate() {
            if row.len() != cols {
                return Err(LinalgError::shape(format!(
                    "row {index} has {} entries, expected {cols}",
                    row.len()
                )));
            }
        }
        Ok(Self {
            rows: data.len(),
            cols,
            data,
        })
    }

    pub fn from_integer_rows(data: &[Vec<i64>]) -> Result<Self> {
        Self::from_rows(
            data.iter()
                .map(|row| row.iter().map(|&n| Rational64::from_integer(n)).collect())
                .collect(),
        )
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Rational64 {
        self.data[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: Rational64) {
        self.data[row][col] = value;
    }

    pub fn row(&self, row: usize) -> Vec<Rational64> {
        self.data[row].clone()
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }

    /// Multiplies row `row` by `factor`. A zero factor would destroy the
    /// row irreversibly, so it is refused here even though the reduction
    /// never asks for it.
    pub fn scale_row(&mut self, row: usize, factor: Rational64) -> Result<()> {
        if factor.is_zero() {
            return Err(LinalgError::DivisionByZero);
        }
        for entry in &mut self.data[row] {
            *entry *= factor;
        }
        Ok(())
    }

    /// target <- target + factor * source
    pub fn add_scaled_row(&mut self, target: usize, source: usize, factor: Rational64) {
        for col in 0..self.cols {
            let addend = factor * self.data[source][col];
            self.data[target][col] += addend;
        }
    }

    /// Exact matrix-vector product, used to re-verify solutions.
    pub fn mul_vec(&self, vector: &[Rational64]) -> Result<Vec<Rational64>> {
        if vector.len() != self.cols {
            return Err(LinalgError::dimension_mismatch(format!(
                "matrix has {} columns but the vector has {} components",
                self.cols,
                vector.len()
            )));
        }
        Ok(self
            .data
            .iter()
            .map(|row| {
                row.iter()
                    .zip(vector)
                    .fold(Rational64::zero(), |sum, (a, x)| sum + *a * *x)
            })
            .collect())
    }
}

impl fmt::Display for RationalMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // single line so a full snapshot fits on one log entry;
        // Rational64 renders reduced fractions, integers without denominator
        let body = self
            .data
            .iter()
            .map(|row| format!("[{}]", row.iter().join(", ")))
            .join(", ");
        write!(f, "[{body}]")
    }
}
