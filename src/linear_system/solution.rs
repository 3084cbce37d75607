use num_rational::Rational64;
use strum_macros::{Display, EnumIter};

use crate::rational_matrix::step_log::StepLog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Unique,
    Infinite,
    Inconsistent,
}

/// Classified outcome of one solve. A value object: it owns its log and
/// holds no references back into the run that produced it.
#[derive(Debug, Clone)]
pub struct Solution {
    pub classification: Classification,
    /// Present unless the system is inconsistent. Pivot variables carry the
    /// augmented-column values of their pivot rows, free variables are zero.
    pub particular: Option<Vec<Rational64>>,
    /// One direction per free column, in column order. Empty unless the
    /// classification is Infinite.
    pub free_directions: Vec<Vec<Rational64>>,
    pub pivot_columns: Vec<usize>,
    pub free_columns: Vec<usize>,
    pub rank: usize,
    pub log: StepLog,
}

impl Solution {
    /// The free directions span the null space of A: every full solution is
    /// particular + a combination of these.
    pub fn null_space_basis(&self) -> &[Vec<Rational64>] {
        &self.free_directions
    }
}

/// Per-column outcomes of A X = B, in the column order of B. Each column
/// keeps its own independently attributable log.
#[derive(Debug, Clone)]
pub struct MatrixEquationSolution {
    pub column_solutions: Vec<Solution>,
}

impl MatrixEquationSolution {
    pub fn columns(&self) -> usize {
        self.column_solutions.len()
    }

    pub fn column(&self, index: usize) -> &Solution {
        &self.column_solutions[index]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.column_solutions.iter()
    }
}
