use num_traits::Zero;

use super::matrix::RationalMatrix;
use super::step_log::{RowOperation, StepLog};

/// Drives an augmented matrix to reduced row-echelon form, recording every
/// elementary operation in the bitácora as it is applied.
pub struct GaussJordan {
    matrix: RationalMatrix,
    variable_columns: usize,
    active_column: usize,
    pivot_row: usize,
    pivot_columns: Vec<usize>,
    log: StepLog,
}

/// Outcome of a reduction run. Pivot columns are in discovery order, which
/// is also pivot-row order: the k-th pivot column has its leading 1 in row k.
pub struct Reduction {
    pub rref: RationalMatrix,
    pub pivot_columns: Vec<usize>,
    pub free_columns: Vec<usize>,
    pub rank: usize,
    pub log: StepLog,
}

impl GaussJordan {
    /// `variable_columns` counts the coefficient columns; everything to the
    /// right of them is augmented data and never pivoted on.
    pub fn new(augmented: RationalMatrix, variable_columns: usize) -> Self {
        debug_assert!(variable_columns <= augmented.cols());
        Self {
            matrix: augmented,
            variable_columns,
            active_column: 0,
            pivot_row: 0,
            pivot_columns: Vec::new(),
            log: StepLog::new(),
        }
    }

    /// Singular or rectangular input is not an error here: missing pivots
    /// simply leave free columns for the caller to interpret.
    pub fn go_to_reduced_echelon_form(mut self) -> Reduction {
        while self.is_not_in_reduced_form() {
            self.pivot_active_column();
            self.go_to_next_column();
        }
        let free_columns = (0..self.variable_columns)
            .filter(|column| !self.pivot_columns.contains(column))
            .collect();
        Reduction {
            rref: self.matrix,
            rank: self.pivot_columns.len(),
            pivot_columns: self.pivot_columns,
            free_columns,
            log: self.log,
        }
    }

    fn is_not_in_reduced_form(&self) -> bool {
        self.active_column < self.variable_columns && self.pivot_row < self.matrix.rows()
    }

    fn pivot_active_column(&mut self) {
        let Some(candidate) = self.find_pivot_candidate() else {
            // no pivot at or below the cursor: the column stays free
            return;
        };
        if candidate != self.pivot_row {
            self.swap_into_pivot_position(candidate);
        }
        self.normalize_pivot();
        self.eliminate_other_rows();
        self.pivot_columns.push(self.active_column);
        self.pivot_row += 1;
    }

    /// First nonzero entry top-down, the teaching rule. Exact arithmetic
    /// leaves no stability reason to compare magnitudes.
    fn find_pivot_candidate(&self) -> Option<usize> {
        (self.pivot_row..self.matrix.rows())
            .find(|&row| !self.matrix.get(row, self.active_column).is_zero())
    }

    fn swap_into_pivot_position(&mut self, candidate: usize) {
        self.matrix.swap_rows(candidate, self.pivot_row);
        self.log.record(
            RowOperation::Swap {
                a: candidate,
                b: self.pivot_row,
            },
            self.matrix.clone(),
        );
    }

    fn normalize_pivot(&mut self) {
        let pivot = self.matrix.get(self.pivot_row, self.active_column);
        // the candidate search guarantees a nonzero pivot
        let factor = pivot.recip();
        self.matrix
            .scale_row(self.pivot_row, factor)
            .expect("pivot entry is nonzero");
        self.log.record(
            RowOperation::Scale {
                row: self.pivot_row,
                factor,
            },
            self.matrix.clone(),
        );
    }

    fn eliminate_other_rows(&mut self) {
        for row in 0..self.matrix.rows() {
            if row == self.pivot_row {
                continue;
            }
            let entry = self.matrix.get(row, self.active_column);
            if entry.is_zero() {
                continue;
            }
            let factor = -entry;
            self.matrix.add_scaled_row(row, self.pivot_row, factor);
            self.log.record(
                RowOperation::AddScaled {
                    target: row,
                    source: self.pivot_row,
                    factor,
                },
                self.matrix.clone(),
            );
        }
    }

    fn go_to_next_column(&mut self) {
        self.active_column += 1;
    }
}
