use itertools::Itertools;

use super::solution::MatrixEquationSolution;
use super::solver::solve_system;
use super::system::MatrixEquation;
use crate::error::Result;
use crate::rational_matrix::matrix::RationalMatrix;

/// Solves A X = B one column of B at a time, left to right. Each column is
/// an independent run with its own log; no reduction work is shared, which
/// keeps every column's bitácora self-contained.
pub fn solve_matrix_equation(equation: &MatrixEquation) -> MatrixEquationSolution {
    let column_solutions = (0..equation.rhs_columns())
        .map(|column| {
            let solution = solve_system(&equation.column_system(column));
            log::debug!(
                "column {column} classified as {}",
                solution.classification
            );
            solution
        })
        .collect_vec();
    MatrixEquationSolution { column_solutions }
}

/// Convenience entry point: validates A against B, then solves per column.
pub fn solve_columns(
    coefficients: RationalMatrix,
    rhs: RationalMatrix,
) -> Result<MatrixEquationSolution> {
    Ok(solve_matrix_equation(&MatrixEquation::new(
        coefficients,
        rhs,
    )?))
}
