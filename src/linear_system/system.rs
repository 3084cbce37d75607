use num_rational::Rational64;

use crate::error::{LinalgError, Result};
use crate::rational_matrix::matrix::RationalMatrix;

/// A system A x = b. Dimensions are checked once here so the solver can
/// assume a well-formed augmented matrix.
#[derive(Debug, Clone)]
pub struct LinearSystem {
    coefficients: RationalMatrix,
    rhs: Vec<Rational64>,
}

impl LinearSystem {
    pub fn new(coefficients: RationalMatrix, rhs: Vec<Rational64>) -> Result<Self> {
        if coefficients.rows() != rhs.len() {
            return Err(LinalgError::dimension_mismatch(format!(
                "A has {} rows but b has {} components",
                coefficients.rows(),
                rhs.len()
            )));
        }
        Ok(Self { coefficients, rhs })
    }

    pub fn equations(&self) -> usize {
        self.coefficients.rows()
    }

    pub fn variables(&self) -> usize {
        self.coefficients.cols()
    }

    pub fn coefficients(&self) -> &RationalMatrix {
        &self.coefficients
    }

    pub fn rhs(&self) -> &[Rational64] {
        &self.rhs
    }

    /// The augmented matrix [A|b], m x (n+1).
    pub fn augmented(&self) -> RationalMatrix {
        let mut augmented = RationalMatrix::zeros(self.equations(), self.variables() + 1);
        for row in 0..self.equations() {
            for col in 0..self.variables() {
                augmented.set(row, col, self.coefficients.get(row, col));
            }
            augmented.set(row, self.variables(), self.rhs[row]);
        }
        augmented
    }
}

/// A matrix equation A X = B. Row compatibility is rejected up front;
/// no column is solved on mismatched input.
#[derive(Debug, Clone)]
pub struct MatrixEquation {
    coefficients: RationalMatrix,
    rhs: RationalMatrix,
}

impl MatrixEquation {
    pub fn new(coefficients: RationalMatrix, rhs: RationalMatrix) -> Result<Self> {
        if coefficients.rows() != rhs.rows() {
            return Err(LinalgError::dimension_mismatch(format!(
                "A has {} rows but B has {}",
                coefficients.rows(),
                rhs.rows()
            )));
        }
        Ok(Self { coefficients, rhs })
    }

    pub fn coefficients(&self) -> &RationalMatrix {
        &self.coefficients
    }

    pub fn rhs_columns(&self) -> usize {
        self.rhs.cols()
    }

    /// The system A x = B[:, column]. Row counts already match, so this
    /// cannot fail.
    pub fn column_system(&self, column: usize) -> LinearSystem {
        let rhs = (0..self.rhs.rows())
            .map(|row| self.rhs.get(row, column))
            .collect();
        LinearSystem {
            coefficients: self.coefficients.clone(),
            rhs,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ones(n: i64) -> Vec<Rational64> {
        (0..n).map(|_| Rational64::from_integer(1)).collect()
    }

    #[test]
    fn builds_the_augmented_matrix() {
        let a = RationalMatrix::from_integer_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        let system = LinearSystem::new(a, ones(2)).unwrap();
        assert_eq!(system.augmented().to_string(), "[[1, 2, 1], [3, 4, 1]]");
    }

    #[test]
    fn rejects_mismatched_rhs_length() {
        let a = RationalMatrix::from_integer_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        assert!(matches!(
            LinearSystem::new(a, ones(3)),
            Err(LinalgError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn rejects_row_incompatible_matrix_equation() {
        let a = RationalMatrix::from_integer_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        let b = RationalMatrix::from_integer_rows(&[vec![1], vec![2], vec![3]]).unwrap();
        assert!(matches!(
            MatrixEquation::new(a, b),
            Err(LinalgError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn extracts_column_systems_in_order() {
        let a = RationalMatrix::identity(2);
        let b = RationalMatrix::from_integer_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        let equation = MatrixEquation::new(a, b).unwrap();
        assert_eq!(equation.rhs_columns(), 2);
        assert_eq!(
            equation.column_system(0).rhs(),
            &[Rational64::from_integer(1), Rational64::from_integer(3)]
        );
        assert_eq!(
            equation.column_system(1).rhs(),
            &[Rational64::from_integer(2), Rational64::from_integer(4)]
        );
    }
}
