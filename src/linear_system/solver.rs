use std::time::Instant;

use num_rational::Rational64;
use num_traits::{One, Zero};

use super::solution::{Classification, Solution};
use super::system::LinearSystem;
use crate::error::Result;
use crate::rational_matrix::gauss_jordan::{GaussJordan, Reduction};
use crate::rational_matrix::matrix::RationalMatrix;

/// Reduces [A|b] and classifies the outcome. The system was validated at
/// construction, so solving itself cannot fail.
pub fn solve_system(system: &LinearSystem) -> Solution {
    let start = Instant::now();
    let reduction =
        GaussJordan::new(system.augmented(), system.variables()).go_to_reduced_echelon_form();
    let solution = interpret_reduction(reduction, system.variables());
    log::debug!(
        "classified {}x{} system as {} after {} steps in {:#?}",
        system.equations(),
        system.variables(),
        solution.classification,
        solution.log.len(),
        start.elapsed()
    );
    solution
}

/// Convenience entry point building the system and solving it in one call.
pub fn solve(coefficients: RationalMatrix, rhs: Vec<Rational64>) -> Result<Solution> {
    Ok(solve_system(&LinearSystem::new(coefficients, rhs)?))
}

fn interpret_reduction(reduction: Reduction, variables: usize) -> Solution {
    let Reduction {
        rref,
        pivot_columns,
        free_columns,
        rank,
        log,
    } = reduction;
    let augmented_column = rref.cols() - 1;

    // a row reading 0 = c with c != 0 settles the whole system
    let inconsistent = (0..rref.rows()).any(|row| {
        (0..variables).all(|col| rref.get(row, col).is_zero())
            && !rref.get(row, augmented_column).is_zero()
    });
    if inconsistent {
        return Solution {
            classification: Classification::Inconsistent,
            particular: None,
            free_directions: Vec::new(),
            pivot_columns,
            free_columns,
            rank,
            log,
        };
    }

    // the k-th pivot column has its leading 1 in row k
    let mut particular = vec![Rational64::zero(); variables];
    for (row, &column) in pivot_columns.iter().enumerate() {
        particular[column] = rref.get(row, augmented_column);
    }

    if free_columns.is_empty() {
        return Solution {
            classification: Classification::Unique,
            particular: Some(particular),
            free_directions: Vec::new(),
            pivot_columns,
            free_columns,
            rank,
            log,
        };
    }

    // one direction per free column: that free variable set to 1, the other
    // free variables to 0, each pivot variable to minus its RREF entry
    let free_directions = free_columns
        .iter()
        .map(|&free| {
            let mut direction = vec![Rational64::zero(); variables];
            direction[free] = Rational64::one();
            for (row, &pivot) in pivot_columns.iter().enumerate() {
                let coefficient = rref.get(row, free);
                if !coefficient.is_zero() {
                    direction[pivot] = -coefficient;
                }
            }
            direction
        })
        .collect();

    Solution {
        classification: Classification::Infinite,
        particular: Some(particular),
        free_directions,
        pivot_columns,
        free_columns,
        rank,
        log,
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn ratio(n: i64) -> Rational64 {
        Rational64::from_integer(n)
    }

    fn solve_integer(a: &[Vec<i64>], b: &[i64]) -> Solution {
        let matrix = RationalMatrix::from_integer_rows(a).unwrap();
        let rhs = b.iter().map(|&n| ratio(n)).collect();
        solve(matrix, rhs).unwrap()
    }

    #[test]
    fn full_rank_square_system_is_unique_and_re_multiplies_exactly() {
        let solution = solve_integer(&[vec![1, 2], vec![3, 4]], &[5, 11]);
        assert_eq!(solution.classification, Classification::Unique);
        assert_eq!(solution.particular, Some(vec![ratio(1), ratio(2)]));
        assert!(solution.free_directions.is_empty());
        assert_eq!(solution.rank, 2);
        let a = RationalMatrix::from_integer_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(
            a.mul_vec(solution.particular.as_ref().unwrap()).unwrap(),
            vec![ratio(5), ratio(11)]
        );
    }

    #[test]
    fn dependent_columns_give_an_infinite_solution_set() {
        let solution = solve_integer(&[vec![1, 2], vec![2, 4]], &[3, 6]);
        assert_eq!(solution.classification, Classification::Infinite);
        assert_eq!(solution.particular, Some(vec![ratio(3), ratio(0)]));
        assert_eq!(solution.pivot_columns, vec![0]);
        assert_eq!(solution.free_columns, vec![1]);
        assert_eq!(solution.free_directions, vec![vec![ratio(-2), ratio(1)]]);

        let a = RationalMatrix::from_integer_rows(&[vec![1, 2], vec![2, 4]]).unwrap();
        let b = vec![ratio(3), ratio(6)];
        assert_eq!(a.mul_vec(solution.particular.as_ref().unwrap()).unwrap(), b);
        let direction = &solution.free_directions[0];
        assert_eq!(a.mul_vec(direction).unwrap(), vec![ratio(0), ratio(0)]);
        // particular + t * direction stays a solution for rational t
        let t = Rational64::new(7, 3);
        let shifted = solution
            .particular
            .as_ref()
            .unwrap()
            .iter()
            .zip(direction)
            .map(|(p, d)| *p + t * *d)
            .collect_vec();
        assert_eq!(a.mul_vec(&shifted).unwrap(), b);
    }

    #[test]
    fn parametric_form_matches_the_textbook_example() {
        let solution = solve_integer(&[vec![1, 2, 0], vec![0, 0, 1]], &[3, 1]);
        assert_eq!(solution.classification, Classification::Infinite);
        assert_eq!(
            solution.particular,
            Some(vec![ratio(3), ratio(0), ratio(1)])
        );
        assert_eq!(solution.free_columns, vec![1]);
        assert_eq!(
            solution.free_directions,
            vec![vec![ratio(-2), ratio(1), ratio(0)]]
        );
        assert_eq!(solution.null_space_basis(), &solution.free_directions[..]);
    }

    #[test]
    fn contradictory_rows_are_inconsistent_with_no_particular_solution() {
        let solution = solve_integer(&[vec![1, 1], vec![1, 1]], &[1, 2]);
        assert_eq!(solution.classification, Classification::Inconsistent);
        assert!(solution.particular.is_none());
        assert!(solution.free_directions.is_empty());
        // the log is still complete and replayable for display
        assert!(!solution.log.is_empty());
    }

    #[test]
    fn wide_inconsistent_system_is_detected() {
        let solution = solve_integer(&[vec![1, 2], vec![2, 4]], &[3, 5]);
        assert_eq!(solution.classification, Classification::Inconsistent);
    }

    #[test]
    fn constructed_consistent_systems_re_multiply_exactly() {
        // b is built as A * x, so every instance must be consistent and the
        // reported solution set must reproduce b exactly
        let mut rng = StdRng::seed_from_u64(20_12);
        for _ in 0..50 {
            let rows: usize = rng.gen_range(1..=4);
            let cols: usize = rng.gen_range(1..=4);
            let a = RationalMatrix::from_integer_rows(
                &(0..rows)
                    .map(|_| (0..cols).map(|_| rng.gen_range(-5..=5)).collect())
                    .collect_vec(),
            )
            .unwrap();
            let x = (0..cols).map(|_| ratio(rng.gen_range(-5..=5))).collect_vec();
            let b = a.mul_vec(&x).unwrap();

            let solution = solve(a.clone(), b.clone()).unwrap();
            assert_ne!(solution.classification, Classification::Inconsistent);
            let particular = solution.particular.as_ref().unwrap();
            assert_eq!(a.mul_vec(particular).unwrap(), b);
            for direction in &solution.free_directions {
                let zero = vec![Rational64::zero(); rows];
                assert_eq!(a.mul_vec(direction).unwrap(), zero);
            }
        }
    }
}
