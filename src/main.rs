use std::process;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use env_logger::Env;
use itertools::Itertools;
use num_rational::Rational64;
use rational_rref::linear_system::matrix_equation::solve_columns;
use rational_rref::linear_system::solution::Solution;
use rational_rref::linear_system::solver::solve;
use rational_rref::rational_matrix::matrix::RationalMatrix;
use rational_rref::vector_space::{verify_properties, Vector};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Showcase {
    /// classify A x = b and replay the bitácora
    Linear,
    /// solve A X = B column by column
    Matrix,
    /// verify vector space properties in R^2
    Properties,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_enum, default_value = "linear")]
    pub showcase: Showcase,
}

fn render_vector(values: &[Rational64]) -> String {
    format!("[{}]", values.iter().join(", "))
}

fn print_solution(solution: &Solution) {
    println!("classification: {}", solution.classification);
    if let Some(particular) = &solution.particular {
        println!("particular solution: {}", render_vector(particular));
    }
    for direction in &solution.free_directions {
        println!("free direction: {}", render_vector(direction));
    }
    println!("pivot columns: {:?}", solution.pivot_columns);
    println!("free columns: {:?}", solution.free_columns);
    for step in &solution.log {
        println!("{step}");
    }
}

fn run_linear_showcase() -> Result<()> {
    let a = RationalMatrix::from_integer_rows(&[vec![1, 2], vec![2, 4]])?;
    let b = vec![Rational64::from_integer(3), Rational64::from_integer(6)];
    print_solution(&solve(a, b)?);
    Ok(())
}

fn run_matrix_showcase() -> Result<()> {
    let a = RationalMatrix::from_integer_rows(&[vec![2, 0], vec![0, 2]])?;
    let b = RationalMatrix::from_integer_rows(&[vec![2, 4], vec![6, 8]])?;
    let result = solve_columns(a, b)?;
    for (column, solution) in result.iter().enumerate() {
        println!("column {column}:");
        print_solution(solution);
    }
    Ok(())
}

fn run_properties_showcase() -> Result<()> {
    let u = Vector::from_integers(&[1, 2])?;
    let v = Vector::from_integers(&[3, 4])?;
    let w = Vector::from_integers(&[5, 6])?;
    let report = verify_properties(&u, &v, Some(&w), Some(Rational64::new(3, 2)))?;
    for (property, check) in &report {
        println!("{property}: {}", if check.holds { "holds" } else { "fails" });
        for (label, vector) in &check.intermediates {
            println!("  {label} = {vector}");
        }
    }
    Ok(())
}

fn run_showcase(showcase: Showcase) -> Result<()> {
    match showcase {
        Showcase::Linear => run_linear_showcase(),
        Showcase::Matrix => run_matrix_showcase(),
        Showcase::Properties => run_properties_showcase(),
    }
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = run_showcase(args.showcase) {
        eprintln!("ran into linear algebra error: {err:?}");
        process::exit(1)
    }
}
