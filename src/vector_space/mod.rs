use std::fmt;

use indexmap::IndexMap;
use itertools::Itertools;
use num_rational::Rational64;
use num_traits::Zero;
use strum_macros::{Display, EnumIter};

use crate::error::{LinalgError, Result};
use crate::linear_system::solution::{Classification, Solution};
use crate::linear_system::solver::solve;
use crate::rational_matrix::matrix::RationalMatrix;

/// A vector in ℝⁿ with exact rational components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vector {
    components: Vec<Rational64>,
}

impl Vector {
    pub fn new(components: Vec<Rational64>) -> Result<Self> {
        if components.is_empty() {
            return Err(LinalgError::shape("a vector needs at least one component"));
        }
        Ok(Self { components })
    }

    pub fn from_integers(values: &[i64]) -> Result<Self> {
        Self::new(values.iter().map(|&n| Rational64::from_integer(n)).collect())
    }

    pub fn dim(&self) -> usize {
        self.components.len()
    }

    pub fn components(&self) -> &[Rational64] {
        &self.components
    }

    pub fn is_zero(&self) -> bool {
        self.components.iter().all(|c| c.is_zero())
    }

    pub fn zero_like(&self) -> Self {
        Self {
            components: vec![Rational64::zero(); self.dim()],
        }
    }

    pub fn negated(&self) -> Self {
        Self {
            components: self.components.iter().map(|c| -*c).collect(),
        }
    }

    pub fn scaled(&self, factor: Rational64) -> Self {
        Self {
            components: self.components.iter().map(|c| factor * *c).collect(),
        }
    }

    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.dim() != other.dim() {
            return Err(LinalgError::dimension_mismatch(format!(
                "vectors of dimension {} and {}",
                self.dim(),
                other.dim()
            )));
        }
        Ok(self.add_same_dim(other))
    }

    // dimensions already known to agree
    fn add_same_dim(&self, other: &Self) -> Self {
        Self {
            components: self
                .components
                .iter()
                .zip(&other.components)
                .map(|(a, b)| *a + *b)
                .collect(),
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.components.iter().join(", "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "title_case")]
pub enum VectorSpaceProperty {
    Commutativity,
    Associativity,
    AdditiveIdentity,
    AdditiveInverse,
    ScalarMultiple,
}

/// Verdict for one property together with the labelled intermediate vectors
/// of the computation, in evaluation order, ready for display.
#[derive(Debug, Clone)]
pub struct PropertyCheck {
    pub holds: bool,
    pub intermediates: Vec<(String, Vector)>,
}

pub type PropertyReport = IndexMap<VectorSpaceProperty, PropertyCheck>;

pub fn check_commutativity(u: &Vector, v: &Vector) -> Result<PropertyCheck> {
    let uv = u.add(v)?;
    let vu = v.add(u)?;
    Ok(PropertyCheck {
        holds: uv == vu,
        intermediates: vec![("u + v".into(), uv), ("v + u".into(), vu)],
    })
}

pub fn check_associativity(u: &Vector, v: &Vector, w: &Vector) -> Result<PropertyCheck> {
    let left = u.add(v)?.add(w)?;
    let right = u.add(&v.add(w)?)?;
    Ok(PropertyCheck {
        holds: left == right,
        intermediates: vec![("(u + v) + w".into(), left), ("u + (v + w)".into(), right)],
    })
}

pub fn check_additive_identity(u: &Vector) -> PropertyCheck {
    let zero = u.zero_like();
    let sum = u.add_same_dim(&zero);
    PropertyCheck {
        holds: sum == *u,
        intermediates: vec![("0".into(), zero), ("u + 0".into(), sum)],
    }
}

pub fn check_additive_inverse(u: &Vector) -> PropertyCheck {
    let opposite = u.negated();
    let sum = u.add_same_dim(&opposite);
    PropertyCheck {
        holds: sum.is_zero(),
        intermediates: vec![("-u".into(), opposite), ("u + (-u)".into(), sum)],
    }
}

pub fn check_scalar_multiple(u: &Vector, scalar: Rational64) -> PropertyCheck {
    let scaled = u.scaled(scalar);
    PropertyCheck {
        // componentwise scaling always lands back in ℝⁿ
        holds: scaled.dim() == u.dim(),
        intermediates: vec![(format!("({scalar}) * u"), scaled)],
    }
}

/// Runs every applicable check in a fixed order. Associativity needs `w`
/// and the scalar check needs `scalar`; both are skipped when absent.
pub fn verify_properties(
    u: &Vector,
    v: &Vector,
    w: Option<&Vector>,
    scalar: Option<Rational64>,
) -> Result<PropertyReport> {
    let mut report = PropertyReport::new();
    report.insert(
        VectorSpaceProperty::Commutativity,
        check_commutativity(u, v)?,
    );
    if let Some(w) = w {
        report.insert(
            VectorSpaceProperty::Associativity,
            check_associativity(u, v, w)?,
        );
    }
    report.insert(
        VectorSpaceProperty::AdditiveIdentity,
        check_additive_identity(u),
    );
    report.insert(
        VectorSpaceProperty::AdditiveInverse,
        check_additive_inverse(u),
    );
    if let Some(scalar) = scalar {
        report.insert(
            VectorSpaceProperty::ScalarMultiple,
            check_scalar_multiple(u, scalar),
        );
    }
    Ok(report)
}

/// Columns-from-vectors matrix for c1*v1 + ... + ck*vk = target, solved as
/// A c = target.
pub fn linear_combination(vectors: &[Vector], target: &Vector) -> Result<Solution> {
    let matrix = columns_matrix(vectors)?;
    if matrix.rows() != target.dim() {
        return Err(LinalgError::dimension_mismatch(format!(
            "generators live in dimension {} but the target has {}",
            matrix.rows(),
            target.dim()
        )));
    }
    solve(matrix, target.components().to_vec())
}

/// Outcome of the dependence test on a generator set.
#[derive(Debug, Clone)]
pub struct DependenceCheck {
    pub independent: bool,
    /// The homogeneous solve A c = 0 behind the verdict. When dependent,
    /// its null-space basis exhibits the dependency relations.
    pub solution: Solution,
}

/// A set is independent exactly when A c = 0 admits only the trivial
/// solution, i.e. the homogeneous system classifies as unique.
pub fn linear_dependence(vectors: &[Vector]) -> Result<DependenceCheck> {
    let matrix = columns_matrix(vectors)?;
    let zero = vec![Rational64::zero(); matrix.rows()];
    let solution = solve(matrix, zero)?;
    Ok(DependenceCheck {
        independent: solution.classification == Classification::Unique,
        solution,
    })
}

fn columns_matrix(vectors: &[Vector]) -> Result<RationalMatrix> {
    let Some(first) = vectors.first() else {
        return Err(LinalgError::shape("at least one generator vector is required"));
    };
    let dim = first.dim();
    for (index, vector) in vectors.iter().enumerate() {
        if vector.dim() != dim {
            return Err(LinalgError::dimension_mismatch(format!(
                "generator {index} has dimension {}, expected {dim}",
                vector.dim()
            )));
        }
    }
    let rows = (0..dim)
        .map(|row| vectors.iter().map(|v| v.components()[row]).collect())
        .collect();
    RationalMatrix::from_rows(rows)
}
