use std::fmt;

use num_rational::Rational64;
use strum_macros::{Display, EnumIter};

use super::matrix::RationalMatrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StepKind {
    Swap,
    Scale,
    Eliminate,
}

/// One elementary row operation with its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOperation {
    Swap {
        a: usize,
        b: usize,
    },
    Scale {
        row: usize,
        factor: Rational64,
    },
    /// target <- target + factor * source
    AddScaled {
        target: usize,
        source: usize,
        factor: Rational64,
    },
}

impl RowOperation {
    pub fn kind(&self) -> StepKind {
        match self {
            Self::Swap { .. } => StepKind::Swap,
            Self::Scale { .. } => StepKind::Scale,
            Self::AddScaled { .. } => StepKind::Eliminate,
        }
    }
}

impl fmt::Display for RowOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Swap { a, b } => write!(f, "R{a} <-> R{b}"),
            Self::Scale { row, factor } => write!(f, "R{row} <- ({factor}) * R{row}"),
            Self::AddScaled {
                target,
                source,
                factor,
            } => write!(f, "R{target} <- R{target} + ({factor}) * R{source}"),
        }
    }
}

/// One entry of the bitácora: the operation applied and a deep copy of the
/// matrix immediately after it. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub number: usize,
    pub op: RowOperation,
    pub after: RationalMatrix,
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} – {} – {}",
            self.number,
            self.op.kind(),
            self.op,
            self.after
        )
    }
}

/// Append-only, 1-based ordered record of a single reduction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepLog {
    steps: Vec<StepRecord>,
}

impl StepLog {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn record(&mut self, op: RowOperation, after: RationalMatrix) {
        self.steps.push(StepRecord {
            number: self.steps.len() + 1,
            op,
            after,
        });
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a StepLog {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
