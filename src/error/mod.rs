use thiserror::Error;

/// Failures surfaced by construction and solving. Every variant is detected
/// before any reduction step runs, so a caller never receives a partial
/// result alongside an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    #[error("invalid matrix shape: {reason}")]
    Shape { reason: String },

    #[error("dimension mismatch: {reason}")]
    DimensionMismatch { reason: String },

    #[error("cannot scale a row by zero")]
    DivisionByZero,
}

impl LinalgError {
    pub fn shape(reason: impl Into<String>) -> Self {
        Self::Shape {
            reason: reason.into(),
        }
    }

    pub fn dimension_mismatch(reason: impl Into<String>) -> Self {
        Self::DimensionMismatch {
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = LinalgError> = std::result::Result<T, E>;
