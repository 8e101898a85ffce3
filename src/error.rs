use num_traits::ToPrimitive;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("A matrix needs at least one row and one column (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Dimensions not compatible: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    /// Raised with the determinant as `f64` so the error stays scalar-agnostic.
    #[error("Singular matrix (determinant {determinant})")]
    Singular { determinant: f64 },
}

impl MatrixError {
    pub(crate) fn singular<T: ToPrimitive>(determinant: T) -> Self {
        MatrixError::Singular {
            determinant: determinant.to_f64().unwrap_or(f64::NAN),
        }
    }
}
