pub mod matrix {
    pub mod cofactor;
    pub mod echelon;
    pub mod matrix;
    pub mod pivot;
    pub mod row_ops;
    pub mod solver;
}

pub mod config;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

pub use config::MatrixConfig;
pub use error::MatrixError;
pub use matrix::matrix::{Matrix, Scalar};
