//! Determinant, adjoint and inverse by cofactor expansion.
//!
//! The determinant expands along the first row recursively, which costs
//! O(n!) and is only meant for small matrices.

use log::debug;

use crate::error::MatrixError;
use crate::matrix::matrix::{Matrix, Scalar};

fn sign<T: Scalar>(parity: usize) -> T {
    if parity % 2 == 0 {
        T::one()
    } else {
        -T::one()
    }
}

impl<T: Scalar> Matrix<T> {
    fn square_size(&self) -> Result<usize, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.rows)
    }

    // Caller guarantees a square matrix of size >= 2.
    fn minor_unchecked(&self, row: usize, col: usize) -> Matrix<T> {
        let size = self.rows;
        Matrix {
            rows: size - 1,
            cols: size - 1,
            cells: (0..size)
                .filter(|&i| i != row)
                .flat_map(|i| {
                    (0..size)
                        .filter(move |&j| j != col)
                        .map(move |j| self.at(i, j))
                })
                .collect(),
            config: self.config,
        }
    }

    fn cofactor_expansion(&self) -> T {
        if self.rows == 1 {
            return self.cells[0];
        }
        (0..self.cols)
            .map(|i| sign::<T>(i) * self.minor_unchecked(0, i).cofactor_expansion() * self.at(0, i))
            .sum()
    }

    /// New matrix without `row` and `col`.
    ///
    /// # Panics
    /// If `row` or `col` is out of bounds.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix<T>, MatrixError> {
        let size = self.square_size()?;
        assert!(
            row < size && col < size,
            "minor ({row}, {col}) out of bounds for a {size}x{size} matrix"
        );
        if size == 1 {
            return Err(MatrixError::InvalidDimensions { rows: 0, cols: 0 });
        }
        Ok(self.minor_unchecked(row, col))
    }

    pub fn determinant(&self) -> Result<T, MatrixError> {
        self.square_size()?;
        Ok(self.cofactor_expansion())
    }

    /// Transposed cofactor matrix. The adjoint of a 1x1 matrix is `[1]`.
    pub fn adjoint(&self) -> Result<Matrix<T>, MatrixError> {
        let size = self.square_size()?;
        let mut adjoint = Matrix::zeroed(size, size, self.config);
        if size == 1 {
            adjoint.cells[0] = T::one();
            return Ok(adjoint);
        }

        for i in 0..size {
            for j in 0..size {
                let cofactor = sign::<T>(i + j) * self.minor_unchecked(i, j).cofactor_expansion();
                adjoint.set(j, i, cofactor);
            }
        }
        Ok(adjoint)
    }

    /// Adjoint scaled by the reciprocal of the determinant.
    ///
    /// Fails with [`MatrixError::Singular`] when the determinant is below the
    /// zero threshold.
    pub fn inverse(&self) -> Result<Matrix<T>, MatrixError> {
        let determinant = self.determinant()?;
        if self.config.is_zero(determinant) {
            debug!("Not inverting a singular matrix (determinant {determinant})");
            return Err(MatrixError::singular(determinant));
        }

        let mut inverse = self.adjoint()?;
        inverse.scalar_product(T::one() / determinant);
        Ok(inverse)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
