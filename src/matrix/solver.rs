use log::debug;

use crate::error::MatrixError;
use crate::matrix::matrix::{Matrix, Scalar};

impl<T: Scalar> Matrix<T> {
    /// Split an augmented `n x (n + 1)` matrix into its coefficient matrix and
    /// right-hand side column.
    fn split_augmented(&self) -> Result<(Matrix<T>, Matrix<T>), MatrixError> {
        let n = self.rows;
        if self.cols != n + 1 {
            return Err(MatrixError::DimensionMismatch {
                expected: (n, n + 1),
                found: self.shape(),
            });
        }

        let mut coefficients = Matrix::zeroed(n, n, self.config);
        let mut results = Matrix::zeroed(n, 1, self.config);
        for i in 0..n {
            coefficients.cells[i * n..(i + 1) * n].copy_from_slice(&self.row(i)[..n]);
            results.cells[i] = self.at(i, n);
        }
        Ok((coefficients, results))
    }

    /// Solve the square system described by this augmented matrix, writing the
    /// unknowns into `variables`.
    ///
    /// A coefficient matrix whose determinant is below the zero threshold is
    /// reported as [`MatrixError::Singular`], and `variables` is left
    /// untouched. Exactly and numerically singular systems are not told apart.
    pub fn solve_linear_system(&self, variables: &mut [T]) -> Result<(), MatrixError> {
        if variables.len() != self.rows {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.rows, 1),
                found: (variables.len(), 1),
            });
        }
        let (coefficients, results) = self.split_augmented()?;

        let determinant = coefficients.determinant()?;
        if self.config.is_zero(determinant) {
            debug!(
                "Rejecting a singular {}x{} system (determinant {determinant})",
                self.rows, self.rows
            );
            return Err(MatrixError::singular(determinant));
        }

        let solution = coefficients.inverse()?.dot_product(&results)?;
        variables.copy_from_slice(&solution.cells);
        Ok(())
    }

    /// [`solve_linear_system`](Matrix::solve_linear_system) into a new vector.
    pub fn solve(&self) -> Result<Vec<T>, MatrixError> {
        let mut variables = vec![T::zero(); self.rows];
        self.solve_linear_system(&mut variables)?;
        Ok(variables)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
