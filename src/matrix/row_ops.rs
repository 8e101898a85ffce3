//! Elementary row operations. Every operation mutates the matrix in place and
//! snaps the entries it writes.
//!
//! Row indices are checked like slice indices: an out of range row panics.

use crate::matrix::matrix::{Matrix, Scalar};

impl<T: Scalar> Matrix<T> {
    fn check_row(&self, row: usize) {
        assert!(
            row < self.rows,
            "row {row} out of bounds ({} rows)",
            self.rows
        );
    }

    /// # Panics
    /// If either row is out of bounds.
    pub fn swap_rows(&mut self, row1: usize, row2: usize) {
        self.check_row(row1);
        self.check_row(row2);
        if row1 == row2 {
            return;
        }
        for k in 0..self.cols {
            self.cells.swap(row1 * self.cols + k, row2 * self.cols + k);
        }
    }

    /// Scale every non-zero entry of `row` by `coefficient`.
    ///
    /// # Panics
    /// If `row` is out of bounds.
    pub fn multiply_row(&mut self, row: usize, coefficient: T) {
        self.check_row(row);
        let config = self.config;
        for cell in &mut self.cells[row * self.cols..(row + 1) * self.cols] {
            if *cell == T::zero() {
                continue;
            }
            *cell = config.snap(*cell * coefficient);
        }
    }

    /// `target += coefficient * source`, touching only the columns where
    /// `source` is non-zero.
    ///
    /// # Panics
    /// If either row is out of bounds.
    pub fn multiply_and_add_row(&mut self, target: usize, source: usize, coefficient: T) {
        self.check_row(target);
        self.check_row(source);
        let config = self.config;
        for col in 0..self.cols {
            let used = self.cells[source * self.cols + col];
            if used == T::zero() {
                continue;
            }
            let cell = &mut self.cells[target * self.cols + col];
            *cell = config.snap(*cell + used * coefficient);
        }
    }

    /// Scale the whole matrix by `scalar`, row by row.
    pub fn scalar_product(&mut self, scalar: T) {
        for row in 0..self.rows {
            self.multiply_row(row, scalar);
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
