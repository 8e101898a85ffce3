use crate::matrix::matrix::{Matrix, Scalar};

impl<T: Scalar> Matrix<T> {
    /// Column of the first non-zero entry of `row`, or `None` for a zero row.
    ///
    /// Entries are snapped while scanning, so noise left of the pivot is
    /// cleared as a side effect.
    ///
    /// # Panics
    /// If `row` is out of bounds.
    pub fn leading_index(&mut self, row: usize) -> Option<usize> {
        assert!(row < self.rows, "row {row} out of bounds ({} rows)", self.rows);
        let config = self.config;
        for col in 0..self.cols {
            let cell = &mut self.cells[row * self.cols + col];
            *cell = config.snap(*cell);
            if *cell != T::zero() {
                return Some(col);
            }
        }
        None
    }

    /// Stable reorder by ascending leading index, zero rows last.
    ///
    /// Adjacent pairs are swapped until a full pass makes no swap.
    pub fn sort_rows_by_leading_index(&mut self) {
        loop {
            let mut swaps = 0;
            for i in 0..self.rows.saturating_sub(1) {
                let upper = self.leading_index(i);
                let lower = self.leading_index(i + 1);
                let out_of_order = match (upper, lower) {
                    (None, Some(_)) => true,
                    (Some(u), Some(l)) => u > l,
                    _ => false,
                };
                if out_of_order {
                    self.swap_rows(i, i + 1);
                    swaps += 1;
                }
            }
            if swaps == 0 {
                break;
            }
        }
    }

    /// True when every row strictly below `start_row` is zero in `column`.
    pub fn is_column_ref(&self, column: usize, start_row: usize) -> bool {
        (start_row + 1..self.rows).all(|row| self.config.is_zero(self.at(row, column)))
    }

    /// Cancel the entry of `target` in the leading column of `pivot`.
    ///
    /// Both rows are expected to share that leading column. The cancelled
    /// entry is written as exact zero. Does nothing if `pivot` is a zero row.
    ///
    /// # Panics
    /// If either row is out of bounds.
    pub fn eliminate_leading_value(&mut self, target: usize, pivot: usize) {
        let Some(col) = self.leading_index(pivot) else {
            return;
        };
        let coefficient = -self.at(target, col) / self.at(pivot, col);
        self.multiply_and_add_row(target, pivot, coefficient);
        self.set(target, col, T::zero());
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
