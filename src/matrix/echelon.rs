use log::trace;

use crate::matrix::matrix::{Matrix, Scalar};

impl<T: Scalar> Matrix<T> {
    /// Forward elimination to row echelon form, in place.
    ///
    /// Rows are re-sorted by leading index before each pivot so the pivot is
    /// always the unreduced row starting furthest left. Zero rows end up last.
    pub fn reduce_to_ref(&mut self) {
        for current_row in 0..self.rows {
            self.sort_rows_by_leading_index();
            let Some(pivot_col) = self.leading_index(current_row) else {
                break;
            };
            trace!("REF pivot at ({current_row}, {pivot_col})");

            for row in current_row + 1..self.rows {
                match self.leading_index(row) {
                    Some(col) if col <= pivot_col => self.eliminate_leading_value(row, current_row),
                    _ => break,
                }
            }
        }
    }

    /// Forward and backward elimination to reduced row echelon form, in place.
    ///
    /// Every pivot is scaled to exactly one and is the only non-zero entry of
    /// its column. Stops at the first zero row once rows are sorted.
    pub fn reduce_to_rref(&mut self) {
        let mut current_row = 0;
        while current_row < self.rows {
            self.sort_rows_by_leading_index();
            let Some(pivot_col) = self.leading_index(current_row) else {
                break;
            };
            trace!("RREF pivot at ({current_row}, {pivot_col})");

            let pivot = self.at(current_row, pivot_col);
            self.multiply_row(current_row, T::one() / pivot);
            self.set(current_row, pivot_col, T::one());

            for row in 0..self.rows {
                if row == current_row {
                    continue;
                }
                match self.leading_index(row) {
                    Some(col) if col <= pivot_col => self.eliminate_leading_value(row, current_row),
                    _ => break,
                }
            }

            current_row += 1;
        }
    }

    fn pivot_of(&self, row: usize) -> Option<usize> {
        self.row(row).iter().position(|x| !self.config.is_zero(*x))
    }

    /// Leading indices strictly increase downwards and zero rows trail.
    pub fn is_ref(&self) -> bool {
        let mut last_pivot_col = None;
        let mut seen_zero_row = false;

        for row in 0..self.rows {
            match self.pivot_of(row) {
                None => seen_zero_row = true,
                Some(_) if seen_zero_row => return false,
                Some(pivot_col) => {
                    if let Some(last) = last_pivot_col {
                        if pivot_col <= last {
                            return false;
                        }
                    }
                    last_pivot_col = Some(pivot_col);
                }
            }
        }
        true
    }

    /// Row echelon form where every pivot is one and alone in its column.
    pub fn is_rref(&self) -> bool {
        if !self.is_ref() {
            return false;
        }

        for row in 0..self.rows {
            let Some(pivot_col) = self.pivot_of(row) else {
                break;
            };
            if !self.config.is_zero(self.at(row, pivot_col) - T::one()) {
                return false;
            }
            for r in 0..self.rows {
                if r != row && !self.config.is_zero(self.at(r, pivot_col)) {
                    return false;
                }
            }
        }
        true
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::matrix::matrix::Matrix;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_rows(rng: &mut StdRng, rows: usize, cols: usize) -> Vec<Vec<f64>> {
        (0..rows)
            .map(|_| (0..cols).map(|_| rng.gen_range(-5.0..5.0)).collect())
            .collect()
    }

    #[test]
    fn test_ref() {
        let mut m = Matrix::from_list(vec![vec![2.0, 3.0, 8.0], vec![1.0, 4.0, 7.0]]).unwrap();
        m.reduce_to_ref();
        assert_eq!(m.to_list(), vec![vec![2.0, 3.0, 8.0], vec![0.0, 2.5, 3.0]]);
        assert!(m.is_ref());
        assert!(!m.is_rref());
    }

    #[test]
    fn test_ref_with_dependent_rows() {
        let mut m = Matrix::from_list(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 2.0, 3.0],
            vec![2.0, 4.0, 6.0],
        ])
        .unwrap();
        m.reduce_to_ref();
        assert_eq!(
            m.to_list(),
            vec![
                vec![1.0, 2.0, 3.0],
                vec![0.0, 1.0, 2.0],
                vec![0.0, 0.0, 0.0]
            ]
        );
        assert!(m.is_ref());
    }

    #[test]
    fn test_rref() {
        let mut m = Matrix::from_list(vec![vec![2.0, 3.0, 8.0], vec![1.0, 4.0, 7.0]]).unwrap();
        m.reduce_to_rref();
        let expected = Matrix::from_list(vec![vec![1.0, 0.0, 2.2], vec![0.0, 1.0, 1.2]]).unwrap();
        assert!(m.is_close_to(&expected), "got\n{m}");
        assert!(m.is_rref());
    }

    #[test]
    fn test_rref_zero_row_between_pivots() {
        let mut m = Matrix::from_list(vec![vec![1.0, 2.0], vec![2.0, 4.0], vec![0.0, 1.0]]).unwrap();
        m.reduce_to_rref();
        assert_eq!(
            m.to_list(),
            vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.0, 0.0]]
        );
    }

    #[test]
    fn test_rref_zero_matrix() {
        let mut m = Matrix::<f64>::new(3, 2).unwrap();
        m.reduce_to_rref();
        assert_eq!(m, Matrix::new(3, 2).unwrap());
        assert!(m.is_rref());
    }

    #[test]
    fn test_rref_free_column() {
        let mut m = Matrix::from_list(vec![
            vec![1.0, 2.0, 1.0, 4.0],
            vec![2.0, 4.0, 0.0, 6.0],
            vec![3.0, 6.0, 1.0, 10.0],
        ])
        .unwrap();
        m.reduce_to_rref();
        let expected = Matrix::from_list(vec![
            vec![1.0, 2.0, 0.0, 3.0],
            vec![0.0, 0.0, 1.0, 1.0],
            vec![0.0, 0.0, 0.0, 0.0],
        ])
        .unwrap();
        assert!(m.is_close_to(&expected), "got\n{m}");
        assert!(m.is_rref());
    }

    #[test]
    fn test_rref_random() {
        let mut rng = StdRng::seed_from_u64(42);
        for (rows, cols) in [(1, 3), (3, 3), (4, 6), (6, 4)] {
            let mut lines = random_rows(&mut rng, rows, cols);
            // force a dependent row
            if rows > 2 {
                let dependent = (0..cols).map(|c| lines[0][c] + 2.0 * lines[1][c]).collect();
                lines[rows - 1] = dependent;
            }
            let mut m = Matrix::from_list(lines).unwrap();
            let mut r = m.clone();

            m.reduce_to_ref();
            assert!(m.is_ref(), "not in REF\n{m}");

            r.reduce_to_rref();
            assert!(r.is_rref(), "not in RREF\n{r}");
            if rows > 2 {
                assert_eq!(r.row(rows - 1), vec![0.0; cols].as_slice());
            }
        }
    }

    #[test]
    fn test_rref_idempotent() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut m = Matrix::from_list(random_rows(&mut rng, 3, 5)).unwrap();
        m.reduce_to_rref();
        let once = m.clone();
        m.reduce_to_rref();
        assert!(m.is_close_to(&once));

        let mut identity = Matrix::<f64>::identity(4).unwrap();
        identity.reduce_to_rref();
        assert_eq!(identity, Matrix::identity(4).unwrap());
    }

    #[test]
    fn test_predicates() {
        let m = Matrix::from_list(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        assert!(!m.is_ref());
        let m = Matrix::from_list(vec![vec![0.0, 0.0], vec![1.0, 0.0]]).unwrap();
        assert!(!m.is_ref());
        let m = Matrix::from_list(vec![vec![1.0, 3.0], vec![0.0, 1.0]]).unwrap();
        assert!(m.is_ref());
        assert!(!m.is_rref());
    }
}
