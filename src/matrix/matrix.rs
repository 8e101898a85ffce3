use itertools::Itertools;
use num_traits::Float;
use rayon::prelude::*;
use std::fmt;
use std::ops;

use crate::config::MatrixConfig;
use crate::error::MatrixError;

pub trait Scalar:  // Avoid repeating all the traits
    Float
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + std::iter::Sum<Self>
{
}

impl<T> Scalar for T where
    T: Float + fmt::Debug + fmt::Display + Send + Sync + std::iter::Sum<T>
{
}

/// Dense row-major matrix.
///
/// The shape is fixed at construction. Methods taking `&mut self` mutate the
/// receiver in place; methods taking `&self` and returning a `Matrix` always
/// allocate a new one, which inherits the receiver's [`MatrixConfig`].
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) cells: Vec<T>,
    pub(crate) config: MatrixConfig<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Zero-filled `rows x cols` matrix with the default config.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Matrix::with_config(rows, cols, MatrixConfig::default())
    }

    pub fn with_config(
        rows: usize,
        cols: usize,
        config: MatrixConfig<T>,
    ) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimensions { rows, cols });
        }
        Ok(Matrix::zeroed(rows, cols, config))
    }

    // Callers guarantee non-zero dimensions.
    pub(crate) fn zeroed(rows: usize, cols: usize, config: MatrixConfig<T>) -> Self {
        Matrix {
            rows,
            cols,
            cells: vec![T::zero(); rows * cols],
            config,
        }
    }

    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut identity = Matrix::new(n, n)?;
        for i in 0..n {
            identity.cells[i * n + i] = T::one();
        }
        Ok(identity)
    }

    /// Build from row-major flat values, snapping each written entry.
    pub fn from_flat(rows: usize, cols: usize, values: &[T]) -> Result<Self, MatrixError> {
        let mut matrix = Matrix::new(rows, cols)?;
        matrix.assign_values(values)?;
        Ok(matrix)
    }

    pub fn from_list(lines: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);
        if let Some(line) = lines.iter().find(|l| l.len() != cols) {
            return Err(MatrixError::DimensionMismatch {
                expected: (1, cols),
                found: (1, line.len()),
            });
        }

        let values: Vec<T> = lines.into_iter().flatten().collect();
        Matrix::from_flat(rows, cols, &values)
    }

    pub fn to_list(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    /// Replace the config, keeping the values.
    pub fn configured(mut self, config: MatrixConfig<T>) -> Self {
        self.config = config;
        self
    }

    pub fn set_config(&mut self, config: MatrixConfig<T>) {
        self.config = config;
    }

    pub fn config(&self) -> &MatrixConfig<T> {
        &self.config
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline(always)]
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for a {}x{} matrix",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// # Panics
    /// If `(row, col)` is out of bounds.
    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> T {
        self.cells[self.offset(row, col)]
    }

    /// Raw write, no snapping.
    ///
    /// # Panics
    /// If `(row, col)` is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let offset = self.offset(row, col);
        self.cells[offset] = value;
    }

    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row {row} out of bounds ({} rows)", self.rows);
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn transpose(&self) -> Matrix<T> {
        Matrix {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
            config: self.config,
        }
    }

    /// Overwrite every entry with the one of `source`.
    pub fn copy_values_from(&mut self, source: &Matrix<T>) -> Result<(), MatrixError> {
        if self.shape() != source.shape() {
            return Err(MatrixError::DimensionMismatch {
                expected: self.shape(),
                found: source.shape(),
            });
        }
        self.cells.copy_from_slice(&source.cells);
        Ok(())
    }

    /// Fill row-major from `values` (length `rows * cols`), snapping each entry.
    pub fn assign_values(&mut self, values: &[T]) -> Result<(), MatrixError> {
        if values.len() != self.cells.len() {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.rows * self.cols, 1),
                found: (values.len(), 1),
            });
        }
        let config = self.config;
        for (cell, value) in self.cells.iter_mut().zip(values) {
            *cell = config.snap(*value);
        }
        Ok(())
    }

    /// Matrix product `self * rhs`. Entries are not snapped.
    pub fn dot_product(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.cols, rhs.cols),
                found: rhs.shape(),
            });
        }

        let mut result = Matrix::zeroed(self.rows, rhs.cols, self.config);
        result
            .cells
            .par_chunks_mut(rhs.cols)
            .enumerate()
            .for_each(|(i, row)| {
                for (j, cell) in row.iter_mut().enumerate() {
                    *cell = (0..self.cols).map(|k| self.at(i, k) * rhs.at(k, j)).sum();
                }
            });

        Ok(result)
    }

    /// Element-wise comparison within the zero threshold.
    pub fn is_close_to(&self, other: &Matrix<T>) -> bool {
        self.shape() == other.shape()
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| self.config.is_zero(*a - *b))
    }
}

impl<T: Scalar> PartialEq for Matrix<T> {
    fn eq(&self, other: &Matrix<T>) -> bool {
        self.shape() == other.shape() && self.cells == other.cells
    }
}

impl<T: Scalar> ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.dot_product(rhs)
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.config.viewing_decimal;
        for line in self.cells.chunks(self.cols) {
            writeln!(
                f,
                "{}",
                line.iter().map(|x| format!("{:.*}", precision, x)).join("\t")
            )?;
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix<f64> {
        let values: Vec<f64> = (0..rows * cols).map(|_| rng.gen_range(-10.0..10.0)).collect();
        Matrix::from_flat(rows, cols, &values).unwrap()
    }

    #[test]
    fn test_create() {
        let m = Matrix::<f64>::new(2, 3).unwrap();
        assert_eq!(m.to_list(), vec![vec![0.0; 3], vec![0.0; 3]]);

        assert_eq!(
            Matrix::<f64>::new(0, 3),
            Err(MatrixError::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert_eq!(
            Matrix::<f32>::identity(0),
            Err(MatrixError::InvalidDimensions { rows: 0, cols: 0 })
        );

        let i = Matrix::<f64>::identity(3).unwrap();
        assert_eq!(
            i.to_list(),
            vec![
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0]
            ]
        );
    }

    #[test]
    fn test_assign_values() {
        let mut m = Matrix::<f64>::new(2, 3).unwrap();
        m.assign_values(&[2.0, 3.0, 8.0, 1.0, 4.0, 7.0]).unwrap();
        assert_eq!(m.to_list(), vec![vec![2.0, 3.0, 8.0], vec![1.0, 4.0, 7.0]]);

        m.assign_values(&[0.000001, 1.0, -0.000002, 1.0, 1.0, 1.0])
            .unwrap();
        assert_eq!(m.row(0), &[0.0, 1.0, 0.0]);

        assert_eq!(
            m.assign_values(&[1.0, 2.0]),
            Err(MatrixError::DimensionMismatch {
                expected: (6, 1),
                found: (2, 1)
            })
        );
    }

    #[test]
    fn test_from_list() {
        let m = Matrix::from_list(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.at(1, 0), 3.0);

        assert!(Matrix::from_list(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
        assert!(Matrix::<f64>::from_list(vec![]).is_err());
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::from_list(vec![vec![1.0, 2.0, 5.0], vec![3.0, 4.0, 7.0]]).unwrap();
        assert_eq!(
            m.transpose().to_list(),
            vec![vec![1.0, 3.0], vec![2.0, 4.0], vec![5.0, 7.0]]
        );

        let mut rng = StdRng::seed_from_u64(7);
        for (rows, cols) in [(1, 1), (1, 4), (3, 2), (5, 5)] {
            let m = random_matrix(&mut rng, rows, cols);
            assert_eq!(m.transpose().transpose(), m);
        }
    }

    #[test]
    fn test_copy_values() {
        let source = Matrix::from_list(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let mut target = Matrix::new(2, 2).unwrap();
        target.copy_values_from(&source).unwrap();
        assert_eq!(target, source);

        let mut wrong = Matrix::new(2, 3).unwrap();
        assert_eq!(
            wrong.copy_values_from(&source),
            Err(MatrixError::DimensionMismatch {
                expected: (2, 3),
                found: (2, 2)
            })
        );
        assert_eq!(wrong, Matrix::new(2, 3).unwrap());
    }

    #[test]
    fn test_dot_product() {
        let a = Matrix::from_list(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        let b = Matrix::from_list(vec![vec![1.0, 0.0, 2.0], vec![-1.0, 1.0, 0.5]]).unwrap();
        assert_eq!(
            (&a * &b).unwrap().to_list(),
            vec![
                vec![-1.0, 2.0, 3.0],
                vec![-1.0, 4.0, 8.0],
                vec![-1.0, 6.0, 13.0]
            ]
        );
        assert_eq!((&b * &a).unwrap().shape(), (2, 2));
        assert!((&a * &a).is_err());

        let i = Matrix::identity(2).unwrap();
        assert_eq!(a.dot_product(&i).unwrap(), a);
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_list(vec![vec![2.0, 3.0, 8.0], vec![1.0, 4.0, 7.0]]).unwrap();
        assert_eq!(m.to_string(), "2.00\t3.00\t8.00\n1.00\t4.00\t7.00\n");

        let m = m.configured(MatrixConfig::default().with_viewing_decimal(0));
        assert_eq!(m.to_string(), "2\t3\t8\n1\t4\t7\n");
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds() {
        let m = Matrix::<f64>::new(2, 2).unwrap();
        m.at(0, 2);
    }
}
