use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyType;

use crate::config::MatrixConfig;
use crate::error::MatrixError;
use crate::matrix::matrix::Matrix;

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        PyValueError::new_err(error.to_string())
    }
}

#[pyclass(name = "Matrix")]
#[derive(Debug, Clone)]
pub struct PyMatrix {
    inner: Matrix<f64>,
}

impl PyMatrix {
    fn check_row(&self, row: usize) -> PyResult<()> {
        if row >= self.inner.rows() {
            return Err(PyIndexError::new_err(format!(
                "row {row} out of bounds ({} rows)",
                self.inner.rows()
            )));
        }
        Ok(())
    }
}

#[pymethods]
impl PyMatrix {
    #[classmethod]
    #[pyo3(signature = (lines, zero_threshold=None, viewing_decimal=None))]
    pub fn from_list(
        _cls: &Bound<PyType>,
        lines: Vec<Vec<f64>>,
        zero_threshold: Option<f64>,
        viewing_decimal: Option<usize>,
    ) -> PyResult<Self> {
        let default = MatrixConfig::default();
        let config = MatrixConfig::new(
            zero_threshold.unwrap_or(default.zero_threshold),
            viewing_decimal.unwrap_or(default.viewing_decimal),
        );

        let rows = lines.len();
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);
        let mut inner = Matrix::with_config(rows, cols, config)?;
        if lines.iter().any(|l| l.len() != cols) {
            return Err(PyValueError::new_err("All rows must have the same length"));
        }
        inner.assign_values(&lines.concat())?;
        Ok(PyMatrix { inner })
    }

    #[classmethod]
    pub fn identity(_cls: &Bound<PyType>, n: usize) -> PyResult<Self> {
        Ok(PyMatrix {
            inner: Matrix::identity(n)?,
        })
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner.to_list()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    #[getter]
    #[allow(non_snake_case)]
    pub fn T(&self) -> PyMatrix {
        PyMatrix {
            inner: self.inner.transpose(),
        }
    }

    pub fn __mul__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok(PyMatrix {
            inner: (&self.inner * &rhs.inner)?,
        })
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    pub fn swap_rows(&mut self, row1: usize, row2: usize) -> PyResult<()> {
        self.check_row(row1)?;
        self.check_row(row2)?;
        self.inner.swap_rows(row1, row2);
        Ok(())
    }

    pub fn multiply_row(&mut self, row: usize, coefficient: f64) -> PyResult<()> {
        self.check_row(row)?;
        self.inner.multiply_row(row, coefficient);
        Ok(())
    }

    pub fn multiply_and_add_row(
        &mut self,
        target: usize,
        source: usize,
        coefficient: f64,
    ) -> PyResult<()> {
        self.check_row(target)?;
        self.check_row(source)?;
        self.inner.multiply_and_add_row(target, source, coefficient);
        Ok(())
    }

    pub fn reduce_to_ref(&mut self) {
        self.inner.reduce_to_ref()
    }

    pub fn reduce_to_rref(&mut self) {
        self.inner.reduce_to_rref()
    }

    pub fn is_ref(&self) -> bool {
        self.inner.is_ref()
    }

    pub fn is_rref(&self) -> bool {
        self.inner.is_rref()
    }

    pub fn determinant(&self) -> PyResult<f64> {
        Ok(self.inner.determinant()?)
    }

    pub fn minor(&self, row: usize, col: usize) -> PyResult<PyMatrix> {
        self.check_row(row)?;
        self.check_row(col)?;
        Ok(PyMatrix {
            inner: self.inner.minor(row, col)?,
        })
    }

    pub fn adjoint(&self) -> PyResult<PyMatrix> {
        Ok(PyMatrix {
            inner: self.inner.adjoint()?,
        })
    }

    pub fn inverse(&self) -> PyResult<PyMatrix> {
        Ok(PyMatrix {
            inner: self.inner.inverse()?,
        })
    }

    /// Unknowns of the augmented system, or `None` when it is singular.
    pub fn solve(&self) -> PyResult<Option<Vec<f64>>> {
        match self.inner.solve() {
            Ok(variables) => Ok(Some(variables)),
            Err(MatrixError::Singular { .. }) => Ok(None),
            Err(error) => Err(error.into()),
        }
    }
}

/// A Python module implemented in Rust.
#[pymodule]
fn dense_linalg(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatrix>()?;
    Ok(())
}
