use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::DenseMatrix;
use crate::matrix::matrix_error::MatrixError;
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyType;

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        match error {
            MatrixError::IndexOutOfBounds { .. } => PyIndexError::new_err(error.to_string()),
            _ => PyValueError::new_err(error.to_string()),
        }
    }
}

/// `f64` matrix exposed to Python as `dense_matrix.Matrix`.
#[derive(Debug, Clone)]
#[pyclass(name = "Matrix")]
pub struct MatrixPy {
    pub inner: DenseMatrix<f64>,
}

#[pymethods]
impl MatrixPy {
    #[new]
    pub fn new(rows: isize, columns: isize) -> PyResult<Self> {
        Ok(MatrixPy {
            inner: DenseMatrix::new(rows, columns)?,
        })
    }

    #[classmethod]
    #[pyo3(signature = (lines))]
    pub fn from_list(_cls: &Bound<PyType>, lines: Option<Vec<Vec<f64>>>) -> PyResult<Self> {
        Ok(MatrixPy {
            inner: DenseMatrix::from_grid(lines.as_deref())?,
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
    pub fn columns(&self) -> usize {
        self.inner.columns()
    }

    pub fn __getitem__(&self, index: (isize, isize)) -> PyResult<f64> {
        Ok(self.inner.get(index.0, index.1)?)
    }

    pub fn __setitem__(&mut self, index: (isize, isize), value: f64) -> PyResult<()> {
        Ok(self.inner.set(index.0, index.1, value)?)
    }

    /// In-place sum, returns `self`.
    #[pyo3(signature = (other))]
    pub fn add<'py>(
        slf: Bound<'py, Self>,
        other: Option<PyRef<'py, Self>>,
    ) -> PyResult<Bound<'py, Self>> {
        // copy first: `m.add(m)` would otherwise hold both borrows at once
        let other = other.map(|o| o.inner.clone());
        slf.borrow_mut().inner.add(other.as_ref())?;
        Ok(slf)
    }

    /// In-place difference, returns `self`.
    #[pyo3(signature = (other))]
    pub fn subtract<'py>(
        slf: Bound<'py, Self>,
        other: Option<PyRef<'py, Self>>,
    ) -> PyResult<Bound<'py, Self>> {
        let other = other.map(|o| o.inner.clone());
        slf.borrow_mut().inner.subtract(other.as_ref())?;
        Ok(slf)
    }

    #[pyo3(signature = (other))]
    pub fn multiply(&self, other: Option<PyRef<'_, Self>>) -> PyResult<MatrixPy> {
        Ok(MatrixPy {
            inner: self.inner.multiply(other.as_deref().map(|o| &o.inner))?,
        })
    }

    pub fn __add__(&self, rhs: PyRef<'_, Self>) -> PyResult<MatrixPy> {
        Ok(MatrixPy {
            inner: (&self.inner + &rhs.inner)?,
        })
    }

    pub fn __sub__(&self, rhs: PyRef<'_, Self>) -> PyResult<MatrixPy> {
        Ok(MatrixPy {
            inner: (&self.inner - &rhs.inner)?,
        })
    }

    pub fn __mul__(&self, rhs: PyRef<'_, Self>) -> PyResult<MatrixPy> {
        Ok(MatrixPy {
            inner: (&self.inner * &rhs.inner)?,
        })
    }

    pub fn __repr__(&self) -> String {
        format!(
            "Matrix({}x{})\n{}",
            self.inner.rows(),
            self.inner.columns(),
            self.inner
        )
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(all(test, feature = "python"))]
mod tests {
    use super::*;
    use crate::matrix::matrix_error::Operation;

    #[test]
    fn test_error_mapping() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let err: PyErr = MatrixError::IndexOutOfBounds {
                row: -10,
                column: -10,
                rows: 3,
                columns: 4,
            }
            .into();
            assert!(err.is_instance_of::<PyIndexError>(py));
            assert!(!err.is_instance_of::<PyValueError>(py));

            let others = [
                MatrixError::InvalidDimension {
                    rows: 0,
                    columns: 5,
                },
                MatrixError::NullSource,
                MatrixError::RaggedGrid {
                    row: 1,
                    expected: 2,
                    found: 1,
                },
                MatrixError::NullOperand {
                    operation: Operation::Add,
                },
                MatrixError::DimensionMismatch {
                    operation: Operation::Multiply,
                    left: (1, 1),
                    right: (0, 0),
                },
            ];
            for error in others {
                let message = error.to_string();
                let err: PyErr = error.into();
                assert!(err.is_instance_of::<PyValueError>(py));
                assert_eq!(err.value(py).to_string(), message);
            }
        });
    }

    #[test]
    fn test_add_to_itself() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let m = Bound::new(
                py,
                MatrixPy {
                    inner: DenseMatrix::from_list(vec![vec![1., 2.], vec![3., 4.]]).unwrap(),
                },
            )
            .unwrap();

            let other = m.borrow();
            let m = MatrixPy::add(m.clone(), Some(other)).unwrap();
            assert_eq!(m.borrow().to_list(), vec![vec![2., 4.], vec![6., 8.]]);

            let other = m.borrow();
            let m = MatrixPy::subtract(m.clone(), Some(other)).unwrap();
            assert_eq!(m.borrow().to_list(), vec![vec![0., 0.], vec![0., 0.]]);
        });
    }

    #[test]
    fn test_missing_operand() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let m = Bound::new(
                py,
                MatrixPy {
                    inner: DenseMatrix::new(2, 2).unwrap(),
                },
            )
            .unwrap();

            let err = MatrixPy::add(m.clone(), None).unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));
            let err = m.borrow().multiply(None).unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));
            let err = m.borrow().__getitem__((2, 0)).unwrap_err();
            assert!(err.is_instance_of::<PyIndexError>(py));
        });
    }
}
