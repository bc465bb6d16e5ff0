pub mod matrix {
    pub mod matrix;
    pub mod matrix_dense;
    pub mod matrix_error;
    #[cfg(feature = "python")]
    pub mod matrix_py;
}

pub mod utils;

pub use matrix::matrix::Matrix;
pub use matrix::matrix_dense::{DenseElement, DenseMatrix};
pub use matrix::matrix_error::{MatrixError, Operation};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn dense_matrix(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<matrix::matrix_py::MatrixPy>()?;
    Ok(())
}
