use std::fmt;
use thiserror::Error;

/// Arithmetic operation that rejected its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        })
    }
}

/// Error type for this crate.
///
/// Every variant is a distinct failure class, so callers can `match` on the
/// kind instead of parsing messages. Validation always runs before any cell is
/// written: an `Err` leaves every operand as it was.
///
/// # Example
///
/// ```
/// use dense_matrix::{DenseMatrix, Matrix, MatrixError};
///
/// let a = DenseMatrix::<f64>::new(2, 3).unwrap();
/// let b = DenseMatrix::<f64>::new(2, 3).unwrap();
/// assert!(matches!(
///     a.multiply(&b),
///     Err(MatrixError::DimensionMismatch { .. })
/// ));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatrixError {
    /// A requested row or column count is zero or negative.
    #[error("cannot create a {rows}x{columns} matrix: dimensions must be positive")]
    InvalidDimension { rows: i128, columns: i128 },

    /// No source grid was supplied.
    #[error("cannot create a matrix without a source grid")]
    NullSource,

    /// The source grid is not rectangular.
    #[error("row {row} of the source grid has {found} columns, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Indexer coordinate outside `[0, rows) x [0, columns)`.
    #[error("index ({row}, {column}) is out of bounds for a {rows}x{columns} matrix")]
    IndexOutOfBounds {
        row: i128,
        column: i128,
        rows: usize,
        columns: usize,
    },

    /// No operand matrix was supplied.
    #[error("cannot {operation} without an operand matrix")]
    NullOperand { operation: Operation },

    /// Operand shapes are incompatible for the operation.
    #[error("cannot {operation} matrices of shape {left:?} and {right:?}")]
    DimensionMismatch {
        operation: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MatrixError::InvalidDimension {
                rows: -1,
                columns: 2
            }
            .to_string(),
            "cannot create a -1x2 matrix: dimensions must be positive"
        );
        assert_eq!(
            MatrixError::IndexOutOfBounds {
                row: -10,
                column: -10,
                rows: 3,
                columns: 4
            }
            .to_string(),
            "index (-10, -10) is out of bounds for a 3x4 matrix"
        );
        assert_eq!(
            MatrixError::NullOperand {
                operation: Operation::Subtract
            }
            .to_string(),
            "cannot subtract without an operand matrix"
        );
        assert_eq!(
            MatrixError::DimensionMismatch {
                operation: Operation::Multiply,
                left: (1, 1),
                right: (0, 0)
            }
            .to_string(),
            "cannot multiply matrices of shape (1, 1) and (0, 0)"
        );
    }
}
