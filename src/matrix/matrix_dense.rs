use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_error::{MatrixError, Operation};
use crate::utils::{to_i128, to_usize};
use itertools::{iproduct, Itertools};
use num_traits::{Float, NumAssign, PrimInt};
use std::fmt;
use std::mem;
use std::ops;

pub trait DenseElement:  // Avoid repeating all the traits
    Float
    + NumAssign
    + fmt::Debug
    + fmt::Display
{
}

impl<T> DenseElement for T where T: Float + NumAssign + fmt::Debug + fmt::Display {}

/// Dense matrix of floating-point values, stored row-major.
///
/// The shape is fixed at construction. Only the cells change afterwards,
/// through [`Matrix::set`], [`Matrix::add`] and [`Matrix::subtract`].
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    rows: usize,
    columns: usize,
    cells: Vec<T>,
}

impl<T: DenseElement> Matrix<T> for DenseMatrix<T> {
    fn new<R: PrimInt, C: PrimInt>(rows: R, columns: C) -> Result<Self, MatrixError> {
        match (to_usize(rows), to_usize(columns)) {
            (Some(r), Some(c)) if r > 0 && c > 0 => DenseMatrix::zeros(r, c),
            _ => {
                let error = MatrixError::InvalidDimension {
                    rows: to_i128(rows),
                    columns: to_i128(columns),
                };
                log::debug!("{}", error);
                Err(error)
            }
        }
    }

    fn from_grid(grid: Option<&[Vec<T>]>) -> Result<Self, MatrixError> {
        let grid = grid.ok_or_else(|| {
            log::debug!("{}", MatrixError::NullSource);
            MatrixError::NullSource
        })?;

        let rows = grid.len();
        let columns = grid.first().map_or(0, Vec::len);
        if let Some((row, line)) = grid.iter().enumerate().find(|(_, l)| l.len() != columns) {
            let error = MatrixError::RaggedGrid {
                row,
                expected: columns,
                found: line.len(),
            };
            log::debug!("{}", error);
            return Err(error);
        }

        log::trace!("copying a {}x{} grid", rows, columns);
        Ok(DenseMatrix {
            rows,
            columns,
            cells: grid.iter().flatten().copied().collect(),
        })
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn get<R: PrimInt, C: PrimInt>(&self, row: R, column: C) -> Result<T, MatrixError> {
        let offset = self.offset(row, column)?;
        Ok(self.cells[offset])
    }

    fn set<R: PrimInt, C: PrimInt>(
        &mut self,
        row: R,
        column: C,
        value: T,
    ) -> Result<(), MatrixError> {
        let offset = self.offset(row, column)?;
        self.cells[offset] = value;
        Ok(())
    }

    fn add<'a>(&mut self, other: impl Into<Option<&'a Self>>) -> Result<&mut Self, MatrixError>
    where
        Self: 'a,
    {
        self.zip_assign(other.into(), Operation::Add, |a, b| *a += b)
    }

    fn subtract<'a>(
        &mut self,
        other: impl Into<Option<&'a Self>>,
    ) -> Result<&mut Self, MatrixError>
    where
        Self: 'a,
    {
        self.zip_assign(other.into(), Operation::Subtract, |a, b| *a -= b)
    }

    fn multiply<'a>(&self, other: impl Into<Option<&'a Self>>) -> Result<Self, MatrixError>
    where
        Self: 'a,
    {
        let rhs = operand(other.into(), Operation::Multiply)?;
        if self.columns != rhs.rows {
            return Err(self.mismatch(rhs, Operation::Multiply));
        }

        log::trace!(
            "multiplying {}x{} by {}x{}",
            self.rows,
            self.columns,
            rhs.rows,
            rhs.columns
        );
        Ok(DenseMatrix {
            rows: self.rows,
            columns: rhs.columns,
            cells: iproduct!(0..self.rows, 0..rhs.columns)
                .map(|(i, j)| {
                    (0..self.columns).fold(T::zero(), |acc, k| acc + self.at(i, k) * rhs.at(k, j))
                })
                .collect(),
        })
    }
}

impl<T: DenseElement> DenseMatrix<T> {
    /// Zero-filled matrix. Unlike [`Matrix::new`] this accepts zero extents.
    /// Fails with `InvalidDimension` when the cells would not fit in one
    /// allocation.
    pub fn zeros(rows: usize, columns: usize) -> Result<DenseMatrix<T>, MatrixError> {
        let count = cell_count::<T>(rows, columns).ok_or_else(|| {
            let error = MatrixError::InvalidDimension {
                rows: to_i128(rows),
                columns: to_i128(columns),
            };
            log::debug!("{}", error);
            error
        })?;

        log::trace!("allocating a {}x{} matrix", rows, columns);
        Ok(DenseMatrix {
            rows,
            columns,
            cells: vec![T::zero(); count],
        })
    }

    pub fn from_list(lines: Vec<Vec<T>>) -> Result<DenseMatrix<T>, MatrixError> {
        Self::from_grid(Some(lines.as_slice()))
    }

    /// Cells in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    #[inline(always)]
    fn at(&self, row: usize, column: usize) -> T {
        self.cells[row * self.columns + column]
    }

    fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.columns..(row + 1) * self.columns]
    }

    fn offset<R: PrimInt, C: PrimInt>(&self, row: R, column: C) -> Result<usize, MatrixError> {
        match (to_usize(row), to_usize(column)) {
            (Some(r), Some(c)) if r < self.rows && c < self.columns => Ok(r * self.columns + c),
            _ => Err(MatrixError::IndexOutOfBounds {
                row: to_i128(row),
                column: to_i128(column),
                rows: self.rows,
                columns: self.columns,
            }),
        }
    }

    fn zip_assign(
        &mut self,
        other: Option<&DenseMatrix<T>>,
        operation: Operation,
        apply: impl Fn(&mut T, T),
    ) -> Result<&mut DenseMatrix<T>, MatrixError> {
        let rhs = operand(other, operation)?;
        if self.rows != rhs.rows || self.columns != rhs.columns {
            return Err(self.mismatch(rhs, operation));
        }

        self.cells
            .iter_mut()
            .zip(rhs.cells.iter())
            .for_each(|(a, b)| apply(a, *b));
        Ok(self)
    }

    fn mismatch(&self, rhs: &DenseMatrix<T>, operation: Operation) -> MatrixError {
        let error = MatrixError::DimensionMismatch {
            operation,
            left: (self.rows, self.columns),
            right: (rhs.rows, rhs.columns),
        };
        log::debug!("{}", error);
        error
    }
}

/// `rows * columns`, if that many `T` stay within `isize::MAX` bytes.
fn cell_count<T>(rows: usize, columns: usize) -> Option<usize> {
    let count = rows.checked_mul(columns)?;
    let bytes = count.checked_mul(mem::size_of::<T>())?;
    (bytes <= isize::MAX as usize).then_some(count)
}

fn operand<T>(
    other: Option<&DenseMatrix<T>>,
    operation: Operation,
) -> Result<&DenseMatrix<T>, MatrixError> {
    other.ok_or_else(|| {
        let error = MatrixError::NullOperand { operation };
        log::debug!("{}", error);
        error
    })
}

// The operators never touch their operands: `&a + &b` is a fresh matrix,
// where `a.add(&b)` writes into `a`.

impl<T: DenseElement> ops::Add<&DenseMatrix<T>> for &DenseMatrix<T> {
    type Output = Result<DenseMatrix<T>, MatrixError>;

    fn add(self, rhs: &DenseMatrix<T>) -> Result<DenseMatrix<T>, MatrixError> {
        let mut result = self.clone();
        Matrix::add(&mut result, rhs)?;
        Ok(result)
    }
}

impl<T: DenseElement> ops::Sub<&DenseMatrix<T>> for &DenseMatrix<T> {
    type Output = Result<DenseMatrix<T>, MatrixError>;

    fn sub(self, rhs: &DenseMatrix<T>) -> Result<DenseMatrix<T>, MatrixError> {
        let mut result = self.clone();
        Matrix::subtract(&mut result, rhs)?;
        Ok(result)
    }
}

impl<T: DenseElement> ops::Mul<&DenseMatrix<T>> for &DenseMatrix<T> {
    type Output = Result<DenseMatrix<T>, MatrixError>;

    fn mul(self, rhs: &DenseMatrix<T>) -> Result<DenseMatrix<T>, MatrixError> {
        self.multiply(rhs)
    }
}

impl<T: DenseElement> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "[{}]", self.row(r).iter().join(", "))?;
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
