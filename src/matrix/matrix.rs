use crate::matrix::matrix_error::MatrixError;
use num_traits::PrimInt;

/// Shared contract of the matrix types: shape, checked indexer and the three
/// arithmetic operations.
///
/// Operands are taken as `impl Into<Option<&Self>>`, so `m.add(&other)` is the
/// normal call and `None` stands for an absent operand.
pub trait Matrix<T>
where
    Self: Sized,
{
    /// Zero-filled `rows x columns` matrix. Both extents must be positive.
    fn new<R: PrimInt, C: PrimInt>(rows: R, columns: C) -> Result<Self, MatrixError>;

    /// Deep copy of `grid`. Extents are taken from the grid as-is, so an
    /// empty grid gives an empty matrix.
    ///
    /// The column count is read from the first row, so a grid with no rows is
    /// always 0x0. Use [`DenseMatrix::zeros`](crate::DenseMatrix::zeros) for
    /// a 0xn matrix.
    fn from_grid(grid: Option<&[Vec<T>]>) -> Result<Self, MatrixError>;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn rows(&self) -> usize;
    fn columns(&self) -> usize;

    fn shape(&self) -> (usize, usize) {
        (self.rows(), self.columns())
    }

    fn get<R: PrimInt, C: PrimInt>(&self, row: R, column: C) -> Result<T, MatrixError>;
    fn set<R: PrimInt, C: PrimInt>(&mut self, row: R, column: C, value: T)
        -> Result<(), MatrixError>;

    /// Element-wise `self += other`, returning `self` for chaining.
    fn add<'a>(&mut self, other: impl Into<Option<&'a Self>>) -> Result<&mut Self, MatrixError>
    where
        Self: 'a;

    /// Element-wise `self -= other`, returning `self` for chaining.
    fn subtract<'a>(
        &mut self,
        other: impl Into<Option<&'a Self>>,
    ) -> Result<&mut Self, MatrixError>
    where
        Self: 'a;

    /// Matrix product `self * other` as a new matrix. Neither operand changes.
    fn multiply<'a>(&self, other: impl Into<Option<&'a Self>>) -> Result<Self, MatrixError>
    where
        Self: 'a;
}
