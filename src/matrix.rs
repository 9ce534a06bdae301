//! Fixed-shape row-major matrices and their rectangular views.

use std::fmt;

use strided_kernel as kernel;
use strided_view::layout::normalize_index;
use strided_view::{
    Buffer, MatLayout, Storage, StorageMut, StridedMatView, StridedMatViewMut, StridedVecViewMut,
};
use tracing::debug;

use crate::index::{Idx, Selection};
use crate::operand::{BinaryOp, Operand};
use crate::vector::{Vector, VectorBase, VectorView, VectorViewMut};
use crate::{Result, StridedError};

/// Fixed-shape row-major 2-D container of `f64` over storage `S`.
///
/// Rows are indexed by `i` (`0..rows`), columns by `j` (`0..cols`).
#[derive(Debug, Clone, Copy)]
pub struct MatrixBase<S> {
    pub(crate) storage: S,
    pub(crate) layout: MatLayout,
}

/// Owning matrix.
pub type Matrix = MatrixBase<Buffer>;

/// Shared rectangular window into a matrix.
pub type MatrixView<'a> = MatrixBase<&'a [f64]>;

/// Exclusive rectangular window into a matrix.
pub type MatrixViewMut<'a> = MatrixBase<&'a mut [f64]>;

fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(StridedError::InvalidSize);
    }
    rows.checked_mul(cols).ok_or(StridedError::OffsetOverflow)
}

// ============================================================================
// Construction
// ============================================================================

impl Matrix {
    fn from_buffer(buffer: Buffer, rows: usize, cols: usize) -> Self {
        Self {
            storage: buffer,
            layout: MatLayout::contiguous(rows, cols),
        }
    }

    /// Adopt `values` (row-major, `rows * cols` long) as a new matrix.
    pub(crate) fn from_values(values: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        if values.len() != len {
            return Err(StridedError::SizeMismatch(values.len(), len));
        }
        Ok(Self::from_buffer(Buffer::from_vec(values)?, rows, cols))
    }

    /// Allocate `rows x cols` elements. Contents are unspecified; write before reading.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        Ok(Self::from_buffer(Buffer::alloc(len)?, rows, cols))
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        Ok(Self::from_buffer(Buffer::calloc(len)?, rows, cols))
    }

    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self> {
        let mut m = Self::new(rows, cols)?;
        m.fill(value);
        Ok(m)
    }

    /// `n x n` identity.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::new(n, n)?;
        m.set_identity();
        Ok(m)
    }

    /// Element `(i, j)` is `f(i, j)`.
    pub fn from_fn<F: FnMut(usize, usize) -> f64>(rows: usize, cols: usize, mut f: F) -> Result<Self> {
        let mut m = Self::new(rows, cols)?;
        m.map_indexed(|i, j| f(i, j));
        Ok(m)
    }

    /// Single-row matrix from 1-D input.
    pub fn from_row(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(StridedError::EmptyInput);
        }
        Self::from_values(values.to_vec(), 1, values.len())
    }

    /// One matrix row per input row; all rows must have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let first = rows.first().ok_or(StridedError::EmptyInput)?.as_ref();
        if first.is_empty() {
            return Err(StridedError::EmptyInput);
        }
        let cols = first.len();
        let mut values = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(StridedError::ShapeMismatch(vec![i, row.len()], vec![i, cols]));
            }
            values.extend_from_slice(row);
        }
        Self::from_values(values, rows.len(), cols)
    }
}

// ============================================================================
// Reads (any storage)
// ============================================================================

impl<S: Storage> MatrixBase<S> {
    #[inline]
    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.layout.cols()
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.layout.rows(), self.layout.cols())
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.layout.is_square()
    }

    /// Whether this is a single-column matrix.
    #[inline]
    pub fn is_column(&self) -> bool {
        self.cols() == 1
    }

    #[inline]
    pub(crate) fn strided(&self) -> StridedMatView<'_> {
        StridedMatView::from_parts(self.storage.as_slice(), self.layout)
    }

    /// Shared view of the same elements.
    #[inline]
    pub fn as_view(&self) -> MatrixView<'_> {
        MatrixBase {
            storage: self.storage.as_slice(),
            layout: self.layout,
        }
    }

    /// Element `(i, j)`; negative indices count from the end.
    pub fn get(&self, i: isize, j: isize) -> Result<f64> {
        let pos = self.layout.checked_position(i, j)?;
        Ok(self.storage.as_slice()[pos])
    }

    /// Wildcard access: an element, a copied row or column, or the whole matrix.
    pub fn select(&self, i: impl Into<Idx>, j: impl Into<Idx>) -> Result<Selection<'_, S>> {
        match (i.into(), j.into()) {
            (Idx::At(i), Idx::At(j)) => self.get(i, j).map(Selection::Element),
            (Idx::At(i), Idx::All) => self.get_row(i).map(Selection::Row),
            (Idx::All, Idx::At(j)) => self.get_column(j).map(Selection::Column),
            (Idx::All, Idx::All) => Ok(Selection::All(self)),
        }
    }

    fn row_view_at(&self, i: isize) -> Result<VectorView<'_>> {
        let i = normalize_index(i, self.rows())?;
        Ok(VectorBase {
            storage: self.storage.as_slice(),
            layout: self.layout.row(i, 0, self.cols())?,
        })
    }

    fn column_view_at(&self, j: isize) -> Result<VectorView<'_>> {
        let j = normalize_index(j, self.cols())?;
        Ok(VectorBase {
            storage: self.storage.as_slice(),
            layout: self.layout.column(j, 0, self.rows())?,
        })
    }

    /// Copy of row `i`.
    pub fn get_row(&self, i: isize) -> Result<Vector> {
        self.row_view_at(i)?.to_vector()
    }

    /// Copy of column `j`.
    pub fn get_column(&self, j: isize) -> Result<Vector> {
        self.column_view_at(j)?.to_vector()
    }

    /// Elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.strided().iter()
    }

    /// `((i, j), value)` in row-major order.
    pub fn iter_indexed(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        let cols = self.cols();
        self.iter()
            .enumerate()
            .map(move |(k, x)| ((k / cols, k % cols), x))
    }

    /// Each row as a `1 x cols` matrix view.
    pub fn rows_iter(&self) -> impl Iterator<Item = MatrixView<'_>> + '_ {
        let data = self.storage.as_slice();
        let layout = self.layout;
        (0..layout.rows()).filter_map(move |i| {
            let layout = layout.submatrix(i, 0, 1, layout.cols()).ok()?;
            Some(MatrixBase {
                storage: data,
                layout,
            })
        })
    }

    /// Each column as a `rows x 1` matrix view.
    pub fn columns_iter(&self) -> impl Iterator<Item = MatrixView<'_>> + '_ {
        let data = self.storage.as_slice();
        let layout = self.layout;
        (0..layout.cols()).filter_map(move |j| {
            let layout = layout.submatrix(0, j, layout.rows(), 1).ok()?;
            Some(MatrixBase {
                storage: data,
                layout,
            })
        })
    }

    /// Each row as a vector view.
    pub fn vector_rows(&self) -> impl Iterator<Item = VectorView<'_>> + '_ {
        let data = self.storage.as_slice();
        let layout = self.layout;
        (0..layout.rows()).filter_map(move |i| {
            let layout = layout.row(i, 0, layout.cols()).ok()?;
            Some(VectorBase {
                storage: data,
                layout,
            })
        })
    }

    /// Each column as a vector view with stride `tda`.
    pub fn vector_columns(&self) -> impl Iterator<Item = VectorView<'_>> + '_ {
        let data = self.storage.as_slice();
        let layout = self.layout;
        (0..layout.cols()).filter_map(move |j| {
            let layout = layout.column(j, 0, layout.rows()).ok()?;
            Some(VectorBase {
                storage: data,
                layout,
            })
        })
    }

    /// Rows of values.
    pub fn to_vec(&self) -> Vec<Vec<f64>> {
        self.strided().rows_iter().map(<[f64]>::to_vec).collect()
    }

    /// Deep copy into a fresh contiguous matrix.
    pub fn to_matrix(&self) -> Result<Matrix> {
        Matrix::from_values(self.iter().collect(), self.rows(), self.cols())
    }

    /// Copy of the `h x w` block starting at `(x, y)`.
    pub fn submatrix(&self, x: usize, y: usize, h: usize, w: usize) -> Result<Matrix> {
        let layout = self.layout.submatrix(x, y, h, w)?;
        MatrixBase {
            storage: self.storage.as_slice(),
            layout,
        }
        .to_matrix()
    }

    /// Copy with `f` applied to every element.
    pub fn map<F: FnMut(f64) -> f64>(&self, f: F) -> Result<Matrix> {
        let mut m = self.to_matrix()?;
        m.map_in_place(f);
        Ok(m)
    }

    /// Elementwise product copy (not the matrix product).
    pub fn multiply<'o>(&self, other: impl Into<Operand<'o>>) -> Result<Matrix> {
        let mut m = self.to_matrix()?;
        m.mul_in_place(other)?;
        Ok(m)
    }

    pub fn min(&self) -> f64 {
        kernel::min(self.iter())
    }

    pub fn max(&self) -> f64 {
        kernel::max(self.iter())
    }

    pub fn min_max(&self) -> (f64, f64) {
        kernel::min_max(self.iter())
    }

    fn unflatten(&self, k: usize) -> (usize, usize) {
        (k / self.cols(), k % self.cols())
    }

    /// `(i, j)` of the first smallest element in row-major order.
    pub fn min_index(&self) -> (usize, usize) {
        self.unflatten(kernel::min_index(self.iter()))
    }

    /// `(i, j)` of the first largest element in row-major order.
    pub fn max_index(&self) -> (usize, usize) {
        self.unflatten(kernel::max_index(self.iter()))
    }

    pub fn min_max_index(&self) -> ((usize, usize), (usize, usize)) {
        let (lo, hi) = kernel::min_max_index(self.iter());
        (self.unflatten(lo), self.unflatten(hi))
    }

    pub fn is_zero(&self) -> bool {
        kernel::all(self.iter(), |x| x == 0.0)
    }

    pub fn is_positive(&self) -> bool {
        kernel::all(self.iter(), |x| x > 0.0)
    }

    pub fn is_negative(&self) -> bool {
        kernel::all(self.iter(), |x| x < 0.0)
    }

    pub fn is_non_negative(&self) -> bool {
        kernel::all(self.iter(), |x| x >= 0.0)
    }

    /// Convert `other` into a matrix compatible with `self`.
    ///
    /// Returns `(converted_other, copy_of_self)`: scalars become a matrix of
    /// the same shape filled with the scalar, vectors become a single-row
    /// matrix, matrices are copied.
    pub fn coerce<'o>(&self, other: impl Into<Operand<'o>>) -> Result<(Matrix, Matrix)> {
        let converted = match other.into() {
            Operand::Scalar(x) => Matrix::filled(self.rows(), self.cols(), x)?,
            Operand::Vector(v) => v.to_matrix()?,
            Operand::Matrix(m) => m.to_matrix()?,
        };
        Ok((converted, self.to_matrix()?))
    }

    /// Elements rendered with `{:?}` and joined by `sep`, row-major.
    pub fn join(&self, sep: &str) -> String {
        self.iter()
            .map(|x| format!("{x:?}"))
            .collect::<Vec<_>>()
            .join(sep)
    }
}

/// `[1.0 2.0 3.0;\n 2.0 3.0 4.0]`: spaces between columns, `;` and a newline
/// between rows.
impl<S: Storage> fmt::Display for MatrixBase<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, row) in self.strided().rows_iter().enumerate() {
            if i > 0 {
                f.write_str(";\n ")?;
            }
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{x:?}")?;
            }
        }
        f.write_str("]")
    }
}

/// Same shape and elementwise value equality.
impl<S: Storage, T: Storage> PartialEq<MatrixBase<T>> for MatrixBase<S> {
    fn eq(&self, other: &MatrixBase<T>) -> bool {
        self.shape() == other.shape() && self.iter().eq(other.iter())
    }
}

// ============================================================================
// Writes (owned or exclusively borrowed storage)
// ============================================================================

impl<S: StorageMut> MatrixBase<S> {
    #[inline]
    pub(crate) fn strided_mut(&mut self) -> StridedMatViewMut<'_> {
        StridedMatViewMut::from_parts(self.storage.as_mut_slice(), self.layout)
    }

    fn row_strided_mut(&mut self, i: isize) -> Result<StridedVecViewMut<'_>> {
        let i = normalize_index(i, self.rows())?;
        let layout = self.layout.row(i, 0, self.cols())?;
        Ok(StridedVecViewMut::from_parts(self.storage.as_mut_slice(), layout))
    }

    fn column_strided_mut(&mut self, j: isize) -> Result<StridedVecViewMut<'_>> {
        let j = normalize_index(j, self.cols())?;
        let layout = self.layout.column(j, 0, self.rows())?;
        Ok(StridedVecViewMut::from_parts(self.storage.as_mut_slice(), layout))
    }

    /// Set element `(i, j)`; negative indices count from the end.
    pub fn set(&mut self, i: isize, j: isize, value: f64) -> Result<()> {
        let pos = self.layout.checked_position(i, j)?;
        self.storage.as_mut_slice()[pos] = value;
        Ok(())
    }

    /// Wildcard assignment.
    ///
    /// - `(i, j)`: scalar only
    /// - `(i, ALL)` / `(ALL, j)`: scalar fill or a vector of matching length
    /// - `(ALL, ALL)`: scalar fill or a matrix of the same shape
    pub fn assign<'o>(
        &mut self,
        i: impl Into<Idx>,
        j: impl Into<Idx>,
        value: impl Into<Operand<'o>>,
    ) -> Result<()> {
        let value = value.into();
        match (i.into(), j.into()) {
            (Idx::At(i), Idx::At(j)) => match value {
                Operand::Scalar(x) => self.set(i, j, x),
                _ => Err(StridedError::Coercion("scalar")),
            },
            (Idx::At(i), Idx::All) => {
                let mut row = self.row_strided_mut(i)?;
                assign_line(&mut row, value)
            }
            (Idx::All, Idx::At(j)) => {
                let mut column = self.column_strided_mut(j)?;
                assign_line(&mut column, value)
            }
            (Idx::All, Idx::All) => match value {
                Operand::Scalar(x) => {
                    self.fill(x);
                    Ok(())
                }
                Operand::Matrix(m) => self.copy_from(&m).map(|_| ()),
                Operand::Vector(_) => Err(StridedError::Coercion("matrix")),
            },
        }
    }

    /// Copy a vector into row `i`.
    pub fn set_row<T: Storage>(&mut self, i: isize, v: &VectorBase<T>) -> Result<&mut Self> {
        kernel::copy_into(&mut self.row_strided_mut(i)?, &v.strided())?;
        Ok(self)
    }

    /// Copy a vector into column `j`.
    pub fn set_column<T: Storage>(&mut self, j: isize, v: &VectorBase<T>) -> Result<&mut Self> {
        kernel::copy_into(&mut self.column_strided_mut(j)?, &v.strided())?;
        Ok(self)
    }

    /// Copy every element of a same-shape matrix.
    pub fn copy_from<T: Storage>(&mut self, src: &MatrixBase<T>) -> Result<&mut Self> {
        kernel::mat_zip_map_in_place(&mut self.strided_mut(), &src.strided(), |_, s| s)?;
        Ok(self)
    }

    pub fn fill(&mut self, value: f64) -> &mut Self {
        kernel::mat_map_in_place(&mut self.strided_mut(), |_| value);
        self
    }

    pub fn set_zero(&mut self) -> &mut Self {
        self.fill(0.0)
    }

    /// Ones on the diagonal, zeros elsewhere. Works for rectangular shapes.
    pub fn set_identity(&mut self) -> &mut Self {
        kernel::mat_map_indexed(&mut self.strided_mut(), |i, j, _| if i == j { 1.0 } else { 0.0 });
        self
    }

    fn apply<'o>(&mut self, op: BinaryOp, other: impl Into<Operand<'o>>) -> Result<&mut Self> {
        match other.into() {
            Operand::Scalar(x) => op.scalar_into_matrix(&mut self.strided_mut(), x),
            Operand::Matrix(m) => op.elementwise_into_matrix(&mut self.strided_mut(), &m.strided())?,
            Operand::Vector(v) => {
                // A vector acts as a single-row matrix.
                if self.shape() != (1, v.len()) {
                    return Err(StridedError::ShapeMismatch(
                        vec![self.rows(), self.cols()],
                        vec![1, v.len()],
                    ));
                }
                op.elementwise_into(&mut self.row_strided_mut(0)?, &v.strided())?;
            }
        }
        Ok(self)
    }

    /// `self += other` elementwise; scalars are broadcast.
    pub fn add_in_place<'o>(&mut self, other: impl Into<Operand<'o>>) -> Result<&mut Self> {
        self.apply(BinaryOp::Add, other)
    }

    /// `self -= other` elementwise; scalars are broadcast.
    pub fn sub_in_place<'o>(&mut self, other: impl Into<Operand<'o>>) -> Result<&mut Self> {
        self.apply(BinaryOp::Sub, other)
    }

    /// `self *= other` elementwise (not the matrix product).
    pub fn mul_in_place<'o>(&mut self, other: impl Into<Operand<'o>>) -> Result<&mut Self> {
        self.apply(BinaryOp::Mul, other)
    }

    /// `self /= other` elementwise; a scalar divisor scales by its reciprocal.
    pub fn div_in_place<'o>(&mut self, other: impl Into<Operand<'o>>) -> Result<&mut Self> {
        self.apply(BinaryOp::Div, other)
    }

    pub fn map_in_place<F: FnMut(f64) -> f64>(&mut self, mut f: F) -> &mut Self {
        kernel::mat_map_in_place(&mut self.strided_mut(), |x| f(x));
        self
    }

    /// Overwrite element `(i, j)` with `f(i, j)`.
    pub fn map_indexed<F: FnMut(usize, usize) -> f64>(&mut self, mut f: F) -> &mut Self {
        kernel::mat_map_indexed(&mut self.strided_mut(), |i, j, _| f(i, j));
        self
    }

    /// Overwrite element `(i, j)` with `f(value, i, j)`.
    pub fn map_with_index<F: FnMut(f64, usize, usize) -> f64>(&mut self, mut f: F) -> &mut Self {
        kernel::mat_map_indexed(&mut self.strided_mut(), |i, j, x| f(x, i, j));
        self
    }
}

fn assign_line(line: &mut StridedVecViewMut<'_>, value: Operand<'_>) -> Result<()> {
    match value {
        Operand::Scalar(x) => {
            kernel::fill(line, x);
            Ok(())
        }
        Operand::Vector(v) => kernel::copy_into(line, &v.strided()),
        Operand::Matrix(_) => Err(StridedError::Coercion("vector")),
    }
}

// ============================================================================
// Views (owners only)
// ============================================================================

impl Matrix {
    fn view_layout(&self, x: usize, y: usize, h: Option<usize>, w: Option<usize>) -> Result<MatLayout> {
        if x >= self.rows() {
            return Err(StridedError::out_of_bounds(x, self.rows()));
        }
        if y >= self.cols() {
            return Err(StridedError::out_of_bounds(y, self.cols()));
        }
        let h = h.unwrap_or(self.rows() - x);
        let w = w.unwrap_or(self.cols() - y);
        let layout = self.layout.submatrix(x, y, h, w)?;
        debug!(x, y, rows = h, cols = w, "matrix view");
        Ok(layout)
    }

    /// `h x w` window whose top-left element is `(x, y)`.
    ///
    /// `None` extends the window to the last row or column.
    pub fn view(&self, x: usize, y: usize, h: Option<usize>, w: Option<usize>) -> Result<MatrixView<'_>> {
        let layout = self.view_layout(x, y, h, w)?;
        Ok(MatrixBase {
            storage: self.storage.as_slice(),
            layout,
        })
    }

    /// Writable window; see [`Matrix::view`].
    pub fn view_mut(
        &mut self,
        x: usize,
        y: usize,
        h: Option<usize>,
        w: Option<usize>,
    ) -> Result<MatrixViewMut<'_>> {
        let layout = self.view_layout(x, y, h, w)?;
        Ok(MatrixBase {
            storage: self.storage.as_mut_slice(),
            layout,
        })
    }

    /// Part of row `i` as a `1 x size` matrix view, starting at column `offset`.
    pub fn row_view(&self, i: usize, offset: usize, size: Option<usize>) -> Result<MatrixView<'_>> {
        let size = size.unwrap_or(self.cols().saturating_sub(offset));
        self.view(i, offset, Some(1), Some(size))
    }

    /// Part of column `j` as a `size x 1` matrix view, starting at row `offset`.
    pub fn column_view(&self, j: usize, offset: usize, size: Option<usize>) -> Result<MatrixView<'_>> {
        let size = size.unwrap_or(self.rows().saturating_sub(offset));
        self.view(offset, j, Some(size), Some(1))
    }

    pub fn row_view_mut(
        &mut self,
        i: usize,
        offset: usize,
        size: Option<usize>,
    ) -> Result<MatrixViewMut<'_>> {
        let size = size.unwrap_or(self.cols().saturating_sub(offset));
        self.view_mut(i, offset, Some(1), Some(size))
    }

    pub fn column_view_mut(
        &mut self,
        j: usize,
        offset: usize,
        size: Option<usize>,
    ) -> Result<MatrixViewMut<'_>> {
        let size = size.unwrap_or(self.rows().saturating_sub(offset));
        self.view_mut(offset, j, Some(size), Some(1))
    }

    /// Part of row `i` as a vector view, starting at column `offset`.
    pub fn row_vector_view(&self, i: usize, offset: usize, size: Option<usize>) -> Result<VectorView<'_>> {
        let size = size.unwrap_or(self.cols().saturating_sub(offset));
        let layout = self.layout.row(i, offset, size)?;
        debug!(row = i, offset, len = size, "row vector view");
        Ok(VectorBase {
            storage: self.storage.as_slice(),
            layout,
        })
    }

    /// Part of column `j` as a vector view, starting at row `offset`.
    pub fn column_vector_view(&self, j: usize, offset: usize, size: Option<usize>) -> Result<VectorView<'_>> {
        let size = size.unwrap_or(self.rows().saturating_sub(offset));
        let layout = self.layout.column(j, offset, size)?;
        debug!(column = j, offset, len = size, "column vector view");
        Ok(VectorBase {
            storage: self.storage.as_slice(),
            layout,
        })
    }

    pub fn row_vector_view_mut(
        &mut self,
        i: usize,
        offset: usize,
        size: Option<usize>,
    ) -> Result<VectorViewMut<'_>> {
        let size = size.unwrap_or(self.cols().saturating_sub(offset));
        let layout = self.layout.row(i, offset, size)?;
        Ok(VectorBase {
            storage: self.storage.as_mut_slice(),
            layout,
        })
    }

    pub fn column_vector_view_mut(
        &mut self,
        j: usize,
        offset: usize,
        size: Option<usize>,
    ) -> Result<VectorViewMut<'_>> {
        let size = size.unwrap_or(self.rows().saturating_sub(offset));
        let layout = self.layout.column(j, offset, size)?;
        Ok(VectorBase {
            storage: self.storage.as_mut_slice(),
            layout,
        })
    }
}

impl<'a> MatrixView<'a> {
    /// Views are only taken from the owning matrix.
    pub fn view(&self, _x: usize, _y: usize, _h: Option<usize>, _w: Option<usize>) -> Result<MatrixView<'a>> {
        Err(StridedError::ViewOfView)
    }
}

impl<'a> MatrixViewMut<'a> {
    /// Views are only taken from the owning matrix.
    pub fn view(&self, _x: usize, _y: usize, _h: Option<usize>, _w: Option<usize>) -> Result<MatrixView<'_>> {
        Err(StridedError::ViewOfView)
    }

    /// Views are only taken from the owning matrix.
    pub fn view_mut(
        &mut self,
        _x: usize,
        _y: usize,
        _h: Option<usize>,
        _w: Option<usize>,
    ) -> Result<MatrixViewMut<'_>> {
        Err(StridedError::ViewOfView)
    }
}
