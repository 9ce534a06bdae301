//! Fixed-length vectors and their strided views.
//!
//! [`VectorBase`] is generic over its storage: [`Vector`] owns a [`Buffer`],
//! [`VectorView`] and [`VectorViewMut`] borrow a window of an owner's buffer.
//! Reads are available on every storage kind, writes only on `Buffer` and
//! `&mut [f64]`, and new views only on owners.

use std::fmt;

use strided_kernel as kernel;
use strided_view::layout::normalize_index;
use strided_view::{Buffer, Storage, StorageMut, StridedVecView, StridedVecViewMut, VecLayout};
use tracing::debug;

use crate::matrix::Matrix;
use crate::operand::{BinaryOp, Operand};
use crate::{Result, StridedError};

/// Fixed-length 1-D container of `f64` over storage `S`.
#[derive(Debug, Clone, Copy)]
pub struct VectorBase<S> {
    pub(crate) storage: S,
    pub(crate) layout: VecLayout,
}

/// Owning vector.
pub type Vector = VectorBase<Buffer>;

/// Shared window into a vector or a matrix row/column.
pub type VectorView<'a> = VectorBase<&'a [f64]>;

/// Exclusive window into a vector or a matrix row/column.
pub type VectorViewMut<'a> = VectorBase<&'a mut [f64]>;

// ============================================================================
// Construction
// ============================================================================

impl Vector {
    pub(crate) fn from_buffer(buffer: Buffer) -> Self {
        let layout = VecLayout::contiguous(buffer.len());
        Self {
            storage: buffer,
            layout,
        }
    }

    pub(crate) fn from_values(values: Vec<f64>) -> Result<Self> {
        Ok(Self::from_buffer(Buffer::from_vec(values)?))
    }

    /// Allocate `n` elements. Contents are unspecified; write before reading.
    pub fn new(n: usize) -> Result<Self> {
        Ok(Self::from_buffer(Buffer::alloc(n)?))
    }

    /// Allocate `n` zeros.
    pub fn zeros(n: usize) -> Result<Self> {
        Ok(Self::from_buffer(Buffer::calloc(n)?))
    }

    /// `n` copies of `value`.
    pub fn filled(n: usize, value: f64) -> Result<Self> {
        let mut v = Self::new(n)?;
        v.fill(value);
        Ok(v)
    }

    /// Element `i` is `f(i)`.
    pub fn from_fn<F: FnMut(usize) -> f64>(n: usize, f: F) -> Result<Self> {
        let mut v = Self::new(n)?;
        v.map_indexed(f);
        Ok(v)
    }

    /// Copy of `values`; fails with `EmptyInput` if empty.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        Self::from_values(values.to_vec())
    }

    /// The `i`-th unit vector of length `n`.
    pub fn basis(n: usize, i: isize) -> Result<Self> {
        let mut v = Self::zeros(n)?;
        v.set_basis(i)?;
        Ok(v)
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = StridedError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::from_values(values)
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = StridedError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::from_slice(values)
    }
}

// ============================================================================
// Reads (any storage)
// ============================================================================

impl<S: Storage> VectorBase<S> {
    #[inline]
    pub fn len(&self) -> usize {
        self.layout.len()
    }

    /// Always false: vectors hold at least one element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    /// Distance in the backing buffer between consecutive elements.
    #[inline]
    pub fn stride(&self) -> usize {
        self.layout.stride()
    }

    #[inline]
    pub(crate) fn strided(&self) -> StridedVecView<'_> {
        StridedVecView::from_parts(self.storage.as_slice(), self.layout)
    }

    /// Shared view of the same elements.
    #[inline]
    pub fn as_view(&self) -> VectorView<'_> {
        VectorBase {
            storage: self.storage.as_slice(),
            layout: self.layout,
        }
    }

    /// Element `i`; `-1` is the last element.
    pub fn get(&self, i: isize) -> Result<f64> {
        let pos = self.layout.checked_position(i)?;
        Ok(self.storage.as_slice()[pos])
    }

    /// Elements in index order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = f64> + ExactSizeIterator + '_ {
        self.strided().iter()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    /// Deep copy into a fresh contiguous vector.
    pub fn to_vector(&self) -> Result<Vector> {
        Vector::from_values(self.to_vec())
    }

    /// Dot product.
    pub fn dot<T: Storage>(&self, other: &VectorBase<T>) -> Result<f64> {
        kernel::dot(&self.strided(), &other.strided())
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        kernel::nrm2(&self.strided())
    }

    /// Sum of the absolute values of the elements (BLAS `asum`).
    ///
    /// `[-3, 1, 2].sum()` is 6, not 0.
    pub fn sum(&self) -> f64 {
        kernel::asum(&self.strided())
    }

    /// Signed sum of the elements; unlike [`sum`](Self::sum), signs cancel.
    pub fn total(&self) -> f64 {
        kernel::sum(&self.strided())
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

    /// Index of the first smallest element.
    pub fn min_index(&self) -> usize {
        kernel::min_index(self.iter())
    }

    /// Index of the first largest element.
    pub fn max_index(&self) -> usize {
        kernel::max_index(self.iter())
    }

    pub fn min_max_index(&self) -> (usize, usize) {
        kernel::min_max_index(self.iter())
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

    /// Sorted copy.
    pub fn to_sorted(&self) -> Result<Vector> {
        let mut v = self.to_vector()?;
        v.sort();
        Ok(v)
    }

    /// Copy with `f` applied to every element.
    pub fn map<F: FnMut(f64) -> f64>(&self, f: F) -> Result<Vector> {
        let mut v = self.to_vector()?;
        v.map_in_place(f);
        Ok(v)
    }

    /// Single-row (`1 x n`) matrix holding a copy of the elements.
    pub fn to_matrix(&self) -> Result<Matrix> {
        Matrix::from_values(self.to_vec(), 1, self.len())
    }

    /// Single-column (`n x 1`) matrix holding a copy of the elements.
    pub fn transpose(&self) -> Result<Matrix> {
        Matrix::from_values(self.to_vec(), self.len(), 1)
    }

    /// Convert `other` into a vector compatible with `self`.
    ///
    /// Returns `(converted_other, copy_of_self)` so that `x op v` can be
    /// evaluated as `converted_other op copy_of_self`. Scalars become a
    /// vector filled with the scalar; matrices are rejected.
    pub fn coerce<'o>(&self, other: impl Into<Operand<'o>>) -> Result<(Vector, Vector)> {
        let converted = match other.into() {
            Operand::Scalar(x) => Vector::filled(self.len(), x)?,
            Operand::Vector(v) => v.to_vector()?,
            Operand::Matrix(_) => return Err(StridedError::Coercion("vector")),
        };
        Ok((converted, self.to_vector()?))
    }

    /// Elements rendered with `{:?}` and joined by `sep`.
    pub fn join(&self, sep: &str) -> String {
        self.iter()
            .map(|x| format!("{x:?}"))
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl<S: Storage> fmt::Display for VectorBase<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.join(", "))
    }
}

/// Elementwise value equality; stride and ownership are ignored.
impl<S: Storage, T: Storage> PartialEq<VectorBase<T>> for VectorBase<S> {
    fn eq(&self, other: &VectorBase<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

// ============================================================================
// Writes (owned or exclusively borrowed storage)
// ============================================================================

impl<S: StorageMut> VectorBase<S> {
    #[inline]
    pub(crate) fn strided_mut(&mut self) -> StridedVecViewMut<'_> {
        StridedVecViewMut::from_parts(self.storage.as_mut_slice(), self.layout)
    }

    /// Set element `i`; `-1` is the last element.
    pub fn set(&mut self, i: isize, value: f64) -> Result<()> {
        let pos = self.layout.checked_position(i)?;
        self.storage.as_mut_slice()[pos] = value;
        Ok(())
    }

    pub fn fill(&mut self, value: f64) -> &mut Self {
        kernel::fill(&mut self.strided_mut(), value);
        self
    }

    pub fn set_zero(&mut self) -> &mut Self {
        self.fill(0.0)
    }

    /// Zero every element except `i`, which becomes 1.
    pub fn set_basis(&mut self, i: isize) -> Result<&mut Self> {
        let i = normalize_index(i, self.len())? as isize;
        self.set_zero();
        self.set(i, 1.0)?;
        Ok(self)
    }

    /// Copy the elements of an equal-length vector.
    pub fn copy_from<T: Storage>(&mut self, src: &VectorBase<T>) -> Result<&mut Self> {
        kernel::copy_into(&mut self.strided_mut(), &src.strided())?;
        Ok(self)
    }

    fn apply<'o>(&mut self, op: BinaryOp, other: impl Into<Operand<'o>>) -> Result<&mut Self> {
        match other.into() {
            Operand::Scalar(x) => op.scalar_into(&mut self.strided_mut(), x),
            Operand::Vector(v) => op.elementwise_into(&mut self.strided_mut(), &v.strided())?,
            Operand::Matrix(_) => return Err(StridedError::Coercion("vector")),
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

    /// `self *= other` elementwise; scalars are broadcast.
    pub fn mul_in_place<'o>(&mut self, other: impl Into<Operand<'o>>) -> Result<&mut Self> {
        self.apply(BinaryOp::Mul, other)
    }

    /// `self /= other` elementwise. A scalar divisor scales by its reciprocal,
    /// so dividing by zero yields IEEE infinities and NaN.
    pub fn div_in_place<'o>(&mut self, other: impl Into<Operand<'o>>) -> Result<&mut Self> {
        self.apply(BinaryOp::Div, other)
    }

    /// `self += alpha * other` (AXPY).
    pub fn mul_add<T: Storage>(&mut self, other: &VectorBase<T>, alpha: f64) -> Result<&mut Self> {
        kernel::axpy(&mut self.strided_mut(), &other.strided(), alpha)?;
        Ok(self)
    }

    pub fn reverse(&mut self) -> &mut Self {
        kernel::reverse(&mut self.strided_mut());
        self
    }

    /// Exchange elements `i` and `j`.
    pub fn swap(&mut self, i: isize, j: isize) -> Result<&mut Self> {
        let i = normalize_index(i, self.len())?;
        let j = normalize_index(j, self.len())?;
        self.strided_mut().swap(i, j);
        Ok(self)
    }

    /// Exchange contents with an equal-length vector (BLAS `swap`).
    pub fn swap_with<T: StorageMut>(&mut self, other: &mut VectorBase<T>) -> Result<&mut Self> {
        kernel::swap(&mut self.strided_mut(), &mut other.strided_mut())?;
        Ok(self)
    }

    /// Sort ascending in place. Not stable.
    pub fn sort(&mut self) -> &mut Self {
        kernel::sort(&mut self.strided_mut());
        self
    }

    /// Apply `f` to every element in index order.
    pub fn map_in_place<F: FnMut(f64) -> f64>(&mut self, f: F) -> &mut Self {
        kernel::map_in_place(&mut self.strided_mut(), f);
        self
    }

    /// Overwrite element `i` with `f(i)`.
    pub fn map_indexed<F: FnMut(usize) -> f64>(&mut self, f: F) -> &mut Self {
        kernel::map_indexed(&mut self.strided_mut(), f);
        self
    }

    /// Wrap every element into `[0, upper_bound)`.
    ///
    /// `self` keeps the floor-division remainders; the returned vector holds
    /// the negated quotients, i.e. how many multiples of `upper_bound` were
    /// added to each element. `[-8, 2, 8].wrap(5)` leaves `[2, 2, 3]` and
    /// returns `[2, 0, -1]`.
    pub fn wrap(&mut self, upper_bound: f64) -> Result<Vector> {
        if upper_bound.is_nan() || upper_bound <= 0.0 {
            return Err(StridedError::InvalidBound(upper_bound));
        }
        let mut delta = Vector::new(self.len())?;
        let mut shifts = delta.strided_mut();
        for (x, d) in self.strided_mut().iter_mut().zip(shifts.iter_mut()) {
            let (quotient, remainder) = floor_divmod(*x, upper_bound);
            *x = remainder;
            // `0.0 - q` keeps a zero quotient as +0.0
            *d = 0.0 - quotient;
        }
        Ok(delta)
    }
}

/// Floor division: `x == q * y + r` with `r` in `[0, y)` for positive `y`.
fn floor_divmod(x: f64, y: f64) -> (f64, f64) {
    let mut r = x % y;
    let mut q = ((x - r) / y).round();
    if r < 0.0 {
        r += y;
        q -= 1.0;
    }
    // A tiny negative `x` rounds `r + y` up to exactly `y`.
    if r >= y {
        r = 0.0;
        q += 1.0;
    }
    (q, r)
}

// ============================================================================
// Views (owners only)
// ============================================================================

impl Vector {
    fn view_layout(&self, offset: usize, size: Option<usize>, stride: isize) -> Result<VecLayout> {
        if stride <= 0 {
            return Err(StridedError::InvalidStride(stride));
        }
        let stride = stride as usize;
        if offset >= self.len() {
            return Err(StridedError::out_of_bounds(offset, self.len()));
        }
        let size = size.unwrap_or_else(|| (self.len() - offset).div_ceil(stride));
        let layout = self.layout.subview(offset, size, stride)?;
        debug!(offset, len = size, stride, "vector view");
        Ok(layout)
    }

    /// Window of `size` elements starting at `offset`, `stride` apart.
    ///
    /// When `size` is `None` it is `ceil((len - offset) / stride)`.
    pub fn view(&self, offset: usize, size: Option<usize>, stride: isize) -> Result<VectorView<'_>> {
        let layout = self.view_layout(offset, size, stride)?;
        Ok(VectorBase {
            storage: self.storage.as_slice(),
            layout,
        })
    }

    /// Writable window; see [`Vector::view`].
    pub fn view_mut(
        &mut self,
        offset: usize,
        size: Option<usize>,
        stride: isize,
    ) -> Result<VectorViewMut<'_>> {
        let layout = self.view_layout(offset, size, stride)?;
        Ok(VectorBase {
            storage: self.storage.as_mut_slice(),
            layout,
        })
    }
}

impl<'a> VectorView<'a> {
    /// Views are only taken from the owning vector.
    pub fn view(&self, _offset: usize, _size: Option<usize>, _stride: isize) -> Result<VectorView<'a>> {
        Err(StridedError::ViewOfView)
    }
}

impl<'a> VectorViewMut<'a> {
    /// Views are only taken from the owning vector.
    pub fn view(&self, _offset: usize, _size: Option<usize>, _stride: isize) -> Result<VectorView<'_>> {
        Err(StridedError::ViewOfView)
    }

    /// Views are only taken from the owning vector.
    pub fn view_mut(
        &mut self,
        _offset: usize,
        _size: Option<usize>,
        _stride: isize,
    ) -> Result<VectorViewMut<'_>> {
        Err(StridedError::ViewOfView)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_divmod() {
        assert_eq!(floor_divmod(-8.0, 5.0), (-2.0, 2.0));
        assert_eq!(floor_divmod(8.0, 5.0), (1.0, 3.0));
        assert_eq!(floor_divmod(2.0, 5.0), (0.0, 2.0));
        assert_eq!(floor_divmod(-5.0, 5.0), (-1.0, 0.0));
        assert_eq!(floor_divmod(-1e-20, 5.0), (0.0, 0.0));
    }

    #[test]
    fn test_view_default_size_rounds_up() {
        let v = Vector::from_fn(10, |i| i as f64).unwrap();
        let view = v.view(1, None, 3).unwrap();
        assert_eq!(view.len(), 3);
        assert_eq!(view.to_vec(), vec![1.0, 4.0, 7.0]);
        let view = v.view(0, None, 3).unwrap();
        assert_eq!(view.to_vec(), vec![0.0, 3.0, 6.0, 9.0]);
    }

    #[test]
    fn test_view_argument_errors() {
        let v = Vector::zeros(4).unwrap();
        assert_eq!(v.view(0, None, 0).unwrap_err(), StridedError::InvalidStride(0));
        assert_eq!(v.view(0, None, -2).unwrap_err(), StridedError::InvalidStride(-2));
        assert_eq!(
            v.view(4, None, 1).unwrap_err(),
            StridedError::OutOfBounds { index: 4, len: 4 }
        );
        assert_eq!(v.view(1, Some(4), 1).unwrap_err(), StridedError::OffsetOverflow);
    }

    #[test]
    fn test_set_basis_negative_index() {
        let mut v = Vector::filled(3, 7.0).unwrap();
        v.set_basis(-1).unwrap();
        assert_eq!(v.to_vec(), vec![0.0, 0.0, 1.0]);
    }
}
