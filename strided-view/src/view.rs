//! Borrowed strided windows over `f64` storage.
//!
//! These are the types the numeric kernels operate on:
//!
//! - [`StridedVecView`]: Shared 1-D window (`Copy`)
//! - [`StridedVecViewMut`]: Exclusive 1-D window
//! - [`StridedMatView`]: Shared row-major 2-D window (`Copy`)
//! - [`StridedMatViewMut`]: Exclusive row-major 2-D window
//!
//! Every constructor validates the layout against the borrowed slice, so
//! element access afterwards never leaves the slice.

use crate::layout::{MatLayout, VecLayout};
use crate::{Result, StridedError};

// ============================================================================
// Validation helpers
// ============================================================================

fn validate_vec(len: usize, layout: &VecLayout) -> Result<()> {
    if layout.is_empty() {
        return Err(StridedError::InvalidSize);
    }
    if layout.last_position() >= len {
        return Err(StridedError::OffsetOverflow);
    }
    Ok(())
}

fn validate_mat(len: usize, layout: &MatLayout) -> Result<()> {
    if layout.is_empty() {
        return Err(StridedError::InvalidSize);
    }
    if layout.last_position() >= len {
        return Err(StridedError::OffsetOverflow);
    }
    Ok(())
}

// ============================================================================
// StridedVecView
// ============================================================================

/// Shared 1-D strided window.
#[derive(Debug, Clone, Copy)]
pub struct StridedVecView<'a> {
    data: &'a [f64],
    layout: VecLayout,
}

impl<'a> StridedVecView<'a> {
    /// Create a view, checking that `layout` fits inside `data`.
    pub fn new(data: &'a [f64], layout: VecLayout) -> Result<Self> {
        validate_vec(data.len(), &layout)?;
        Ok(Self { data, layout })
    }

    /// Wrap a layout that was already validated against `data`.
    ///
    /// Element access panics if the layout does not fit.
    #[inline]
    pub fn from_parts(data: &'a [f64], layout: VecLayout) -> Self {
        Self { data, layout }
    }

    /// Unit-stride view over a whole slice.
    pub fn contiguous(data: &'a [f64]) -> Result<Self> {
        Self::new(data, VecLayout::contiguous(data.len()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layout.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.layout.stride()
    }

    #[inline]
    pub fn layout(&self) -> VecLayout {
        self.layout
    }

    /// Element `i`. `i` must be below `len()`.
    #[inline]
    pub fn get(&self, i: usize) -> f64 {
        self.data[self.layout.position(i)]
    }

    /// Elements in logical order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = f64> + ExactSizeIterator + 'a {
        let data: &'a [f64] = self.data;
        data[self.layout.offset()..=self.layout.last_position()]
            .iter()
            .step_by(self.layout.stride())
            .copied()
    }

    /// The elements as a plain slice when the stride is 1.
    pub fn as_contiguous(&self) -> Option<&'a [f64]> {
        let data: &'a [f64] = self.data;
        if self.layout.is_contiguous() {
            Some(&data[self.layout.offset()..=self.layout.last_position()])
        } else {
            None
        }
    }

    /// Narrower window; arguments are relative to this view.
    pub fn subview(&self, offset: usize, len: usize, stride: usize) -> Result<Self> {
        Ok(Self {
            data: self.data,
            layout: self.layout.subview(offset, len, stride)?,
        })
    }
}

// ============================================================================
// StridedVecViewMut
// ============================================================================

/// Exclusive 1-D strided window.
#[derive(Debug)]
pub struct StridedVecViewMut<'a> {
    data: &'a mut [f64],
    layout: VecLayout,
}

impl<'a> StridedVecViewMut<'a> {
    /// Create a view, checking that `layout` fits inside `data`.
    pub fn new(data: &'a mut [f64], layout: VecLayout) -> Result<Self> {
        validate_vec(data.len(), &layout)?;
        Ok(Self { data, layout })
    }

    /// Wrap a layout that was already validated against `data`.
    ///
    /// Element access panics if the layout does not fit.
    #[inline]
    pub fn from_parts(data: &'a mut [f64], layout: VecLayout) -> Self {
        Self { data, layout }
    }

    /// Unit-stride view over a whole slice.
    pub fn contiguous(data: &'a mut [f64]) -> Result<Self> {
        let layout = VecLayout::contiguous(data.len());
        Self::new(data, layout)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layout.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.layout.stride()
    }

    #[inline]
    pub fn layout(&self) -> VecLayout {
        self.layout
    }

    #[inline]
    pub fn get(&self, i: usize) -> f64 {
        self.data[self.layout.position(i)]
    }

    #[inline]
    pub fn set(&mut self, i: usize, value: f64) {
        let pos = self.layout.position(i);
        self.data[pos] = value;
    }

    /// Exchange elements `i` and `j`.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.data
            .swap(self.layout.position(i), self.layout.position(j));
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = f64> + ExactSizeIterator + '_ {
        self.as_view().iter()
    }

    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut f64> + ExactSizeIterator + '_ {
        let stride = self.layout.stride();
        let range = self.layout.offset()..=self.layout.last_position();
        self.data[range].iter_mut().step_by(stride)
    }

    /// The elements as a plain mutable slice when the stride is 1.
    pub fn as_contiguous_mut(&mut self) -> Option<&mut [f64]> {
        if self.layout.is_contiguous() {
            let range = self.layout.offset()..=self.layout.last_position();
            Some(&mut self.data[range])
        } else {
            None
        }
    }

    /// Shared view of the same window.
    #[inline]
    pub fn as_view(&self) -> StridedVecView<'_> {
        StridedVecView {
            data: &*self.data,
            layout: self.layout,
        }
    }

    /// Shorter-lived exclusive view of the same window.
    #[inline]
    pub fn reborrow(&mut self) -> StridedVecViewMut<'_> {
        StridedVecViewMut {
            data: &mut *self.data,
            layout: self.layout,
        }
    }
}

// ============================================================================
// StridedMatView
// ============================================================================

/// Shared row-major 2-D window.
#[derive(Debug, Clone, Copy)]
pub struct StridedMatView<'a> {
    data: &'a [f64],
    layout: MatLayout,
}

impl<'a> StridedMatView<'a> {
    /// Create a view, checking that `layout` fits inside `data`.
    pub fn new(data: &'a [f64], layout: MatLayout) -> Result<Self> {
        validate_mat(data.len(), &layout)?;
        Ok(Self { data, layout })
    }

    /// Wrap a layout that was already validated against `data`.
    ///
    /// Element access panics if the layout does not fit.
    #[inline]
    pub fn from_parts(data: &'a [f64], layout: MatLayout) -> Self {
        Self { data, layout }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.layout.cols()
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.layout.rows(), self.layout.cols())
    }

    #[inline]
    pub fn layout(&self) -> MatLayout {
        self.layout
    }

    /// Element `(i, j)`. Indices must be in range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[self.layout.position(i, j)]
    }

    /// Row `i` as a contiguous slice.
    #[inline]
    pub fn row_slice(&self, i: usize) -> &'a [f64] {
        let data: &'a [f64] = self.data;
        &data[self.layout.row_range(i)]
    }

    /// Row `i` as a 1-D view.
    pub fn row(&self, i: usize) -> Result<StridedVecView<'a>> {
        StridedVecView::new(self.data, self.layout.row(i, 0, self.cols())?)
    }

    /// Column `j` as a 1-D view with stride `tda`.
    pub fn column(&self, j: usize) -> Result<StridedVecView<'a>> {
        StridedVecView::new(self.data, self.layout.column(j, 0, self.rows())?)
    }

    /// Rows as contiguous slices, top to bottom.
    pub fn rows_iter(&self) -> impl ExactSizeIterator<Item = &'a [f64]> + 'a {
        let data = self.data;
        let layout = self.layout;
        (0..layout.rows()).map(move |i| &data[layout.row_range(i)])
    }

    /// Elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + 'a {
        self.rows_iter().flat_map(|row| row.iter().copied())
    }

    /// Rectangular sub-window.
    pub fn submatrix(&self, x: usize, y: usize, rows: usize, cols: usize) -> Result<Self> {
        Ok(Self {
            data: self.data,
            layout: self.layout.submatrix(x, y, rows, cols)?,
        })
    }
}

// ============================================================================
// StridedMatViewMut
// ============================================================================

/// Exclusive row-major 2-D window.
#[derive(Debug)]
pub struct StridedMatViewMut<'a> {
    data: &'a mut [f64],
    layout: MatLayout,
}

impl<'a> StridedMatViewMut<'a> {
    /// Create a view, checking that `layout` fits inside `data`.
    pub fn new(data: &'a mut [f64], layout: MatLayout) -> Result<Self> {
        validate_mat(data.len(), &layout)?;
        Ok(Self { data, layout })
    }

    /// Wrap a layout that was already validated against `data`.
    ///
    /// Element access panics if the layout does not fit.
    #[inline]
    pub fn from_parts(data: &'a mut [f64], layout: MatLayout) -> Self {
        Self { data, layout }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.layout.cols()
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.layout.rows(), self.layout.cols())
    }

    #[inline]
    pub fn layout(&self) -> MatLayout {
        self.layout
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[self.layout.position(i, j)]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let pos = self.layout.position(i, j);
        self.data[pos] = value;
    }

    /// Exchange elements `(i1, j1)` and `(i2, j2)`.
    #[inline]
    pub fn swap(&mut self, (i1, j1): (usize, usize), (i2, j2): (usize, usize)) {
        let a = self.layout.position(i1, j1);
        let b = self.layout.position(i2, j2);
        self.data.swap(a, b);
    }

    #[inline]
    pub fn row_slice(&self, i: usize) -> &[f64] {
        &self.data[self.layout.row_range(i)]
    }

    #[inline]
    pub fn row_slice_mut(&mut self, i: usize) -> &mut [f64] {
        let range = self.layout.row_range(i);
        &mut self.data[range]
    }

    /// Row `i` as an exclusive 1-D view.
    pub fn row_mut(&mut self, i: usize) -> Result<StridedVecViewMut<'_>> {
        let layout = self.layout.row(i, 0, self.cols())?;
        StridedVecViewMut::new(&mut *self.data, layout)
    }

    /// Column `j` as an exclusive 1-D view.
    pub fn column_mut(&mut self, j: usize) -> Result<StridedVecViewMut<'_>> {
        let layout = self.layout.column(j, 0, self.rows())?;
        StridedVecViewMut::new(&mut *self.data, layout)
    }

    /// Rows as mutable contiguous slices, top to bottom.
    pub fn rows_iter_mut(&mut self) -> impl Iterator<Item = &mut [f64]> + '_ {
        let (offset, rows, cols, tda) = (
            self.layout.offset(),
            self.layout.rows(),
            self.layout.cols(),
            self.layout.tda(),
        );
        self.data[offset..]
            .chunks_mut(tda)
            .take(rows)
            .map(move |chunk| &mut chunk[..cols])
    }

    /// Elements in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut f64> + '_ {
        self.rows_iter_mut().flat_map(|row| row.iter_mut())
    }

    #[inline]
    pub fn as_view(&self) -> StridedMatView<'_> {
        StridedMatView {
            data: &*self.data,
            layout: self.layout,
        }
    }

    #[inline]
    pub fn reborrow(&mut self) -> StridedMatViewMut<'_> {
        StridedMatViewMut {
            data: &mut *self.data,
            layout: self.layout,
        }
    }
}
