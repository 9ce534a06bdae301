//! Elementwise map kernels on strided views.
//!
//! Each kernel takes a contiguous slice fast path when every operand has unit
//! stride, so LLVM can auto-vectorize the inner loop, and falls back to
//! strided iteration otherwise.

use strided_view::{StridedMatView, StridedMatViewMut, StridedVecView, StridedVecViewMut};

use crate::{Result, StridedError};

#[inline]
pub(crate) fn ensure_same_len(a: usize, b: usize) -> Result<()> {
    if a != b {
        return Err(StridedError::SizeMismatch(a, b));
    }
    Ok(())
}

#[inline]
pub(crate) fn ensure_same_shape(a: (usize, usize), b: (usize, usize)) -> Result<()> {
    if a != b {
        return Err(StridedError::ShapeMismatch(vec![a.0, a.1], vec![b.0, b.1]));
    }
    Ok(())
}

/// Apply `f` to every element of `dest` in index order.
pub fn map_in_place<F: FnMut(f64) -> f64>(dest: &mut StridedVecViewMut<'_>, mut f: F) {
    if let Some(slice) = dest.as_contiguous_mut() {
        for x in slice.iter_mut() {
            *x = f(*x);
        }
        return;
    }
    for x in dest.iter_mut() {
        *x = f(*x);
    }
}

/// Overwrite element `i` of `dest` with `f(i)`.
pub fn map_indexed<F: FnMut(usize) -> f64>(dest: &mut StridedVecViewMut<'_>, mut f: F) {
    for (i, x) in dest.iter_mut().enumerate() {
        *x = f(i);
    }
}

/// `dest[i] = f(src[i])`.
pub fn map_into<F: FnMut(f64) -> f64>(
    dest: &mut StridedVecViewMut<'_>,
    src: &StridedVecView<'_>,
    f: F,
) -> Result<()> {
    let mut f = f;
    zip_map_in_place(dest, src, |_, s| f(s))
}

/// `dest[i] = f(dest[i], src[i])`.
pub fn zip_map_in_place<F: FnMut(f64, f64) -> f64>(
    dest: &mut StridedVecViewMut<'_>,
    src: &StridedVecView<'_>,
    mut f: F,
) -> Result<()> {
    ensure_same_len(dest.len(), src.len())?;
    if let (Some(d), Some(s)) = (dest.as_contiguous_mut(), src.as_contiguous()) {
        for (d, &s) in d.iter_mut().zip(s) {
            *d = f(*d, s);
        }
        return Ok(());
    }
    for (d, s) in dest.iter_mut().zip(src.iter()) {
        *d = f(*d, s);
    }
    Ok(())
}

/// Apply `f` to every element of a matrix window, row by row.
pub fn mat_map_in_place<F: FnMut(f64) -> f64>(dest: &mut StridedMatViewMut<'_>, mut f: F) {
    for row in dest.rows_iter_mut() {
        for x in row.iter_mut() {
            *x = f(*x);
        }
    }
}

/// Overwrite element `(i, j)` with `f(i, j, old)`.
pub fn mat_map_indexed<F: FnMut(usize, usize, f64) -> f64>(
    dest: &mut StridedMatViewMut<'_>,
    mut f: F,
) {
    for (i, row) in dest.rows_iter_mut().enumerate() {
        for (j, x) in row.iter_mut().enumerate() {
            *x = f(i, j, *x);
        }
    }
}

/// `dest[i, j] = f(dest[i, j], src[i, j])`; shapes must match.
pub fn mat_zip_map_in_place<F: FnMut(f64, f64) -> f64>(
    dest: &mut StridedMatViewMut<'_>,
    src: &StridedMatView<'_>,
    mut f: F,
) -> Result<()> {
    ensure_same_shape(dest.shape(), src.shape())?;
    for (d_row, s_row) in dest.rows_iter_mut().zip(src.rows_iter()) {
        for (d, &s) in d_row.iter_mut().zip(s_row) {
            *d = f(*d, s);
        }
    }
    Ok(())
}
