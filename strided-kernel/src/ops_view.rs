//! BLAS level-1 style operations on strided vector views.

use strided_view::{StridedVecView, StridedVecViewMut};

use crate::map_view::{ensure_same_len, map_in_place, zip_map_in_place};
use crate::reduce_view::reduce;
use crate::Result;

/// `dest[i] = src[i]`.
pub fn copy_into(dest: &mut StridedVecViewMut<'_>, src: &StridedVecView<'_>) -> Result<()> {
    ensure_same_len(dest.len(), src.len())?;
    if let (Some(d), Some(s)) = (dest.as_contiguous_mut(), src.as_contiguous()) {
        d.copy_from_slice(s);
        return Ok(());
    }
    zip_map_in_place(dest, src, |_, s| s)
}

/// Exchange the contents of two equal-length views.
pub fn swap(a: &mut StridedVecViewMut<'_>, b: &mut StridedVecViewMut<'_>) -> Result<()> {
    ensure_same_len(a.len(), b.len())?;
    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        std::mem::swap(x, y);
    }
    Ok(())
}

/// `dest[i] += src[i]`.
pub fn add(dest: &mut StridedVecViewMut<'_>, src: &StridedVecView<'_>) -> Result<()> {
    zip_map_in_place(dest, src, |d, s| d + s)
}

/// `dest[i] -= src[i]`.
pub fn sub(dest: &mut StridedVecViewMut<'_>, src: &StridedVecView<'_>) -> Result<()> {
    zip_map_in_place(dest, src, |d, s| d - s)
}

/// `dest[i] *= src[i]`.
pub fn mul(dest: &mut StridedVecViewMut<'_>, src: &StridedVecView<'_>) -> Result<()> {
    zip_map_in_place(dest, src, |d, s| d * s)
}

/// `dest[i] /= src[i]`. Zero divisors follow IEEE-754.
pub fn div(dest: &mut StridedVecViewMut<'_>, src: &StridedVecView<'_>) -> Result<()> {
    zip_map_in_place(dest, src, |d, s| d / s)
}

/// `dest[i] += x`.
pub fn add_constant(dest: &mut StridedVecViewMut<'_>, x: f64) {
    map_in_place(dest, |d| d + x);
}

/// `dest[i] *= alpha` (BLAS `scal`).
pub fn scal(dest: &mut StridedVecViewMut<'_>, alpha: f64) {
    map_in_place(dest, |d| alpha * d);
}

/// `dest = alpha * src + dest` (BLAS `axpy`).
pub fn axpy(dest: &mut StridedVecViewMut<'_>, src: &StridedVecView<'_>, alpha: f64) -> Result<()> {
    zip_map_in_place(dest, src, |d, s| alpha * s + d)
}

/// Set every element to `x`.
pub fn fill(dest: &mut StridedVecViewMut<'_>, x: f64) {
    if let Some(slice) = dest.as_contiguous_mut() {
        slice.fill(x);
        return;
    }
    for d in dest.iter_mut() {
        *d = x;
    }
}

/// Reverse the element order in place.
pub fn reverse(dest: &mut StridedVecViewMut<'_>) {
    let n = dest.len();
    for i in 0..n / 2 {
        dest.swap(i, n - 1 - i);
    }
}

/// Dot product: `sum(a[i] * b[i])`.
pub fn dot(a: &StridedVecView<'_>, b: &StridedVecView<'_>) -> Result<f64> {
    ensure_same_len(a.len(), b.len())?;
    if let (Some(sa), Some(sb)) = (a.as_contiguous(), b.as_contiguous()) {
        let mut acc = 0.0;
        for i in 0..sa.len() {
            acc += sa[i] * sb[i];
        }
        return Ok(acc);
    }
    Ok(a.iter().zip(b.iter()).fold(0.0, |acc, (x, y)| acc + x * y))
}

/// Sum of absolute values (BLAS `asum`).
pub fn asum(src: &StridedVecView<'_>) -> f64 {
    reduce(src, f64::abs, |a, b| a + b, 0.0)
}

/// Plain sum of the elements.
pub fn sum(src: &StridedVecView<'_>) -> f64 {
    reduce(src, |x| x, |a, b| a + b, 0.0)
}

/// Euclidean norm (BLAS `nrm2`), scaled to avoid intermediate overflow.
pub fn nrm2(src: &StridedVecView<'_>) -> f64 {
    if src.len() == 1 {
        return src.get(0).abs();
    }
    let mut scale = 0.0_f64;
    let mut ssq = 1.0_f64;
    for x in src.iter() {
        if x != 0.0 {
            let ax = x.abs();
            if scale < ax {
                ssq = 1.0 + ssq * (scale / ax) * (scale / ax);
                scale = ax;
            } else {
                ssq += (ax / scale) * (ax / scale);
            }
        }
    }
    scale * ssq.sqrt()
}
