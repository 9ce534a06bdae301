//! Loop GEMM kernel shared by every backend.

use strided_view::{StridedMatView, StridedMatViewMut};

/// Compute row `i` of `C = alpha * A * B + beta * C` into `c_row`.
///
/// Uses the i-k-j loop order so the innermost loop walks contiguous rows of
/// `B` and `C`. A `beta` of zero discards the previous contents of `c_row`,
/// including NaN.
pub(crate) fn gemm_row(
    c_row: &mut [f64],
    i: usize,
    a: &StridedMatView<'_>,
    b: &StridedMatView<'_>,
    alpha: f64,
    beta: f64,
) {
    if beta == 0.0 {
        c_row.fill(0.0);
    } else if beta != 1.0 {
        for c in c_row.iter_mut() {
            *c *= beta;
        }
    }
    let a_row = a.row_slice(i);
    for (k, &a_ik) in a_row.iter().enumerate() {
        let scaled = alpha * a_ik;
        for (c, &b_kj) in c_row.iter_mut().zip(b.row_slice(k)) {
            *c += scaled * b_kj;
        }
    }
}

/// Transpose `src` into `dest`, which must already be `cols x rows`.
pub(crate) fn transpose_into(dest: &mut StridedMatViewMut<'_>, src: &StridedMatView<'_>) {
    for (j, d_row) in dest.rows_iter_mut().enumerate() {
        for (i, d) in d_row.iter_mut().enumerate() {
            *d = src.get(i, j);
        }
    }
}
