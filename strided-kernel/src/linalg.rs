//! BLAS level-2/3 entry points and row/column permutations of matrix views.

use strided_view::{StridedMatView, StridedMatViewMut, StridedVecView, StridedVecViewMut};
use tracing::debug;

use crate::backend::{ActiveBackend, GemmBackend};
use crate::gemm_naive;
use crate::{Result, StridedError};

fn ensure_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(StridedError::out_of_bounds(index, len));
    }
    Ok(())
}

fn ensure_square(rows: usize, cols: usize) -> Result<()> {
    if rows != cols {
        return Err(StridedError::NonSquare { rows, cols });
    }
    Ok(())
}

/// `C = alpha * A * B + beta * C` on the active backend.
pub fn gemm(
    c: &mut StridedMatViewMut<'_>,
    a: &StridedMatView<'_>,
    b: &StridedMatView<'_>,
    alpha: f64,
    beta: f64,
) -> Result<()> {
    gemm_with_backend::<ActiveBackend>(c, a, b, alpha, beta)
}

/// `C = alpha * A * B + beta * C` on an explicit backend.
pub fn gemm_with_backend<B: GemmBackend>(
    c: &mut StridedMatViewMut<'_>,
    a: &StridedMatView<'_>,
    b: &StridedMatView<'_>,
    alpha: f64,
    beta: f64,
) -> Result<()> {
    if a.cols() != b.rows() {
        return Err(StridedError::ShapeMismatch(
            vec![a.rows(), a.cols()],
            vec![b.rows(), b.cols()],
        ));
    }
    if c.shape() != (a.rows(), b.cols()) {
        return Err(StridedError::ShapeMismatch(
            vec![c.rows(), c.cols()],
            vec![a.rows(), b.cols()],
        ));
    }
    debug!(
        backend = B::NAME,
        m = a.rows(),
        n = b.cols(),
        k = a.cols(),
        "gemm dispatch"
    );
    B::gemm_into(c, a, b, alpha, beta);
    Ok(())
}

/// `y = alpha * A * x + beta * y`.
pub fn gemv(
    y: &mut StridedVecViewMut<'_>,
    a: &StridedMatView<'_>,
    x: &StridedVecView<'_>,
    alpha: f64,
    beta: f64,
) -> Result<()> {
    if a.cols() != x.len() {
        return Err(StridedError::SizeMismatch(a.cols(), x.len()));
    }
    if a.rows() != y.len() {
        return Err(StridedError::SizeMismatch(a.rows(), y.len()));
    }
    for (a_row, y_i) in a.rows_iter().zip(y.iter_mut()) {
        let acc = a_row
            .iter()
            .zip(x.iter())
            .fold(0.0, |acc, (a_ij, x_j)| acc + a_ij * x_j);
        *y_i = if beta == 0.0 {
            alpha * acc
        } else {
            alpha * acc + beta * *y_i
        };
    }
    Ok(())
}

/// Write the transpose of `src` into `dest`.
pub fn transpose_into(dest: &mut StridedMatViewMut<'_>, src: &StridedMatView<'_>) -> Result<()> {
    if dest.shape() != (src.cols(), src.rows()) {
        return Err(StridedError::ShapeMismatch(
            vec![dest.rows(), dest.cols()],
            vec![src.cols(), src.rows()],
        ));
    }
    gemm_naive::transpose_into(dest, src);
    Ok(())
}

/// Transpose a square matrix in place.
pub fn transpose_in_place(m: &mut StridedMatViewMut<'_>) -> Result<()> {
    ensure_square(m.rows(), m.cols())?;
    let n = m.rows();
    for i in 0..n {
        for j in i + 1..n {
            m.swap((i, j), (j, i));
        }
    }
    Ok(())
}

/// Exchange rows `i` and `j`.
pub fn swap_rows(m: &mut StridedMatViewMut<'_>, i: usize, j: usize) -> Result<()> {
    ensure_index(i, m.rows())?;
    ensure_index(j, m.rows())?;
    if i != j {
        for k in 0..m.cols() {
            m.swap((i, k), (j, k));
        }
    }
    Ok(())
}

/// Exchange columns `i` and `j`.
pub fn swap_columns(m: &mut StridedMatViewMut<'_>, i: usize, j: usize) -> Result<()> {
    ensure_index(i, m.cols())?;
    ensure_index(j, m.cols())?;
    if i != j {
        for k in 0..m.rows() {
            m.swap((k, i), (k, j));
        }
    }
    Ok(())
}

/// Exchange row `i` with column `j` of a square matrix.
///
/// Element `(i, p)` trades places with `(p, j)` for each `p` in order, so the
/// element at the intersection takes part in two exchanges.
pub fn swap_row_column(m: &mut StridedMatViewMut<'_>, i: usize, j: usize) -> Result<()> {
    ensure_square(m.rows(), m.cols())?;
    ensure_index(i, m.rows())?;
    ensure_index(j, m.cols())?;
    for p in 0..m.rows() {
        m.swap((i, p), (p, j));
    }
    Ok(())
}
