//! Backend abstraction for GEMM dispatch.
//!
//! This module defines the [`GemmBackend`] trait, marker structs for each
//! backend, and the [`ActiveBackend`] type alias that serves as the single
//! point of backend selection based on Cargo features.

use strided_view::{StridedMatView, StridedMatViewMut};

use crate::gemm_naive::gemm_row;

/// Trait for backends that execute `C = alpha * A * B + beta * C`.
///
/// Callers validate shapes before dispatch: `a` is `m x k`, `b` is `k x n`
/// and `c` is `m x n`.
pub trait GemmBackend {
    /// Short name used in diagnostics.
    const NAME: &'static str;

    fn gemm_into(
        c: &mut StridedMatViewMut<'_>,
        a: &StridedMatView<'_>,
        b: &StridedMatView<'_>,
        alpha: f64,
        beta: f64,
    );
}

// ---------------------------------------------------------------------------
// Marker structs
// ---------------------------------------------------------------------------

/// Sequential GEMM using explicit loops (no external library).
pub struct NaiveBackend;

impl GemmBackend for NaiveBackend {
    const NAME: &'static str = "naive";

    fn gemm_into(
        c: &mut StridedMatViewMut<'_>,
        a: &StridedMatView<'_>,
        b: &StridedMatView<'_>,
        alpha: f64,
        beta: f64,
    ) {
        for (i, c_row) in c.rows_iter_mut().enumerate() {
            gemm_row(c_row, i, a, b, alpha, beta);
        }
    }
}

/// GEMM that partitions the rows of `C` across the rayon thread pool once the
/// work exceeds [`KernelConfig::par_threshold`](crate::KernelConfig).
#[cfg(feature = "parallel")]
pub struct RayonBackend;

#[cfg(feature = "parallel")]
impl GemmBackend for RayonBackend {
    const NAME: &'static str = "rayon";

    fn gemm_into(
        c: &mut StridedMatViewMut<'_>,
        a: &StridedMatView<'_>,
        b: &StridedMatView<'_>,
        alpha: f64,
        beta: f64,
    ) {
        use rayon::prelude::*;

        let work = a.rows() * a.cols() * b.cols();
        if !crate::KernelConfig::global().use_parallel(work) {
            NaiveBackend::gemm_into(c, a, b, alpha, beta);
            return;
        }
        let rows: Vec<&mut [f64]> = c.rows_iter_mut().collect();
        rows.into_par_iter()
            .enumerate()
            .for_each(|(i, c_row)| gemm_row(c_row, i, a, b, alpha, beta));
    }
}

// ---------------------------------------------------------------------------
// ActiveBackend type alias -- the SINGLE point of backend selection
// ---------------------------------------------------------------------------

/// The active GEMM backend, selected by Cargo features.
///
/// - `parallel` -> [`RayonBackend`]
/// - no backend feature -> [`NaiveBackend`]
#[cfg(feature = "parallel")]
pub type ActiveBackend = RayonBackend;

#[cfg(not(feature = "parallel"))]
pub type ActiveBackend = NaiveBackend;
