//! Numeric kernels over strided `f64` views.
//!
//! This crate provides the arithmetic behind the strided-linalg containers:
//!
//! - BLAS level 1: [`dot`], [`nrm2`], [`asum`], [`axpy`], [`scal`],
//!   [`add_constant`] and the elementwise [`add`]/[`sub`]/[`mul`]/[`div`]
//! - BLAS level 2/3: [`gemv`], [`gemm`] through a [`GemmBackend`]
//! - Linear scans with NaN propagation: [`min`], [`max`], [`min_max_index`], ...
//! - Sorting: [`sort`]
//! - Statistics: [`stats`] (moments, covariance, correlation, line fitting)
//!
//! # Features
//!
//! - `parallel`: GEMM splits output rows across the rayon thread pool once the
//!   work exceeds [`KernelConfig::par_threshold`]
//!
//! # Example
//!
//! ```rust
//! use strided_kernel::{axpy, dot};
//! use strided_view::{StridedVecView, StridedVecViewMut};
//!
//! let x = [1.0, 2.0, 3.0];
//! let mut y = vec![1.0, 1.0, 1.0];
//! let x_view = StridedVecView::contiguous(&x).unwrap();
//! axpy(&mut StridedVecViewMut::contiguous(&mut y).unwrap(), &x_view, 2.0).unwrap();
//! assert_eq!(y, vec![3.0, 5.0, 7.0]);
//!
//! let y_view = StridedVecView::contiguous(&y).unwrap();
//! assert_eq!(dot(&x_view, &y_view).unwrap(), 34.0);
//! ```

pub mod backend;
mod gemm_naive;
mod linalg;
mod map_view;
mod ops_view;
mod reduce_view;
mod sort;
pub mod stats;
mod threading;

pub use strided_view::{Result, StridedError};

pub use backend::{ActiveBackend, GemmBackend, NaiveBackend};
#[cfg(feature = "parallel")]
pub use backend::RayonBackend;
pub use linalg::{
    gemm, gemm_with_backend, gemv, swap_columns, swap_row_column, swap_rows, transpose_in_place,
    transpose_into,
};
pub use map_view::{
    map_in_place, map_indexed, map_into, mat_map_in_place, mat_map_indexed, mat_zip_map_in_place,
    zip_map_in_place,
};
pub use ops_view::{
    add, add_constant, asum, axpy, copy_into, div, dot, fill, mul, nrm2, reverse, scal, sub, sum,
    swap,
};
pub use reduce_view::{all, max, max_index, min, min_index, min_max, min_max_index, reduce};
pub use sort::sort;
pub use stats::LinearFit;
pub use threading::{KernelConfig, MINTHREADLENGTH, PAR_THRESHOLD_ENV};
