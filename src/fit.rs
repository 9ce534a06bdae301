//! Least-squares line fitting.

use strided_kernel::stats;
use strided_view::Storage;

pub use strided_kernel::LinearFit;

use crate::vector::VectorBase;
use crate::Result;

/// Fit `y = c0 + c1 * x`. `x` and `y` must have the same length.
pub fn linear<S: Storage, T: Storage>(x: &VectorBase<S>, y: &VectorBase<T>) -> Result<LinearFit> {
    stats::fit_linear(&x.strided(), &y.strided())
}
