//! Ascending in-place sort of a strided vector view.

use strided_view::StridedVecViewMut;

/// Sort ascending using IEEE total order. Not stable.
pub fn sort(dest: &mut StridedVecViewMut<'_>) {
    if let Some(slice) = dest.as_contiguous_mut() {
        slice.sort_unstable_by(f64::total_cmp);
        return;
    }
    let mut scratch: Vec<f64> = dest.iter().collect();
    scratch.sort_unstable_by(f64::total_cmp);
    for (d, s) in dest.iter_mut().zip(scratch) {
        *d = s;
    }
}
