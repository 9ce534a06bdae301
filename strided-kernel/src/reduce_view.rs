//! Reductions and linear scans over element sequences.
//!
//! Scans accept any iterator of `f64` so the same code serves strided vectors
//! and row-major matrix walks. A NaN element wins: `min`/`max` return it and
//! the index variants report the position of the first NaN.
//!
//! Containers in this workspace are never empty; for an empty sequence the
//! value scans return NaN and the index scans return 0.

use strided_view::StridedVecView;

/// Map-reduce over a vector view.
pub fn reduce<M, R>(src: &StridedVecView<'_>, map_fn: M, reduce_fn: R, init: f64) -> f64
where
    M: Fn(f64) -> f64,
    R: Fn(f64, f64) -> f64,
{
    src.iter().fold(init, |acc, x| reduce_fn(acc, map_fn(x)))
}

/// Smallest element.
pub fn min<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let mut iter = values.into_iter();
    let Some(mut best) = iter.next() else {
        return f64::NAN;
    };
    if best.is_nan() {
        return best;
    }
    for x in iter {
        if x < best {
            best = x;
        }
        if x.is_nan() {
            return x;
        }
    }
    best
}

/// Largest element.
pub fn max<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let mut iter = values.into_iter();
    let Some(mut best) = iter.next() else {
        return f64::NAN;
    };
    if best.is_nan() {
        return best;
    }
    for x in iter {
        if x > best {
            best = x;
        }
        if x.is_nan() {
            return x;
        }
    }
    best
}

/// Smallest and largest element in one pass.
pub fn min_max<I: IntoIterator<Item = f64>>(values: I) -> (f64, f64) {
    let mut iter = values.into_iter();
    let Some(first) = iter.next() else {
        return (f64::NAN, f64::NAN);
    };
    if first.is_nan() {
        return (first, first);
    }
    let (mut lo, mut hi) = (first, first);
    for x in iter {
        if x < lo {
            lo = x;
        }
        if x > hi {
            hi = x;
        }
        if x.is_nan() {
            return (x, x);
        }
    }
    (lo, hi)
}

/// Position of the first smallest element.
pub fn min_index<I: IntoIterator<Item = f64>>(values: I) -> usize {
    min_max_index(values).0
}

/// Position of the first largest element.
pub fn max_index<I: IntoIterator<Item = f64>>(values: I) -> usize {
    min_max_index(values).1
}

/// Positions of the first smallest and first largest element.
pub fn min_max_index<I: IntoIterator<Item = f64>>(values: I) -> (usize, usize) {
    let mut iter = values.into_iter().enumerate();
    let Some((_, first)) = iter.next() else {
        return (0, 0);
    };
    if first.is_nan() {
        return (0, 0);
    }
    let (mut lo, mut hi) = (first, first);
    let (mut ilo, mut ihi) = (0, 0);
    for (i, x) in iter {
        if x < lo {
            lo = x;
            ilo = i;
        }
        if x > hi {
            hi = x;
            ihi = i;
        }
        if x.is_nan() {
            return (i, i);
        }
    }
    (ilo, ihi)
}

/// True iff `pred` holds for every element.
pub fn all<I, P>(values: I, pred: P) -> bool
where
    I: IntoIterator<Item = f64>,
    P: Fn(f64) -> bool,
{
    values.into_iter().all(pred)
}
