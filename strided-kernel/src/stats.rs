//! Moment statistics and least-squares line fitting over strided views.
//!
//! All accumulations use running means (`m += (x - m) / (i + 1)`), which keeps
//! intermediate values on the scale of the data. Sample estimators with an
//! `n - 1` divisor yield NaN for a single element; that is IEEE propagation,
//! not an error.

use strided_view::StridedVecView;

use crate::map_view::ensure_same_len;
use crate::Result;

/// Arithmetic mean.
pub fn mean(data: &StridedVecView<'_>) -> f64 {
    let mut mean = 0.0;
    for (i, x) in data.iter().enumerate() {
        mean += (x - mean) / (i + 1) as f64;
    }
    mean
}

/// Mean squared deviation from `mean` (divisor `n`).
fn mean_square_deviation(data: &StridedVecView<'_>, mean: f64) -> f64 {
    let mut variance = 0.0;
    for (i, x) in data.iter().enumerate() {
        let delta = x - mean;
        variance += (delta * delta - variance) / (i + 1) as f64;
    }
    variance
}

/// Sample variance about `mean` (divisor `n - 1`).
pub fn variance_m(data: &StridedVecView<'_>, mean: f64) -> f64 {
    let n = data.len() as f64;
    mean_square_deviation(data, mean) * (n / (n - 1.0))
}

/// Sample variance.
pub fn variance(data: &StridedVecView<'_>) -> f64 {
    variance_m(data, mean(data))
}

/// Variance about a known population mean (divisor `n`).
pub fn variance_with_fixed_mean(data: &StridedVecView<'_>, mean: f64) -> f64 {
    mean_square_deviation(data, mean)
}

pub fn sd_m(data: &StridedVecView<'_>, mean: f64) -> f64 {
    variance_m(data, mean).sqrt()
}

pub fn sd(data: &StridedVecView<'_>) -> f64 {
    sd_m(data, mean(data))
}

pub fn sd_with_fixed_mean(data: &StridedVecView<'_>, mean: f64) -> f64 {
    variance_with_fixed_mean(data, mean).sqrt()
}

/// Total sum of squares about `mean`.
pub fn tss_m(data: &StridedVecView<'_>, mean: f64) -> f64 {
    data.iter().fold(0.0, |tss, x| {
        let delta = x - mean;
        tss + delta * delta
    })
}

/// Mean absolute deviation about `mean`.
pub fn absdev_m(data: &StridedVecView<'_>, mean: f64) -> f64 {
    let sum = data.iter().fold(0.0, |sum, x| sum + (x - mean).abs());
    sum / data.len() as f64
}

/// Skewness given the mean and standard deviation.
pub fn skew_m_sd(data: &StridedVecView<'_>, mean: f64, sd: f64) -> f64 {
    let mut skew = 0.0;
    for (i, x) in data.iter().enumerate() {
        let z = (x - mean) / sd;
        skew += (z * z * z - skew) / (i + 1) as f64;
    }
    skew
}

/// Excess kurtosis (normal distribution = 0) given the mean and standard deviation.
pub fn kurtosis_m_sd(data: &StridedVecView<'_>, mean: f64, sd: f64) -> f64 {
    let mut avg = 0.0;
    for (i, x) in data.iter().enumerate() {
        let z = (x - mean) / sd;
        avg += (z * z * z * z - avg) / (i + 1) as f64;
    }
    avg - 3.0
}

/// Lag-1 autocorrelation about `mean`.
pub fn lag1_autocorrelation_m(data: &StridedVecView<'_>, mean: f64) -> f64 {
    let mut iter = data.iter();
    let Some(first) = iter.next() else {
        return f64::NAN;
    };
    let mut prev = first - mean;
    let mut q = 0.0;
    let mut v = prev * prev;
    for (i, x) in iter.enumerate() {
        let delta = x - mean;
        let count = (i + 2) as f64;
        q += (prev * delta - q) / count;
        v += (delta * delta - v) / count;
        prev = delta;
    }
    q / v
}

/// Sample covariance about the given means.
pub fn covariance_m(
    a: &StridedVecView<'_>,
    b: &StridedVecView<'_>,
    mean_a: f64,
    mean_b: f64,
) -> Result<f64> {
    ensure_same_len(a.len(), b.len())?;
    let mut covariance = 0.0;
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let delta_x = x - mean_a;
        let delta_y = y - mean_b;
        covariance += (delta_x * delta_y - covariance) / (i + 1) as f64;
    }
    let n = a.len() as f64;
    Ok(covariance * (n / (n - 1.0)))
}

/// Sample covariance.
pub fn covariance(a: &StridedVecView<'_>, b: &StridedVecView<'_>) -> Result<f64> {
    covariance_m(a, b, mean(a), mean(b))
}

/// Pearson correlation coefficient.
pub fn correlation(a: &StridedVecView<'_>, b: &StridedVecView<'_>) -> Result<f64> {
    ensure_same_len(a.len(), b.len())?;
    let mut pairs = a.iter().zip(b.iter());
    let Some((x0, y0)) = pairs.next() else {
        return Ok(f64::NAN);
    };
    let (mut mean_x, mut mean_y) = (x0, y0);
    let (mut sum_xsq, mut sum_ysq, mut sum_cross) = (0.0, 0.0, 0.0);
    for (i, (x, y)) in pairs.enumerate() {
        let i = (i + 1) as f64;
        let ratio = i / (i + 1.0);
        let delta_x = x - mean_x;
        let delta_y = y - mean_y;
        sum_xsq += delta_x * delta_x * ratio;
        sum_ysq += delta_y * delta_y * ratio;
        sum_cross += delta_x * delta_y * ratio;
        mean_x += delta_x / (i + 1.0);
        mean_y += delta_y / (i + 1.0);
    }
    Ok(sum_cross / (sum_xsq.sqrt() * sum_ysq.sqrt()))
}

/// Result of fitting `y = c0 + c1 * x` by ordinary least squares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Intercept.
    pub c0: f64,
    /// Slope.
    pub c1: f64,
    pub cov00: f64,
    pub cov01: f64,
    pub cov11: f64,
    /// Residual sum of squares.
    pub sumsq: f64,
}

impl LinearFit {
    /// Evaluate the fitted line at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        self.c0 + self.c1 * x
    }
}

/// Least-squares straight-line fit of `y` against `x`.
///
/// The covariance terms use the residual variance `sumsq / (n - 2)`, so they
/// are not finite for fewer than three points.
pub fn fit_linear(x: &StridedVecView<'_>, y: &StridedVecView<'_>) -> Result<LinearFit> {
    ensure_same_len(x.len(), y.len())?;
    let n = x.len() as f64;

    let (mut m_x, mut m_y) = (0.0, 0.0);
    for (i, (xi, yi)) in x.iter().zip(y.iter()).enumerate() {
        let count = (i + 1) as f64;
        m_x += (xi - m_x) / count;
        m_y += (yi - m_y) / count;
    }

    let (mut m_dx2, mut m_dxdy) = (0.0, 0.0);
    for (i, (xi, yi)) in x.iter().zip(y.iter()).enumerate() {
        let count = (i + 1) as f64;
        let dx = xi - m_x;
        let dy = yi - m_y;
        m_dx2 += (dx * dx - m_dx2) / count;
        m_dxdy += (dx * dy - m_dxdy) / count;
    }

    let c1 = m_dxdy / m_dx2;
    let c0 = m_y - m_x * c1;

    let d2 = x.iter().zip(y.iter()).fold(0.0, |d2, (xi, yi)| {
        let d = (yi - m_y) - c1 * (xi - m_x);
        d2 + d * d
    });
    let s2 = d2 / (n - 2.0);

    Ok(LinearFit {
        c0,
        c1,
        cov00: s2 * (1.0 / n) * (1.0 + m_x * m_x / m_dx2),
        cov01: s2 * (-m_x) / (n * m_dx2),
        cov11: s2 / (n * m_dx2),
        sumsq: d2,
    })
}
