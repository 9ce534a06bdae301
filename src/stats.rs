//! Descriptive statistics on vectors of any storage kind.
//!
//! Methods that take an `Option<f64>` mean (or standard deviation) use the
//! supplied value instead of recomputing it.

use strided_kernel::stats;
use strided_view::Storage;

use crate::vector::VectorBase;
use crate::Result;

impl<S: Storage> VectorBase<S> {
    pub fn mean(&self) -> f64 {
        stats::mean(&self.strided())
    }

    fn mean_or(&self, mean: Option<f64>) -> f64 {
        mean.unwrap_or_else(|| self.mean())
    }

    /// Sample variance (divisor `n - 1`).
    pub fn variance(&self, mean: Option<f64>) -> f64 {
        stats::variance_m(&self.strided(), self.mean_or(mean))
    }

    pub fn standard_deviation(&self, mean: Option<f64>) -> f64 {
        stats::sd_m(&self.strided(), self.mean_or(mean))
    }

    /// Variance about a known population mean (divisor `n`).
    pub fn variance_with_fixed_mean(&self, mean: f64) -> f64 {
        stats::variance_with_fixed_mean(&self.strided(), mean)
    }

    pub fn standard_deviation_with_fixed_mean(&self, mean: f64) -> f64 {
        stats::sd_with_fixed_mean(&self.strided(), mean)
    }

    pub fn total_sum_of_squares(&self, mean: Option<f64>) -> f64 {
        stats::tss_m(&self.strided(), self.mean_or(mean))
    }

    /// Mean absolute deviation.
    pub fn absolute_deviation(&self, mean: Option<f64>) -> f64 {
        stats::absdev_m(&self.strided(), self.mean_or(mean))
    }

    pub fn skew(&self, mean: Option<f64>, sd: Option<f64>) -> f64 {
        let mean = self.mean_or(mean);
        let sd = sd.unwrap_or_else(|| self.standard_deviation(Some(mean)));
        stats::skew_m_sd(&self.strided(), mean, sd)
    }

    /// Excess kurtosis.
    pub fn kurtosis(&self, mean: Option<f64>, sd: Option<f64>) -> f64 {
        let mean = self.mean_or(mean);
        let sd = sd.unwrap_or_else(|| self.standard_deviation(Some(mean)));
        stats::kurtosis_m_sd(&self.strided(), mean, sd)
    }

    /// Lag-1 autocorrelation.
    pub fn autocorrelation(&self, mean: Option<f64>) -> f64 {
        stats::lag1_autocorrelation_m(&self.strided(), self.mean_or(mean))
    }

    /// Sample covariance with `other`; `means` supplies both means at once.
    pub fn covariance<T: Storage>(&self, other: &VectorBase<T>, means: Option<(f64, f64)>) -> Result<f64> {
        let (a, b) = (self.strided(), other.strided());
        match means {
            Some((mean_a, mean_b)) => stats::covariance_m(&a, &b, mean_a, mean_b),
            None => stats::covariance(&a, &b),
        }
    }

    /// Pearson correlation with `other`.
    pub fn correlation<T: Storage>(&self, other: &VectorBase<T>) -> Result<f64> {
        stats::correlation(&self.strided(), &other.strided())
    }
}
