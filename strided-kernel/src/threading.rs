//! Runtime configuration for multi-threaded kernels.
//!
//! Parallel execution only exists with the `parallel` feature. The threshold
//! below which kernels stay sequential can be tuned through the
//! `STRIDED_PAR_THRESHOLD` environment variable, read once per process.

use std::sync::OnceLock;

use tracing::warn;

/// Minimum number of multiply-adds to justify multi-threaded execution.
/// Matches Julia's `MINTHREADLENGTH = 1 << 15`.
pub const MINTHREADLENGTH: usize = 1 << 15;

/// Environment variable overriding [`KernelConfig::par_threshold`].
pub const PAR_THRESHOLD_ENV: &str = "STRIDED_PAR_THRESHOLD";

/// Tuning knobs shared by all kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelConfig {
    /// Work size (in multiply-adds) from which GEMM splits rows across threads.
    pub par_threshold: usize,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            par_threshold: MINTHREADLENGTH,
        }
    }
}

impl KernelConfig {
    /// Build a configuration from the process environment.
    ///
    /// Unparsable values are ignored with a warning.
    pub fn from_env() -> Self {
        match std::env::var(PAR_THRESHOLD_ENV) {
            Ok(raw) => Self::parse_threshold(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "ignoring invalid STRIDED_PAR_THRESHOLD");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    fn parse_threshold(raw: &str) -> Option<Self> {
        raw.trim()
            .parse::<usize>()
            .ok()
            .map(|par_threshold| Self { par_threshold })
    }

    /// Process-wide configuration, initialized from the environment on first use.
    pub fn global() -> &'static KernelConfig {
        static CONFIG: OnceLock<KernelConfig> = OnceLock::new();
        CONFIG.get_or_init(Self::from_env)
    }

    /// Whether `work` multiply-adds are worth splitting across threads.
    #[inline]
    pub fn use_parallel(&self, work: usize) -> bool {
        work >= self.par_threshold
    }
}
