//! Angle reduction.
//!
//! `2π` is split into three parts so that `theta - k * 2π` keeps full
//! precision for large `k`.

use std::f64::consts::PI;

use crate::{Result, StridedError};

const P1: f64 = 4.0 * 7.853_981_256_484_985_351_562_5e-1;
const P2: f64 = 4.0 * 3.774_894_707_930_798_176_676_0e-8;
const P3: f64 = 4.0 * 2.695_151_429_079_059_484_055_2e-15;
const TWO_PI: f64 = 2.0 * (P1 + P2 + P3);

/// Beyond this magnitude no fractional turn survives in an `f64`.
const MAX_THETA: f64 = 0.0625 / f64::EPSILON;

fn subtract_turns(theta: f64, y: f64) -> f64 {
    ((theta - y * P1) - y * P2) - y * P3
}

fn check_precision(theta: f64) -> Result<()> {
    if theta.abs() > MAX_THETA {
        return Err(StridedError::PrecisionLoss(theta));
    }
    Ok(())
}

/// Reduce `theta` to `(-π, π]`.
pub fn angle_restrict_symm(theta: f64) -> Result<f64> {
    check_precision(theta)?;
    let y = theta.signum() * 2.0 * (theta.abs() / TWO_PI).floor();
    let r = subtract_turns(theta, y);
    Ok(if r > PI {
        subtract_turns(r, 2.0)
    } else if r < -PI {
        subtract_turns(r, -2.0)
    } else {
        r
    })
}

/// Reduce `theta` to `[0, 2π)`.
pub fn angle_restrict_pos(theta: f64) -> Result<f64> {
    check_precision(theta)?;
    let y = 2.0 * (theta / TWO_PI).floor();
    let r = subtract_turns(theta, y);
    Ok(if r > TWO_PI {
        subtract_turns(r, 2.0)
    } else if r < 0.0 {
        subtract_turns(r, -2.0)
    } else {
        r
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_restrict_symm() {
        assert_eq!(angle_restrict_symm(0.0).unwrap(), 0.0);
        assert_eq!(angle_restrict_symm(PI).unwrap(), PI);
        assert_abs_diff_eq!(angle_restrict_symm(2.0 * PI).unwrap(), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(angle_restrict_symm(-1.5 * PI).unwrap(), 0.5 * PI, epsilon = 1e-15);
    }

    #[test]
    fn test_restrict_pos() {
        assert_eq!(angle_restrict_pos(0.0).unwrap(), 0.0);
        assert_eq!(angle_restrict_pos(PI).unwrap(), PI);
        assert_abs_diff_eq!(angle_restrict_pos(-PI).unwrap(), PI, epsilon = 1e-15);
        assert_abs_diff_eq!(angle_restrict_pos(5.0 * PI).unwrap(), PI, epsilon = 1e-14);
    }

    #[test]
    fn test_precision_loss() {
        assert_eq!(
            angle_restrict_pos(1e20).unwrap_err(),
            StridedError::PrecisionLoss(1e20)
        );
    }
}
