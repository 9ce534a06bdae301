//! Random sampling and random-filled containers.
//!
//! Samplers are plain values; the generator is passed in by the caller, so a
//! seeded [`Generator`] gives reproducible sequences.

use rand::distributions::Uniform as UniformDist;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::{Matrix, Result, StridedError, Vector};

/// Default seedable generator.
pub type Generator = rand::rngs::StdRng;

/// Generator seeded with `seed`.
pub fn generator(seed: u64) -> Generator {
    Generator::seed_from_u64(seed)
}

/// Flat distribution on `[min, max)`.
#[derive(Debug, Clone, Copy)]
pub struct Uniform {
    min: f64,
    max: f64,
    dist: UniformDist<f64>,
}

impl Uniform {
    /// Fails with `InvalidBound` unless both bounds are finite, `min < max`,
    /// and the width `max - min` is itself finite.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() {
            return Err(StridedError::InvalidBound(min));
        }
        if !max.is_finite() || min >= max || !(max - min).is_finite() {
            return Err(StridedError::InvalidBound(max));
        }
        Ok(Self {
            min,
            max,
            dist: UniformDist::new(min, max),
        })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.dist.sample(rng)
    }
}

/// Normal distribution with mean `mu` and standard deviation `sigma`.
#[derive(Debug, Clone, Copy)]
pub struct Gaussian {
    dist: Normal<f64>,
}

impl Gaussian {
    /// Fails with `InvalidBound` if `sigma` is negative or not finite.
    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        let dist = Normal::new(mu, sigma).map_err(|_| StridedError::InvalidBound(sigma))?;
        Ok(Self { dist })
    }

    pub fn mu(&self) -> f64 {
        self.dist.mean()
    }

    pub fn sigma(&self) -> f64 {
        self.dist.std_dev()
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.dist.sample(rng)
    }
}

impl Vector {
    /// `n` values drawn uniformly from `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Vector> {
        Vector::from_fn(n, |_| rng.gen::<f64>())
    }
}

impl Matrix {
    /// `rows x cols` values drawn uniformly from `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Matrix> {
        Matrix::from_fn(rows, cols, |_, _| rng.gen::<f64>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_bounds() {
        assert_eq!(Uniform::new(1.0, 1.0).unwrap_err(), StridedError::InvalidBound(1.0));
        assert!(Uniform::new(f64::NAN, 1.0).is_err());
        // Finite bounds whose width overflows to infinity.
        assert_eq!(
            Uniform::new(-1e308, 1e308).unwrap_err(),
            StridedError::InvalidBound(1e308)
        );

        let u = Uniform::new(-2.0, 3.0).unwrap();
        let mut rng = generator(11);
        for _ in 0..1000 {
            let x = u.sample(&mut rng);
            assert!((-2.0..3.0).contains(&x));
        }
    }

    #[test]
    fn test_seeded_generators_repeat() {
        let a = Vector::random(8, &mut generator(3)).unwrap();
        let b = Vector::random(8, &mut generator(3)).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn test_gaussian_parameters() {
        assert!(Gaussian::new(0.0, -1.0).is_err());
        let g = Gaussian::new(5.0, 0.5).unwrap();
        assert_eq!(g.mu(), 5.0);
        assert_eq!(g.sigma(), 0.5);

        let mut rng = generator(99);
        let v = Vector::from_fn(20_000, |_| g.sample(&mut rng)).unwrap();
        assert!((v.mean() - 5.0).abs() < 0.05);
        assert!((v.standard_deviation(None) - 0.5).abs() < 0.05);
    }
}
