//! Pseudo-random noise for tests and demonstrations.
//!
//! Generators take any [`rand::Rng`]; seed a
//! [`StdRng`](rand::rngs::StdRng) for reproducible sequences.
//!
//! ```
//! use densela::noise::{self, NoiseModel};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let u: f64 = noise::signed_uniform(&mut rng, 2.0);
//! assert!((-2.0..=2.0).contains(&u));
//! let n: f64 = NoiseModel::BoxMuller.normal(&mut rng, 0.1);
//! assert!(n.is_finite());
//! ```

use rand::Rng;

use crate::traits::FloatScalar;

/// Uniform sample in `[0, s)`.
pub fn uniform<T: FloatScalar, R: Rng + ?Sized>(rng: &mut R, s: T) -> T {
    T::from(rng.gen::<f64>()).unwrap() * s
}

/// Uniform sample in `[-s, s)`.
pub fn signed_uniform<T: FloatScalar, R: Rng + ?Sized>(rng: &mut R, s: T) -> T {
    let u = rng.gen::<f64>() * 2.0 - 1.0;
    T::from(u).unwrap() * s
}

/// Number of uniform samples summed by [`NoiseModel::CentralLimit`].
const CLT_TERMS: usize = 24;

/// How approximately normal samples are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoiseModel {
    /// Sum of 24 signed uniform samples, rescaled to unit variance.
    CentralLimit,
    /// Box–Muller transform of two uniform samples.
    #[default]
    BoxMuller,
}

impl NoiseModel {
    /// Zero-mean sample with standard deviation `s`.
    pub fn normal<T: FloatScalar, R: Rng + ?Sized>(&self, rng: &mut R, s: T) -> T {
        match self {
            NoiseModel::CentralLimit => {
                let mut sum = T::zero();
                for _ in 0..CLT_TERMS {
                    sum = sum + signed_uniform(rng, s);
                }
                // Each term has variance s²/3.
                sum * T::from(3.0 / CLT_TERMS as f64).unwrap().sqrt()
            }
            NoiseModel::BoxMuller => {
                let mut u = rng.gen::<f64>();
                if u <= 0.0 {
                    u = 1e-16;
                }
                let u = T::from(u).unwrap();
                let two = T::from(2.0).unwrap();
                let radius = (-two * u.ln()).max(T::zero()).sqrt();
                let angle = uniform(rng, two * T::from(core::f64::consts::PI).unwrap());
                s * radius * angle.sin()
            }
        }
    }

    /// Rayleigh-distributed sample: the length of two normal samples,
    /// divided by 1.05.
    pub fn rayleigh<T: FloatScalar, R: Rng + ?Sized>(&self, rng: &mut R, s: T) -> T {
        let a = self.normal(rng, s);
        let b = self.normal(rng, s);
        (a * a + b * b).sqrt() / T::from(1.05).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const N: usize = 20_000;

    fn moments(xs: &[f64]) -> (f64, f64) {
        let n = xs.len() as f64;
        let mean = xs.iter().sum::<f64>() / n;
        let var = xs.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;
        (mean, var.sqrt())
    }

    #[test]
    fn uniform_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let u: f64 = uniform(&mut rng, 3.0);
            assert!((0.0..3.0).contains(&u));
            let s: f32 = signed_uniform(&mut rng, 0.5);
            assert!((-0.5..=0.5).contains(&s));
        }
    }

    #[test]
    fn normal_moments() {
        for model in [NoiseModel::CentralLimit, NoiseModel::BoxMuller] {
            let mut rng = StdRng::seed_from_u64(42);
            let xs: Vec<f64> = (0..N).map(|_| model.normal(&mut rng, 2.0)).collect();
            let (mean, std) = moments(&xs);
            assert!(mean.abs() < 0.1, "{:?} mean {}", model, mean);
            assert!((std - 2.0).abs() < 0.1, "{:?} std {}", model, std);
        }
    }

    #[test]
    fn rayleigh_is_non_negative() {
        let mut rng = StdRng::seed_from_u64(3);
        for model in [NoiseModel::CentralLimit, NoiseModel::BoxMuller] {
            let xs: Vec<f64> = (0..N).map(|_| model.rayleigh(&mut rng, 1.0)).collect();
            assert!(xs.iter().all(|&x| x >= 0.0));
            // Mean of a Rayleigh(σ) is σ·√(π/2).
            let (mean, _) = moments(&xs);
            let expected = (core::f64::consts::PI / 2.0).sqrt() / 1.05;
            assert!((mean - expected).abs() < 0.05, "{:?} mean {}", model, mean);
        }
    }

    #[test]
    fn seeded_sequences_repeat() {
        let a: Vec<f64> = {
            let mut rng = StdRng::seed_from_u64(9);
            (0..8).map(|_| NoiseModel::default().normal(&mut rng, 1.0)).collect()
        };
        let b: Vec<f64> = {
            let mut rng = StdRng::seed_from_u64(9);
            (0..8).map(|_| NoiseModel::default().normal(&mut rng, 1.0)).collect()
        };
        assert_eq!(a, b);
    }
}
