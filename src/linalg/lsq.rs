//! Least squares for overdetermined systems `A · x ≈ y`.
//!
//! Every variant builds a pseudo-inverse `B` (`ncols × nrows`) so that
//! `x = B · y`. The weighting describes the noise on `y`:
//!
//! - uniform: `B = (Aᵗ·A)⁻¹·Aᵗ`
//! - diagonal variances `n`: `B = (Aᵗ·N⁻¹·A)⁻¹·Aᵗ·N⁻¹` with `N = diag(n)`
//! - full covariance `N`: same formula with `N⁻¹` computed first
//!
//! The normal matrix is inverted with the default Gauss–Jordan strategy.

use crate::traits::FloatScalar;
use crate::{Matrix, Vector};

use super::inverse::inverse_gauss_jordan;
use super::{Failure, LinalgError, LinalgResult, Stage};

/// Noise model for the right-hand side of a least-squares problem.
#[derive(Debug, Clone, Copy)]
pub enum Weighting<'a, T> {
    /// Equal, uncorrelated noise on every observation.
    Uniform,
    /// Per-observation noise variance, one entry per row of `A`.
    Diagonal(&'a Vector<T>),
    /// Full `nrows × nrows` noise covariance.
    Covariance(&'a Matrix<T>),
}

impl<T> Default for Weighting<'_, T> {
    fn default() -> Self {
        Weighting::Uniform
    }
}

fn zero_pinv<T: FloatScalar>(a: &Matrix<T>) -> Matrix<T> {
    Matrix::zeros(a.ncols(), a.nrows())
}

fn bad_arguments<T: FloatScalar>(a: &Matrix<T>, what: &str) -> Failure<Matrix<T>> {
    log::debug!("pseudo_inverse: bad arguments ({})", what);
    Failure::new(LinalgError::BadArguments, zero_pinv(a))
}

/// Multiply `(·)⁻¹` of the normal matrix `c · a` onto `c`.
fn finish<T: FloatScalar>(a: &Matrix<T>, c: &Matrix<T>) -> LinalgResult<Matrix<T>> {
    let normal = c.matmul(a);
    match inverse_gauss_jordan(&normal) {
        Ok(e) => Ok(e.matmul(c)),
        Err(f) => {
            log::debug!("pseudo_inverse: normal matrix inversion failed: {}", f);
            Err(Failure::new(
                LinalgError::Propagated(Stage::NormalMatrix),
                zero_pinv(a),
            ))
        }
    }
}

/// Pseudo-inverse with uniform weighting, `(Aᵗ·A)⁻¹·Aᵗ`.
///
/// ```
/// use densela::Matrix;
/// use densela::linalg::pseudo_inverse_uniform;
///
/// let a = Matrix::from_rows(3, 2, &[1.0_f64, 0.0, 0.0, 1.0, 1.0, 1.0]);
/// let b = pseudo_inverse_uniform(&a).unwrap();
/// let id = b.matmul(&a);
/// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
/// assert!(id[(0, 1)].abs() < 1e-12);
/// ```
pub fn pseudo_inverse_uniform<T: FloatScalar>(a: &Matrix<T>) -> LinalgResult<Matrix<T>> {
    finish(a, &a.transpose())
}

/// Pseudo-inverse with per-row noise variances `noise`.
///
/// `Aᵗ·N⁻¹` is formed by dividing column `j` of `Aᵗ` by `noise[j]`; no
/// diagonal matrix is built.
pub fn pseudo_inverse_diagonal<T: FloatScalar>(
    a: &Matrix<T>,
    noise: &Vector<T>,
) -> LinalgResult<Matrix<T>> {
    if cfg!(feature = "checked") && noise.len() != a.nrows() {
        return Err(bad_arguments(a, "noise length differs from row count"));
    }
    let c = Matrix::from_fn(a.ncols(), a.nrows(), |i, j| a[(j, i)] / noise[j]);
    finish(a, &c)
}

/// Pseudo-inverse with a full noise covariance `cov` (`nrows × nrows`).
pub fn pseudo_inverse_covariance<T: FloatScalar>(
    a: &Matrix<T>,
    cov: &Matrix<T>,
) -> LinalgResult<Matrix<T>> {
    if cfg!(feature = "checked") && (cov.nrows() != a.nrows() || !cov.is_square()) {
        return Err(bad_arguments(a, "covariance shape"));
    }
    let inv_cov = inverse_gauss_jordan(cov).map_err(|f| {
        log::debug!("pseudo_inverse: covariance inversion failed: {}", f);
        Failure::new(LinalgError::Propagated(Stage::Covariance), zero_pinv(a))
    })?;
    let c = a.transpose().matmul(&inv_cov);
    finish(a, &c)
}

/// Pseudo-inverse under the given weighting.
pub fn pseudo_inverse<T: FloatScalar>(
    a: &Matrix<T>,
    weighting: Weighting<'_, T>,
) -> LinalgResult<Matrix<T>> {
    match weighting {
        Weighting::Uniform => pseudo_inverse_uniform(a),
        Weighting::Diagonal(noise) => pseudo_inverse_diagonal(a, noise),
        Weighting::Covariance(cov) => pseudo_inverse_covariance(a, cov),
    }
}

fn solve_arguments_ok<T: FloatScalar>(
    a: &Matrix<T>,
    y: &Vector<T>,
    weighting: &Weighting<'_, T>,
) -> bool {
    let m = a.nrows();
    let weights_ok = match weighting {
        Weighting::Uniform => true,
        Weighting::Diagonal(noise) => noise.len() == m,
        Weighting::Covariance(cov) => cov.nrows() == m && cov.is_square(),
    };
    y.len() == m && m >= a.ncols() && weights_ok
}

/// Least-squares solution `x = B · y` of `A · x ≈ y`.
///
/// On failure the fallback is a zero vector of length `ncols`. A failed
/// pseudo-inverse is reported as
/// [`LinalgError::Propagated`]`(`[`Stage::PseudoInverse`]`)`. With the
/// `checked` feature, `y.len() != nrows`, `nrows < ncols` or mis-sized
/// weights fail with [`LinalgError::BadArguments`].
///
/// ```
/// use densela::{Matrix, Vector};
/// use densela::linalg::{solve_least_squares, Weighting};
///
/// // y = 2 + 3 t sampled at t = 0..4
/// let a = Matrix::from_fn(5, 2, |i, j| if j == 0 { 1.0_f64 } else { i as f64 });
/// let y = Vector::from_fn(5, |i| 2.0 + 3.0 * i as f64);
/// let x = solve_least_squares(&a, &y, Weighting::Uniform).unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-10);
/// assert!((x[1] - 3.0).abs() < 1e-10);
/// ```
pub fn solve_least_squares<T: FloatScalar>(
    a: &Matrix<T>,
    y: &Vector<T>,
    weighting: Weighting<'_, T>,
) -> LinalgResult<Vector<T>> {
    let fallback = || Vector::zeros(a.ncols());
    if cfg!(feature = "checked") && !solve_arguments_ok(a, y, &weighting) {
        log::debug!(
            "solve_least_squares: bad arguments for {}x{} system, rhs length {}",
            a.nrows(),
            a.ncols(),
            y.len()
        );
        return Err(Failure::new(LinalgError::BadArguments, fallback()));
    }
    match pseudo_inverse(a, weighting) {
        Ok(b) => Ok(b.transform(y)),
        Err(f) => {
            log::debug!("solve_least_squares: {}", f);
            Err(Failure::new(
                LinalgError::Propagated(Stage::PseudoInverse),
                fallback(),
            ))
        }
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Pseudo-inverse under the given weighting. See
    /// [`pseudo_inverse`](crate::linalg::pseudo_inverse).
    pub fn pseudo_inverse(&self, weighting: Weighting<'_, T>) -> LinalgResult<Matrix<T>> {
        pseudo_inverse(self, weighting)
    }

    /// Least-squares solution of `self · x ≈ y`. See
    /// [`solve_least_squares`](crate::linalg::solve_least_squares).
    pub fn solve_least_squares(
        &self,
        y: &Vector<T>,
        weighting: Weighting<'_, T>,
    ) -> LinalgResult<Vector<T>> {
        solve_least_squares(self, y, weighting)
    }

    /// `self⁻¹ · v`, inverting `self` on every call.
    ///
    /// The result has `min(nrows, ncols)` elements. If the inversion fails
    /// the result is all zeros. Invert once with
    /// [`inverse`](Matrix::inverse) and use [`transform`](Matrix::transform)
    /// when solving repeatedly against the same matrix.
    ///
    /// ```
    /// use densela::{Matrix, Vector};
    /// let m = Matrix::from_rows(2, 2, &[2.0_f64, 0.0, 0.0, 4.0]);
    /// let v = Vector::from_slice(&[2.0, 2.0]);
    /// assert_eq!(m.apply_inverse(&v).as_slice(), &[1.0, 0.5]);
    /// ```
    pub fn apply_inverse(&self, v: &Vector<T>) -> Vector<T> {
        match self.inverse() {
            Ok(inv) => inv.transform(v),
            Err(f) => {
                log::debug!("apply_inverse: {}", f.error);
                Vector::zeros(f.value.nrows())
            }
        }
    }
}
