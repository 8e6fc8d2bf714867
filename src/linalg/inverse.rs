use crate::traits::{FloatScalar, MatrixMut};
use crate::{IntVector, Matrix};

use super::det::det_3x3;
use super::rank::rank;
use super::{find_nonzero, Failure, LinalgError, LinalgResult};

/// Matrix inversion strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InverseMethod {
    /// Closed-form adjugate over determinant. Leading 3×3 block only.
    Adjugate3x3,
    /// Gauss–Jordan elimination with full pivoting.
    #[default]
    GaussJordan,
    /// Elimination against an augmented identity, first-nonzero pivoting.
    Augmented,
}

/// Gauss–Jordan elimination with full pivoting, in place.
///
/// Works on the leading `n × n` block of `a`. On success `a` holds the
/// inverse and, when given, the first `n` rows of `b` hold the solutions of
/// `a · x = b` for every column of `b`.
///
/// Each step picks the largest-magnitude element among rows and columns not
/// yet used as pivots, moves it to the diagonal by a row interchange and
/// reduces its column in every other row. Column order is restored at the
/// end by undoing the implied column interchanges in reverse.
///
/// Errors:
/// - [`LinalgError::PivotReuse`] if a column is selected as pivot twice
///   (no candidate compared as a valid pivot, e.g. with NaN entries).
/// - [`LinalgError::Singular`] if the selected pivot is zero.
/// - [`LinalgError::AllocationFailure`] if the bookkeeping vectors cannot be
///   allocated.
///
/// The contents of `a` and `b` are unspecified after an error.
pub fn gauss_jordan_in_place<T: FloatScalar, A: MatrixMut<T>>(
    a: &mut A,
    n: usize,
    mut b: Option<&mut A>,
) -> Result<(), LinalgError> {
    debug_assert!(n <= a.nrows() && n <= a.ncols(), "order exceeds matrix size");
    let m = b.as_ref().map_or(0, |b| b.ncols());

    let mut indxc = IntVector::try_zeros(n)?;
    let mut indxr = IntVector::try_zeros(n)?;
    let mut ipiv = IntVector::try_zeros(n)?;

    let (mut irow, mut icol) = (0, 0);
    for i in 0..n {
        let mut big = T::zero();
        for j in 0..n {
            if ipiv[j] == 1 {
                continue;
            }
            for k in 0..n {
                if ipiv[k] == 0 {
                    let v = a.get(j, k).abs();
                    if v >= big {
                        big = v;
                        irow = j;
                        icol = k;
                    }
                }
            }
        }

        ipiv[icol] += 1;
        if ipiv[icol] > 1 {
            log::debug!("gauss_jordan: column {} selected as pivot twice", icol);
            return Err(LinalgError::PivotReuse);
        }

        if irow != icol {
            a.swap_rows(irow, icol);
            if let Some(b) = b.as_deref_mut() {
                b.swap_rows(irow, icol);
            }
        }
        indxr[i] = irow;
        indxc[i] = icol;

        let pivot = *a.get(icol, icol);
        if pivot == T::zero() {
            log::debug!("gauss_jordan: zero pivot at step {}", i);
            return Err(LinalgError::Singular);
        }
        let pivinv = T::one() / pivot;
        *a.get_mut(icol, icol) = T::one();
        for l in 0..n {
            *a.get_mut(icol, l) = *a.get(icol, l) * pivinv;
        }
        if let Some(b) = b.as_deref_mut() {
            for l in 0..m {
                *b.get_mut(icol, l) = *b.get(icol, l) * pivinv;
            }
        }

        for ll in 0..n {
            if ll == icol {
                continue;
            }
            let dum = *a.get(ll, icol);
            *a.get_mut(ll, icol) = T::zero();
            for l in 0..n {
                *a.get_mut(ll, l) = *a.get(ll, l) - *a.get(icol, l) * dum;
            }
            if let Some(b) = b.as_deref_mut() {
                for l in 0..m {
                    *b.get_mut(ll, l) = *b.get(ll, l) - *b.get(icol, l) * dum;
                }
            }
        }
    }

    for l in (0..n).rev() {
        if indxr[l] != indxc[l] {
            a.swap_cols(indxr[l], indxc[l]);
        }
    }
    Ok(())
}

/// Inverse of the leading 3×3 block by the adjugate formula.
///
/// Fails with [`LinalgError::Singular`] (and a zero 3×3 fallback) when the
/// determinant is exactly zero. With the `checked` feature a matrix smaller
/// than 3×3 fails with [`LinalgError::BadArguments`]; otherwise it panics.
pub fn inverse_3x3<T: FloatScalar>(m: &Matrix<T>) -> LinalgResult<Matrix<T>> {
    if cfg!(feature = "checked") && (m.nrows() < 3 || m.ncols() < 3) {
        log::debug!("inverse_3x3: {}x{} matrix is too small", m.nrows(), m.ncols());
        return Err(Failure::new(LinalgError::BadArguments, Matrix::zeros(3, 3)));
    }
    assert!(m.nrows() >= 3 && m.ncols() >= 3, "inverse_3x3 needs a 3x3 block");

    let det = det_3x3(m);
    if det == T::zero() {
        return Err(Failure::new(LinalgError::Singular, Matrix::zeros(3, 3)));
    }

    let a = |i, j| m[(i, j)];
    let adj = [
        a(1, 1) * a(2, 2) - a(2, 1) * a(1, 2),
        a(2, 1) * a(0, 2) - a(0, 1) * a(2, 2),
        a(0, 1) * a(1, 2) - a(1, 1) * a(0, 2),
        a(2, 0) * a(1, 2) - a(1, 0) * a(2, 2),
        a(0, 0) * a(2, 2) - a(2, 0) * a(0, 2),
        a(1, 0) * a(0, 2) - a(0, 0) * a(1, 2),
        a(1, 0) * a(2, 1) - a(2, 0) * a(1, 1),
        a(2, 0) * a(0, 1) - a(0, 0) * a(2, 1),
        a(0, 0) * a(1, 1) - a(1, 0) * a(0, 1),
    ];
    Ok(Matrix::from_fn(3, 3, |i, j| adj[i * 3 + j] / det))
}

/// Checks shared by the elimination strategies. `Some` ends the call early.
fn trivial_inverse<T: FloatScalar>(
    m: &Matrix<T>,
    n: usize,
    zero_pivot: LinalgError,
    fallback: impl Fn(usize) -> Matrix<T>,
) -> Option<LinalgResult<Matrix<T>>> {
    match n {
        0 => {
            log::debug!("inverse: empty {}x{} matrix", m.nrows(), m.ncols());
            if cfg!(feature = "checked") {
                Some(Err(Failure::new(LinalgError::BadArguments, Matrix::empty())))
            } else {
                Some(Ok(Matrix::empty()))
            }
        }
        1 => {
            let v = m[(0, 0)];
            if v == T::zero() {
                log::debug!("inverse: zero 1x1 matrix");
                Some(Err(Failure::new(zero_pivot, fallback(1))))
            } else {
                Some(Ok(Matrix::from_rows(1, 1, &[T::one() / v])))
            }
        }
        _ => None,
    }
}

/// Inverse of the leading `n × n` block (`n = min(nrows, ncols)`) by
/// Gauss–Jordan elimination. The fallback on failure is an `n × n` zero
/// matrix.
///
/// ```
/// use densela::Matrix;
/// let m = Matrix::from_rows(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]);
/// let inv = m.inverse_gauss_jordan().unwrap();
/// assert!((inv[(0, 0)] - 0.6).abs() < 1e-12);
/// assert!((inv[(0, 1)] + 0.7).abs() < 1e-12);
/// ```
pub fn inverse_gauss_jordan<T: FloatScalar>(m: &Matrix<T>) -> LinalgResult<Matrix<T>> {
    let n = m.nrows().min(m.ncols());
    if let Some(r) = trivial_inverse(m, n, LinalgError::Singular, |n| Matrix::zeros(n, n)) {
        return r;
    }
    let mut a = m.leading(n);
    match gauss_jordan_in_place(&mut a, n, None) {
        Ok(()) => Ok(a),
        Err(e) => Err(Failure::new(e, Matrix::zeros(n, n))),
    }
}

/// Inverse of the leading `n × n` block by elimination against an
/// augmented identity.
///
/// Pivots are the first nonzero element of the active block, brought to
/// the diagonal by row and column interchanges. Row operations are applied
/// to the identity alongside; column interchanges are replayed on it as row
/// interchanges in reverse order at the end.
///
/// Fails with [`LinalgError::CannotInvert`] when the active block becomes
/// all zeros, and under the `checked` feature with
/// [`LinalgError::RankDeficient`] when the rank is below `n` before
/// elimination starts. Either way the fallback is the `n × n` identity.
pub fn inverse_augmented<T: FloatScalar>(m: &Matrix<T>) -> LinalgResult<Matrix<T>> {
    let n = m.nrows().min(m.ncols());
    if let Some(r) = trivial_inverse(m, n, LinalgError::CannotInvert, Matrix::eye) {
        return r;
    }
    if cfg!(feature = "checked") && rank(m) != n {
        log::debug!("inverse_augmented: rank below {}", n);
        return Err(Failure::new(LinalgError::RankDeficient, Matrix::eye(n)));
    }

    let mut swaps = IntVector::try_zeros(n)
        .map_err(|e| Failure::new(e, Matrix::empty()))?;
    let mut a = m.leading(n);
    let mut b = Matrix::eye(n);

    for k in 0..n {
        let Some((ni, nj)) = find_nonzero(&a, k, n, n) else {
            log::debug!("inverse_augmented: no nonzero pivot at step {}", k);
            return Err(Failure::new(LinalgError::CannotInvert, Matrix::eye(n)));
        };
        if ni != k {
            a.swap_rows(k, ni);
            b.swap_rows(k, ni);
        }
        if nj != k {
            a.swap_cols(k, nj);
        }
        swaps[k] = nj;

        let pivot = a[(k, k)];
        for j in k..n {
            a[(k, j)] = a[(k, j)] / pivot;
        }
        for j in 0..n {
            b[(k, j)] = b[(k, j)] / pivot;
        }

        for i in 0..n {
            if i == k {
                continue;
            }
            let f = a[(i, k)];
            for j in 0..n {
                a[(i, j)] = a[(i, j)] - a[(k, j)] * f;
                b[(i, j)] = b[(i, j)] - b[(k, j)] * f;
            }
        }
    }

    for k in (0..n).rev() {
        if swaps[k] != k {
            b.swap_rows(k, swaps[k]);
        }
    }
    Ok(b)
}

impl<T: FloatScalar> Matrix<T> {
    /// Inverse with the default strategy ([`InverseMethod::GaussJordan`]).
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_rows(1, 1, &[5.0_f64]);
    /// assert_eq!(m.inverse().unwrap(), Matrix::from_rows(1, 1, &[0.2]));
    /// ```
    pub fn inverse(&self) -> LinalgResult<Matrix<T>> {
        self.inverse_with(InverseMethod::default())
    }

    /// Inverse with an explicit strategy.
    pub fn inverse_with(&self, method: InverseMethod) -> LinalgResult<Matrix<T>> {
        match method {
            InverseMethod::Adjugate3x3 => inverse_3x3(self),
            InverseMethod::GaussJordan => inverse_gauss_jordan(self),
            InverseMethod::Augmented => inverse_augmented(self),
        }
    }

    /// See [`inverse_3x3`](crate::linalg::inverse_3x3).
    pub fn inverse_3x3(&self) -> LinalgResult<Matrix<T>> {
        inverse_3x3(self)
    }

    /// See [`inverse_gauss_jordan`](crate::linalg::inverse_gauss_jordan).
    pub fn inverse_gauss_jordan(&self) -> LinalgResult<Matrix<T>> {
        inverse_gauss_jordan(self)
    }

    /// See [`inverse_augmented`](crate::linalg::inverse_augmented).
    pub fn inverse_augmented(&self) -> LinalgResult<Matrix<T>> {
        inverse_augmented(self)
    }

    /// Invert the leading `n × n` block and solve `self · X = rhs` in one
    /// Gauss–Jordan pass. Returns `(inverse, X)`; `X` has `n` rows and
    /// `rhs.ncols()` columns.
    ///
    /// `rhs` needs at least `n` rows. With the `checked` feature a shorter
    /// `rhs` or an empty matrix fails with [`LinalgError::BadArguments`].
    ///
    /// ```
    /// use densela::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[2.0_f64, 1.0, 5.0, 3.0]);
    /// let b = Matrix::from_rows(2, 1, &[4.0, 11.0]);
    /// let (_, x) = a.gauss_jordan_solve(&b).unwrap();
    /// assert!((x[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!((x[(1, 0)] - 2.0).abs() < 1e-12);
    /// ```
    pub fn gauss_jordan_solve(&self, rhs: &Matrix<T>) -> LinalgResult<(Matrix<T>, Matrix<T>)> {
        let n = self.nrows().min(self.ncols());
        let m = rhs.ncols();
        let fallback = || (Matrix::zeros(n, n), Matrix::zeros(n, m));

        if cfg!(feature = "checked") && (n == 0 || rhs.nrows() < n) {
            log::debug!(
                "gauss_jordan_solve: {}x{} system with {}x{} right-hand side",
                self.nrows(),
                self.ncols(),
                rhs.nrows(),
                m
            );
            return Err(Failure::new(LinalgError::BadArguments, fallback()));
        }
        assert!(rhs.nrows() >= n, "right-hand side has too few rows");

        let mut a = self.leading(n);
        let mut b = Matrix::from_fn(n, m, |i, j| rhs[(i, j)]);
        match gauss_jordan_in_place(&mut a, n, Some(&mut b)) {
            Ok(()) => Ok((a, b)),
            Err(e) => Err(Failure::new(e, fallback())),
        }
    }
}
