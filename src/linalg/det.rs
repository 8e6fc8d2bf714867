use crate::traits::{FloatScalar, MatrixMut, MatrixRef};
use crate::Matrix;

use super::find_nonzero;

/// Determinant algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetMethod {
    /// Recursive cofactor expansion along the first row. O(n!).
    Cofactor,
    /// Elimination with a first-nonzero pivot search. O(n³).
    #[default]
    Elimination,
}

#[inline]
pub(crate) fn det_2x2<T: FloatScalar>(a: &impl MatrixRef<T>) -> T {
    *a.get(0, 0) * *a.get(1, 1) - *a.get(0, 1) * *a.get(1, 0)
}

#[inline]
pub(crate) fn det_3x3<T: FloatScalar>(a: &impl MatrixRef<T>) -> T {
    let m = |i, j| *a.get(i, j);
    m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
        - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
        + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
}

/// Closed forms for orders 1 to 3. `None` for anything larger.
fn det_small<T: FloatScalar>(a: &impl MatrixRef<T>, n: usize) -> Option<T> {
    match n {
        0 => {
            log::debug!("det: empty matrix");
            Some(T::zero())
        }
        1 => Some(*a.get(0, 0)),
        2 => Some(det_2x2(a)),
        3 => Some(det_3x3(a)),
        _ => None,
    }
}

/// Determinant by cofactor expansion along the first row.
///
/// Only the leading `min(nrows, ncols)` square block is read. An empty
/// matrix gives zero.
pub fn det_cofactor<T: FloatScalar>(m: &Matrix<T>) -> T {
    let n = m.nrows().min(m.ncols());
    if let Some(d) = det_small(m, n) {
        return d;
    }
    if m.is_square() {
        cofactor(m)
    } else {
        cofactor(&m.leading(n))
    }
}

fn cofactor<T: FloatScalar>(a: &Matrix<T>) -> T {
    let n = a.nrows();
    if let Some(d) = det_small(a, n) {
        return d;
    }
    let mut det = T::zero();
    let mut sign = T::one();
    for k in 0..n {
        det = det + sign * a[(0, k)] * cofactor(&a.minor(0, k));
        sign = -sign;
    }
    det
}

/// Determinant of the leading `n × n` block of `a`, destroying it.
///
/// Each step takes the first nonzero element of the active block as pivot,
/// moves it to the diagonal (every interchange flips the sign), folds it
/// into the running product and clears the rest of the pivot row by column
/// operations. Stops with zero as soon as the active block is all zeros.
pub fn det_elimination_in_place<T: FloatScalar>(a: &mut impl MatrixMut<T>, n: usize) -> T {
    let mut det = T::one();
    for k in 0..n {
        let Some((ni, nj)) = find_nonzero(&*a, k, n, n) else {
            return T::zero();
        };
        if ni != k {
            a.swap_rows(k, ni);
            det = -det;
        }
        if nj != k {
            a.swap_cols(k, nj);
            det = -det;
        }

        let pivot = *a.get(k, k);
        det = det * pivot;
        for i in k..n {
            *a.get_mut(i, k) = *a.get(i, k) / pivot;
        }

        for j in (k + 1)..n {
            let f = *a.get(k, j);
            for i in k..n {
                *a.get_mut(i, j) = *a.get(i, j) - *a.get(i, k) * f;
            }
        }
    }
    det
}

/// Determinant by pivoted elimination on a copy.
///
/// Only the leading `min(nrows, ncols)` square block is read. Orders up to
/// 3 use the closed forms; an empty matrix gives zero.
pub fn det_elimination<T: FloatScalar>(m: &Matrix<T>) -> T {
    let n = m.nrows().min(m.ncols());
    if let Some(d) = det_small(m, n) {
        return d;
    }
    let mut a = m.leading(n);
    det_elimination_in_place(&mut a, n)
}

impl<T: FloatScalar> Matrix<T> {
    /// Determinant with the default algorithm ([`DetMethod::Elimination`]).
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_rows(3, 3, &[1.0_f64, 2.0, 3.0, 4.0, 0.0, 6.0, 7.0, 8.0, 9.0]);
    /// assert!((m.det() - 60.0).abs() < 1e-12);
    /// ```
    pub fn det(&self) -> T {
        self.det_with(DetMethod::default())
    }

    /// Determinant with an explicit algorithm.
    pub fn det_with(&self, method: DetMethod) -> T {
        match method {
            DetMethod::Cofactor => det_cofactor(self),
            DetMethod::Elimination => det_elimination(self),
        }
    }

    /// Determinant by cofactor expansion.
    pub fn det_cofactor(&self) -> T {
        det_cofactor(self)
    }

    /// Determinant by pivoted elimination.
    pub fn det_elimination(&self) -> T {
        det_elimination(self)
    }
}
