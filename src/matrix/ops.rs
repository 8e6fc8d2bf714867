//! Arithmetic on vectors and matrices.
//!
//! Element-wise operations never reject mismatched operands: they work over
//! the overlapping part and the result takes the smaller dimensions. The
//! same holds for the shared inner dimension of products.

use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::traits::Scalar;

use super::vector::Vector;
use super::Matrix;

// ── Vector ──────────────────────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Weighted sum `c1 * self + c2 * rhs` over the common length.
    ///
    /// ```
    /// use densela::Vector;
    /// let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// let b = Vector::from_slice(&[10.0, 20.0]);
    /// let c = a.csum(2.0, &b, 0.5);
    /// assert_eq!(c.as_slice(), &[7.0, 14.0]);
    /// ```
    pub fn csum(&self, c1: T, rhs: &Self, c2: T) -> Self {
        let n = self.len().min(rhs.len());
        Vector::from_fn(n, |i| c1 * self[i] + c2 * rhs[i])
    }

    /// Multiply every element by `c`.
    pub fn scale(&self, c: T) -> Self {
        Vector::from_fn(self.len(), |i| self[i] * c)
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        let n = self.len().min(rhs.len());
        Vector::from_fn(n, |i| f(self[i], rhs[i]))
    }
}

impl<T: Scalar> Add<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    /// Element-wise sum over the common length.
    fn add(self, rhs: &Vector<T>) -> Vector<T> {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Scalar> Add for Vector<T> {
    type Output = Vector<T>;
    fn add(self, rhs: Vector<T>) -> Vector<T> {
        &self + &rhs
    }
}

impl<T: Scalar> Sub<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    /// Element-wise difference over the common length.
    fn sub(self, rhs: &Vector<T>) -> Vector<T> {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Scalar> Sub for Vector<T> {
    type Output = Vector<T>;
    fn sub(self, rhs: Vector<T>) -> Vector<T> {
        &self - &rhs
    }
}

impl<T: Scalar> AddAssign<&Vector<T>> for Vector<T> {
    /// `self[i] += rhs[i]` for the common prefix; the rest of `self` is untouched.
    fn add_assign(&mut self, rhs: &Vector<T>) {
        let n = self.len().min(rhs.len());
        for i in 0..n {
            self[i] = self[i] + rhs[i];
        }
    }
}

impl<T: Scalar> SubAssign<&Vector<T>> for Vector<T> {
    /// `self[i] -= rhs[i]` for the common prefix; the rest of `self` is untouched.
    fn sub_assign(&mut self, rhs: &Vector<T>) {
        let n = self.len().min(rhs.len());
        for i in 0..n {
            self[i] = self[i] - rhs[i];
        }
    }
}

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;
    fn mul(self, c: T) -> Vector<T> {
        self.scale(c)
    }
}

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Vector<T>;
    fn mul(self, c: T) -> Vector<T> {
        self.scale(c)
    }
}

// ── Matrix ──────────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        let nrows = self.nrows().min(rhs.nrows());
        let ncols = self.ncols().min(rhs.ncols());
        Matrix::from_fn(nrows, ncols, |i, j| f(self[(i, j)], rhs[(i, j)]))
    }

    /// Weighted sum `c1 * self + c2 * rhs` over the common shape.
    pub fn csum(&self, c1: T, rhs: &Self, c2: T) -> Self {
        self.zip_with(rhs, |a, b| c1 * a + c2 * b)
    }

    /// Multiply every element by `c`.
    pub fn scale(&self, c: T) -> Self {
        Matrix::from_fn(self.nrows(), self.ncols(), |i, j| self[(i, j)] * c)
    }

    /// Matrix product `self * rhs`.
    ///
    /// The result is `self.nrows() x rhs.ncols()`; the inner sum runs over
    /// `min(self.ncols(), rhs.nrows())`.
    ///
    /// ```
    /// use densela::Matrix;
    /// let a = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let b = Matrix::from_rows(3, 2, &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
    /// let c = a.matmul(&b);
    /// assert_eq!(c, Matrix::from_rows(2, 2, &[220.0, 280.0, 490.0, 640.0]));
    /// ```
    pub fn matmul(&self, rhs: &Self) -> Self {
        let inner = self.ncols().min(rhs.nrows());
        let mut out = Matrix::zeros(self.nrows(), rhs.ncols());
        for i in 0..out.nrows() {
            let a = self.row_slice(i);
            for j in 0..out.ncols() {
                let mut s = T::zero();
                for k in 0..inner {
                    s = s + a[k] * rhs[(k, j)];
                }
                out[(i, j)] = s;
            }
        }
        out
    }

    /// Linear transform `u = self * v`, with `u[i] = Σ_j self[i][j] * v[j]`
    /// over `j < min(self.ncols(), v.len())`. The result has `self.nrows()`
    /// elements.
    ///
    /// ```
    /// use densela::{Matrix, Vector};
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let v = Vector::from_slice(&[1.0, 1.0]);
    /// assert_eq!(m.transform(&v).as_slice(), &[3.0, 7.0]);
    /// ```
    pub fn transform(&self, v: &Vector<T>) -> Vector<T> {
        let n = self.ncols().min(v.len());
        Vector::from_fn(self.nrows(), |i| {
            let row = self.row_slice(i);
            let mut s = T::zero();
            for j in 0..n {
                s = s + row[j] * v[j];
            }
            s
        })
    }
}

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// Element-wise sum over the common shape.
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        &self + &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// Element-wise difference over the common shape.
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        &self - &rhs
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, c: T) -> Matrix<T> {
        self.scale(c)
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, c: T) -> Matrix<T> {
        self.scale(c)
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.matmul(rhs)
    }
}

impl<T: Scalar> Mul<&Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;
    fn mul(self, v: &Vector<T>) -> Vector<T> {
        self.transform(v)
    }
}
