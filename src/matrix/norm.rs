use crate::traits::{FloatScalar, Scalar};

use super::vector::Vector;

impl<T: Scalar> Vector<T> {
    /// Dot product over the common length.
    ///
    /// ```
    /// use densela::Vector;
    /// let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// let b = Vector::from_slice(&[4.0, 5.0]);
    /// assert_eq!(a.dot(&b), 14.0);
    /// ```
    pub fn dot(&self, rhs: &Self) -> T {
        let n = self.len().min(rhs.len());
        let mut s = T::zero();
        for i in 0..n {
            s = s + self[i] * rhs[i];
        }
        s
    }

    /// Scalar cross product of the leading two elements,
    /// `a.x * b.y - a.y * b.x`.
    ///
    /// Both vectors need at least two elements. With the `checked` feature a
    /// short input is logged and yields zero; otherwise it panics.
    pub fn cross_2d(&self, rhs: &Self) -> T {
        if cfg!(feature = "checked") && (self.len() < 2 || rhs.len() < 2) {
            log::debug!(
                "cross_2d: need 2 elements, got {} and {}",
                self.len(),
                rhs.len()
            );
            return T::zero();
        }
        self[0] * rhs[1] - self[1] * rhs[0]
    }

    /// Cross product of the leading three elements.
    ///
    /// Both vectors need at least three elements. With the `checked` feature
    /// a short input is logged and yields a zero 3-vector; otherwise it
    /// panics.
    ///
    /// ```
    /// use densela::Vector;
    /// let x = Vector::from_slice(&[1.0, 0.0, 0.0]);
    /// let y = Vector::from_slice(&[0.0, 1.0, 0.0]);
    /// assert_eq!(x.cross_3d(&y).as_slice(), &[0.0, 0.0, 1.0]);
    /// ```
    pub fn cross_3d(&self, rhs: &Self) -> Self {
        if cfg!(feature = "checked") && (self.len() < 3 || rhs.len() < 3) {
            log::debug!(
                "cross_3d: need 3 elements, got {} and {}",
                self.len(),
                rhs.len()
            );
            return Vector::zeros(3);
        }
        let (a, b) = (self, rhs);
        Vector::from_slice(&[
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ])
    }

    /// Sum of squares.
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: FloatScalar> Vector<T> {
    /// Euclidean length (the vector's module).
    ///
    /// ```
    /// use densela::Vector;
    /// let v = Vector::from_slice(&[3.0_f64, 4.0]);
    /// assert_eq!(v.norm(), 5.0);
    /// ```
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }
}
