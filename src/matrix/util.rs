use crate::traits::Scalar;

use super::vector::Vector;
use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Transpose.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let t = m.transpose();
    /// assert_eq!(t.nrows(), 3);
    /// assert_eq!(t[(2, 1)], 6.0);
    /// ```
    pub fn transpose(&self) -> Self {
        Matrix::from_fn(self.ncols(), self.nrows(), |i, j| self[(j, i)])
    }

    /// The matrix with row `i` and column `j` deleted.
    ///
    /// With the `checked` feature an out-of-range index, or a matrix with a
    /// single row or column, is logged and a copy of `self` is returned.
    /// Otherwise an out-of-range index panics.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_rows(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    /// let minor = m.minor(1, 0);
    /// assert_eq!(minor, Matrix::from_rows(2, 2, &[2.0, 3.0, 8.0, 9.0]));
    /// ```
    pub fn minor(&self, i: usize, j: usize) -> Self {
        let (nrows, ncols) = (self.nrows(), self.ncols());
        if cfg!(feature = "checked") && (i >= nrows || j >= ncols || nrows <= 1 || ncols <= 1) {
            log::debug!("minor: bad arguments ({}, {}) for {}x{}", i, j, nrows, ncols);
            return self.clone();
        }
        assert!(i < nrows && j < ncols, "minor ({}, {}) out of range", i, j);
        Matrix::from_fn(nrows - 1, ncols - 1, |x, y| {
            let x = if x < i { x } else { x + 1 };
            let y = if y < j { y } else { y + 1 };
            self[(x, y)]
        })
    }

    /// Copy of row `i`.
    pub fn row(&self, i: usize) -> Vector<T> {
        Vector::from_slice(self.row_slice(i))
    }

    /// Copy of column `j`.
    pub fn col(&self, j: usize) -> Vector<T> {
        Vector::from_fn(self.nrows(), |i| self[(i, j)])
    }

    /// All elements in row-major order.
    ///
    /// ```
    /// use densela::Matrix;
    /// let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// m.swap_rows(0, 1);
    /// assert_eq!(m.as_vector().as_slice(), &[3.0, 4.0, 1.0, 2.0]);
    /// ```
    pub fn as_vector(&self) -> Vector<T> {
        let ncols = self.ncols();
        Vector::from_fn(self.nrows() * ncols, |k| self[(k / ncols, k % ncols)])
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) {
        for i in 0..self.nrows() {
            for x in self.row_slice_mut(i) {
                *x = value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m3() -> Matrix<f64> {
        Matrix::from_rows(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])
    }

    #[test]
    fn transpose_twice() {
        let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let t = m.transpose();
        assert_eq!(t, Matrix::from_rows(3, 2, &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]));
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn transpose_empty() {
        let m = Matrix::<f64>::zeros(0, 4);
        let t = m.transpose();
        assert_eq!(t.nrows(), 4);
        assert_eq!(t.ncols(), 0);
    }

    #[test]
    fn minor_corners() {
        let m = m3();
        assert_eq!(m.minor(0, 0), Matrix::from_rows(2, 2, &[5.0, 6.0, 8.0, 9.0]));
        assert_eq!(m.minor(2, 2), Matrix::from_rows(2, 2, &[1.0, 2.0, 4.0, 5.0]));
        assert_eq!(m.minor(1, 1), Matrix::from_rows(2, 2, &[1.0, 3.0, 7.0, 9.0]));
    }

    #[test]
    fn minor_rectangular() {
        let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.minor(0, 1), Matrix::from_rows(1, 2, &[4.0, 6.0]));
    }

    #[cfg(feature = "checked")]
    #[test]
    fn minor_bad_arguments_checked() {
        let m = m3();
        assert_eq!(m.minor(3, 0), m);
        let single = Matrix::from_rows(1, 1, &[5.0]);
        assert_eq!(single.minor(0, 0), single);
    }

    #[test]
    fn row_and_col() {
        let m = m3();
        assert_eq!(m.row(1).as_slice(), &[4.0, 5.0, 6.0]);
        assert_eq!(m.col(2).as_slice(), &[3.0, 6.0, 9.0]);
    }

    #[test]
    fn fill_after_swap() {
        let mut m = m3();
        m.swap_rows(0, 2);
        m.fill(1.5);
        assert_eq!(m, Matrix::filled(3, 3, 1.5));
    }

    #[test]
    fn as_vector() {
        let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.as_vector().as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert!(Matrix::<f64>::zeros(3, 0).as_vector().is_empty());
    }
}
