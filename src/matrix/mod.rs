pub mod aliases;
#[cfg(feature = "std")]
mod bmp;
mod display;
mod norm;
mod ops;
mod util;
mod vector;

pub use aliases::*;
#[cfg(feature = "std")]
pub use bmp::BmpError;
pub use vector::Vector;

use core::fmt;
use core::ops::{Index, IndexMut};

use crate::config;
use crate::linalg::LinalgError;
use crate::memory::Buffer;
use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Dense, heap-allocated, row-major matrix with runtime dimensions.
///
/// All `nrows * ncols` elements live in one contiguous buffer. A separate
/// row-start index maps logical row `i` to its offset in that buffer, so
/// [`swap_rows`](Matrix::swap_rows) only exchanges two offsets (O(1)) while
/// [`swap_cols`](Matrix::swap_cols) moves one element per row (O(nrows)).
/// The elimination engines lean on that asymmetry: they interchange rows
/// freely and columns only when the pivot search demands it.
///
/// Zero-sized matrices are valid.
///
/// # Examples
///
/// ```
/// use densela::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b = Matrix::<f64>::eye(3);
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
pub struct Matrix<T> {
    data: Buffer<T>,
    rows: Buffer<usize>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// A 0×0 matrix. Does not allocate.
    pub const fn empty() -> Self {
        Self {
            data: Buffer::empty(),
            rows: Buffer::empty(),
            nrows: 0,
            ncols: 0,
        }
    }

    fn with_data(data: Buffer<T>, nrows: usize, ncols: usize) -> Result<Self, LinalgError> {
        let rows = Buffer::try_from_fn(nrows, |i| i * ncols)?;
        Ok(Self {
            data,
            rows,
            nrows,
            ncols,
        })
    }

    fn element_count(nrows: usize, ncols: usize) -> Result<usize, LinalgError> {
        nrows
            .checked_mul(ncols)
            .ok_or(LinalgError::AllocationFailure)
    }

    /// Apply the allocation policy to a failed construction.
    fn or_empty(r: Result<Self, LinalgError>, what: &'static str, nrows: usize, ncols: usize) -> Self {
        r.unwrap_or_else(|_| {
            config::alloc_failed(what, Buffer::<T>::size_hint(nrows.saturating_mul(ncols)));
            Self::empty()
        })
    }
}

impl<T: Scalar> Matrix<T> {
    /// Fallible version of [`filled`](Matrix::filled).
    pub fn try_filled(nrows: usize, ncols: usize, value: T) -> Result<Self, LinalgError> {
        let len = Self::element_count(nrows, ncols)?;
        Self::with_data(Buffer::try_filled(len, value)?, nrows, ncols)
    }

    /// Fallible version of [`zeros`](Matrix::zeros).
    ///
    /// ```
    /// use densela::Matrix;
    /// use densela::linalg::LinalgError;
    ///
    /// let r = Matrix::<f64>::try_zeros(usize::MAX, 2);
    /// assert_eq!(r.unwrap_err(), LinalgError::AllocationFailure);
    /// ```
    pub fn try_zeros(nrows: usize, ncols: usize) -> Result<Self, LinalgError> {
        Self::try_filled(nrows, ncols, T::zero())
    }

    /// Create an `nrows x ncols` matrix of zeros.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::or_empty(Self::try_zeros(nrows, ncols), "Matrix::zeros", nrows, ncols)
    }

    /// Create a matrix with every element set to `value`.
    pub fn filled(nrows: usize, ncols: usize, value: T) -> Self {
        Self::or_empty(
            Self::try_filled(nrows, ncols, value),
            "Matrix::filled",
            nrows,
            ncols,
        )
    }

    /// Create an `n x n` identity matrix.
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..m.nrows {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `row_major.len() != nrows * ncols`.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        assert_eq!(
            Some(row_major.len()),
            nrows.checked_mul(ncols),
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            nrows,
            ncols,
        );
        let r = Buffer::try_from_slice(row_major).and_then(|d| Self::with_data(d, nrows, ncols));
        Self::or_empty(r, "Matrix::from_rows", nrows, ncols)
    }

    /// Create a matrix from an owned `Vec<T>` in row-major order.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    pub fn from_vec(nrows: usize, ncols: usize, data: alloc::vec::Vec<T>) -> Self {
        assert_eq!(
            Some(data.len()),
            nrows.checked_mul(ncols),
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self::or_empty(
            Self::with_data(Buffer::from_vec(data), nrows, ncols),
            "Matrix::from_vec",
            nrows,
            ncols,
        )
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let r = Self::element_count(nrows, ncols)
            .and_then(|len| Buffer::try_from_fn(len, |k| f(k / ncols, k % ncols)))
            .and_then(|d| Self::with_data(d, nrows, ncols));
        Self::or_empty(r, "Matrix::from_fn", nrows, ncols)
    }

    /// Create a square diagonal matrix from the diagonal values.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_diag(&[2.0, 3.0]);
    /// assert_eq!(m[(0, 0)], 2.0);
    /// assert_eq!(m[(1, 1)], 3.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_diag(diag: &[T]) -> Self {
        let n = diag.len();
        let mut m = Self::zeros(n, n);
        for i in 0..m.nrows {
            m[(i, i)] = diag[i];
        }
        m
    }

    /// Copy of the leading `n x n` block.
    pub(crate) fn leading(&self, n: usize) -> Self {
        Self::from_fn(n, n, |i, j| self[(i, j)])
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Whether the matrix has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0 || self.ncols == 0
    }

    /// Row `i` as a contiguous slice.
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        let start = self.rows[i];
        &self.data[start..start + self.ncols]
    }

    /// Row `i` as a contiguous mutable slice.
    #[inline]
    pub fn row_slice_mut(&mut self, i: usize) -> &mut [T] {
        let start = self.rows[i];
        &mut self.data[start..start + self.ncols]
    }

    /// Swap two rows in place. Constant time: only the row-start offsets move.
    ///
    /// ```
    /// use densela::Matrix;
    /// let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// m.swap_rows(0, 1);
    /// assert_eq!(m[(0, 0)], 3.0);
    /// assert_eq!(m[(1, 0)], 1.0);
    /// ```
    #[inline]
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }

    /// Swap two columns in place. Moves one element pair per row.
    ///
    /// ```
    /// use densela::Matrix;
    /// let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// m.swap_cols(0, 1);
    /// assert_eq!(m[(0, 0)], 2.0);
    /// assert_eq!(m[(0, 1)], 1.0);
    /// ```
    pub fn swap_cols(&mut self, a: usize, b: usize) {
        if a != b {
            assert!(a < self.ncols && b < self.ncols, "column index out of range");
            for i in 0..self.nrows {
                let start = self.rows[i];
                self.data.swap(start + a, start + b);
            }
        }
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for Matrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self[(row, col)]
    }
}

impl<T> MatrixMut<T> for Matrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self[(row, col)]
    }

    #[inline]
    fn swap_rows(&mut self, a: usize, b: usize) {
        Matrix::swap_rows(self, a, b);
    }

    #[inline]
    fn swap_cols(&mut self, a: usize, b: usize) {
        Matrix::swap_cols(self, a, b);
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(col < self.ncols, "column {} out of range", col);
        &self.data[self.rows[row] + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(col < self.ncols, "column {} out of range", col);
        &mut self.data[self.rows[row] + col]
    }
}

// ── Clone / PartialEq / Debug ───────────────────────────────────────

impl<T: Copy> Clone for Matrix<T> {
    /// Deep copy. The copy keeps the same logical row order.
    fn clone(&self) -> Self {
        let data = self.data.clone();
        let rows = self.rows.clone();
        // A failed buffer copy under `AllocPolicy::Empty` yields an empty matrix.
        if data.len() != self.data.len() || rows.len() != self.rows.len() {
            return Self::empty();
        }
        Self {
            data,
            rows,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    /// Logical equality: same shape, same elements in the same positions,
    /// regardless of how rows are laid out in storage.
    fn eq(&self, other: &Self) -> bool {
        self.nrows == other.nrows
            && self.ncols == other.ncols
            && (0..self.nrows).all(|i| self.row_slice(i) == other.row_slice(i))
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.nrows).map(|i| self.row_slice(i)))
            .finish()
    }
}
