use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::config;
use crate::linalg::LinalgError;
use crate::memory::Buffer;
use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Dynamically-sized vector owning one contiguous buffer.
///
/// Length 0 is valid. Behaves as a single row when used through
/// [`MatrixRef`] / [`MatrixMut`].
///
/// # Examples
///
/// ```
/// use densela::Vector;
///
/// let v = Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
/// assert_eq!(v[0], 1.0);
/// assert_eq!(v.len(), 3);
/// assert!((v.dot(&v) - 14.0).abs() < 1e-12);
/// ```
pub struct Vector<T> {
    data: Buffer<T>,
}

impl<T> Vector<T> {
    /// A zero-length vector. Does not allocate.
    pub const fn empty() -> Self {
        Self {
            data: Buffer::empty(),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View the vector data as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the vector data as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    fn or_empty(r: Result<Self, LinalgError>, what: &'static str, len: usize) -> Self {
        r.unwrap_or_else(|_| {
            config::alloc_failed(what, Buffer::<T>::size_hint(len));
            Self::empty()
        })
    }
}

impl<T: Scalar> Vector<T> {
    /// Fallible version of [`filled`](Vector::filled).
    pub fn try_filled(n: usize, value: T) -> Result<Self, LinalgError> {
        Ok(Self {
            data: Buffer::try_filled(n, value)?,
        })
    }

    /// Fallible version of [`zeros`](Vector::zeros).
    pub fn try_zeros(n: usize) -> Result<Self, LinalgError> {
        Self::try_filled(n, T::zero())
    }

    /// Create a zero vector of length `n`.
    ///
    /// ```
    /// use densela::Vector;
    /// let v = Vector::<f64>::zeros(4);
    /// assert_eq!(v.len(), 4);
    /// assert_eq!(v[3], 0.0);
    /// ```
    pub fn zeros(n: usize) -> Self {
        Self::or_empty(Self::try_zeros(n), "Vector::zeros", n)
    }

    /// Create a vector filled with a value.
    pub fn filled(n: usize, value: T) -> Self {
        Self::or_empty(Self::try_filled(n, value), "Vector::filled", n)
    }

    /// Create a vector from a flat slice (deep copy).
    ///
    /// ```
    /// use densela::Vector;
    /// let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// assert_eq!(v[0], 1.0);
    /// assert_eq!(v.len(), 3);
    /// ```
    pub fn from_slice(data: &[T]) -> Self {
        let r = Buffer::try_from_slice(data).map(|data| Self { data });
        Self::or_empty(r, "Vector::from_slice", data.len())
    }

    /// Create a vector from an owned `Vec`.
    ///
    /// ```
    /// use densela::Vector;
    /// let v = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(v[2], 3.0);
    /// ```
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            data: Buffer::from_vec(data),
        }
    }

    /// Create a vector by calling `f(i)` for each index.
    pub fn from_fn(n: usize, f: impl FnMut(usize) -> T) -> Self {
        let r = Buffer::try_from_fn(n, f).map(|data| Self { data });
        Self::or_empty(r, "Vector::from_fn", n)
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) {
        for x in self.data.iter_mut() {
            *x = value;
        }
    }

    /// Fallible version of [`resize`](Vector::resize).
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), LinalgError> {
        self.data.try_resize(new_len, T::zero())
    }

    /// Change the length in place.
    ///
    /// The common prefix is kept; elements past the old length are zero.
    ///
    /// ```
    /// use densela::Vector;
    /// let mut v = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// v.resize(5);
    /// assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 0.0, 0.0]);
    /// v.resize(2);
    /// assert_eq!(v.as_slice(), &[1.0, 2.0]);
    /// ```
    pub fn resize(&mut self, new_len: usize) {
        if self.try_resize(new_len).is_err() {
            let bytes = Buffer::<T>::size_hint(new_len);
            config::alloc_failed("Vector::resize", bytes);
            *self = Self::empty();
        }
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for Vector<T> {
    #[inline]
    fn nrows(&self) -> usize {
        1
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        debug_assert_eq!(row, 0, "vector has a single row");
        &self.data[col]
    }
}

impl<T> MatrixMut<T> for Vector<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        debug_assert_eq!(row, 0, "vector has a single row");
        &mut self.data[col]
    }

    #[inline]
    fn swap_rows(&mut self, a: usize, b: usize) {
        debug_assert!(a == 0 && b == 0, "vector has a single row");
    }

    #[inline]
    fn swap_cols(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }
}

// ── Clone / PartialEq / Debug ───────────────────────────────────────

impl<T: Copy> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.fmt(f)
    }
}

impl<T: Scalar> From<&[T]> for Vector<T> {
    fn from(s: &[T]) -> Self {
        Self::from_slice(s)
    }
}

impl<T: Scalar> From<Vec<T>> for Vector<T> {
    fn from(v: Vec<T>) -> Self {
        Self::from_vec(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IntVector;

    #[test]
    fn from_slice() {
        let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(v.len(), 3);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
    }

    #[test]
    fn from_vec() {
        let v = Vector::from_vec(vec![10.0, 20.0]);
        assert_eq!(v.len(), 2);
        assert_eq!(v[1], 20.0);
    }

    #[test]
    fn zeros() {
        let v = Vector::<f64>::zeros(4);
        assert_eq!(v.len(), 4);
        for i in 0..4 {
            assert_eq!(v[i], 0.0);
        }
    }

    #[test]
    fn empty() {
        let v = Vector::<f64>::zeros(0);
        assert!(v.is_empty());
        assert_eq!(v, Vector::empty());
    }

    #[test]
    fn index_mut() {
        let mut v = Vector::<f64>::zeros(3);
        v[1] = 42.0;
        assert_eq!(v[1], 42.0);
    }

    #[test]
    fn fill() {
        let mut v = Vector::from_slice(&[1.0, 2.0]);
        v.fill(-1.0);
        assert_eq!(v.as_slice(), &[-1.0, -1.0]);
    }

    #[test]
    fn resize_grow_and_shrink() {
        let mut v = Vector::from_slice(&[1.0, 2.0, 3.0]);
        v.resize(4);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 0.0]);
        v.resize(1);
        assert_eq!(v.as_slice(), &[1.0]);
        v.resize(0);
        assert!(v.is_empty());
    }

    #[test]
    fn int_vector() {
        let mut iv = IntVector::zeros(3);
        iv[2] += 1;
        assert_eq!(iv.as_slice(), &[0, 0, 1]);
    }

    #[test]
    fn matrix_ref_trait() {
        let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(v.nrows(), 1);
        assert_eq!(v.ncols(), 3);
        assert_eq!(*v.get(0, 1), 2.0);
    }

    #[test]
    fn clone_is_deep() {
        let a = Vector::from_slice(&[1.0, 2.0]);
        let mut b = a.clone();
        b[0] = 5.0;
        assert_eq!(a[0], 1.0);
    }
}
