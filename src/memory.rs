//! Element buffers and allocation accounting.
//!
//! Every [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix) owns its
//! storage through a `Buffer`, which reserves memory fallibly and reports
//! the bytes it holds to a per-thread counter. The counter is compiled in
//! for debug builds with `std`, or with the `alloc-stats` feature; otherwise
//! [`allocated_bytes`] always returns 0.
//!
//! ```
//! use densela::{memory, Matrix};
//!
//! let before = memory::allocated_bytes();
//! {
//!     let m = Matrix::<f64>::zeros(4, 4);
//!     let _copy = m.clone();
//! }
//! assert_eq!(memory::allocated_bytes(), before);
//! ```

use alloc::vec::Vec;
use core::fmt;
use core::mem::size_of;
use core::ops::{Deref, DerefMut};

use crate::config;
use crate::linalg::LinalgError;

#[cfg(any(feature = "alloc-stats", all(feature = "std", debug_assertions)))]
mod stats {
    use std::cell::Cell;

    std::thread_local! {
        static BYTES: Cell<isize> = const { Cell::new(0) };
    }

    #[inline]
    pub(super) fn record(delta: isize) {
        BYTES.with(|b| b.set(b.get() + delta));
    }

    pub fn allocated_bytes() -> isize {
        BYTES.with(|b| b.get())
    }

    pub const TRACKING: bool = true;
}

#[cfg(not(any(feature = "alloc-stats", all(feature = "std", debug_assertions))))]
mod stats {
    #[inline]
    pub(super) fn record(_delta: isize) {}

    pub fn allocated_bytes() -> isize {
        0
    }

    pub const TRACKING: bool = false;
}

/// Bytes currently held by buffers created on this thread.
///
/// Balanced construct/drop sequences bring it back to where it started.
pub use stats::allocated_bytes;

/// Whether this build keeps the byte counter.
pub const fn is_tracking() -> bool {
    stats::TRACKING
}

/// Owned, contiguous element storage.
pub(crate) struct Buffer<T> {
    data: Vec<T>,
}

impl<T> Buffer<T> {
    pub(crate) const fn empty() -> Self {
        Self { data: Vec::new() }
    }

    #[inline]
    fn bytes(len: usize) -> isize {
        len.saturating_mul(size_of::<T>()) as isize
    }

    fn reserve(len: usize) -> Result<Vec<T>, LinalgError> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| LinalgError::AllocationFailure)?;
        Ok(data)
    }

    fn adopt(data: Vec<T>) -> Self {
        stats::record(Self::bytes(data.len()));
        Self { data }
    }

    /// Take ownership of an existing `Vec` (no copy).
    pub(crate) fn from_vec(data: Vec<T>) -> Self {
        Self::adopt(data)
    }

    /// Bytes needed for `len` elements, for diagnostics.
    pub(crate) fn size_hint(len: usize) -> usize {
        len.saturating_mul(size_of::<T>())
    }
}

impl<T: Copy> Buffer<T> {
    pub(crate) fn try_filled(len: usize, value: T) -> Result<Self, LinalgError> {
        let mut data = Self::reserve(len)?;
        data.resize(len, value);
        Ok(Self::adopt(data))
    }

    pub(crate) fn try_from_slice(src: &[T]) -> Result<Self, LinalgError> {
        let mut data = Self::reserve(src.len())?;
        data.extend_from_slice(src);
        Ok(Self::adopt(data))
    }

    pub(crate) fn try_from_fn(len: usize, f: impl FnMut(usize) -> T) -> Result<Self, LinalgError> {
        let mut data = Self::reserve(len)?;
        data.extend((0..len).map(f));
        Ok(Self::adopt(data))
    }

    /// Change the length, keeping the common prefix and filling any new tail
    /// with `value`.
    pub(crate) fn try_resize(&mut self, new_len: usize, value: T) -> Result<(), LinalgError> {
        let old_len = self.data.len();
        if new_len > old_len {
            self.data
                .try_reserve_exact(new_len - old_len)
                .map_err(|_| LinalgError::AllocationFailure)?;
        }
        self.data.resize(new_len, value);
        if new_len < old_len {
            self.data.shrink_to_fit();
        }
        stats::record(Self::bytes(new_len) - Self::bytes(old_len));
        Ok(())
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        stats::record(-Self::bytes(self.data.len()));
    }
}

impl<T: Copy> Clone for Buffer<T> {
    fn clone(&self) -> Self {
        match Self::try_from_slice(&self.data) {
            Ok(b) => b,
            Err(_) => {
                config::alloc_failed("clone", Self::size_hint(self.data.len()));
                Self::empty()
            }
        }
    }
}

impl<T> Deref for Buffer<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T> DerefMut for Buffer<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: fmt::Debug> fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled() {
        let b = Buffer::try_filled(4, 1.5_f64).unwrap();
        assert_eq!(&*b, &[1.5, 1.5, 1.5, 1.5]);
    }

    #[test]
    fn from_fn() {
        let b = Buffer::try_from_fn(3, |i| i * 10).unwrap();
        assert_eq!(&*b, &[0, 10, 20]);
    }

    #[test]
    fn resize_keeps_prefix() {
        let mut b = Buffer::try_from_slice(&[1.0_f64, 2.0, 3.0]).unwrap();
        b.try_resize(5, 0.0).unwrap();
        assert_eq!(&*b, &[1.0, 2.0, 3.0, 0.0, 0.0]);
        b.try_resize(2, 0.0).unwrap();
        assert_eq!(&*b, &[1.0, 2.0]);
    }

    #[test]
    fn huge_reservation_fails() {
        let r = Buffer::<f64>::try_filled(usize::MAX, 0.0);
        assert_eq!(r.unwrap_err(), LinalgError::AllocationFailure);
    }

    #[test]
    fn counter_balances() {
        let before = allocated_bytes();
        {
            let a = Buffer::try_filled(8, 0.0_f64).unwrap();
            if is_tracking() {
                assert_eq!(allocated_bytes() - before, 64);
            }
            let mut b = a.clone();
            b.try_resize(2, 0.0).unwrap();
            if is_tracking() {
                assert_eq!(allocated_bytes() - before, 64 + 16);
            }
        }
        assert_eq!(allocated_bytes(), before);
    }
}
