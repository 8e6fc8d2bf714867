use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be stored in a [`Vector`](crate::Vector) or
/// [`Matrix`](crate::Matrix).
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types (integers are used for
/// pivot bookkeeping).
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point elements.
///
/// Required by everything that divides, takes absolute values or square
/// roots: determinants, rank, inversion, least squares, norms.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Read-only access to a matrix-like type.
///
/// Implemented by [`Matrix`](crate::Matrix) and by
/// [`Vector`](crate::Vector) (as a single row).
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with element writes and the two interchanges the
/// elimination engines are built on. Implementations are expected to make
/// `swap_rows` cheap (constant time) and may make `swap_cols` proportional
/// to the number of rows.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;
    fn swap_rows(&mut self, a: usize, b: usize);
    fn swap_cols(&mut self, a: usize, b: usize);
}
