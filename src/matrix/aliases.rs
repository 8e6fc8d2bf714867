//! Pre-defined type aliases for common `Matrix` and `Vector` element types.

use super::vector::Vector;
use super::Matrix;

// ── Build-wide element type ─────────────────────────────────────────

/// The crate-wide floating-point type (`f32` with `single-precision`).
#[cfg(not(feature = "single-precision"))]
pub type Real = f64;
/// The crate-wide floating-point type (`f32` with `single-precision`).
#[cfg(feature = "single-precision")]
pub type Real = f32;

/// Matrix of the build-wide element type.
pub type RealMatrix = Matrix<Real>;
/// Vector of the build-wide element type.
pub type RealVector = Vector<Real>;

// ── Matrix scalar aliases ───────────────────────────────────────────

/// Matrix with `f32` elements.
pub type Matrixf32 = Matrix<f32>;
/// Matrix with `f64` elements.
pub type Matrixf64 = Matrix<f64>;

// ── Vector scalar aliases ───────────────────────────────────────────

/// Vector with `f32` elements.
pub type Vectorf32 = Vector<f32>;
/// Vector with `f64` elements.
pub type Vectorf64 = Vector<f64>;
/// Index vector used for pivot bookkeeping.
pub type IntVector = Vector<usize>;
