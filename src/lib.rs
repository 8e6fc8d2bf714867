//! # densela
//!
//! Dense, real-valued linear algebra on heap-allocated matrices with runtime
//! dimensions: determinants, rank, inversion, Gauss–Jordan solves and
//! weighted least squares. `no_std` compatible (needs `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use densela::{Matrix, Vector};
//!
//! let a = Matrix::from_rows(3, 3, &[
//!     2.0_f64, 1.0, -1.0,
//!     -3.0, -1.0, 2.0,
//!     -2.0, 1.0, 2.0,
//! ]);
//! let b = Vector::from_slice(&[8.0, -11.0, -3.0]);
//! let x = a.inverse().unwrap().transform(&b); // x = [2, 3, -1]
//! assert!((x[0] - 2.0).abs() < 1e-12);
//! assert!((x[1] - 3.0).abs() < 1e-12);
//! assert!((x[2] + 1.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — [`Matrix<T>`] (row-major, O(1) row swaps) and
//!   [`Vector<T>`]. Construction, element-wise arithmetic that truncates to
//!   the common shape, products, transpose, minors, dot/cross products,
//!   text rendering, and BMP export (with `std`).
//!
//! - [`linalg`] — Determinant by cofactor expansion or elimination, rank,
//!   three inversion strategies (3×3 adjugate, Gauss–Jordan, augmented
//!   identity), Gauss–Jordan solve, and uniform, diagonal or covariance
//!   weighted pseudo-inverses. Fallible operations return
//!   [`LinalgResult`], whose error side carries a fallback value.
//!
//! - [`config`] — Process-wide allocation-failure policy.
//!
//! - [`memory`] — Per-thread count of bytes held by matrix and vector
//!   buffers.
//!
//! - [`noise`] — Uniform, normal and Rayleigh samples for tests and
//!   demonstrations. Requires `noise` feature.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), used by `linalg`
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write access for the
//!     in-place elimination engines
//!
//! ## Diagnostics
//!
//! Invalid-argument and failure paths are reported through the [`log`]
//! facade at `debug` level; allocation failures at `error` level. Install
//! any logger (e.g. `env_logger`) to see them.
//!
//! ## Cargo features
//!
//! | Feature            | Default | Description |
//! |--------------------|---------|-------------|
//! | `std`              | yes     | Hardware FPU via system libm, BMP export, allocation counter in debug builds |
//! | `noise`            | yes     | [`noise`] generators via `rand` |
//! | `libm`             | no      | Pure-Rust float fallback for `no_std` |
//! | `checked`          | no      | Validate shapes and indices; report [`LinalgError::BadArguments`] instead of panicking |
//! | `single-precision` | no      | [`Real`] is `f32` instead of `f64` |
//! | `alloc-stats`      | no      | Keep the allocation counter in release builds |
//! | `all`              | no      | `std` + `checked` + `alloc-stats` + `noise` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod config;
pub mod linalg;
pub mod matrix;
pub mod memory;
#[cfg(feature = "noise")]
pub mod noise;
pub mod traits;

pub use linalg::{Failure, LinalgError, LinalgResult};
pub use matrix::aliases::{
    IntVector, Matrixf32, Matrixf64, Real, RealMatrix, RealVector, Vectorf32, Vectorf64,
};
#[cfg(feature = "std")]
pub use matrix::BmpError;
pub use matrix::{Matrix, Vector};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
