//! Determinants, rank, inversion and least squares.
//!
//! Each operation family has a small set of interchangeable strategies with
//! one default:
//!
//! | Family | Strategies | Default |
//! |--------|------------|---------|
//! | determinant | [`DetMethod::Cofactor`], [`DetMethod::Elimination`] | `Elimination` |
//! | inversion | [`InverseMethod::Adjugate3x3`], [`InverseMethod::GaussJordan`], [`InverseMethod::Augmented`] | `GaussJordan` |
//! | pseudo-inverse | [`Weighting::Uniform`], [`Weighting::Diagonal`], [`Weighting::Covariance`] | `Uniform` |
//!
//! Free functions take a [`Matrix`]; the same operations are available as
//! methods (`m.det()`, `m.inverse()`, `a.pseudo_inverse(w)`, ...).
//!
//! Fallible operations return [`LinalgResult`]. The `Err` side is a
//! [`Failure`] carrying both the [`LinalgError`] and a shape-correct
//! fallback value, so a caller that wants the "zero result plus error code"
//! behaviour can write `r.unwrap_or_else(|f| f.value)`.

pub(crate) mod det;
pub(crate) mod inverse;
pub(crate) mod lsq;
pub(crate) mod rank;


pub use det::{det_cofactor, det_elimination, det_elimination_in_place, DetMethod};
pub use inverse::{
    gauss_jordan_in_place, inverse_3x3, inverse_augmented, inverse_gauss_jordan, InverseMethod,
};
pub use lsq::{
    pseudo_inverse, pseudo_inverse_covariance, pseudo_inverse_diagonal, pseudo_inverse_uniform,
    solve_least_squares, Weighting,
};
pub use rank::rank;

use crate::traits::{FloatScalar, MatrixRef};

/// Inner stage of a least-squares computation whose failure is reported by
/// [`LinalgError::Propagated`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Inverting the right-hand-side covariance matrix `N`.
    Covariance,
    /// Inverting the normal matrix `Aᵗ·N⁻¹·A`.
    NormalMatrix,
    /// Building the pseudo-inverse inside a solve.
    PseudoInverse,
}

/// Errors from linear algebra operations.
///
/// Each variant maps to a fixed negative code through [`LinalgError::code`].
///
/// ```
/// use densela::Matrix;
/// use densela::linalg::LinalgError;
///
/// let singular = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
/// let err = singular.inverse_gauss_jordan().unwrap_err();
/// assert_eq!(err.error, LinalgError::Singular);
/// assert_eq!(err.error.code(), -2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// Dimension or size preconditions violated (only detected with the
    /// `checked` feature).
    BadArguments,
    /// Zero determinant or zero pivot.
    Singular,
    /// Rank below the matrix order, found before elimination started.
    RankDeficient,
    /// No nonzero pivot left in the active submatrix during elimination.
    CannotInvert,
    /// Gauss–Jordan picked the same pivot column more than once.
    PivotReuse,
    /// An inner stage failed.
    Propagated(Stage),
    /// A buffer could not be reserved.
    AllocationFailure,
}

impl LinalgError {
    /// Signed out-of-band error code (always negative; success is 0).
    pub fn code(&self) -> i32 {
        match self {
            LinalgError::BadArguments => -1,
            LinalgError::Singular => -2,
            LinalgError::RankDeficient => -3,
            LinalgError::CannotInvert => -4,
            LinalgError::PivotReuse => -5,
            LinalgError::Propagated(Stage::Covariance) => -6,
            LinalgError::Propagated(Stage::NormalMatrix) => -7,
            LinalgError::Propagated(Stage::PseudoInverse) => -8,
            LinalgError::AllocationFailure => -9,
        }
    }
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::BadArguments => write!(f, "bad arguments"),
            LinalgError::Singular => write!(f, "matrix is singular"),
            LinalgError::RankDeficient => write!(f, "matrix is rank deficient"),
            LinalgError::CannotInvert => write!(f, "no nonzero pivot left, cannot invert"),
            LinalgError::PivotReuse => write!(f, "pivot column selected more than once"),
            LinalgError::Propagated(Stage::Covariance) => {
                write!(f, "covariance matrix inversion failed")
            }
            LinalgError::Propagated(Stage::NormalMatrix) => {
                write!(f, "normal matrix inversion failed")
            }
            LinalgError::Propagated(Stage::PseudoInverse) => {
                write!(f, "pseudo-inverse construction failed")
            }
            LinalgError::AllocationFailure => write!(f, "allocation failure"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}

/// A failed operation: the error plus a shape-correct fallback value
/// (zero- or identity-filled).
#[derive(Debug, Clone, PartialEq)]
pub struct Failure<V> {
    pub error: LinalgError,
    pub value: V,
}

impl<V> Failure<V> {
    pub fn new(error: LinalgError, value: V) -> Self {
        Self { error, value }
    }

    /// Signed error code of the underlying error.
    #[inline]
    pub fn code(&self) -> i32 {
        self.error.code()
    }
}

impl<V> From<Failure<V>> for LinalgError {
    fn from(f: Failure<V>) -> Self {
        f.error
    }
}

impl<V> core::fmt::Display for Failure<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.error.fmt(f)
    }
}

#[cfg(feature = "std")]
impl<V: core::fmt::Debug> std::error::Error for Failure<V> {}

/// Result of a fallible numerical operation.
pub type LinalgResult<V> = Result<V, Failure<V>>;

/// The out-of-band code of a result: 0 on success, negative on failure.
///
/// ```
/// use densela::Matrix;
/// use densela::linalg::code_of;
///
/// let m = Matrix::from_rows(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]);
/// assert_eq!(code_of(&m.inverse()), 0);
/// ```
pub fn code_of<V>(r: &LinalgResult<V>) -> i32 {
    match r {
        Ok(_) => 0,
        Err(f) => f.code(),
    }
}

/// First nonzero element of the `(k..nrows) × (k..ncols)` block, scanning
/// row by row. Not a magnitude search.
pub(crate) fn find_nonzero<T: FloatScalar>(
    a: &impl MatrixRef<T>,
    k: usize,
    nrows: usize,
    ncols: usize,
) -> Option<(usize, usize)> {
    for i in k..nrows {
        for j in k..ncols {
            if *a.get(i, j) != T::zero() {
                return Some((i, j));
            }
        }
    }
    None
}
