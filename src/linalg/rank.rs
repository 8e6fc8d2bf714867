use crate::traits::{FloatScalar, MatrixMut};
use crate::Matrix;

use super::find_nonzero;

/// Reduce `a` in place and return the number of successful pivot steps.
///
/// The pivot search covers the whole remaining `(k..nrows) × (k..ncols)`
/// block and stops at the first step that finds only zeros.
pub(crate) fn rank_in_place<T: FloatScalar>(a: &mut impl MatrixMut<T>) -> usize {
    let (nrows, ncols) = (a.nrows(), a.ncols());
    let n = nrows.min(ncols);

    for k in 0..n {
        let Some((ni, nj)) = find_nonzero(&*a, k, nrows, ncols) else {
            return k;
        };
        if ni != k {
            a.swap_rows(k, ni);
        }
        if nj != k {
            a.swap_cols(k, nj);
        }

        let pivot = *a.get(k, k);
        for j in k..ncols {
            *a.get_mut(k, j) = *a.get(k, j) / pivot;
        }

        for i in (k + 1)..nrows {
            let f = *a.get(i, k);
            for j in k..ncols {
                *a.get_mut(i, j) = *a.get(i, j) - *a.get(k, j) * f;
            }
        }
        for j in (k + 1)..ncols {
            let f = *a.get(k, j);
            for i in k..nrows {
                *a.get_mut(i, j) = *a.get(i, j) - *a.get(i, k) * f;
            }
        }
    }
    n
}

/// Rank: the number of linearly independent rows.
///
/// A matrix with a single row or column is reported as rank 1 without
/// inspecting it; an empty matrix has rank 0. Any larger all-zero matrix
/// also has rank 0.
///
/// ```
/// use densela::Matrix;
/// let m = Matrix::from_rows(5, 3, &[
///     1.0_f64, 0.0, 0.0,
///     0.0, 0.0, 0.0,
///     3.0, 1.0, 0.0,
///     0.0, 0.0, 0.0,
///     0.0, 0.0, 1.0,
/// ]);
/// assert_eq!(m.rank(), 3);
/// ```
pub fn rank<T: FloatScalar>(m: &Matrix<T>) -> usize {
    match m.nrows().min(m.ncols()) {
        0 => {
            log::debug!("rank: empty {}x{} matrix", m.nrows(), m.ncols());
            0
        }
        1 => 1,
        _ => rank_in_place(&mut m.clone()),
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Rank by pivoted elimination. See [`rank`](crate::linalg::rank).
    pub fn rank(&self) -> usize {
        rank(self)
    }
}
