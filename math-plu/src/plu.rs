//! One-shot PLU operations
//!
//! Each function validates its input, factorizes once and returns a single
//! derived result. The matrix is taken by value: it is consumed by the
//! factorization, so callers that still need it must clone it first.

use crate::config::PluConfig;
use crate::factorization::{PluDecomposition, PluFactorization};
use crate::factorize::square_dim;
use crate::traits::Field;
use crate::{PluError, Result};
use ndarray::{Array1, Array2};

/// PLU decomposition of a square matrix: `P·A = L·U`
///
/// # Errors
///
/// Returns [`PluError::ShapeMismatch`] for a non-square matrix,
/// [`PluError::InvalidTolerance`] for a negative tolerance and
/// [`PluError::DegenerateMatrix`] if `a` is singular within the tolerance.
pub fn plu_decompose<T: Field>(
    a: Array2<T>,
    config: &PluConfig<T::Real>,
) -> Result<PluDecomposition<T>> {
    Ok(PluFactorization::new(a, config)?.into_decomposition())
}

/// Determinant of a square matrix
pub fn plu_determinant<T: Field>(a: Array2<T>, config: &PluConfig<T::Real>) -> Result<T> {
    Ok(PluFactorization::new(a, config)?.determinant())
}

/// Solve `A x = b`
///
/// The length of `b` is checked before any elimination work is done.
pub fn plu_solve<T: Field>(
    a: Array2<T>,
    b: &Array1<T>,
    config: &PluConfig<T::Real>,
) -> Result<Array1<T>> {
    let n = square_dim(&a)?;
    if b.len() != n {
        return Err(PluError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }
    PluFactorization::new(a, config)?.solve(b)
}

/// Inverse of a square matrix
pub fn plu_invert<T: Field>(a: Array2<T>, config: &PluConfig<T::Real>) -> Result<Array2<T>> {
    Ok(PluFactorization::new(a, config)?.inverse())
}

/// Build a matrix from a list of rows, rejecting ragged input
pub fn matrix_from_rows<T: Clone>(rows: &[Vec<T>]) -> Result<Array2<T>> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);

    if let Some(row) = rows.iter().find(|row| row.len() != ncols) {
        return Err(PluError::DimensionMismatch {
            expected: ncols,
            got: row.len(),
        });
    }

    let data: Vec<T> = rows.iter().flat_map(|row| row.iter().cloned()).collect();
    Array2::from_shape_vec((nrows, ncols), data).map_err(|_| PluError::ShapeMismatch {
        rows: nrows,
        cols: ncols,
    })
}
