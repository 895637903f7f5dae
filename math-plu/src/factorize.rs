//! In-place LU factorization with partial pivoting
//!
//! Doolittle elimination: at step `i` the row holding the largest-magnitude
//! entry of column `i` (rows `i..N`) is swapped into place, the multipliers
//! are stored below the diagonal and the trailing block is updated. On
//! success the matrix holds `(L - I) + U`.

use crate::config::check_tolerance;
use crate::permutation::Permutation;
use crate::traits::Field;
use crate::{PluError, Result};
use ndarray::Array2;
use num_traits::{ToPrimitive, Zero};

/// Return `N` for an `N x N` matrix, or a shape error.
pub(crate) fn square_dim<T>(a: &Array2<T>) -> Result<usize> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(PluError::ShapeMismatch { rows, cols });
    }
    Ok(rows)
}

/// Factorize `a` in place so that it holds `(L - I) + U` with `P·A = L·U`.
///
/// Returns the compact row permutation. Fails with
/// [`PluError::DegenerateMatrix`] as soon as every candidate pivot of a
/// column has a magnitude below `tolerance`; a zero tolerance still rejects
/// an exact-zero pivot. On failure `a` is left partially eliminated and must
/// not be used.
///
/// # Errors
///
/// - [`PluError::ShapeMismatch`] if `a` is not square
/// - [`PluError::InvalidTolerance`] if `tolerance` is negative or NaN
/// - [`PluError::DegenerateMatrix`] if `a` is singular within `tolerance`
pub fn lup_decompose_in_place<T: Field>(
    a: &mut Array2<T>,
    tolerance: T::Real,
) -> Result<Permutation> {
    let n = square_dim(a)?;
    check_tolerance(tolerance)?;

    let mut perm = Permutation::identity(n);

    for i in 0..n {
        // Find pivot
        let mut max_val = T::Real::zero();
        let mut max_row = i;
        for k in i..n {
            let val = a[[k, i]].modulus();
            if val > max_val {
                max_val = val;
                max_row = k;
            }
        }

        if max_val < tolerance || max_val.is_zero() {
            log::debug!(
                "PLU: degenerate column {} of {}x{} matrix (max pivot {:.3e}, tolerance {:.3e})",
                i,
                n,
                n,
                max_val.to_f64().unwrap_or(f64::NAN),
                tolerance.to_f64().unwrap_or(f64::NAN)
            );
            return Err(PluError::DegenerateMatrix { column: i });
        }

        if max_row != i {
            for j in 0..n {
                a.swap([i, j], [max_row, j]);
            }
            perm.swap(i, max_row);
            log::trace!("PLU: swapped rows {} and {}", i, max_row);
        }

        // Store multipliers in L part and update the trailing block
        let pivot = a[[i, i]];
        for j in (i + 1)..n {
            let mult = a[[j, i]] / pivot;
            a[[j, i]] = mult;
            for k in (i + 1)..n {
                let update = mult * a[[i, k]];
                a[[j, k]] -= update;
            }
        }
    }

    log::debug!(
        "PLU: factorized {}x{} matrix with {} row swaps",
        n,
        n,
        perm.swaps()
    );

    Ok(perm)
}
