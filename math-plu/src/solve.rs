//! Forward and backward substitution against a packed factorization
//!
//! These routines trust their inputs: `lu` and `perm` must come from a
//! successful [`lup_decompose_in_place`](crate::lup_decompose_in_place) and
//! right-hand sides must have `N` rows. The checked entry points live on
//! [`PluFactorization`](crate::PluFactorization).

use crate::permutation::Permutation;
use crate::traits::Field;
use ndarray::{Array1, Array2, ArrayViewMut1};

/// Solve `L·U·x = y` in place, where `x` holds the already permuted
/// right-hand side `y = P·b` on entry.
pub(crate) fn substitute<T: Field>(lu: &Array2<T>, mut x: ArrayViewMut1<'_, T>) {
    let n = lu.nrows();

    // Forward substitution: L y = P b (unit diagonal)
    for i in 0..n {
        for k in 0..i {
            let l_ik = lu[[i, k]];
            let x_k = x[k];
            x[i] -= l_ik * x_k;
        }
    }

    // Backward substitution: U x = y
    for i in (0..n).rev() {
        for k in (i + 1)..n {
            let u_ik = lu[[i, k]];
            let x_k = x[k];
            x[i] -= u_ik * x_k;
        }
        let u_ii = lu[[i, i]];
        x[i] /= u_ii;
    }
}

/// Solve `A x = b` given the packed factorization of `A`
pub fn lup_solve<T: Field>(lu: &Array2<T>, perm: &Permutation, b: &Array1<T>) -> Array1<T> {
    debug_assert_eq!(b.len(), lu.nrows(), "right-hand side length must match");

    let mut x = perm.apply(b);
    substitute(lu, x.view_mut());
    x
}

/// Solve `A X = B` column by column, reusing one factorization
pub fn lup_solve_many<T: Field>(lu: &Array2<T>, perm: &Permutation, b: &Array2<T>) -> Array2<T> {
    debug_assert_eq!(b.nrows(), lu.nrows(), "right-hand side rows must match");

    let (n, ncols) = b.dim();
    let mut x = Array2::from_shape_fn((n, ncols), |(i, j)| b[[perm.row(i), j]]);
    for column in x.columns_mut() {
        substitute(lu, column);
    }
    x
}
