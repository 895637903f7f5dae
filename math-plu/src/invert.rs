//! Matrix inverse from a packed factorization
//!
//! One substitution pass per output column, written straight into the
//! result. The pivoting work of the factorization is never repeated.

use crate::permutation::Permutation;
use crate::solve::substitute;
use crate::traits::Field;
use ndarray::Array2;

/// Compute `A^-1` given the packed factorization of `A`.
///
/// Column `j` starts as the `j`-th basis vector under the permutation
/// (`1` where `perm[i] == j`) and is then solved in place.
pub fn lup_invert<T: Field>(lu: &Array2<T>, perm: &Permutation) -> Array2<T> {
    let n = lu.nrows();
    let mut inv = Array2::<T>::zeros((n, n));

    for (j, mut column) in inv.columns_mut().into_iter().enumerate() {
        for i in 0..n {
            if perm.row(i) == j {
                column[i] = T::one();
            }
        }
        substitute(lu, column);
    }

    inv
}
