//! Determinant from a packed factorization

use crate::permutation::Permutation;
use crate::traits::Field;
use ndarray::Array2;

/// `det(A) = (-1)^S · Π diag(U)`, since `L` has a unit diagonal.
pub fn lup_determinant<T: Field>(lu: &Array2<T>, perm: &Permutation) -> T {
    lu.diag().iter().fold(perm.sign::<T>(), |det, &u_ii| det * u_ii)
}
