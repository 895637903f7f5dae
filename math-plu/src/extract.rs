//! Splitting a packed factorization into explicit triangular factors

use crate::traits::Field;
use ndarray::Array2;

/// Split the packed `(L - I) + U` matrix into `(L, U)`.
///
/// `L` gets a unit diagonal and the strictly-lower entries of `packed`;
/// `U` gets the diagonal and everything above it. `packed` is not modified.
pub fn extract_lu<T: Field>(packed: &Array2<T>) -> (Array2<T>, Array2<T>) {
    let dim = packed.dim();

    let l = Array2::from_shape_fn(dim, |(i, j)| match i.cmp(&j) {
        std::cmp::Ordering::Greater => packed[[i, j]],
        std::cmp::Ordering::Equal => T::one(),
        std::cmp::Ordering::Less => T::zero(),
    });
    let u = Array2::from_shape_fn(dim, |(i, j)| {
        if i <= j { packed[[i, j]] } else { T::zero() }
    });

    (l, u)
}
