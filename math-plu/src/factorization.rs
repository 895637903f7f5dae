//! Reusable PLU factorization
//!
//! [`PluFactorization`] owns the packed factors and the compact permutation
//! produced by one call to [`lup_decompose_in_place`]. Solves, inverses and
//! determinants borrow it, so several derived results share a single
//! factorization.

use crate::config::PluConfig;
use crate::determinant::lup_determinant;
use crate::extract::extract_lu;
use crate::factorize::lup_decompose_in_place;
use crate::invert::lup_invert;
use crate::permutation::{Permutation, PermutationMatrix};
use crate::solve::{lup_solve, lup_solve_many};
use crate::traits::Field;
use crate::{PluError, Result};
use ndarray::{Array1, Array2};

/// Explicit factors satisfying `P·A = L·U`
#[derive(Debug, Clone, PartialEq)]
pub struct PluDecomposition<T> {
    /// Permutation matrix
    pub p: PermutationMatrix<T>,
    /// Unit lower triangular factor
    pub l: Array2<T>,
    /// Upper triangular factor
    pub u: Array2<T>,
}

/// LU factorization result
///
/// Stores the packed `(L - I) + U` matrix along with the pivot information.
#[derive(Debug, Clone)]
pub struct PluFactorization<T: Field> {
    lu: Array2<T>,
    perm: Permutation,
}

impl<T: Field> PluFactorization<T> {
    /// Factorize `a`, taking ownership of it.
    ///
    /// The matrix is overwritten by its factors. Clone it first if the
    /// original values are still needed.
    pub fn new(a: Array2<T>, config: &PluConfig<T::Real>) -> Result<Self> {
        let mut lu = a;
        let perm = lup_decompose_in_place(&mut lu, config.tolerance)?;
        Ok(Self { lu, perm })
    }

    /// Matrix dimension
    pub fn dim(&self) -> usize {
        self.lu.nrows()
    }

    /// Packed `(L - I) + U` matrix
    pub fn packed(&self) -> &Array2<T> {
        &self.lu
    }

    /// Compact row permutation
    pub fn permutation(&self) -> &Permutation {
        &self.perm
    }

    /// Unit lower triangular factor
    pub fn lower(&self) -> Array2<T> {
        extract_lu(&self.lu).0
    }

    /// Upper triangular factor
    pub fn upper(&self) -> Array2<T> {
        extract_lu(&self.lu).1
    }

    /// Explicit permutation matrix
    pub fn permutation_matrix(&self) -> PermutationMatrix<T> {
        self.perm.to_matrix()
    }

    /// Solve `A x = b` using the pre-computed factorization
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        let n = self.dim();
        if b.len() != n {
            return Err(PluError::DimensionMismatch {
                expected: n,
                got: b.len(),
            });
        }
        Ok(lup_solve(&self.lu, &self.perm, b))
    }

    /// Solve `A X = B` for every column of `B`
    pub fn solve_many(&self, b: &Array2<T>) -> Result<Array2<T>> {
        let n = self.dim();
        if b.nrows() != n {
            return Err(PluError::DimensionMismatch {
                expected: n,
                got: b.nrows(),
            });
        }
        Ok(lup_solve_many(&self.lu, &self.perm, b))
    }

    /// Matrix inverse
    pub fn inverse(&self) -> Array2<T> {
        lup_invert(&self.lu, &self.perm)
    }

    /// Determinant
    pub fn determinant(&self) -> T {
        lup_determinant(&self.lu, &self.perm)
    }

    /// Expand into explicit `P`, `L` and `U`
    pub fn into_decomposition(self) -> PluDecomposition<T> {
        let (l, u) = extract_lu(&self.lu);
        PluDecomposition {
            p: self.perm.to_matrix(),
            l,
            u,
        }
    }

    /// Take the packed matrix and the permutation
    pub fn into_parts(self) -> (Array2<T>, Permutation) {
        (self.lu, self.perm)
    }
}
