//! Row permutations produced by partial pivoting
//!
//! [`Permutation`] is the compact form threaded through the solver,
//! inverter and determinant: `N + 1` entries where entry `i < N` is the
//! original row now stored in row `i` and entry `N` is `N + S`, `S` being
//! the number of row swaps. The determinant sign is `(-1)^S`.
//!
//! [`PermutationMatrix`] is the explicit 0/1 matrix handed back to callers of
//! [`plu_decompose`](crate::plu_decompose). It is only ever built through
//! [`Permutation::to_matrix`].

use crate::traits::Field;
use ndarray::{Array1, Array2};
use std::ops::Deref;

/// Compact row permutation with a swap counter in its last slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    indices: Vec<usize>,
}

impl Permutation {
    /// Identity permutation on `n` rows with no swaps recorded
    pub fn identity(n: usize) -> Self {
        Self {
            indices: (0..=n).collect(),
        }
    }

    /// Number of rows `N`
    pub fn len(&self) -> usize {
        self.indices.len() - 1
    }

    /// True for the permutation of an empty matrix
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exchange rows `i` and `k` and count the swap
    pub(crate) fn swap(&mut self, i: usize, k: usize) {
        let n = self.len();
        self.indices.swap(i, k);
        self.indices[n] += 1;
    }

    /// Number of row swaps performed
    pub fn swaps(&self) -> usize {
        let n = self.len();
        self.indices[n] - n
    }

    /// Whether an even number of swaps was performed
    pub fn is_even(&self) -> bool {
        self.swaps() % 2 == 0
    }

    /// Determinant of the permutation, `(-1)^S`
    pub fn sign<T: Field>(&self) -> T {
        if self.is_even() { T::one() } else { -T::one() }
    }

    /// Source row for output row `i`
    #[inline]
    pub fn row(&self, i: usize) -> usize {
        self.indices[i]
    }

    /// The row mapping, without the trailing swap counter
    pub fn rows(&self) -> &[usize] {
        &self.indices[..self.len()]
    }

    /// The full `N + 1` vector, swap counter included
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Whether the first `N` entries form a permutation of `0..N`
    pub fn is_valid(&self) -> bool {
        let n = self.len();
        let mut seen = vec![false; n];
        for &r in self.rows() {
            if r >= n || seen[r] {
                return false;
            }
            seen[r] = true;
        }
        self.indices[n] >= n
    }

    /// Permute a vector: `y[i] = b[perm[i]]`, i.e. `y = P b`
    pub fn apply<T: Field>(&self, b: &Array1<T>) -> Array1<T> {
        debug_assert_eq!(b.len(), self.len());
        self.rows().iter().map(|&r| b[r]).collect()
    }

    /// Expand into an explicit permutation matrix
    pub fn to_matrix<T: Field>(&self) -> PermutationMatrix<T> {
        let n = self.len();
        let mut p = Array2::<T>::zeros((n, n));
        for (i, &r) in self.rows().iter().enumerate() {
            p[[i, r]] = T::one();
        }
        PermutationMatrix(p)
    }
}

/// Explicit 0/1 permutation matrix `P` with `P·A = L·U`
#[derive(Debug, Clone, PartialEq)]
pub struct PermutationMatrix<T>(Array2<T>);

impl<T: Field> PermutationMatrix<T> {
    /// Borrow the underlying matrix
    pub fn as_array(&self) -> &Array2<T> {
        &self.0
    }

    /// Take the underlying matrix
    pub fn into_array(self) -> Array2<T> {
        self.0
    }

    /// Matrix product `P · a`
    pub fn dot(&self, a: &Array2<T>) -> Array2<T> {
        self.0.dot(a)
    }
}

impl<T> Deref for PermutationMatrix<T> {
    type Target = Array2<T>;

    fn deref(&self) -> &Array2<T> {
        &self.0
    }
}
