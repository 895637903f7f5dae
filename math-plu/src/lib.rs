//! Dense LU factorization with partial pivoting
//!
//! This crate factors a square matrix as `P·A = L·U` and derives the
//! determinant, the solution of `A x = b` and the inverse from that single
//! factorization.
//!
//! # Features
//!
//! - **Factorization**: Doolittle elimination with partial (row) pivoting and
//!   tolerance-based singularity detection
//! - **Derived operations**: determinant, linear solve (one or many
//!   right-hand sides), inverse
//! - **Compact pivots**: the permutation is kept as a row vector plus a swap
//!   counter; an explicit permutation matrix is only built on request
//! - **Generic Scalar Types**: Works with f64, f32, Complex64, Complex32
//!
//! # Ownership
//!
//! The factorization overwrites its input with the packed `(L - I) + U`
//! factors. Every entry point therefore takes the matrix by value; clone it
//! first if the original is still needed.
//!
//! # Example
//!
//! ```
//! use math_audio_plu::{PluConfig, PluFactorization, plu_solve};
//! use ndarray::array;
//!
//! let a = array![[2.0_f64, 1.0], [5.0, 3.0]];
//! let b = array![4.0, 11.0];
//!
//! let x = plu_solve(a.clone(), &b, &PluConfig::default()).unwrap();
//! assert!((x[0] - 1.0).abs() < 1e-12);
//! assert!((x[1] - 2.0).abs() < 1e-12);
//!
//! // Reuse one factorization for several results
//! let lu = PluFactorization::new(a, &PluConfig::default()).unwrap();
//! assert!((lu.determinant() - 1.0).abs() < 1e-12);
//! let inv = lu.inverse();
//! assert!((inv[[0, 0]] - 3.0).abs() < 1e-12);
//! ```

pub mod config;
pub mod traits;

mod determinant;
mod extract;
mod factorization;
mod factorize;
mod invert;
mod permutation;
mod plu;
mod solve;

// Re-export main types
pub use config::{DEFAULT_TOLERANCE, PluConfig};
pub use factorization::{PluDecomposition, PluFactorization};
pub use permutation::{Permutation, PermutationMatrix};
pub use traits::Field;

// Re-export the one-shot operations
pub use plu::{matrix_from_rows, plu_decompose, plu_determinant, plu_invert, plu_solve};

// Re-export the low-level routines working on packed factors
pub use determinant::lup_determinant;
pub use extract::extract_lu;
pub use factorize::lup_decompose_in_place;
pub use invert::lup_invert;
pub use solve::{lup_solve, lup_solve_many};

/// Errors that can occur during PLU factorization and its derived operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PluError {
    #[error("expected a square matrix, got dimensions ({rows}, {cols})")]
    ShapeMismatch { rows: usize, cols: usize },

    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("degenerate matrix detected: no pivot above tolerance in column {column}")]
    DegenerateMatrix { column: usize },

    #[error("invalid tolerance {tolerance}: must be non-negative")]
    InvalidTolerance { tolerance: f64 },
}

impl PluError {
    /// True for errors caused by the shape of the inputs
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(
            self,
            PluError::ShapeMismatch { .. } | PluError::DimensionMismatch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PluError>;
