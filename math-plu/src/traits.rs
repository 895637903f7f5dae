//! Element trait for the factorization routines
//!
//! [`Field`] abstracts over real and complex scalars. Partial pivoting only
//! needs to compare magnitudes, so every element exposes a real-valued
//! [`Field::modulus`] and the tolerance is expressed in [`Field::Real`].
//!
//! # Implementations
//!
//! Provided for:
//! - `f64` (default for most callers)
//! - `f32`
//! - `Complex64`
//! - `Complex32`

use num_complex::{Complex32, Complex64};
use num_traits::{Float, FromPrimitive, NumAssign, One, ToPrimitive, Zero};
use std::fmt::Debug;
use std::ops::Neg;

/// Scalar type that can be stored in a matrix handed to the PLU routines.
pub trait Field:
    NumAssign + Copy + Send + Sync + Debug + Zero + One + Neg<Output = Self> + 'static
{
    /// Real type used for magnitudes and tolerances
    type Real: Float + NumAssign + FromPrimitive + ToPrimitive + Send + Sync + Debug + 'static;

    /// Magnitude |z|, used to rank pivot candidates
    fn modulus(&self) -> Self::Real;

    /// Create from a real value
    fn from_real(r: Self::Real) -> Self;
}

impl Field for f64 {
    type Real = f64;

    #[inline]
    fn modulus(&self) -> f64 {
        self.abs()
    }

    #[inline]
    fn from_real(r: f64) -> Self {
        r
    }
}

impl Field for f32 {
    type Real = f32;

    #[inline]
    fn modulus(&self) -> f32 {
        self.abs()
    }

    #[inline]
    fn from_real(r: f32) -> Self {
        r
    }
}

impl Field for Complex64 {
    type Real = f64;

    #[inline]
    fn modulus(&self) -> f64 {
        self.norm()
    }

    #[inline]
    fn from_real(r: f64) -> Self {
        Complex64::new(r, 0.0)
    }
}

impl Field for Complex32 {
    type Real = f32;

    #[inline]
    fn modulus(&self) -> f32 {
        self.norm()
    }

    #[inline]
    fn from_real(r: f32) -> Self {
        Complex32::new(r, 0.0)
    }
}
