//! Factorization configuration

use crate::{PluError, Result};
use num_traits::{Float, ToPrimitive};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pivot magnitude under which a column is considered numerically zero.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// PLU factorization configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "R: Serialize",
        deserialize = "R: Deserialize<'de> + Float"
    ))
)]
pub struct PluConfig<R> {
    /// Pivots with a magnitude below this value are treated as zero.
    /// Must be non-negative; zero only rejects exact-zero pivots.
    #[cfg_attr(feature = "serde", serde(default = "default_tolerance"))]
    pub tolerance: R,
}

impl Default for PluConfig<f64> {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Default for PluConfig<f32> {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE as f32,
        }
    }
}

impl<R: Float> PluConfig<R> {
    /// Create a configuration with the given tolerance
    pub fn new(tolerance: R) -> Self {
        Self { tolerance }
    }

    /// Replace the tolerance
    pub fn with_tolerance(mut self, tolerance: R) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Check that the tolerance is usable
    pub fn validate(&self) -> Result<()> {
        check_tolerance(self.tolerance)
    }
}

#[cfg(feature = "serde")]
fn default_tolerance<R: Float>() -> R {
    num_traits::cast(DEFAULT_TOLERANCE).unwrap_or_else(R::epsilon)
}

/// Reject negative and NaN tolerances.
pub(crate) fn check_tolerance<R: Float>(tolerance: R) -> Result<()> {
    if tolerance >= R::zero() {
        Ok(())
    } else {
        Err(PluError::InvalidTolerance {
            tolerance: tolerance.to_f64().unwrap_or(f64::NAN),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tolerance() {
        assert_eq!(PluConfig::<f64>::default().tolerance, 1e-9);
        assert_eq!(PluConfig::<f32>::default().tolerance, 1e-9_f32);
    }

    #[test]
    fn test_validate() {
        assert!(PluConfig::new(0.0_f64).validate().is_ok());
        assert!(PluConfig::<f64>::default().with_tolerance(1e-3).validate().is_ok());

        let err = PluConfig::new(-1e-6_f64).validate().unwrap_err();
        assert!(matches!(err, PluError::InvalidTolerance { tolerance } if tolerance == -1e-6));

        assert!(matches!(
            PluConfig::new(f64::NAN).validate(),
            Err(PluError::InvalidTolerance { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_and_default() {
        let config: PluConfig<f64> = serde_json::from_str(r#"{"tolerance": 1e-6}"#).unwrap();
        assert_eq!(config.tolerance, 1e-6);

        let config: PluConfig<f64> = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PluConfig::default());

        let json = serde_json::to_string(&PluConfig::new(0.5_f64)).unwrap();
        assert_eq!(json, r#"{"tolerance":0.5}"#);
    }
}
