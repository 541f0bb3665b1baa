//! Error types for lattice pricing.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Lattice construction and evaluation errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LatticeError {
    /// Tree depth outside `[1, MAX_DEPTH]`.
    #[error("Invalid lattice depth: n = {depth}, must be in [1, 100000]")]
    InvalidDepth {
        /// The invalid depth value
        depth: usize,
    },

    /// Spot price outside the log domain.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Risk-neutral probability outside [0, 1]; the step is too coarse for
    /// the given rate and volatility.
    #[error("Risk-neutral probability outside [0, 1]: p = {probability}")]
    InvalidProbability {
        /// The computed probability
        probability: f64,
    },
}

impl From<LatticeError> for PricingError {
    fn from(err: LatticeError) -> Self {
        match err {
            LatticeError::InvalidDepth { .. } => PricingError::InvalidInput(err.to_string()),
            LatticeError::InvalidSpot { .. } => PricingError::NumericalDomain(err.to_string()),
            LatticeError::InvalidProbability { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = LatticeError::InvalidDepth { depth: 0 };
        assert_eq!(
            format!("{}", err),
            "Invalid lattice depth: n = 0, must be in [1, 100000]"
        );
    }

    #[test]
    fn test_conversion_categories() {
        let depth: PricingError = LatticeError::InvalidDepth { depth: 0 }.into();
        assert!(matches!(depth, PricingError::InvalidInput(_)));

        let spot: PricingError = LatticeError::InvalidSpot { spot: -1.0 }.into();
        assert!(matches!(spot, PricingError::NumericalDomain(_)));

        let prob: PricingError = LatticeError::InvalidProbability { probability: 1.2 }.into();
        assert!(matches!(prob, PricingError::NumericalInstability(_)));
    }
}
