//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to analytical pricing models

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidVolatility`: Non-positive volatility
/// - `InvalidSpot`: Non-positive or non-finite spot price (log domain)
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid spot price (non-positive for Black-Scholes).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidVolatility { .. } => PricingError::InvalidInput(err.to_string()),
            AnalyticalError::InvalidSpot { .. } => PricingError::NumericalDomain(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_volatility_to_pricing_error() {
        let pricing_err: PricingError = AnalyticalError::InvalidVolatility { volatility: 0.0 }.into();
        match pricing_err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("volatility")),
            _ => panic!("Expected InvalidInput variant"),
        }
    }

    #[test]
    fn test_invalid_spot_to_pricing_error() {
        let pricing_err: PricingError = AnalyticalError::InvalidSpot { spot: -50.0 }.into();
        match pricing_err {
            PricingError::NumericalDomain(msg) => assert!(msg.contains("spot")),
            _ => panic!("Expected NumericalDomain variant"),
        }
    }
}
