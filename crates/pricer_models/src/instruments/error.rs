//! Instrument error types.
//!
//! This module provides structured error handling for instrument
//! construction.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidStrike`: Strike price is non-positive
/// - `InvalidVolatility`: Volatility is non-positive
/// - `InvalidExpiry`: Expiry time is non-positive
/// - `InvalidRate`: Risk-free rate is not finite
/// - `InvalidDepth`: Lattice depth is zero or above the lattice ceiling
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid expiry time (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid risk-free rate (NaN or infinite).
    #[error("Invalid rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Invalid lattice depth (zero or above the lattice ceiling).
    #[error("Invalid lattice depth: n = {depth}")]
    InvalidDepth {
        /// The invalid depth value
        depth: usize,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_strike_display() {
        let err = InstrumentError::InvalidStrike { strike: -100.0 };
        assert_eq!(format!("{}", err), "Invalid strike: K = -100");
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = InstrumentError::InvalidExpiry { expiry: -0.5 };
        assert_eq!(format!("{}", err), "Invalid expiry: T = -0.5");
    }

    #[test]
    fn test_invalid_depth_display() {
        let err = InstrumentError::InvalidDepth { depth: 0 };
        assert_eq!(format!("{}", err), "Invalid lattice depth: n = 0");
    }

    #[test]
    fn test_into_pricing_error() {
        let pricing_err: PricingError = InstrumentError::InvalidVolatility { volatility: 0.0 }.into();
        match pricing_err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("volatility")),
            _ => panic!("Expected InvalidInput variant"),
        }
    }
}
