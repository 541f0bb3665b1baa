//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing and risk operations
//!
//! Layer-specific errors (instrument construction, lattice, Monte Carlo
//! configuration) convert into `PricingError` via `From` so that callers
//! at the top of the stack see a single taxonomy.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode. A failed precondition
/// aborts the single request that raised it; no variant carries a
/// substitute value.
///
/// # Variants
/// - `InvalidInput`: Invalid contract, lattice or simulation parameters
/// - `NumericalDomain`: Input outside the domain of the pricing formula (e.g. non-positive spot)
/// - `NumericalInstability`: Computation produced an unusable intermediate
/// - `DegenerateSimulation`: Scenario sample too small or malformed for tail statistics
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative strike".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative strike");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input outside the mathematical domain of the formula
    #[error("Numerical domain error: {0}")]
    NumericalDomain(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Simulation cannot support the requested tail statistic
    #[error("Degenerate simulation: {0}")]
    DegenerateSimulation(String),
}

impl PricingError {
    /// Returns `true` for errors caused by caller-supplied parameters.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PricingError::InvalidInput(_) | PricingError::NumericalDomain(_)
        )
    }
}

/// Validates a spot price for valuation calls.
///
/// # Errors
/// Returns `PricingError::NumericalDomain` if `spot` is non-positive or not finite.
///
/// # Examples
/// ```
/// use pricer_core::types::error::check_spot;
///
/// assert!(check_spot(100.0).is_ok());
/// assert!(check_spot(0.0).is_err());
/// assert!(check_spot(f64::NAN).is_err());
/// ```
pub fn check_spot(spot: f64) -> Result<(), PricingError> {
    if spot > 0.0 && spot.is_finite() {
        Ok(())
    } else {
        Err(PricingError::NumericalDomain(format!(
            "spot must be positive and finite, got {}",
            spot
        )))
    }
}
