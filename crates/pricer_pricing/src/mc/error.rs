//! Error types for Monte Carlo configuration.
//!
//! This module defines structured error types for configuration validation
//! of the scenario engine.

use std::fmt;

use pricer_core::types::PricingError;

/// Configuration error for the Monte Carlo engine.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Scenario count outside valid range [1, 10_000_000].
    InvalidScenarioCount(usize),
    /// Horizon not strictly positive and finite.
    InvalidHorizon(f64),
    /// Confidence level outside the open interval (0, 1).
    InvalidConfidence(f64),
    /// Invalid parameter value with name and description.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScenarioCount(count) => {
                write!(
                    f,
                    "Invalid scenario count {}: must be in range [1, 10_000_000]",
                    count
                )
            }
            Self::InvalidHorizon(horizon) => {
                write!(f, "Invalid horizon {}: must be positive and finite", horizon)
            }
            Self::InvalidConfidence(confidence) => {
                write!(
                    f,
                    "Invalid confidence level {}: must lie strictly between 0 and 1",
                    confidence
                )
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter '{}': {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
