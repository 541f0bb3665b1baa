//! Risk engine error types.

use pricer_core::types::PricingError;
use pricer_pricing::mc::ConfigError;
use thiserror::Error;

/// Errors that can occur while computing risk measures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    /// Too few scenarios for a non-empty loss tail at the configured confidence.
    #[error("Insufficient scenarios: {n_scenarios} given, at least {minimum} required")]
    InsufficientScenarios {
        /// Scenario count supplied.
        n_scenarios: usize,
        /// Smallest count with a non-empty tail.
        minimum: usize,
    },

    /// The scenario sample cannot produce a meaningful tail.
    #[error("Degenerate simulation: {0}")]
    DegenerateSimulation(String),

    /// Valuation failure.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Invalid Monte Carlo configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<RiskError> for PricingError {
    fn from(err: RiskError) -> Self {
        match err {
            RiskError::InsufficientScenarios { .. } => PricingError::InvalidInput(err.to_string()),
            RiskError::DegenerateSimulation(msg) => PricingError::DegenerateSimulation(msg),
            RiskError::Pricing(inner) => inner,
            RiskError::Config(inner) => inner.into(),
        }
    }
}
