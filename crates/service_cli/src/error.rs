//! CLI error types.

use pricer_core::types::PricingError;
use pricer_models::instruments::InstrumentError;
use pricer_risk::var::RiskError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Instrument construction failed.
    #[error("Invalid instrument: {0}")]
    Instrument(#[from] InstrumentError),

    /// Valuation failed.
    #[error("Pricing failed: {0}")]
    Pricing(#[from] PricingError),

    /// Risk simulation failed.
    #[error("Risk calculation failed: {0}")]
    Risk(#[from] RiskError),

    /// Result serialisation failed.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
