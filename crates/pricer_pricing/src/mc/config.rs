//! Monte Carlo simulation configuration.
//!
//! This module provides configuration types and builders for one-step
//! scenario simulations.

use super::error::ConfigError;
use crate::rng::DEFAULT_SEED;

/// Maximum number of scenarios allowed.
pub const MAX_SCENARIOS: usize = 10_000_000;

/// One trading day in years.
pub const TRADING_DAY: f64 = 1.0 / 252.0;

/// Default confidence level for VaR and Expected Shortfall.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{MonteCarloConfig, TRADING_DAY};
///
/// let config = MonteCarloConfig::builder()
///     .n_scenarios(20_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_scenarios(), 20_000);
/// assert_eq!(config.horizon(), TRADING_DAY);
/// assert_eq!(config.confidence(), 0.95);
/// assert_eq!(config.tail_len(), 1_000);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMonteCarloConfig"))]
pub struct MonteCarloConfig {
    /// Number of scenarios.
    n_scenarios: usize,
    /// Simulation horizon in years.
    horizon: f64,
    /// Confidence level of the risk measures.
    confidence: f64,
    /// Seed for reproducibility.
    seed: u64,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of scenarios.
    #[inline]
    pub fn n_scenarios(&self) -> usize {
        self.n_scenarios
    }

    /// Returns the simulation horizon in years.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Returns the confidence level.
    #[inline]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Returns the seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of worst outcomes forming the loss tail: `floor((1 − c)·N)`.
    #[inline]
    pub fn tail_len(&self) -> usize {
        tail_len(self.confidence, self.n_scenarios)
    }

    /// Smallest scenario count with a non-empty tail at this confidence.
    #[inline]
    pub fn min_scenarios(&self) -> usize {
        min_scenarios(self.confidence)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_scenarios` is 0 or greater than 10,000,000
    /// - `horizon` is not positive and finite
    /// - `confidence` is outside (0, 1)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_scenarios == 0 || self.n_scenarios > MAX_SCENARIOS {
            return Err(ConfigError::InvalidScenarioCount(self.n_scenarios));
        }
        if !(self.horizon > 0.0 && self.horizon.is_finite()) {
            return Err(ConfigError::InvalidHorizon(self.horizon));
        }
        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            return Err(ConfigError::InvalidConfidence(self.confidence));
        }
        Ok(())
    }
}

/// Unvalidated wire form; deserialisation goes through [`MonteCarloConfig::validate`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMonteCarloConfig {
    n_scenarios: usize,
    horizon: f64,
    confidence: f64,
    seed: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMonteCarloConfig> for MonteCarloConfig {
    type Error = ConfigError;

    fn try_from(raw: RawMonteCarloConfig) -> Result<Self, Self::Error> {
        let config = MonteCarloConfig {
            n_scenarios: raw.n_scenarios,
            horizon: raw.horizon,
            confidence: raw.confidence,
            seed: raw.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Tail length for `n` outcomes at `confidence`: `floor((1 − c)·n)`.
///
/// At `c = 0.95` this is `floor(0.05·n)`.
#[inline]
pub fn tail_len(confidence: f64, n: usize) -> usize {
    // Absorbs rounding in `1 − c` (e.g. 1 − 0.9 < 0.1).
    ((1.0 - confidence) * n as f64 + TAIL_EPSILON).floor() as usize
}

const TAIL_EPSILON: f64 = 1e-9;

/// Smallest `n` for which [`tail_len`] is at least one.
///
/// Returns `usize::MAX` when no such `n` exists (confidence of 1 or more).
pub fn min_scenarios(confidence: f64) -> usize {
    let tail = 1.0 - confidence;
    if tail.is_nan() || tail <= 0.0 {
        return usize::MAX;
    }
    let mut n = (1.0 / tail).ceil().max(1.0) as usize;
    // The reciprocal can round either way; settle on the exact boundary.
    while n > 1 && tail_len(confidence, n - 1) >= 1 {
        n -= 1;
    }
    while tail_len(confidence, n) == 0 {
        n += 1;
    }
    n
}

/// Builder for [`MonteCarloConfig`].
///
/// Provides a fluent API for constructing Monte Carlo configurations
/// with validation at build time. The scenario count is required; the
/// horizon defaults to one trading day, the confidence to 95% and the seed
/// to [`DEFAULT_SEED`].
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_scenarios(50_000)
///     .horizon(10.0 / 252.0)
///     .confidence(0.99)
///     .seed(12345)
///     .build()
///     .expect("valid config");
/// assert_eq!(config.tail_len(), 500);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_scenarios: Option<usize>,
    horizon: Option<f64>,
    confidence: Option<f64>,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of scenarios.
    ///
    /// # Arguments
    ///
    /// * `n_scenarios` - Number of scenarios in [1, 10_000_000]
    #[inline]
    pub fn n_scenarios(mut self, n_scenarios: usize) -> Self {
        self.n_scenarios = Some(n_scenarios);
        self
    }

    /// Sets the simulation horizon in years.
    #[inline]
    pub fn horizon(mut self, horizon: f64) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// Sets the confidence level.
    #[inline]
    pub fn confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_scenarios` is not set or any value is invalid.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let n_scenarios = self.n_scenarios.ok_or(ConfigError::InvalidParameter {
            name: "n_scenarios",
            value: "must be specified".to_string(),
        })?;

        let config = MonteCarloConfig {
            n_scenarios,
            horizon: self.horizon.unwrap_or(TRADING_DAY),
            confidence: self.confidence.unwrap_or(DEFAULT_CONFIDENCE),
            seed: self.seed.unwrap_or(DEFAULT_SEED),
        };

        config.validate()?;
        Ok(config)
    }
}
