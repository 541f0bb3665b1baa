//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables,
//! and command-line overrides.

use std::path::Path;
use std::str::FromStr;

use pricer_models::lattice::{is_valid_depth, MAX_DEPTH};
use pricer_pricing::mc::{self, MonteCarloConfig};
use pricer_pricing::rng::DEFAULT_SEED;
use serde::Deserialize;
use thiserror::Error;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "pricer.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),

    #[error("Invalid Monte Carlo settings: {0}")]
    MonteCarlo(#[from] mc::ConfigError),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LogLevel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// `[pricing]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingSection {
    /// Lattice depth applied to every portfolio position
    pub portfolio_depth: usize,
    /// Lattice depth for single-instrument valuation
    pub instrument_depth: usize,
}

impl Default for PricingSection {
    fn default() -> Self {
        Self {
            portfolio_depth: 500,
            instrument_depth: 20_000,
        }
    }
}

/// `[risk]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RiskSection {
    /// Number of Monte Carlo scenarios
    pub n_scenarios: usize,
    /// Generator seed
    pub seed: u64,
    /// Confidence level of VaR and ES
    pub confidence: f64,
}

impl Default for RiskSection {
    fn default() -> Self {
        Self {
            n_scenarios: 20_000,
            seed: DEFAULT_SEED,
            confidence: mc::DEFAULT_CONFIDENCE,
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Valuation settings
    pub pricing: PricingSection,
    /// Risk simulation settings
    pub risk: RiskSection,
}

/// Command-line overrides (highest priority)
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Log level override
    pub log_level: Option<String>,
    /// Scenario count override
    pub n_scenarios: Option<usize>,
    /// Seed override
    pub seed: Option<u64>,
    /// Confidence override
    pub confidence: Option<f64>,
    /// Portfolio depth override
    pub portfolio_depth: Option<usize>,
    /// Instrument depth override
    pub instrument_depth: Option<usize>,
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load the file at `path`, or defaults when `path` is the default file
    /// name and no such file exists.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() && path == Path::new(DEFAULT_CONFIG_FILE) {
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Apply `PRICER_*` environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("PRICER_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(n) = lookup("PRICER_SCENARIOS") {
            self.risk.n_scenarios = n
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("PRICER_SCENARIOS={}", n)))?;
        }
        if let Some(seed) = lookup("PRICER_SEED") {
            self.risk.seed = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("PRICER_SEED={}", seed)))?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(n) = cli.n_scenarios {
            self.risk.n_scenarios = n;
        }
        if let Some(seed) = cli.seed {
            self.risk.seed = seed;
        }
        if let Some(confidence) = cli.confidence {
            self.risk.confidence = confidence;
        }
        if let Some(depth) = cli.portfolio_depth {
            self.pricing.portfolio_depth = depth;
        }
        if let Some(depth) = cli.instrument_depth {
            self.pricing.instrument_depth = depth;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_depth(self.pricing.portfolio_depth) {
            return Err(ConfigError::InvalidValue {
                field: "pricing.portfolio_depth",
                reason: format!("must be in [1, {}]", MAX_DEPTH),
            });
        }
        if !is_valid_depth(self.pricing.instrument_depth) {
            return Err(ConfigError::InvalidValue {
                field: "pricing.instrument_depth",
                reason: format!("must be in [1, {}]", MAX_DEPTH),
            });
        }
        self.monte_carlo()?;
        Ok(())
    }

    /// Monte Carlo configuration for the risk engine
    pub fn monte_carlo(&self) -> Result<MonteCarloConfig, ConfigError> {
        let config = MonteCarloConfig::builder()
            .n_scenarios(self.risk.n_scenarios)
            .confidence(self.risk.confidence)
            .seed(self.risk.seed)
            .build()?;
        Ok(config)
    }
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(path: &Path, cli: &CliOverrides) -> Result<CliConfig, ConfigError> {
    let mut config = CliConfig::load(path)?;
    config.apply_env()?;
    config.merge_with_cli(cli)?;
    config.validate()?;
    Ok(config)
}
