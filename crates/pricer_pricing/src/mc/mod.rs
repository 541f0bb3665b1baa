//! Monte Carlo scenario simulation.
//!
//! This module provides the configuration and scenario generation used by
//! the risk layer's Value-at-Risk engine.
//!
//! # Architecture
//!
//! ```text
//! RiskEngine (pricer_risk)
//! ├── MonteCarloConfig   (scenario count, horizon, confidence, seed)
//! ├── GbmParams          (spot, rate, volatility, horizon)
//! └── NormalSource       (caller-owned random-variate stream)
//!     └── generate_scenario_spots()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pricer_pricing::mc::{generate_scenario_spots, GbmParams, MonteCarloConfig};
//! use pricer_pricing::rng::PricerRng;
//!
//! let config = MonteCarloConfig::builder()
//!     .n_scenarios(1_000)
//!     .build()
//!     .unwrap();
//!
//! let mut rng = PricerRng::from_seed(config.seed());
//! let params = GbmParams::new(100.0, 0.05, 0.25, config.horizon());
//! let spots = generate_scenario_spots(&params, config.n_scenarios(), &mut rng).unwrap();
//!
//! assert_eq!(spots.len(), 1_000);
//! ```

mod config;
mod error;
mod scenarios;

pub use config::{
    min_scenarios, tail_len, MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_CONFIDENCE,
    MAX_SCENARIOS, TRADING_DAY,
};
pub use error::ConfigError;
pub use scenarios::{generate_scenario_spots, GbmParams};
