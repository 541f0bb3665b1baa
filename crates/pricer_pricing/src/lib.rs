//! # Pricer Pricing (Layer 3: Simulation Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing supplies the stochastic inputs of the risk layer:
//! - Seeded pseudo-random number generation with an injectable source trait
//! - Monte Carlo configuration (scenario count, horizon, confidence, seed)
//! - One-step geometric Brownian motion scenario generation
//!
//! Generators are explicit values passed by the caller. There is no
//! process-wide generator state; two engines seeded alike produce identical
//! streams, and tests can substitute a fixed stream of normals.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::mc::{generate_scenario_spots, GbmParams, TRADING_DAY};
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(42);
//! let params = GbmParams::new(100.0, 0.05, 0.25, TRADING_DAY);
//!
//! let spots = generate_scenario_spots(&params, 1000, &mut rng).unwrap();
//! assert_eq!(spots.len(), 1000);
//! assert!(spots.iter().all(|&s| s > 0.0));
//! ```

#![warn(missing_docs)]

pub mod mc;
pub mod rng;
