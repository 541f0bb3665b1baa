//! # Pricer Risk (L4: Application)
//!
//! Option portfolio aggregation and one-day Monte Carlo risk measures.
//!
//! This crate provides:
//! - Weighted positions over shared, read-only instruments
//! - Portfolio value and delta at a uniform lattice depth
//! - Value-at-Risk and Expected Shortfall from simulated scenario spots
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  portfolio/  - Position, Portfolio      │
//! │  var/        - RiskEngine, RiskMeasures │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_pricing (L3)           │
//! │  Seeded RNG, GBM scenario generation    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_models::instruments::VanillaOption;
//! use pricer_pricing::rng::PricerRng;
//! use pricer_risk::portfolio::Portfolio;
//!
//! let call = VanillaOption::european_call(100.0, 0.25, 1.0, 0.05, 50).unwrap();
//! let put = VanillaOption::american_put(100.0, 0.25, 1.0, 0.05, 50).unwrap();
//!
//! // Instruments outlive the portfolio that references them
//! let mut portfolio = Portfolio::with_depth(50).unwrap();
//! portfolio.add_position(10.0, &call);
//! portfolio.add_position(10.0, &put);
//!
//! let value = portfolio.value(100.0).unwrap();
//! assert!(value > 0.0);
//!
//! let mut rng = PricerRng::new();
//! let report = portfolio.risk_measures(&mut rng, 100.0, 0.25, 0.05, 200).unwrap();
//! assert!(report.expected_shortfall >= report.value_at_risk);
//! ```

#![warn(missing_docs)]

pub mod portfolio;
pub mod var;
