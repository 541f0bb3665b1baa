//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Analytical reference Greeks (Delta, Gamma, Vega)
//!
//! ## Design Principles
//!
//! - **Numerical Stability**: Uses an erfc-based CDF accurate to machine
//!   precision in the tails, which matters for deep out-of-the-money options
//! - **Validated construction**: spot and volatility are checked once when
//!   the model is built

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
