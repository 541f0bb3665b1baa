//! Monte Carlo Value-at-Risk and Expected Shortfall.
//!
//! One simulation revalues the portfolio at `N` one-step GBM scenario
//! spots and sorts the outcomes ascending. With `k = floor((1 − c)·N)`:
//!
//! ```text
//! VaR = V(S) − sorted[k − 1]
//! ES  = V(S) − mean(sorted[0..k])
//! ```
//!
//! Both are losses relative to today's value, so positive numbers are
//! losses and `ES ≥ VaR` whenever the tail is non-empty.

mod engine;
mod error;
mod measures;

pub use engine::RiskEngine;
pub use error::RiskError;
pub use measures::RiskMeasures;
