//! Weighted option portfolios.
//!
//! Positions borrow their instruments: a portfolio never owns what it
//! values, and the borrow checker guarantees every referenced instrument
//! outlives the portfolio.

mod holdings;
mod position;

pub use holdings::{Portfolio, DEFAULT_PORTFOLIO_DEPTH};
pub use position::Position;
