//! Lattice pricing for early-exercise options.
//!
//! This module provides a Cox-Ross-Rubinstein recombining binomial tree.
//! The tree is agnostic to payoff side and exercise style: callers supply
//! an exercise-value function `(spot, t) -> f64` and the tree takes the
//! maximum of that value and the discounted continuation at every node.
//!
//! ```text
//! VanillaOption::exercise_value ──► BinomialTree::price ──► value at t = 0
//! ```

pub mod binomial;
pub mod error;

pub use binomial::{is_valid_depth, BinomialTree, MAX_DEPTH};
pub use error::LatticeError;
