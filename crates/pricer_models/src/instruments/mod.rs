//! Financial instrument definitions.
//!
//! This module provides the option instrument and its building blocks
//! with enum dispatch over a closed variant set.
//!
//! # Architecture
//!
//! Two orthogonal axes select behaviour:
//! - [`ExerciseStyle`] decides which pricer is authoritative
//! - [`PayoffType`] decides the intrinsic-value function
//!
//! [`OptionKind`] is the tag combining both; [`VanillaOption`] carries the
//! tag's axes together with validated [`InstrumentParams`].
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{InstrumentParams, OptionKind, VanillaOption};
//!
//! let params = InstrumentParams::new(100.0, 0.25, 1.0, 0.05).unwrap();
//! let options: Vec<VanillaOption> = OptionKind::ALL
//!     .iter()
//!     .map(|&kind| VanillaOption::new(kind, params, 500).unwrap())
//!     .collect();
//!
//! for option in &options {
//!     assert!(option.value(100.0, 200).unwrap() > 0.0);
//! }
//! ```

mod error;
mod exercise;
mod kind;
mod params;
mod payoff;
mod vanilla;

pub use error::InstrumentError;
pub use exercise::ExerciseStyle;
pub use kind::OptionKind;
pub use params::InstrumentParams;
pub use payoff::PayoffType;
pub use vanilla::VanillaOption;
