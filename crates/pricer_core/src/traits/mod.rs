//! Core traits for priceable instruments.
//!
//! This module defines the valuation abstraction shared between the
//! instrument layer (which implements it) and the portfolio layer
//! (which aggregates over it).

pub mod priceable;

pub use priceable::{Priceable, DELTA_BUMP};
