//! Core types shared by every pricing layer.
//!
//! This module provides:
//! - `PricingError`: Categorised errors from valuation and risk operations

pub mod error;

pub use error::PricingError;
