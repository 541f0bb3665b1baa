//! # pricer_core: Foundation Layer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace and provides:
//! - Error types: `PricingError` (`types::error`)
//! - Valuation traits: `Priceable` (`traits::priceable`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates. Its only external
//! dependency is thiserror for error derivation.
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::traits::Priceable;
//! use pricer_core::types::PricingError;
//!
//! struct Forward {
//!     strike: f64,
//! }
//!
//! impl Priceable for Forward {
//!     fn value(&self, spot: f64, _depth: usize) -> Result<f64, PricingError> {
//!         Ok(spot - self.strike)
//!     }
//! }
//!
//! let forward = Forward { strike: 100.0 };
//! assert_eq!(forward.value(110.0, 1).unwrap(), 10.0);
//!
//! // Delta is the value change for a 1% bump in the underlying
//! let delta = forward.delta(100.0, 1).unwrap();
//! assert!((delta - 1.0).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod traits;
pub mod types;
