//! # Pricer Models (L2: Business Logic)
//!
//! Option instruments and the two pricers they dispatch to.
//!
//! This crate provides:
//! - Instrument definitions (European/American calls and puts)
//! - Black-Scholes closed-form pricing with erfc-based normal CDF
//! - Cox-Ross-Rubinstein binomial lattice with early exercise
//!
//! ## Design Principles
//!
//! - **Enum-based instruments** for static dispatch over the closed variant set
//! - **Exercise policy as a function**: the lattice only sees an exercise-value
//!   callback, never the payoff side or exercise style
//! - **Fail fast**: invalid parameters are rejected with typed errors instead
//!   of producing NaN
//!
//! ## Example
//!
//! ```
//! use pricer_models::instruments::VanillaOption;
//!
//! let call = VanillaOption::european_call(50.0, 0.2, 0.5, 0.1, 500).unwrap();
//! let put = VanillaOption::american_put(50.0, 0.2, 0.5, 0.1, 500).unwrap();
//!
//! let call_value = call.value(50.0, 500).unwrap();
//! let put_value = put.value(50.0, 500).unwrap();
//!
//! assert!((call_value - 4.1389).abs() < 1e-3);
//! // Early exercise premium over the European put (~1.70)
//! assert!(put_value > 1.70);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod lattice;
