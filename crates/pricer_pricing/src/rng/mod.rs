//! # Random Number Generation Infrastructure
//!
//! This module provides the random-variate sources used by scenario
//! generation.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: generators are seeded; the default seed is fixed
//! - **Injection**: consumers are generic over [`NormalSource`], never over a
//!   concrete generator, so deterministic streams can be substituted
//! - **Batching**: [`NormalSource::fill_normals`] fills caller-owned slices
//!
//! ## Module Structure
//!
//! - [`PricerRng`]: seeded PRNG wrapper around `rand::StdRng`
//! - [`NormalSource`]: the standard normal draw seam
//! - [`ReplayNormals`]: cycles through a fixed sequence of draws
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::{NormalSource, PricerRng, DEFAULT_SEED};
//!
//! let mut rng = PricerRng::new();
//! assert_eq!(rng.seed(), DEFAULT_SEED);
//!
//! let z = rng.next_normal();
//! assert!(z.is_finite());
//!
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normals(&mut buffer);
//! ```

mod prng;
mod source;

pub use prng::{PricerRng, DEFAULT_SEED};
pub use source::{NormalSource, ReplayNormals};
