//! Traits for priceable instruments.
//!
//! This module defines the `Priceable` trait: a spot-driven valuation
//! with a lattice resolution argument, plus a bump-and-revalue delta.
//!
//! Implementors that do not use a lattice simply ignore the `depth`
//! argument, so a portfolio can apply one resolution uniformly to every
//! position.

use crate::types::PricingError;

/// Relative spot bump used by the finite-difference delta.
pub const DELTA_BUMP: f64 = 0.01;

/// Trait for entities that can be valued against a spot price.
///
/// # Design Philosophy
///
/// Implement this trait for instrument types in `pricer_models`. The
/// portfolio layer is generic over it, which keeps aggregation free of
/// any knowledge about payoff side or exercise style and lets tests
/// substitute simple instruments.
///
/// # Invariants
/// - Both methods are pure: no side effects, deterministic
/// - Invalid inputs return an error rather than NaN
pub trait Priceable {
    /// Computes the value at `spot` using a lattice of `depth` layers
    /// where the implementor needs one.
    ///
    /// # Errors
    /// Returns `PricingError` if `spot` or `depth` is invalid.
    fn value(&self, spot: f64, depth: usize) -> Result<f64, PricingError>;

    /// Value change for a 1% bump in the underlying.
    ///
    /// `value(1.01 · spot) − value(spot)`. This is not normalised per unit
    /// of spot.
    ///
    /// # Errors
    /// Propagates any error from [`Priceable::value`].
    fn delta(&self, spot: f64, depth: usize) -> Result<f64, PricingError> {
        let bumped = self.value((1.0 + DELTA_BUMP) * spot, depth)?;
        let base = self.value(spot, depth)?;
        Ok(bumped - base)
    }
}

impl<P: Priceable + ?Sized> Priceable for &P {
    fn value(&self, spot: f64, depth: usize) -> Result<f64, PricingError> {
        (**self).value(spot, depth)
    }

    fn delta(&self, spot: f64, depth: usize) -> Result<f64, PricingError> {
        (**self).delta(spot, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    struct Linear {
        slope: f64,
    }

    impl Priceable for Linear {
        fn value(&self, spot: f64, _depth: usize) -> Result<f64, PricingError> {
            if spot <= 0.0 {
                return Err(PricingError::NumericalDomain(format!("spot = {}", spot)));
            }
            Ok(self.slope * spot)
        }
    }

    #[test]
    fn test_default_delta_is_one_percent_bump() {
        let inst = Linear { slope: 2.0 };
        let delta = inst.delta(50.0, 1).unwrap();
        // 2 * (50.5 - 50)
        assert_relative_eq!(delta, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_delta_propagates_error() {
        let inst = Linear { slope: 1.0 };
        assert!(matches!(
            inst.delta(-1.0, 1),
            Err(PricingError::NumericalDomain(_))
        ));
    }

    #[test]
    fn test_reference_forwarding() {
        let inst = Linear { slope: 3.0 };
        let by_ref: &Linear = &inst;
        assert_eq!(Priceable::value(&by_ref, 10.0, 1).unwrap(), 30.0);
    }
}
