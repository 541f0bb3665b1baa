//! Portfolio position.

use std::fmt;

use pricer_core::traits::Priceable;
use pricer_core::types::PricingError;
use pricer_models::instruments::VanillaOption;

/// A signed quantity of one instrument.
///
/// The instrument is borrowed, never owned; negative weights are short
/// positions.
pub struct Position<'a, P: ?Sized = VanillaOption> {
    weight: f64,
    instrument: &'a P,
}

impl<'a, P: ?Sized> Position<'a, P> {
    /// Creates a position of `weight` units of `instrument`.
    #[inline]
    pub fn new(weight: f64, instrument: &'a P) -> Self {
        Self { weight, instrument }
    }

    /// Returns the quantity held.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the referenced instrument.
    #[inline]
    pub fn instrument(&self) -> &'a P {
        self.instrument
    }
}

impl<P: Priceable + ?Sized> Position<'_, P> {
    /// Weighted instrument value at `spot` and lattice `depth`.
    ///
    /// # Errors
    /// Propagates the instrument's valuation error.
    #[inline]
    pub fn value(&self, spot: f64, depth: usize) -> Result<f64, PricingError> {
        Ok(self.weight * self.instrument.value(spot, depth)?)
    }

    /// Weighted instrument delta at `spot` and lattice `depth`.
    ///
    /// # Errors
    /// Propagates the instrument's valuation error.
    #[inline]
    pub fn delta(&self, spot: f64, depth: usize) -> Result<f64, PricingError> {
        Ok(self.weight * self.instrument.delta(spot, depth)?)
    }
}

impl<P: ?Sized> Clone for Position<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ?Sized> Copy for Position<'_, P> {}

impl<P: fmt::Debug + ?Sized> fmt::Debug for Position<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("weight", &self.weight)
            .field("instrument", &self.instrument)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_value() {
        let put = VanillaOption::european_put(50.0, 0.2, 0.5, 0.1, 10).unwrap();
        let short = Position::new(-3.0, &put);

        let unit = put.value(50.0, 10).unwrap();
        assert_eq!(short.value(50.0, 10).unwrap(), -3.0 * unit);
        assert_eq!(short.weight(), -3.0);
        assert!(std::ptr::eq(short.instrument(), &put));
    }

    #[test]
    fn test_weighted_delta() {
        let call = VanillaOption::american_call(50.0, 0.2, 0.5, 0.1, 10).unwrap();
        let long = Position::new(2.0, &call);
        assert_eq!(
            long.delta(50.0, 40).unwrap(),
            2.0 * call.delta(50.0, 40).unwrap()
        );
    }

    #[test]
    fn test_trait_object_position() {
        let call = VanillaOption::european_call(50.0, 0.2, 0.5, 0.1, 10).unwrap();
        let dynamic: &dyn Priceable = &call;
        let position = Position::new(1.0, dynamic);
        assert_eq!(
            position.value(50.0, 1).unwrap(),
            call.value(50.0, 1).unwrap()
        );
    }
}
