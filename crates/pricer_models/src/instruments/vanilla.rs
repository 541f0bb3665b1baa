//! Vanilla option definitions.
//!
//! This module provides the option instrument that combines validated
//! parameters with a payoff side and an exercise style, and dispatches
//! valuation to the appropriate pricer:
//!
//! | Style | `value` | `closed_form_value` |
//! |-------|---------|---------------------|
//! | European | Black-Scholes | Black-Scholes |
//! | American | Binomial lattice | Black-Scholes (diagnostic only) |

use pricer_core::traits::Priceable;
use pricer_core::types::PricingError;

use super::error::InstrumentError;
use super::exercise::ExerciseStyle;
use super::kind::OptionKind;
use super::params::InstrumentParams;
use super::payoff::PayoffType;
use crate::analytical::BlackScholes;
use crate::lattice::{is_valid_depth, BinomialTree};

/// Vanilla option instrument.
///
/// Immutable once constructed. Instances are shared read-only by any
/// number of portfolio positions.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionKind, VanillaOption};
///
/// let call = VanillaOption::european_call(50.0, 0.2, 0.5, 0.1, 500).unwrap();
/// assert_eq!(call.kind(), OptionKind::EuropeanCall);
///
/// let value = call.value(50.0, 500).unwrap();
/// assert!((value - 4.1389).abs() < 1e-3);
///
/// // Delta is the value change for a 1% spot bump
/// let delta = call.delta(50.0, 500).unwrap();
/// assert!(delta > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawVanillaOption"))]
pub struct VanillaOption {
    params: InstrumentParams,
    payoff_type: PayoffType,
    exercise_style: ExerciseStyle,
    default_depth: usize,
}

impl VanillaOption {
    /// Creates a new vanilla option.
    ///
    /// # Arguments
    /// * `kind` - Variant tag (style and side)
    /// * `params` - Validated contract parameters
    /// * `default_depth` - Lattice depth used by [`VanillaOption::value_default`]
    ///
    /// # Errors
    /// Returns `InstrumentError::InvalidDepth` if `default_depth` is zero or
    /// above [`MAX_DEPTH`](crate::lattice::MAX_DEPTH).
    pub fn new(
        kind: OptionKind,
        params: InstrumentParams,
        default_depth: usize,
    ) -> Result<Self, InstrumentError> {
        if !is_valid_depth(default_depth) {
            return Err(InstrumentError::InvalidDepth {
                depth: default_depth,
            });
        }

        Ok(Self {
            params,
            payoff_type: kind.payoff_type(),
            exercise_style: kind.exercise_style(),
            default_depth,
        })
    }

    fn from_raw(
        kind: OptionKind,
        strike: f64,
        volatility: f64,
        expiry: f64,
        rate: f64,
        default_depth: usize,
    ) -> Result<Self, InstrumentError> {
        let params = InstrumentParams::new(strike, volatility, expiry, rate)?;
        Self::new(kind, params, default_depth)
    }

    /// Creates a European call.
    ///
    /// # Errors
    /// Returns `InstrumentError` if any parameter is invalid.
    pub fn european_call(
        strike: f64,
        volatility: f64,
        expiry: f64,
        rate: f64,
        default_depth: usize,
    ) -> Result<Self, InstrumentError> {
        Self::from_raw(
            OptionKind::EuropeanCall,
            strike,
            volatility,
            expiry,
            rate,
            default_depth,
        )
    }

    /// Creates a European put.
    ///
    /// # Errors
    /// Returns `InstrumentError` if any parameter is invalid.
    pub fn european_put(
        strike: f64,
        volatility: f64,
        expiry: f64,
        rate: f64,
        default_depth: usize,
    ) -> Result<Self, InstrumentError> {
        Self::from_raw(
            OptionKind::EuropeanPut,
            strike,
            volatility,
            expiry,
            rate,
            default_depth,
        )
    }

    /// Creates an American call.
    ///
    /// # Errors
    /// Returns `InstrumentError` if any parameter is invalid.
    pub fn american_call(
        strike: f64,
        volatility: f64,
        expiry: f64,
        rate: f64,
        default_depth: usize,
    ) -> Result<Self, InstrumentError> {
        Self::from_raw(
            OptionKind::AmericanCall,
            strike,
            volatility,
            expiry,
            rate,
            default_depth,
        )
    }

    /// Creates an American put.
    ///
    /// # Errors
    /// Returns `InstrumentError` if any parameter is invalid.
    pub fn american_put(
        strike: f64,
        volatility: f64,
        expiry: f64,
        rate: f64,
        default_depth: usize,
    ) -> Result<Self, InstrumentError> {
        Self::from_raw(
            OptionKind::AmericanPut,
            strike,
            volatility,
            expiry,
            rate,
            default_depth,
        )
    }

    /// Immediate exercise payoff at `spot`.
    #[inline]
    pub fn intrinsic_value(&self, spot: f64) -> f64 {
        self.payoff_type.intrinsic(spot, self.params.strike())
    }

    /// Node-level exercise policy used by the lattice.
    ///
    /// European variants pay intrinsic value only at `t == expiry` and
    /// zero elsewhere; American variants pay intrinsic value everywhere.
    #[inline]
    pub fn exercise_value(&self, spot: f64, t: f64) -> f64 {
        match self.exercise_style {
            ExerciseStyle::European if t == self.params.expiry() => self.intrinsic_value(spot),
            ExerciseStyle::European => 0.0,
            ExerciseStyle::American => self.intrinsic_value(spot),
        }
    }

    /// Black-Scholes price for this payoff side.
    ///
    /// Identical for European and American options of the same side. For
    /// American variants this is a reference figure, never the
    /// authoritative price.
    ///
    /// # Errors
    /// - `PricingError::NumericalDomain` if `spot` is non-positive or not finite
    /// - `PricingError::NumericalInstability` if the formula yields a non-finite price
    pub fn closed_form_value(&self, spot: f64) -> Result<f64, PricingError> {
        let model = BlackScholes::new(spot, self.params.rate(), self.params.volatility())?;
        let price = model.price(
            self.payoff_type,
            self.params.strike(),
            self.params.expiry(),
        );
        if !price.is_finite() {
            return Err(PricingError::NumericalInstability(format!(
                "Black-Scholes price is {} at S = {}",
                price, spot
            )));
        }
        Ok(price)
    }

    /// Binomial lattice price with this option's exercise policy.
    ///
    /// Valid for every variant; for European variants it converges to
    /// [`VanillaOption::closed_form_value`] as `depth` grows.
    ///
    /// # Errors
    /// Returns `PricingError` for zero depth, invalid spot, or an unstable
    /// risk-neutral probability.
    pub fn lattice_value(&self, spot: f64, depth: usize) -> Result<f64, PricingError> {
        let tree = BinomialTree::new(depth)?;
        let price = tree.price(spot, &self.params, |s, t| self.exercise_value(s, t))?;
        Ok(price)
    }

    /// Authoritative value at `spot`.
    ///
    /// European variants return the closed-form price (the depth is
    /// validated but otherwise unused); American variants return the
    /// lattice price at `depth`.
    ///
    /// # Errors
    /// Returns `PricingError` if `spot` or `depth` is invalid.
    pub fn value(&self, spot: f64, depth: usize) -> Result<f64, PricingError> {
        match self.exercise_style {
            ExerciseStyle::European => {
                if !is_valid_depth(depth) {
                    return Err(InstrumentError::InvalidDepth { depth }.into());
                }
                self.closed_form_value(spot)
            }
            ExerciseStyle::American => self.lattice_value(spot, depth),
        }
    }

    /// Value change for a 1% bump in spot: `value(1.01·S) − value(S)`.
    ///
    /// # Errors
    /// Returns `PricingError` if `spot` or `depth` is invalid.
    pub fn delta(&self, spot: f64, depth: usize) -> Result<f64, PricingError> {
        Priceable::delta(self, spot, depth)
    }

    /// Value at the instrument's own default lattice depth.
    ///
    /// # Errors
    /// Returns `PricingError` if `spot` is invalid.
    pub fn value_default(&self, spot: f64) -> Result<f64, PricingError> {
        self.value(spot, self.default_depth)
    }

    /// Delta at the instrument's own default lattice depth.
    ///
    /// # Errors
    /// Returns `PricingError` if `spot` is invalid.
    pub fn delta_default(&self, spot: f64) -> Result<f64, PricingError> {
        self.delta(spot, self.default_depth)
    }

    /// Returns the variant tag.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        OptionKind::from_parts(self.payoff_type, self.exercise_style)
    }

    /// Returns a reference to the instrument parameters.
    #[inline]
    pub fn params(&self) -> &InstrumentParams {
        &self.params
    }

    /// Returns the payoff side.
    #[inline]
    pub fn payoff_type(&self) -> PayoffType {
        self.payoff_type
    }

    /// Returns the exercise style.
    #[inline]
    pub fn exercise_style(&self) -> ExerciseStyle {
        self.exercise_style
    }

    /// Returns the default lattice depth.
    #[inline]
    pub fn default_depth(&self) -> usize {
        self.default_depth
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.params.strike()
    }

    /// Returns the time to expiry.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.params.expiry()
    }
}

/// Unvalidated wire form; deserialisation goes through [`VanillaOption::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawVanillaOption {
    params: InstrumentParams,
    payoff_type: PayoffType,
    exercise_style: ExerciseStyle,
    default_depth: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawVanillaOption> for VanillaOption {
    type Error = InstrumentError;

    fn try_from(raw: RawVanillaOption) -> Result<Self, Self::Error> {
        let kind = OptionKind::from_parts(raw.payoff_type, raw.exercise_style);
        Self::new(kind, raw.params, raw.default_depth)
    }
}

impl Priceable for VanillaOption {
    fn value(&self, spot: f64, depth: usize) -> Result<f64, PricingError> {
        VanillaOption::value(self, spot, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn option(kind: OptionKind) -> VanillaOption {
        let params = InstrumentParams::new(50.0, 0.2, 0.5, 0.1).unwrap();
        VanillaOption::new(kind, params, 200).unwrap()
    }

    #[test]
    fn test_constructors_set_kind() {
        let ec = VanillaOption::european_call(50.0, 0.2, 0.5, 0.1, 10).unwrap();
        let ep = VanillaOption::european_put(50.0, 0.2, 0.5, 0.1, 10).unwrap();
        let ac = VanillaOption::american_call(50.0, 0.2, 0.5, 0.1, 10).unwrap();
        let ap = VanillaOption::american_put(50.0, 0.2, 0.5, 0.1, 10).unwrap();
        assert_eq!(ec.kind(), OptionKind::EuropeanCall);
        assert_eq!(ep.kind(), OptionKind::EuropeanPut);
        assert_eq!(ac.kind(), OptionKind::AmericanCall);
        assert_eq!(ap.kind(), OptionKind::AmericanPut);
        assert_eq!(ap.default_depth(), 10);
    }

    #[test]
    fn test_constructor_validation() {
        assert!(matches!(
            VanillaOption::european_call(-1.0, 0.2, 0.5, 0.1, 10),
            Err(InstrumentError::InvalidStrike { .. })
        ));
        assert!(matches!(
            VanillaOption::american_put(50.0, 0.0, 0.5, 0.1, 10),
            Err(InstrumentError::InvalidVolatility { .. })
        ));
        assert!(matches!(
            VanillaOption::american_call(50.0, 0.2, 0.0, 0.1, 10),
            Err(InstrumentError::InvalidExpiry { .. })
        ));
        assert!(matches!(
            VanillaOption::european_put(50.0, 0.2, 0.5, 0.1, 0),
            Err(InstrumentError::InvalidDepth { depth: 0 })
        ));
    }

    #[test]
    fn test_depth_above_ceiling_is_an_error() {
        use crate::lattice::MAX_DEPTH;

        assert!(matches!(
            VanillaOption::american_put(50.0, 0.2, 0.5, 0.1, usize::MAX),
            Err(InstrumentError::InvalidDepth { .. })
        ));
        for kind in OptionKind::ALL {
            let err = option(kind).value(50.0, MAX_DEPTH + 1).unwrap_err();
            assert!(matches!(err, PricingError::InvalidInput(_)), "{}: {:?}", kind, err);
        }
    }

    #[test]
    fn test_intrinsic_value() {
        assert_eq!(option(OptionKind::EuropeanCall).intrinsic_value(60.0), 10.0);
        assert_eq!(option(OptionKind::AmericanPut).intrinsic_value(60.0), 0.0);
        assert_eq!(option(OptionKind::EuropeanPut).intrinsic_value(45.0), 5.0);
    }

    #[test]
    fn test_exercise_value_policy() {
        let european = option(OptionKind::EuropeanPut);
        assert_eq!(european.exercise_value(40.0, 0.25), 0.0);
        assert_eq!(european.exercise_value(40.0, 0.5), 10.0);

        let american = option(OptionKind::AmericanPut);
        assert_eq!(american.exercise_value(40.0, 0.0), 10.0);
        assert_eq!(american.exercise_value(40.0, 0.25), 10.0);
        assert_eq!(american.exercise_value(40.0, 0.5), 10.0);
    }

    #[test]
    fn test_closed_form_same_for_both_styles() {
        let ec = option(OptionKind::EuropeanCall).closed_form_value(52.0).unwrap();
        let ac = option(OptionKind::AmericanCall).closed_form_value(52.0).unwrap();
        assert_eq!(ec, ac);

        let ep = option(OptionKind::EuropeanPut).closed_form_value(52.0).unwrap();
        let ap = option(OptionKind::AmericanPut).closed_form_value(52.0).unwrap();
        assert_eq!(ep, ap);
    }

    #[test]
    fn test_european_value_is_closed_form() {
        let ec = option(OptionKind::EuropeanCall);
        assert_eq!(ec.value(50.0, 7).unwrap(), ec.closed_form_value(50.0).unwrap());
        assert_relative_eq!(ec.value(50.0, 1).unwrap(), 4.138901979722778, epsilon = 1e-9);
    }

    #[test]
    fn test_american_value_is_lattice() {
        let ap = option(OptionKind::AmericanPut);
        assert_eq!(ap.value(50.0, 300).unwrap(), ap.lattice_value(50.0, 300).unwrap());
    }

    #[test]
    fn test_value_rejects_zero_depth_for_every_style() {
        for kind in OptionKind::ALL {
            assert!(matches!(
                option(kind).value(50.0, 0),
                Err(PricingError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_value_rejects_bad_spot() {
        for kind in OptionKind::ALL {
            assert!(matches!(
                option(kind).value(-1.0, 50),
                Err(PricingError::NumericalDomain(_))
            ));
            assert!(matches!(
                option(kind).value(0.0, 50),
                Err(PricingError::NumericalDomain(_))
            ));
        }
    }

    #[test]
    fn test_delta_is_one_percent_bump_difference() {
        let ap = option(OptionKind::AmericanPut);
        let expected = ap.value(50.5, 100).unwrap() - ap.value(50.0, 100).unwrap();
        assert_eq!(ap.delta(50.0, 100).unwrap(), expected);
    }

    #[test]
    fn test_default_depth_helpers() {
        let ap = option(OptionKind::AmericanPut);
        assert_eq!(ap.value_default(48.0).unwrap(), ap.value(48.0, 200).unwrap());
        assert_eq!(ap.delta_default(48.0).unwrap(), ap.delta(48.0, 200).unwrap());
    }

    #[test]
    fn test_european_lattice_converges_to_closed_form() {
        let ep = option(OptionKind::EuropeanPut);
        let lattice = ep.lattice_value(50.0, 2000).unwrap();
        let closed = ep.closed_form_value(50.0).unwrap();
        assert_relative_eq!(lattice, closed, epsilon = 2e-3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_invalid_contract() {
        let negative_strike = r#"{
            "params": {"strike": -50.0, "volatility": 0.2, "expiry": 0.5, "rate": 0.1},
            "payoff_type": "Call",
            "exercise_style": "European",
            "default_depth": 10
        }"#;
        assert!(serde_json::from_str::<VanillaOption>(negative_strike).is_err());

        let zero_depth = r#"{
            "params": {"strike": 50.0, "volatility": 0.2, "expiry": 0.5, "rate": 0.1},
            "payoff_type": "Put",
            "exercise_style": "American",
            "default_depth": 0
        }"#;
        let err = serde_json::from_str::<VanillaOption>(zero_depth).unwrap_err();
        assert!(err.to_string().contains("Invalid lattice depth"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_valid_contract() {
        let original = option(OptionKind::AmericanPut);
        let json = serde_json::to_string(&original).unwrap();
        let back: VanillaOption = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
        assert_eq!(back.value(50.0, 200).unwrap(), original.value(50.0, 200).unwrap());
    }
}
