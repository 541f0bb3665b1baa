//! Common option contract parameters.
//!
//! This module provides the validated parameter record shared by every
//! option variant.

use super::error::InstrumentError;

/// Static contract and model parameters of a single option.
///
/// Strike, volatility and expiry are strictly positive; the rate may be
/// any finite value (including negative).
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentParams;
///
/// let params = InstrumentParams::new(100.0, 0.25, 1.0, 0.05).unwrap();
/// assert_eq!(params.strike(), 100.0);
/// assert_eq!(params.volatility(), 0.25);
/// assert_eq!(params.expiry(), 1.0);
/// assert_eq!(params.rate(), 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawInstrumentParams"))]
pub struct InstrumentParams {
    strike: f64,
    volatility: f64,
    expiry: f64,
    rate: f64,
}

impl InstrumentParams {
    /// Creates new instrument parameters with validation.
    ///
    /// # Arguments
    /// * `strike` - Strike price (must be positive)
    /// * `volatility` - Annualised volatility (must be positive)
    /// * `expiry` - Time to expiry in years (must be positive)
    /// * `rate` - Annualised risk-free rate (must be finite)
    ///
    /// # Errors
    /// Returns the `InstrumentError` naming the first invalid parameter.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::InstrumentParams;
    ///
    /// assert!(InstrumentParams::new(100.0, 0.2, 1.0, 0.05).is_ok());
    /// assert!(InstrumentParams::new(-100.0, 0.2, 1.0, 0.05).is_err());
    /// ```
    pub fn new(
        strike: f64,
        volatility: f64,
        expiry: f64,
        rate: f64,
    ) -> Result<Self, InstrumentError> {
        if !(strike > 0.0 && strike.is_finite()) {
            return Err(InstrumentError::InvalidStrike { strike });
        }

        if !(volatility > 0.0 && volatility.is_finite()) {
            return Err(InstrumentError::InvalidVolatility { volatility });
        }

        if !(expiry > 0.0 && expiry.is_finite()) {
            return Err(InstrumentError::InvalidExpiry { expiry });
        }

        if !rate.is_finite() {
            return Err(InstrumentError::InvalidRate { rate });
        }

        Ok(Self {
            strike,
            volatility,
            expiry,
            rate,
        })
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the annualised volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the annualised risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

/// Unvalidated wire form; deserialisation goes through [`InstrumentParams::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawInstrumentParams {
    strike: f64,
    volatility: f64,
    expiry: f64,
    rate: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawInstrumentParams> for InstrumentParams {
    type Error = InstrumentError;

    fn try_from(raw: RawInstrumentParams) -> Result<Self, Self::Error> {
        Self::new(raw.strike, raw.volatility, raw.expiry, raw.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_params() {
        let params = InstrumentParams::new(50.0, 0.2, 0.5, 0.1).unwrap();
        assert_eq!(params.strike(), 50.0);
        assert_eq!(params.volatility(), 0.2);
        assert_eq!(params.expiry(), 0.5);
        assert_eq!(params.rate(), 0.1);
    }

    #[test]
    fn test_negative_rate_allowed() {
        assert!(InstrumentParams::new(50.0, 0.2, 0.5, -0.01).is_ok());
    }

    #[test]
    fn test_new_invalid_strike() {
        match InstrumentParams::new(-100.0, 0.2, 1.0, 0.05) {
            Err(InstrumentError::InvalidStrike { strike }) => assert_eq!(strike, -100.0),
            _ => panic!("Expected InvalidStrike error"),
        }
        assert!(matches!(
            InstrumentParams::new(0.0, 0.2, 1.0, 0.05),
            Err(InstrumentError::InvalidStrike { .. })
        ));
    }

    #[test]
    fn test_new_invalid_volatility() {
        assert!(matches!(
            InstrumentParams::new(100.0, 0.0, 1.0, 0.05),
            Err(InstrumentError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn test_new_invalid_expiry() {
        match InstrumentParams::new(100.0, 0.2, -1.0, 0.05) {
            Err(InstrumentError::InvalidExpiry { expiry }) => assert_eq!(expiry, -1.0),
            _ => panic!("Expected InvalidExpiry error"),
        }
    }

    #[test]
    fn test_new_invalid_rate() {
        assert!(matches!(
            InstrumentParams::new(100.0, 0.2, 1.0, f64::NAN),
            Err(InstrumentError::InvalidRate { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let params: InstrumentParams = serde_json::from_str(
            r#"{"strike":50.0,"volatility":0.2,"expiry":0.5,"rate":0.1}"#,
        )
        .unwrap();
        assert_eq!(params, InstrumentParams::new(50.0, 0.2, 0.5, 0.1).unwrap());

        let err = serde_json::from_str::<InstrumentParams>(
            r#"{"strike":-50.0,"volatility":0.2,"expiry":0.5,"rate":0.1}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid strike"));

        assert!(serde_json::from_str::<InstrumentParams>(
            r#"{"strike":50.0,"volatility":0.0,"expiry":0.5,"rate":0.1}"#,
        )
        .is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_round_trip() {
        let params = InstrumentParams::new(100.0, 0.25, 1.0, -0.01).unwrap();
        let json = serde_json::to_string(&params).unwrap();
        let back: InstrumentParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
