//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options, with analytical Greeks as diagnostics.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::PayoffType;

/// Black-Scholes model for European option pricing.
///
/// Holds the market state (spot, rate, volatility); contract terms
/// (strike, expiry) are passed per call.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (σ)
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0 or not finite
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0 or not finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        if !(spot > 0.0 && spot.is_finite()) {
            return Err(AnalyticalError::InvalidSpot { spot });
        }

        if !(volatility > 0.0 && volatility.is_finite()) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// `strike` and `expiry` are expected to be positive; instruments
    /// validate both at construction.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(50.0, 0.1, 0.2).unwrap();
    /// let price = bs.price_call(50.0, 0.5);
    /// assert!((price - 4.1389).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let discount = (-self.rate * expiry).exp();

        floor_at_zero(self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2))
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(50.0, 0.1, 0.2).unwrap();
    /// let price = bs.price_put(50.0, 0.5);
    /// assert!((price - 1.7004).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let discount = (-self.rate * expiry).exp();

        floor_at_zero(strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1))
    }

    /// Prices a European option of the given payoff side.
    #[inline]
    pub fn price(&self, payoff: PayoffType, strike: f64, expiry: f64) -> f64 {
        match payoff {
            PayoffType::Call => self.price_call(strike, expiry),
            PayoffType::Put => self.price_put(strike, expiry),
        }
    }

    /// Computes analytical Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    ///
    /// This is the normalised per-unit sensitivity, distinct from the
    /// 1% bump delta that instruments report.
    #[inline]
    pub fn delta(&self, payoff: PayoffType, strike: f64, expiry: f64) -> f64 {
        let n_d1 = norm_cdf(self.d1(strike, expiry));
        match payoff {
            PayoffType::Call => n_d1,
            PayoffType::Put => n_d1 - 1.0,
        }
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = φ(d₁) / (S·σ·√T), identical for calls and puts.
    #[inline]
    pub fn gamma(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        norm_pdf(d1) / (self.spot * self.volatility * expiry.sqrt())
    }

    /// Computes Vega (∂V/∂σ).
    ///
    /// Vega = S·√T·φ(d₁), identical for calls and puts.
    #[inline]
    pub fn vega(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        self.spot * expiry.sqrt() * norm_pdf(d1)
    }
}

/// Clears the tiny negative residue rounding leaves deep out of the money.
/// NaN passes through unchanged so callers can detect it.
#[inline]
fn floor_at_zero(price: f64) -> f64 {
    if price < 0.0 {
        0.0
    } else {
        price
    }
}
