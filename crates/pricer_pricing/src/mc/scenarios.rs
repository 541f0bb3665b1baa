//! One-step geometric Brownian motion scenario generation.
//!
//! Each scenario spot is a single exact log-space step over the horizon:
//! ```text
//! vol   = σ√dt
//! drift = dt·(r − vol²/2)
//! S'    = S × exp(drift + vol × Z)
//! ```

use pricer_core::types::error::check_spot;
use pricer_core::types::PricingError;

use super::error::ConfigError;
use crate::rng::NormalSource;

/// GBM parameters for one-step scenario generation.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{GbmParams, TRADING_DAY};
///
/// let params = GbmParams::new(100.0, 0.05, 0.25, TRADING_DAY);
///
/// // A zero draw moves the spot by the drift only
/// let expected = 100.0 * params.drift().exp();
/// assert!((params.scenario_spot(0.0) - expected).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Current spot price (S₀).
    pub spot: f64,
    /// Risk-free rate (r) - annualised.
    pub rate: f64,
    /// Volatility (σ) - annualised.
    pub volatility: f64,
    /// Horizon (dt) - in years.
    pub horizon: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    ///
    /// # Arguments
    ///
    /// * `spot` - Current spot price
    /// * `rate` - Risk-free rate (annualised)
    /// * `volatility` - Volatility (annualised)
    /// * `horizon` - Step length (years)
    #[inline]
    pub fn new(spot: f64, rate: f64, volatility: f64, horizon: f64) -> Self {
        Self {
            spot,
            rate,
            volatility,
            horizon,
        }
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// - `NumericalDomain` for a non-positive or non-finite spot
    /// - `InvalidInput` for a negative or non-finite volatility, a
    ///   non-finite rate, or a non-positive horizon
    pub fn validate(&self) -> Result<(), PricingError> {
        check_spot(self.spot)?;
        if !(self.volatility >= 0.0 && self.volatility.is_finite()) {
            return Err(ConfigError::InvalidParameter {
                name: "volatility",
                value: format!("{} must be non-negative and finite", self.volatility),
            }
            .into());
        }
        if !self.rate.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "rate",
                value: format!("{} must be finite", self.rate),
            }
            .into());
        }
        if !(self.horizon > 0.0 && self.horizon.is_finite()) {
            return Err(ConfigError::InvalidHorizon(self.horizon).into());
        }
        Ok(())
    }

    /// Step volatility `σ√dt`.
    #[inline]
    pub fn step_volatility(&self) -> f64 {
        self.volatility * self.horizon.sqrt()
    }

    /// Step drift `dt·(r − vol²/2)` with `vol` the step volatility.
    #[inline]
    pub fn drift(&self) -> f64 {
        let vol = self.step_volatility();
        self.horizon * (self.rate - 0.5 * vol * vol)
    }

    /// Scenario spot for one standard normal draw `z`.
    #[inline]
    pub fn scenario_spot(&self, z: f64) -> f64 {
        self.spot * (self.drift() + self.step_volatility() * z).exp()
    }
}

/// Draws `n` scenario spots, consuming exactly `n` normals from `source`.
///
/// # Errors
///
/// Returns `PricingError` if the parameters fail [`GbmParams::validate`].
/// The source is not advanced in that case.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{generate_scenario_spots, GbmParams};
/// use pricer_pricing::rng::ReplayNormals;
///
/// let params = GbmParams::new(50.0, 0.0, 0.2, 1.0);
/// let mut source = ReplayNormals::new(vec![-1.0, 0.0, 1.0]);
///
/// let spots = generate_scenario_spots(&params, 3, &mut source).unwrap();
/// assert!(spots[0] < spots[1] && spots[1] < spots[2]);
/// ```
pub fn generate_scenario_spots<S>(
    params: &GbmParams,
    n: usize,
    source: &mut S,
) -> Result<Vec<f64>, PricingError>
where
    S: NormalSource + ?Sized,
{
    params.validate()?;

    // Draws are taken in one batch, then turned into spots in place.
    let mut spots = vec![0.0; n];
    source.fill_normals(&mut spots);
    for spot in spots.iter_mut() {
        *spot = params.scenario_spot(*spot);
    }
    Ok(spots)
}
