//! Scenario revaluation engine.

use pricer_core::traits::Priceable;
use pricer_pricing::mc::{generate_scenario_spots, GbmParams, MonteCarloConfig};
use pricer_pricing::rng::{NormalSource, PricerRng};

use super::error::RiskError;
use super::measures::RiskMeasures;
use crate::portfolio::Portfolio;

/// Monte Carlo risk engine.
///
/// Holds the simulation configuration only; the random-variate source is
/// supplied per run so callers control stream ownership and reproducibility.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::VanillaOption;
/// use pricer_pricing::mc::MonteCarloConfig;
/// use pricer_risk::portfolio::Portfolio;
/// use pricer_risk::var::RiskEngine;
///
/// let put = VanillaOption::european_put(100.0, 0.25, 1.0, 0.05, 500).unwrap();
/// let mut portfolio = Portfolio::new();
/// portfolio.add_position(10.0, &put);
///
/// let config = MonteCarloConfig::builder()
///     .n_scenarios(1_000)
///     .confidence(0.99)
///     .seed(7)
///     .build()
///     .unwrap();
/// let engine = RiskEngine::new(config);
///
/// let first = engine.run(&portfolio, 100.0, 0.25, 0.05, &mut engine.seeded_rng()).unwrap();
/// let again = engine.run(&portfolio, 100.0, 0.25, 0.05, &mut engine.seeded_rng()).unwrap();
/// assert_eq!(first, again);
/// assert_eq!(first.tail_len, 10);
/// ```
#[derive(Clone, Debug)]
pub struct RiskEngine {
    config: MonteCarloConfig,
}

impl RiskEngine {
    /// Creates an engine from a validated configuration.
    pub fn new(config: MonteCarloConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Fresh generator seeded from the configuration.
    pub fn seeded_rng(&self) -> PricerRng {
        PricerRng::from_seed(self.config.seed())
    }

    /// Simulates, revalues and derives VaR and ES in one pass.
    ///
    /// Draws exactly `n_scenarios` normals from `rng` when it succeeds.
    ///
    /// # Errors
    ///
    /// - `InsufficientScenarios` if the tail at the configured confidence
    ///   would be empty (fewer than 20 scenarios at 95%)
    /// - `Pricing` for an invalid spot, volatility or rate, or when any
    ///   revaluation fails
    /// - `DegenerateSimulation` if a revaluation is non-finite
    pub fn run<P, S>(
        &self,
        portfolio: &Portfolio<'_, P>,
        spot: f64,
        volatility: f64,
        rate: f64,
        rng: &mut S,
    ) -> Result<RiskMeasures, RiskError>
    where
        P: Priceable + ?Sized,
        S: NormalSource + ?Sized,
    {
        let n_scenarios = self.config.n_scenarios();
        if self.config.tail_len() == 0 {
            return Err(RiskError::InsufficientScenarios {
                n_scenarios,
                minimum: self.config.min_scenarios(),
            });
        }

        let params = GbmParams::new(spot, rate, volatility, self.config.horizon());
        params.validate()?;
        let current_value = portfolio.value(spot)?;

        tracing::debug!(
            n_scenarios,
            spot,
            volatility,
            rate,
            confidence = self.config.confidence(),
            positions = portfolio.len(),
            "starting risk simulation"
        );

        let spots = generate_scenario_spots(&params, n_scenarios, rng)?;
        let sample = spots
            .into_iter()
            .map(|scenario_spot| portfolio.value(scenario_spot))
            .collect::<Result<Vec<f64>, _>>()?;

        let measures = RiskMeasures::from_sample(current_value, sample, self.config.confidence())?;

        tracing::debug!(
            current_value = measures.current_value,
            value_at_risk = measures.value_at_risk,
            expected_shortfall = measures.expected_shortfall,
            tail_len = measures.tail_len,
            "risk simulation finished"
        );

        Ok(measures)
    }
}
