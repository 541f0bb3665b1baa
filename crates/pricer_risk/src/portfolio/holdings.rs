//! Portfolio aggregation and risk entry points.

use pricer_core::traits::Priceable;
use pricer_core::types::PricingError;
use pricer_models::instruments::{InstrumentError, VanillaOption};
use pricer_models::lattice::is_valid_depth;
use pricer_pricing::mc::MonteCarloConfig;
use pricer_pricing::rng::NormalSource;

use super::position::Position;
use crate::var::{RiskEngine, RiskError, RiskMeasures};

/// Lattice depth applied to every position unless overridden.
pub const DEFAULT_PORTFOLIO_DEPTH: usize = 500;

/// An ordered collection of weighted positions valued at one lattice depth.
///
/// The depth is applied uniformly to every position; European positions
/// accept it and ignore it.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::VanillaOption;
/// use pricer_risk::portfolio::Portfolio;
///
/// let call = VanillaOption::european_call(100.0, 0.25, 1.0, 0.05, 500).unwrap();
/// let put = VanillaOption::european_put(100.0, 0.25, 1.0, 0.05, 500).unwrap();
///
/// let mut straddle = Portfolio::new();
/// straddle.add_position(1.0, &call);
/// straddle.add_position(1.0, &put);
///
/// let expected = call.value(100.0, 500).unwrap() + put.value(100.0, 500).unwrap();
/// assert!((straddle.value(100.0).unwrap() - expected).abs() < 1e-12);
/// ```
pub struct Portfolio<'a, P: ?Sized = VanillaOption> {
    positions: Vec<Position<'a, P>>,
    depth: usize,
}

impl<'a, P: ?Sized> Portfolio<'a, P> {
    /// Creates an empty portfolio valued at [`DEFAULT_PORTFOLIO_DEPTH`].
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            depth: DEFAULT_PORTFOLIO_DEPTH,
        }
    }

    /// Creates an empty portfolio valued at `depth`.
    ///
    /// # Errors
    /// Returns `PricingError::InvalidInput` if `depth` is zero or above
    /// the lattice ceiling.
    pub fn with_depth(depth: usize) -> Result<Self, PricingError> {
        if !is_valid_depth(depth) {
            return Err(InstrumentError::InvalidDepth { depth }.into());
        }
        Ok(Self {
            positions: Vec::new(),
            depth,
        })
    }

    /// Appends a position. Positions are neither merged nor validated.
    pub fn add_position(&mut self, weight: f64, instrument: &'a P) {
        self.positions.push(Position::new(weight, instrument));
    }

    /// Appends an existing position.
    pub fn push(&mut self, position: Position<'a, P>) {
        self.positions.push(position);
    }

    /// Returns the positions in insertion order.
    #[inline]
    pub fn positions(&self) -> &[Position<'a, P>] {
        &self.positions
    }

    /// Returns the lattice depth used for every position.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the portfolio holds no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl<P: Priceable + ?Sized> Portfolio<'_, P> {
    /// Weighted sum of position values at `spot`.
    ///
    /// An empty portfolio is worth zero.
    ///
    /// # Errors
    /// Returns the first position's valuation error.
    pub fn value(&self, spot: f64) -> Result<f64, PricingError> {
        self.positions
            .iter()
            .map(|position| position.value(spot, self.depth))
            .sum()
    }

    /// Weighted sum of position deltas at `spot`.
    ///
    /// # Errors
    /// Returns the first position's valuation error.
    pub fn delta(&self, spot: f64) -> Result<f64, PricingError> {
        self.positions
            .iter()
            .map(|position| position.delta(spot, self.depth))
            .sum()
    }

    /// One-day 95% Value-at-Risk over `n_scenarios` simulated spots.
    ///
    /// Runs its own simulation, advancing `rng` by `n_scenarios` draws.
    ///
    /// # Errors
    /// See [`RiskEngine::run`].
    pub fn value_at_risk<S>(
        &self,
        rng: &mut S,
        spot: f64,
        volatility: f64,
        rate: f64,
        n_scenarios: usize,
    ) -> Result<f64, RiskError>
    where
        S: NormalSource + ?Sized,
    {
        let measures = self.risk_measures(rng, spot, volatility, rate, n_scenarios)?;
        Ok(measures.value_at_risk)
    }

    /// One-day 95% Expected Shortfall over `n_scenarios` simulated spots.
    ///
    /// Runs its own simulation, advancing `rng` by `n_scenarios` draws.
    ///
    /// # Errors
    /// See [`RiskEngine::run`].
    pub fn expected_shortfall<S>(
        &self,
        rng: &mut S,
        spot: f64,
        volatility: f64,
        rate: f64,
        n_scenarios: usize,
    ) -> Result<f64, RiskError>
    where
        S: NormalSource + ?Sized,
    {
        let measures = self.risk_measures(rng, spot, volatility, rate, n_scenarios)?;
        Ok(measures.expected_shortfall)
    }

    /// Value, VaR and ES at 95% from a single one-day simulation.
    ///
    /// # Errors
    /// See [`RiskEngine::run`].
    pub fn risk_measures<S>(
        &self,
        rng: &mut S,
        spot: f64,
        volatility: f64,
        rate: f64,
        n_scenarios: usize,
    ) -> Result<RiskMeasures, RiskError>
    where
        S: NormalSource + ?Sized,
    {
        let config = MonteCarloConfig::builder()
            .n_scenarios(n_scenarios)
            .build()?;
        RiskEngine::new(config).run(self, spot, volatility, rate, rng)
    }
}

impl<P: ?Sized> Default for Portfolio<'_, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ?Sized> Clone for Portfolio<'_, P> {
    fn clone(&self) -> Self {
        Self {
            positions: self.positions.clone(),
            depth: self.depth,
        }
    }
}

impl<P: std::fmt::Debug + ?Sized> std::fmt::Debug for Portfolio<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Portfolio")
            .field("positions", &self.positions)
            .field("depth", &self.depth)
            .finish()
    }
}
