//! Tail risk measures derived from a scenario sample.

use pricer_pricing::mc::{min_scenarios, tail_len, ConfigError};

use super::error::RiskError;

/// Portfolio value and tail losses from one scenario sample.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskMeasures {
    /// Portfolio value at the current spot.
    pub current_value: f64,
    /// Loss at the tail boundary: `current − sorted[k − 1]`.
    pub value_at_risk: f64,
    /// Mean tail loss: `current − mean(sorted[0..k])`.
    pub expected_shortfall: f64,
    /// Confidence level.
    pub confidence: f64,
    /// Sample size.
    pub n_scenarios: usize,
    /// Tail length `k`.
    pub tail_len: usize,
}

impl RiskMeasures {
    /// Derives VaR and ES from revalued scenario outcomes.
    ///
    /// The sample may come from any number of independent simulations
    /// concatenated together; order does not matter.
    ///
    /// # Errors
    ///
    /// - `Config` if `confidence` is outside (0, 1)
    /// - `DegenerateSimulation` if the tail is empty or any value is non-finite
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_risk::var::RiskMeasures;
    ///
    /// // Twenty outcomes 81..=100 against a current value of 100
    /// let sample: Vec<f64> = (81..=100).map(f64::from).collect();
    /// let measures = RiskMeasures::from_sample(100.0, sample, 0.95).unwrap();
    ///
    /// assert_eq!(measures.tail_len, 1);
    /// assert_eq!(measures.value_at_risk, 19.0);
    /// assert_eq!(measures.expected_shortfall, 19.0);
    /// ```
    pub fn from_sample(
        current_value: f64,
        mut sample: Vec<f64>,
        confidence: f64,
    ) -> Result<Self, RiskError> {
        if !(confidence > 0.0 && confidence < 1.0) {
            return Err(ConfigError::InvalidConfidence(confidence).into());
        }

        let n_scenarios = sample.len();
        let tail_len = tail_len(confidence, n_scenarios);
        if tail_len == 0 {
            return Err(RiskError::DegenerateSimulation(format!(
                "empty loss tail: {} scenarios at confidence {} (need at least {})",
                n_scenarios,
                confidence,
                min_scenarios(confidence)
            )));
        }

        if !current_value.is_finite() {
            tracing::warn!(current_value, "non-finite current portfolio value");
            return Err(RiskError::DegenerateSimulation(format!(
                "current value {} is not finite",
                current_value
            )));
        }
        if let Some(bad) = sample.iter().position(|v| !v.is_finite()) {
            tracing::warn!(index = bad, value = sample[bad], "non-finite scenario value");
            return Err(RiskError::DegenerateSimulation(format!(
                "scenario {} revalued to {}",
                bad, sample[bad]
            )));
        }

        sample.sort_by(f64::total_cmp);

        let tail = &sample[..tail_len];
        let tail_mean = tail.iter().sum::<f64>() / tail_len as f64;

        Ok(Self {
            current_value,
            value_at_risk: current_value - tail[tail_len - 1],
            expected_shortfall: current_value - tail_mean,
            confidence,
            n_scenarios,
            tail_len,
        })
    }
}
