//! Integration tests for portfolio risk measures.
//!
//! # Test Categories
//!
//! 1. **Ordering**: Expected Shortfall never falls below Value-at-Risk
//! 2. **Reproducibility**: identical seeds give bit-identical measures
//! 3. **Stream semantics**: each entry point runs its own simulation
//! 4. **Boundaries**: scenario counts too small for a 5% tail

use pricer_core::types::PricingError;
use pricer_models::instruments::{InstrumentParams, OptionKind, VanillaOption};
use pricer_pricing::mc::ConfigError;
use pricer_pricing::rng::PricerRng;
use pricer_risk::portfolio::Portfolio;
use pricer_risk::var::{RiskError, RiskMeasures};
use proptest::prelude::*;

const SPOT: f64 = 100.0;
const VOL: f64 = 0.25;
const RATE: f64 = 0.05;
const DEPTH: usize = 40;

fn instruments() -> Vec<VanillaOption> {
    let params = InstrumentParams::new(100.0, VOL, 1.0, RATE).unwrap();
    OptionKind::ALL
        .iter()
        .map(|&kind| VanillaOption::new(kind, params, DEPTH).unwrap())
        .collect()
}

fn ten_of_each(options: &[VanillaOption]) -> Portfolio<'_> {
    let mut portfolio = Portfolio::with_depth(DEPTH).unwrap();
    for option in options {
        portfolio.add_position(10.0, option);
    }
    portfolio
}

// ============================================================================
// Ordering and reproducibility
// ============================================================================

#[test]
fn test_mixed_book_risk_measures() {
    let options = instruments();
    let portfolio = ten_of_each(&options);

    let mut rng = PricerRng::new();
    let measures = portfolio
        .risk_measures(&mut rng, SPOT, VOL, RATE, 2_000)
        .unwrap();

    assert_eq!(measures.n_scenarios, 2_000);
    assert_eq!(measures.tail_len, 100);
    assert_eq!(measures.current_value, portfolio.value(SPOT).unwrap());
    assert!(measures.value_at_risk > 0.0, "VaR {}", measures.value_at_risk);
    assert!(measures.expected_shortfall >= measures.value_at_risk);
}

#[test]
fn test_same_seed_is_bit_identical() {
    let options = instruments();
    let portfolio = ten_of_each(&options);

    let var_a = portfolio
        .value_at_risk(&mut PricerRng::from_seed(2024), SPOT, VOL, RATE, 500)
        .unwrap();
    let var_b = portfolio
        .value_at_risk(&mut PricerRng::from_seed(2024), SPOT, VOL, RATE, 500)
        .unwrap();
    assert_eq!(var_a.to_bits(), var_b.to_bits());

    let es_a = portfolio
        .expected_shortfall(&mut PricerRng::from_seed(2024), SPOT, VOL, RATE, 500)
        .unwrap();
    let es_b = portfolio
        .expected_shortfall(&mut PricerRng::from_seed(2024), SPOT, VOL, RATE, 500)
        .unwrap();
    assert_eq!(es_a.to_bits(), es_b.to_bits());
}

#[test]
fn test_single_measures_match_combined_run() {
    let options = instruments();
    let portfolio = ten_of_each(&options);

    let combined = portfolio
        .risk_measures(&mut PricerRng::from_seed(5), SPOT, VOL, RATE, 400)
        .unwrap();
    let var = portfolio
        .value_at_risk(&mut PricerRng::from_seed(5), SPOT, VOL, RATE, 400)
        .unwrap();
    let es = portfolio
        .expected_shortfall(&mut PricerRng::from_seed(5), SPOT, VOL, RATE, 400)
        .unwrap();

    assert_eq!(var, combined.value_at_risk);
    assert_eq!(es, combined.expected_shortfall);
}

#[test]
fn test_shared_stream_advances_between_calls() {
    let options = instruments();
    let portfolio = ten_of_each(&options);

    let mut rng = PricerRng::from_seed(77);
    let first = portfolio
        .value_at_risk(&mut rng, SPOT, VOL, RATE, 200)
        .unwrap();
    let second = portfolio
        .value_at_risk(&mut rng, SPOT, VOL, RATE, 200)
        .unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_concatenated_samples() {
    // Per-worker samples merge by concatenation before sorting
    let worker_a: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
    let worker_b: Vec<f64> = (0..20).map(|i| 90.0 + i as f64).collect();
    let merged: Vec<f64> = worker_a.into_iter().chain(worker_b).collect();

    let measures = RiskMeasures::from_sample(100.0, merged, 0.95).unwrap();
    assert_eq!(measures.tail_len, 2);
    assert_eq!(measures.value_at_risk, 9.0);
    assert_eq!(measures.expected_shortfall, 9.5);
}

// ============================================================================
// Boundaries
// ============================================================================

#[test]
fn test_nineteen_scenarios_rejected() {
    let options = instruments();
    let portfolio = ten_of_each(&options);
    let mut rng = PricerRng::new();

    let result = portfolio.value_at_risk(&mut rng, SPOT, VOL, RATE, 19);
    assert!(matches!(
        result,
        Err(RiskError::InsufficientScenarios {
            n_scenarios: 19,
            minimum: 20
        })
    ));

    let as_pricing: PricingError = result.unwrap_err().into();
    assert!(matches!(as_pricing, PricingError::InvalidInput(_)));
}

#[test]
fn test_twenty_scenarios_accepted() {
    let options = instruments();
    let portfolio = ten_of_each(&options);
    let measures = portfolio
        .risk_measures(&mut PricerRng::new(), SPOT, VOL, RATE, 20)
        .unwrap();
    assert_eq!(measures.tail_len, 1);
    assert_eq!(measures.value_at_risk, measures.expected_shortfall);
}

#[test]
fn test_zero_scenarios_rejected() {
    let options = instruments();
    let portfolio = ten_of_each(&options);
    assert!(matches!(
        portfolio.expected_shortfall(&mut PricerRng::new(), SPOT, VOL, RATE, 0),
        Err(RiskError::Config(ConfigError::InvalidScenarioCount(0)))
    ));
}

#[test]
fn test_invalid_spot_rejected() {
    let options = instruments();
    let portfolio = ten_of_each(&options);
    assert!(matches!(
        portfolio.value_at_risk(&mut PricerRng::new(), 0.0, VOL, RATE, 100),
        Err(RiskError::Pricing(PricingError::NumericalDomain(_)))
    ));
}

// ============================================================================
// Property-based tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Expected Shortfall is never below Value-at-Risk.
    #[test]
    fn prop_es_not_below_var(
        seed in any::<u64>(),
        n in 20usize..300,
        weights in prop::collection::vec(-5.0..5.0f64, 4),
    ) {
        let options = instruments();
        let mut portfolio = Portfolio::with_depth(20).unwrap();
        for (option, weight) in options.iter().zip(&weights) {
            portfolio.add_position(*weight, option);
        }

        let measures = portfolio
            .risk_measures(&mut PricerRng::from_seed(seed), SPOT, VOL, RATE, n)
            .unwrap();

        let tolerance = 1e-9 * measures.current_value.abs().max(1.0);
        prop_assert!(
            measures.expected_shortfall >= measures.value_at_risk - tolerance,
            "ES {} < VaR {} (seed={}, n={})",
            measures.expected_shortfall, measures.value_at_risk, seed, n
        );
    }
}
