//! Demo command: reference valuation and portfolio risk walkthrough.
//!
//! 1. Values the four at-the-money variants (S = K = 50, r = 10%, T = 0.5,
//!    σ = 20%) at the configured instrument depth next to their
//!    Black-Scholes reference.
//! 2. Holds ten of each variant (S = K = 100, r = 5%, T = 1, σ = 25%) at the
//!    configured portfolio depth and reports value, delta, one-day VaR and
//!    Expected Shortfall. VaR and ES each run their own simulation on one
//!    shared generator.

use pricer_models::instruments::{InstrumentParams, OptionKind, VanillaOption};
use pricer_pricing::rng::PricerRng;
use pricer_risk::portfolio::Portfolio;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

fn atm_options(params: InstrumentParams, depth: usize) -> Result<Vec<VanillaOption>> {
    let options = OptionKind::ALL
        .iter()
        .map(|&kind| VanillaOption::new(kind, params, depth))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(options)
}

fn label(kind: OptionKind) -> &'static str {
    match kind {
        OptionKind::EuropeanCall => "EUROPEAN CALL value : ",
        OptionKind::AmericanCall => "AMERICAN CALL value (CRR) : ",
        OptionKind::EuropeanPut => "EUROPEAN PUT  value : ",
        OptionKind::AmericanPut => "AMERICAN PUT  value (CRR) : ",
    }
}

/// Runs the demonstration.
pub fn run(config: &CliConfig) -> Result<()> {
    let instrument_depth = config.pricing.instrument_depth;
    let portfolio_depth = config.pricing.portfolio_depth;
    let n_scenarios = config.risk.n_scenarios;

    // Step 1: single instruments
    let test_spot = 50.0;
    let params = InstrumentParams::new(50.0, 0.2, 0.5, 0.1)?;
    let options = atm_options(params, instrument_depth)?;

    info!(depth = instrument_depth, "Valuing reference options");
    for kind in [
        OptionKind::EuropeanCall,
        OptionKind::AmericanCall,
        OptionKind::EuropeanPut,
        OptionKind::AmericanPut,
    ] {
        if let Some(option) = options.iter().find(|o| o.kind() == kind) {
            println!(
                "{}{:.6} Black Scholes: {:.6}\n",
                label(kind),
                option.value_default(test_spot)?,
                option.closed_form_value(test_spot)?
            );
        }
    }

    // Step 2: portfolio of ten of each
    let spot = 100.0;
    let sigma = 0.25;
    let r = 0.05;
    let params = InstrumentParams::new(100.0, sigma, 1.0, r)?;
    let book = atm_options(params, portfolio_depth)?;

    let mut portfolio = Portfolio::with_depth(portfolio_depth)?;
    for option in &book {
        portfolio.add_position(10.0, option);
    }

    println!();
    println!("Portfolio Value: {:.6}\n", portfolio.value(spot)?);
    println!("Portfolio Delta: {:.6}\n", portfolio.delta(spot)?);

    info!(n_scenarios, seed = config.risk.seed, "Running risk simulations");
    let mut rng = PricerRng::from_seed(config.risk.seed);
    let var = portfolio.value_at_risk(&mut rng, spot, sigma, r, n_scenarios)?;
    println!(
        "The portfolio Value at Risk at 95 percentile is {:.6}\n",
        var
    );

    let es = portfolio.expected_shortfall(&mut rng, spot, sigma, r, n_scenarios)?;
    println!("Expected Shortfall Measure of portfolio is {:.6}\n", es);

    Ok(())
}
