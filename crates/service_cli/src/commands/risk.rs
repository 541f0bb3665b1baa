//! Risk command implementation
//!
//! Builds a portfolio holding the same weight of each selected variant and
//! reports its value, delta, Value-at-Risk and Expected Shortfall.

use clap::Args;
use pricer_risk::portfolio::Portfolio;
use pricer_risk::var::RiskEngine;
use serde::Serialize;
use tracing::info;

use super::{ContractArgs, OutputFormat};
use crate::config::CliConfig;
use crate::Result;

/// Arguments of the `risk` command
#[derive(Debug, Clone, Args)]
pub struct RiskArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    /// Current spot price
    #[arg(short, long, default_value_t = 100.0)]
    pub spot: f64,

    /// Units held of each variant
    #[arg(short, long, default_value_t = 10.0)]
    pub weight: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Portfolio risk summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    pub positions: usize,
    pub depth: usize,
    pub value: f64,
    pub delta: f64,
    pub value_at_risk: f64,
    pub expected_shortfall: f64,
    pub confidence: f64,
    pub n_scenarios: usize,
    pub seed: u64,
}

/// Runs one simulation and derives every measure from it
pub fn compute(args: &RiskArgs, config: &CliConfig) -> Result<RiskReport> {
    let depth = config.pricing.portfolio_depth;
    let options = args.contract.instruments(depth)?;

    let mut portfolio = Portfolio::with_depth(depth)?;
    for option in &options {
        portfolio.add_position(args.weight, option);
    }

    let engine = RiskEngine::new(config.monte_carlo()?);
    let mut rng = engine.seeded_rng();
    let measures = engine.run(
        &portfolio,
        args.spot,
        args.contract.vol,
        args.contract.rate,
        &mut rng,
    )?;

    Ok(RiskReport {
        positions: portfolio.len(),
        depth,
        value: measures.current_value,
        delta: portfolio.delta(args.spot)?,
        value_at_risk: measures.value_at_risk,
        expected_shortfall: measures.expected_shortfall,
        confidence: measures.confidence,
        n_scenarios: measures.n_scenarios,
        seed: rng.seed(),
    })
}

/// Run the risk command
pub fn run(args: &RiskArgs, config: &CliConfig) -> Result<()> {
    info!(
        spot = args.spot,
        weight = args.weight,
        n_scenarios = config.risk.n_scenarios,
        seed = config.risk.seed,
        "Starting risk calculation"
    );

    let report = compute(args, config)?;
    info!(
        value_at_risk = report.value_at_risk,
        expected_shortfall = report.expected_shortfall,
        "Risk calculation complete"
    );

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            let pct = report.confidence * 100.0;
            println!("Positions:                 {}", report.positions);
            println!("Lattice depth:             {}", report.depth);
            println!("Scenarios:                 {}", report.n_scenarios);
            println!("Portfolio value:           {:.6}", report.value);
            println!("Portfolio delta (1%):      {:.6}", report.delta);
            println!("Value at Risk ({:.1}%):     {:.6}", pct, report.value_at_risk);
            println!("Expected Shortfall ({:.1}%): {:.6}", pct, report.expected_shortfall);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::KindArg;

    fn args() -> RiskArgs {
        RiskArgs {
            contract: ContractArgs {
                kinds: vec![KindArg::EuropeanCall, KindArg::AmericanPut],
                strike: 100.0,
                vol: 0.25,
                expiry: 1.0,
                rate: 0.05,
            },
            spot: 100.0,
            weight: 10.0,
            format: OutputFormat::Json,
        }
    }

    fn config() -> CliConfig {
        let mut config = CliConfig::default();
        config.pricing.portfolio_depth = 30;
        config.risk.n_scenarios = 400;
        config
    }

    #[test]
    fn test_report_is_reproducible() {
        let first = compute(&args(), &config()).unwrap();
        let second = compute(&args(), &config()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.positions, 2);
        assert_eq!(first.n_scenarios, 400);
        assert!(first.expected_shortfall >= first.value_at_risk);
    }

    #[test]
    fn test_too_few_scenarios() {
        let mut config = config();
        config.risk.n_scenarios = 10;
        assert!(compute(&args(), &config).is_err());
    }
}
