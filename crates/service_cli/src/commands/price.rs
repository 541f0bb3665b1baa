//! Price command implementation
//!
//! Values single options at one spot with the authoritative pricer, the
//! closed-form reference and the 1% bump delta.

use clap::Args;
use serde::Serialize;
use tracing::info;

use super::{ContractArgs, OutputFormat};
use crate::config::CliConfig;
use crate::Result;

/// Arguments of the `price` command
#[derive(Debug, Clone, Args)]
pub struct PriceArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    /// Current spot price
    #[arg(short, long, default_value_t = 100.0)]
    pub spot: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// One priced instrument
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRow {
    pub kind: String,
    pub value: f64,
    pub closed_form: f64,
    pub delta: f64,
}

/// Prices every selected variant at the configured instrument depth
pub fn compute(args: &PriceArgs, config: &CliConfig) -> Result<Vec<PriceRow>> {
    let depth = config.pricing.instrument_depth;
    let options = args.contract.instruments(depth)?;

    let mut rows = Vec::with_capacity(options.len());
    for option in &options {
        let row = PriceRow {
            kind: option.kind().to_string(),
            value: option.value_default(args.spot)?,
            closed_form: option.closed_form_value(args.spot)?,
            delta: option.delta_default(args.spot)?,
        };
        info!(kind = %row.kind, value = row.value, delta = row.delta, "priced");
        rows.push(row);
    }
    Ok(rows)
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &CliConfig) -> Result<()> {
    info!(
        spot = args.spot,
        strike = args.contract.strike,
        depth = config.pricing.instrument_depth,
        "Starting pricing"
    );

    let rows = compute(args, config)?;

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Table => {
            println!(
                "{:<16} {:>14} {:>14} {:>14}",
                "Instrument", "Value", "Black-Scholes", "Delta (1%)"
            );
            println!("{}", "-".repeat(61));
            for row in &rows {
                println!(
                    "{:<16} {:>14.6} {:>14.6} {:>14.6}",
                    row.kind, row.value, row.closed_form, row.delta
                );
            }
        }
    }

    Ok(())
}
