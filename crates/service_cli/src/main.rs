//! Pricer CLI - option valuation and portfolio risk from the command line
//!
//! # Commands
//!
//! - `pricer demo` - Reference valuations and a ten-lot portfolio risk run
//! - `pricer price` - Value European/American calls and puts at one spot
//! - `pricer risk` - Portfolio value, delta, VaR and Expected Shortfall
//!
//! # Configuration
//!
//! Settings are read from `pricer.toml` (optional), then `PRICER_LOG_LEVEL`,
//! `PRICER_SCENARIOS` and `PRICER_SEED`, then the global flags below.
//! `RUST_LOG` overrides the log filter entirely.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::Result;

use commands::price::PriceArgs;
use commands::risk::RiskArgs;
use config::{build_config, CliOverrides, DEFAULT_CONFIG_FILE};

/// Option pricing and Monte Carlo risk CLI
#[derive(Parser)]
#[command(name = "pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Number of Monte Carlo scenarios
    #[arg(long, global = true)]
    scenarios: Option<usize>,

    /// Generator seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Confidence level of VaR and ES
    #[arg(long, global = true)]
    confidence: Option<f64>,

    /// Lattice depth for portfolio positions
    #[arg(long, global = true)]
    portfolio_depth: Option<usize>,

    /// Lattice depth for single-instrument valuation
    #[arg(long, global = true)]
    instrument_depth: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else {
            self.log_level.clone()
        };
        CliOverrides {
            log_level,
            n_scenarios: self.scenarios,
            seed: self.seed,
            confidence: self.confidence,
            portfolio_depth: self.portfolio_depth,
            instrument_depth: self.instrument_depth,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the reference valuation and portfolio risk demonstration
    Demo,

    /// Value options at one spot
    Price(PriceArgs),

    /// Compute portfolio VaR and Expected Shortfall
    Risk(RiskArgs),
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = build_config(&cli.config, &cli.overrides())
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        log_level = %config.log_level,
        portfolio_depth = config.pricing.portfolio_depth,
        instrument_depth = config.pricing.instrument_depth,
        n_scenarios = config.risk.n_scenarios,
        seed = config.risk.seed,
        confidence = config.risk.confidence,
        "Configuration loaded"
    );

    match &cli.command {
        Commands::Demo => commands::demo::run(&config).context("demo failed")?,
        Commands::Price(args) => commands::price::run(args, &config).context("price failed")?,
        Commands::Risk(args) => commands::risk::run(args, &config).context("risk failed")?,
    }

    Ok(())
}
