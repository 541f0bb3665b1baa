//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod demo;
pub mod price;
pub mod risk;

use clap::{Args, ValueEnum};
use pricer_models::instruments::{InstrumentParams, OptionKind, VanillaOption};

use crate::Result;

/// Option variant selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    EuropeanCall,
    EuropeanPut,
    AmericanCall,
    AmericanPut,
}

impl From<KindArg> for OptionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::EuropeanCall => OptionKind::EuropeanCall,
            KindArg::EuropeanPut => OptionKind::EuropeanPut,
            KindArg::AmericanCall => OptionKind::AmericanCall,
            KindArg::AmericanPut => OptionKind::AmericanPut,
        }
    }
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Contract terms shared by the `price` and `risk` commands
#[derive(Debug, Clone, Args)]
pub struct ContractArgs {
    /// Option variants (all four when omitted)
    #[arg(long = "kind", value_enum)]
    pub kinds: Vec<KindArg>,

    /// Strike price
    #[arg(short = 'k', long, default_value_t = 100.0)]
    pub strike: f64,

    /// Annualised volatility
    #[arg(long, default_value_t = 0.25)]
    pub vol: f64,

    /// Time to expiry in years
    #[arg(short = 't', long, default_value_t = 1.0)]
    pub expiry: f64,

    /// Annualised risk-free rate
    #[arg(short, long, default_value_t = 0.05)]
    pub rate: f64,
}

impl ContractArgs {
    /// Selected variants in the order given, or all four
    pub fn selected_kinds(&self) -> Vec<OptionKind> {
        if self.kinds.is_empty() {
            OptionKind::ALL.to_vec()
        } else {
            self.kinds.iter().map(|&k| k.into()).collect()
        }
    }

    /// Builds one instrument per selected variant
    pub fn instruments(&self, default_depth: usize) -> Result<Vec<VanillaOption>> {
        let params = InstrumentParams::new(self.strike, self.vol, self.expiry, self.rate)?;
        let options = self
            .selected_kinds()
            .into_iter()
            .map(|kind| VanillaOption::new(kind, params, default_depth))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(options)
    }
}
