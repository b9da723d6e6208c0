use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use sunlease_core::offer;
use sunlease_core::types::ContractTerm;

use crate::commands::offers::load_config;

/// Arguments for the residual value schedule
#[derive(Args)]
pub struct ResidualsArgs {
    /// Pre-tax installation price in €
    #[arg(long)]
    pub price: Decimal,

    /// Contract duration in years (10, 15, 20 or 25)
    #[arg(long)]
    pub duration: u32,

    /// Path to a tariff configuration JSON
    #[arg(long)]
    pub config: Option<String>,
}

pub fn run_residuals(args: ResidualsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let config = load_config(args.config.as_deref(), None)?;
    let term = ContractTerm::try_from(args.duration)?;
    let values = offer::residual_values(args.price, term, &config);
    Ok(serde_json::to_value(&values)?)
}
