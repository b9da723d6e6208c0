use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use sunlease_core::economics::{self, EconomicStudyInput};
use sunlease_core::types::SelfConsumption;

use crate::commands::offers::load_config;
use crate::input;

/// Arguments for the savings projection
#[derive(Args)]
pub struct EconomicsArgs {
    /// Path to a JSON economic study input (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Estimated annual production in kWh
    #[arg(long, alias = "yield")]
    pub annual_yield: Option<Decimal>,

    /// Grid electricity unit price in €/kWh
    #[arg(long)]
    pub electricity_price: Option<Decimal>,

    /// Client's monthly electricity bill in € (informational)
    #[arg(long)]
    pub monthly_bill: Option<Decimal>,

    /// Apply the virtual-battery self-consumption profile (90% instead of 60%)
    #[arg(long)]
    pub virtual_battery: bool,

    /// Path to a tariff configuration JSON
    #[arg(long)]
    pub config: Option<String>,

    /// Override the surplus resale price in €/kWh
    #[arg(long)]
    pub resale_price: Option<Decimal>,
}

pub fn run_economics(args: EconomicsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let config = load_config(args.config.as_deref(), args.resale_price)?;

    let study: EconomicStudyInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(piped) = input::stdin::read_piped()? {
        piped
    } else {
        EconomicStudyInput {
            annual_yield_kwh: args
                .annual_yield
                .ok_or("--annual-yield is required (or provide --input)")?,
            electricity_price: args.electricity_price.unwrap_or(config.default_electricity_price),
            monthly_bill: args.monthly_bill,
            self_consumption: if args.virtual_battery {
                SelfConsumption::VirtualBattery
            } else {
                SelfConsumption::Standard
            },
        }
    };

    let analyses = economics::project_savings(&study, &config)?;
    Ok(serde_json::to_value(&analyses)?)
}
