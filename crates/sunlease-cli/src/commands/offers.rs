use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use sunlease_core::config::EngineConfig;
use sunlease_core::offer;
use sunlease_core::types::{OfferRequest, SelfConsumption, SiteLocation};

use crate::input;

/// Arguments for the full offer calculation
#[derive(Args)]
pub struct OffersArgs {
    /// Path to a JSON offer request (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Installed power in kWc
    #[arg(long)]
    pub power: Option<Decimal>,

    /// Pre-tax installation price in €
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Estimated annual production in kWh
    #[arg(long, alias = "yield")]
    pub annual_yield: Option<Decimal>,

    /// Site address label
    #[arg(long)]
    pub address: Option<String>,

    /// Site latitude
    #[arg(long)]
    pub latitude: Option<Decimal>,

    /// Site longitude
    #[arg(long)]
    pub longitude: Option<Decimal>,

    /// Client's monthly electricity bill in €
    #[arg(long)]
    pub monthly_bill: Option<Decimal>,

    /// Grid electricity unit price in €/kWh
    #[arg(long)]
    pub electricity_price: Option<Decimal>,

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

pub fn run_offers(args: OffersArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let config = load_config(args.config.as_deref(), args.resale_price)?;

    let request: OfferRequest = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(piped) = input::stdin::read_piped()? {
        piped
    } else {
        let site = match (args.address, args.latitude, args.longitude) {
            (Some(address), Some(latitude), Some(longitude)) => Some(SiteLocation {
                address,
                latitude,
                longitude,
            }),
            _ => None,
        };
        OfferRequest {
            power_kwc: args.power.ok_or("--power is required (or provide --input)")?,
            installation_price: args.price.ok_or("--price is required (or provide --input)")?,
            site,
            annual_yield_kwh: args.annual_yield,
            monthly_bill: args.monthly_bill,
            electricity_price: args.electricity_price,
            self_consumption: if args.virtual_battery {
                SelfConsumption::VirtualBattery
            } else {
                SelfConsumption::Standard
            },
        }
    };

    let output = offer::calculate_offers(&request, &config)?;
    Ok(serde_json::to_value(&output)?)
}

/// Tariff configuration: file if given, defaults otherwise, with the
/// resale-price flag applied on top.
pub fn load_config(
    path: Option<&str>,
    resale_price: Option<Decimal>,
) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    let mut config: EngineConfig = match path {
        Some(p) => input::file::read_json(p)?,
        None => EngineConfig::default(),
    };
    if let Some(price) = resale_price {
        config.resale_unit_price = price;
    }
    Ok(config)
}
