use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::SunleaseError;
use crate::types::{Energy, Money, SelfConsumption};
use crate::SunleaseResult;

/// Spans covered by the savings projection. The 30-year span extrapolates
/// the same annual savings rate past the longest financing term, so it has
/// no financing counterpart.
pub const PROJECTION_YEARS: [u32; 5] = [10, 15, 20, 25, 30];

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicStudyInput {
    /// Estimated annual production in kWh.
    pub annual_yield_kwh: Energy,
    /// Grid electricity unit price in €/kWh.
    pub electricity_price: Money,
    /// Informational only; never enters the savings formula.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_bill: Option<Money>,
    #[serde(default)]
    pub self_consumption: SelfConsumption,
}

/// Cumulative production and gross savings over one projection span.
/// Gross means before any subscription cost; the net view is a presentation
/// transform, not an engine output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomicAnalysis {
    pub duration_years: u32,
    pub total_production_kwh: Energy,
    pub total_self_consumption_kwh: Energy,
    pub total_surplus_kwh: Energy,
    pub total_electricity_savings: Money,
    pub total_surplus_revenue: Money,
    pub total_gross_savings: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Project gross savings over every span in [`PROJECTION_YEARS`], ascending.
pub fn project_savings(
    input: &EconomicStudyInput,
    config: &EngineConfig,
) -> SunleaseResult<Vec<EconomicAnalysis>> {
    if input.annual_yield_kwh <= Decimal::ZERO {
        return Err(SunleaseError::InvalidInput {
            field: "annual_yield_kwh".into(),
            reason: "Annual yield must be positive".into(),
        });
    }
    if input.electricity_price <= Decimal::ZERO {
        return Err(SunleaseError::InvalidInput {
            field: "electricity_price".into(),
            reason: "Electricity unit price must be positive".into(),
        });
    }

    let self_consumption_rate = input.self_consumption.rate(config);
    Ok(PROJECTION_YEARS
        .iter()
        .map(|&years| analysis_for_span(input, self_consumption_rate, config, years))
        .collect())
}

fn analysis_for_span(
    input: &EconomicStudyInput,
    self_consumption_rate: Decimal,
    config: &EngineConfig,
    years: u32,
) -> EconomicAnalysis {
    let total_production = input.annual_yield_kwh * Decimal::from(years);
    let total_self_consumption = total_production * self_consumption_rate;
    let total_surplus = total_production - total_self_consumption;

    let electricity_savings = total_self_consumption * input.electricity_price;
    let surplus_revenue = total_surplus * config.resale_unit_price;

    EconomicAnalysis {
        duration_years: years,
        total_production_kwh: total_production,
        total_self_consumption_kwh: total_self_consumption,
        total_surplus_kwh: total_surplus,
        total_electricity_savings: electricity_savings,
        total_surplus_revenue: surplus_revenue,
        total_gross_savings: electricity_savings + surplus_revenue,
    }
}
