use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::economics::{self, EconomicAnalysis, EconomicStudyInput};
use crate::eligibility;
use crate::error::SunleaseError;
use crate::payment;
use crate::tables::{self, rates, residuals};
use crate::types::{
    round_currency, round_unit, with_metadata, ComputationOutput, ContractTerm, Money,
    OfferRequest,
};
use crate::SunleaseResult;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Buy-out value of the installation at a given contract year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResidualValue {
    pub year: u32,
    pub value_ht: Money,
    pub value_ttc: Money,
}

/// Coarse affordability banding used for individual clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Solvability {
    Excellent,
    Good,
    Acceptable,
    Difficult,
}

impl Solvability {
    /// Band by absolute tax-inclusive monthly payment.
    pub fn from_monthly_ttc(monthly_payment_ttc: Money) -> Self {
        if monthly_payment_ttc <= dec!(150) {
            Solvability::Excellent
        } else if monthly_payment_ttc <= dec!(250) {
            Solvability::Good
        } else if monthly_payment_ttc <= dec!(400) {
            Solvability::Acceptable
        } else {
            Solvability::Difficult
        }
    }
}

/// One subscription offer for a financing term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub duration: ContractTerm,
    pub monthly_payment_ht: Money,
    pub monthly_payment_ttc: Money,
    pub min_annual_revenue: Money,
    pub solvability: Solvability,
    pub residual_values: Vec<ResidualValue>,
    pub economic_analysis: EconomicAnalysis,
}

/// The full calculation result: one offer per financing term, plus the
/// savings projection including the 30-year span no offer finances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferSet {
    pub offers: Vec<Offer>,
    pub economics: Vec<EconomicAnalysis>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Assemble the offer set for a validated request: amortized payments per
/// term, affordability figures, residual value schedules and the matching
/// savings projection, joined by duration.
pub fn calculate_offers(
    request: &OfferRequest,
    config: &EngineConfig,
) -> SunleaseResult<ComputationOutput<OfferSet>> {
    let mut warnings: Vec<String> = Vec::new();

    if config.income_share_cap <= Decimal::ZERO {
        return Err(SunleaseError::InvalidInput {
            field: "income_share_cap".into(),
            reason: "Income share cap must be positive".into(),
        });
    }

    let study = eligibility::validate_request(request)?;

    if request.power_kwc > tables::MAX_TABULATED_POWER_KWC {
        warnings.push(format!(
            "{} kWc exceeds the tabulated range; top-tier rates apply and no price ceiling is enforced",
            request.power_kwc,
        ));
    }

    let study_input = EconomicStudyInput {
        annual_yield_kwh: study.annual_yield_kwh,
        electricity_price: study.electricity_price,
        monthly_bill: Some(study.monthly_bill),
        self_consumption: request.self_consumption,
    };
    let analyses = economics::project_savings(&study_input, config)?;

    let mut offers = Vec::with_capacity(ContractTerm::ALL.len());
    for analysis in &analyses {
        // Projection spans without a financing term (30 years) stay
        // economics-only.
        let Ok(term) = ContractTerm::try_from(analysis.duration_years) else {
            continue;
        };

        let annual_rate = rates::annual_rate(term, request.power_kwc);
        let monthly_payment_ht =
            payment::monthly_payment(request.installation_price, annual_rate, term.months())?;
        let monthly_payment_ttc = round_currency(monthly_payment_ht * config.vat_multiplier());

        offers.push(Offer {
            duration: term,
            monthly_payment_ht,
            monthly_payment_ttc,
            min_annual_revenue: minimum_annual_revenue(monthly_payment_ttc, config),
            solvability: Solvability::from_monthly_ttc(monthly_payment_ttc),
            residual_values: residual_values(request.installation_price, term, config),
            economic_analysis: analysis.clone(),
        });
    }

    let assumptions = serde_json::json!({
        "power_kwc": request.power_kwc.to_string(),
        "rate_tier": tables::rate_tier(request.power_kwc),
        "vat_rate": config.vat_rate.to_string(),
        "income_share_cap": config.income_share_cap.to_string(),
        "resale_unit_price": config.resale_unit_price.to_string(),
        "self_consumption_rate": request.self_consumption.rate(config).to_string(),
    });

    Ok(with_metadata(
        "Solar subscription offers (fixed-rate amortization, gross savings projection)",
        &assumptions,
        warnings,
        &config.revision,
        OfferSet {
            offers,
            economics: analyses,
        },
    ))
}

/// Lowest annual income for which the tax-inclusive payment stays within the
/// configured income share (4% by default), rounded to the euro.
pub fn minimum_annual_revenue(monthly_payment_ttc: Money, config: &EngineConfig) -> Money {
    round_unit(monthly_payment_ttc * dec!(12) / config.income_share_cap)
}

/// Residual buy-out values for a term, pre-tax and tax-inclusive, from year 2
/// through the final contract year.
pub fn residual_values(
    installation_price: Money,
    term: ContractTerm,
    config: &EngineConfig,
) -> Vec<ResidualValue> {
    residuals::schedule(term)
        .iter()
        .enumerate()
        .map(|(offset, percentage)| {
            let value_ht = round_currency(installation_price * percentage / dec!(100));
            let value_ttc = round_currency(value_ht * config.vat_multiplier());
            ResidualValue {
                year: residuals::FIRST_RESIDUAL_YEAR + offset as u32,
                value_ht,
                value_ttc,
            }
        })
        .collect()
}
