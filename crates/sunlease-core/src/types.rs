use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::SunleaseError;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Energy quantities in kWh.
pub type Energy = Decimal;

/// Round to currency scale: 2 decimal places, half away from zero.
pub fn round_currency(amount: Money) -> Money {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to a whole unit, half away from zero.
pub fn round_unit(amount: Money) -> Money {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Subscription financing durations. The enumerated set is closed: any other
/// year count fails at deserialization rather than reaching a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ContractTerm {
    TenYears,
    FifteenYears,
    TwentyYears,
    TwentyFiveYears,
}

impl ContractTerm {
    /// All financing terms, ascending.
    pub const ALL: [ContractTerm; 4] = [
        ContractTerm::TenYears,
        ContractTerm::FifteenYears,
        ContractTerm::TwentyYears,
        ContractTerm::TwentyFiveYears,
    ];

    pub fn years(self) -> u32 {
        match self {
            ContractTerm::TenYears => 10,
            ContractTerm::FifteenYears => 15,
            ContractTerm::TwentyYears => 20,
            ContractTerm::TwentyFiveYears => 25,
        }
    }

    pub fn months(self) -> u32 {
        self.years() * 12
    }
}

impl TryFrom<u32> for ContractTerm {
    type Error = SunleaseError;

    fn try_from(years: u32) -> Result<Self, Self::Error> {
        match years {
            10 => Ok(ContractTerm::TenYears),
            15 => Ok(ContractTerm::FifteenYears),
            20 => Ok(ContractTerm::TwentyYears),
            25 => Ok(ContractTerm::TwentyFiveYears),
            other => Err(SunleaseError::InvalidInput {
                field: "duration".into(),
                reason: format!("{other} years is not a subscription duration (10, 15, 20 or 25)"),
            }),
        }
    }
}

impl From<ContractTerm> for u32 {
    fn from(term: ContractTerm) -> u32 {
        term.years()
    }
}

/// Self-consumption profile. Exactly two profiles exist: the baseline and the
/// virtual-battery option. Intermediate ratios are not offered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfConsumption {
    #[default]
    Standard,
    VirtualBattery,
}

impl SelfConsumption {
    /// Fraction of production consumed on-site under this profile.
    pub fn rate(self, config: &EngineConfig) -> Rate {
        match self {
            SelfConsumption::Standard => config.standard_self_consumption,
            SelfConsumption::VirtualBattery => config.battery_self_consumption,
        }
    }
}

/// A geocoded installation site, as returned by the address resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteLocation {
    pub address: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

/// One immutable calculation request. Replaces scattered form state: the
/// engine holds nothing between invocations, so the same request always
/// produces the same offers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferRequest {
    /// Installed nameplate power in kWc (≥ 2, 0.5 steps).
    pub power_kwc: Decimal,
    /// Pre-tax installation price in €.
    pub installation_price: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<SiteLocation>,
    /// Estimated annual production in kWh, from the irradiance provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_yield_kwh: Option<Energy>,
    /// Informational only; never enters the savings formula.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_bill: Option<Money>,
    /// Grid electricity unit price in €/kWh.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electricity_price: Option<Money>,
    #[serde(default)]
    pub self_consumption: SelfConsumption,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation. Carries no timing or clock field:
/// identical requests must yield bit-identical envelopes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub precision: String,
    pub tariff_revision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    tariff_revision: &str,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            precision: "rust_decimal_128bit".to_string(),
            tariff_revision: tariff_revision.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_contract_term_roundtrip() {
        for term in ContractTerm::ALL {
            let json = serde_json::to_value(term).unwrap();
            let back: ContractTerm = serde_json::from_value(json).unwrap();
            assert_eq!(back, term);
        }
    }

    #[test]
    fn test_contract_term_rejects_unknown_duration() {
        let err = serde_json::from_value::<ContractTerm>(serde_json::json!(12));
        assert!(err.is_err());
        let err = serde_json::from_value::<ContractTerm>(serde_json::json!(30));
        assert!(err.is_err(), "30 years is a projection span, not a financing term");
    }

    #[test]
    fn test_contract_term_months() {
        assert_eq!(ContractTerm::TenYears.months(), 120);
        assert_eq!(ContractTerm::TwentyFiveYears.months(), 300);
    }

    #[test]
    fn test_round_currency_half_up() {
        assert_eq!(round_currency(dec!(2.345)), dec!(2.35));
        assert_eq!(round_currency(dec!(2.344)), dec!(2.34));
        assert_eq!(round_currency(dec!(192.8549)), dec!(192.85));
    }

    #[test]
    fn test_round_unit() {
        assert_eq!(round_unit(dec!(57864.5)), dec!(57865));
        assert_eq!(round_unit(dec!(57864.4)), dec!(57864));
    }
}
