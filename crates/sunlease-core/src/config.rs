use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Rate};

fn default_revision() -> String {
    "2025-01".to_string()
}

fn default_resale_unit_price() -> Money {
    dec!(0.004)
}

fn default_vat_rate() -> Rate {
    dec!(0.20)
}

fn default_income_share_cap() -> Rate {
    dec!(0.04)
}

fn default_standard_self_consumption() -> Rate {
    dec!(0.60)
}

fn default_battery_self_consumption() -> Rate {
    dec!(0.90)
}

fn default_electricity_price() -> Money {
    dec!(0.25)
}

/// Business constants that have changed between tariff revisions. Everything
/// the sales team can renegotiate lives here rather than in the formulas;
/// the rate, residual and ceiling tables stay compiled in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Label for this tariff set, echoed into result metadata.
    #[serde(default = "default_revision")]
    pub revision: String,
    /// Surplus resale unit price in €/kWh.
    #[serde(default = "default_resale_unit_price")]
    pub resale_unit_price: Money,
    /// VAT applied to payments and residual values.
    #[serde(default = "default_vat_rate")]
    pub vat_rate: Rate,
    /// The tax-inclusive payment must not exceed this share of annual income.
    #[serde(default = "default_income_share_cap")]
    pub income_share_cap: Rate,
    /// Self-consumption fraction without storage.
    #[serde(default = "default_standard_self_consumption")]
    pub standard_self_consumption: Rate,
    /// Self-consumption fraction with the virtual-battery option.
    #[serde(default = "default_battery_self_consumption")]
    pub battery_self_consumption: Rate,
    /// Grid electricity price suggested when the client has no figure.
    #[serde(default = "default_electricity_price")]
    pub default_electricity_price: Money,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            revision: default_revision(),
            resale_unit_price: default_resale_unit_price(),
            vat_rate: default_vat_rate(),
            income_share_cap: default_income_share_cap(),
            standard_self_consumption: default_standard_self_consumption(),
            battery_self_consumption: default_battery_self_consumption(),
            default_electricity_price: default_electricity_price(),
        }
    }
}

impl EngineConfig {
    /// VAT multiplier (1 + rate).
    pub fn vat_multiplier(&self) -> Decimal {
        Decimal::ONE + self.vat_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.resale_unit_price, dec!(0.004));
        assert_eq!(config.vat_rate, dec!(0.20));
        assert_eq!(config.income_share_cap, dec!(0.04));
        assert_eq!(config.standard_self_consumption, dec!(0.60));
        assert_eq!(config.battery_self_consumption, dec!(0.90));
        assert_eq!(config.default_electricity_price, dec!(0.25));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        // A historical tariff revision overriding only the resale price.
        let config: EngineConfig =
            serde_json::from_str(r#"{"revision": "2023-06", "resale_unit_price": "0.04"}"#)
                .unwrap();
        assert_eq!(config.revision, "2023-06");
        assert_eq!(config.resale_unit_price, dec!(0.04));
        assert_eq!(config.vat_rate, dec!(0.20));
    }

    #[test]
    fn test_vat_multiplier() {
        assert_eq!(EngineConfig::default().vat_multiplier(), dec!(1.20));
    }
}
