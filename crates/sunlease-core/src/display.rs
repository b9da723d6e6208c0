//! Presentation-side transforms over engine outputs. Nothing here feeds back
//! into a computation: toggling a display mode or client kind never changes
//! the underlying offer.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::economics::EconomicAnalysis;
use crate::offer::{Offer, ResidualValue};
use crate::types::Money;

/// Pre-tax vs. tax-inclusive price display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    #[serde(rename = "HT")]
    PreTax,
    #[default]
    #[serde(rename = "TTC")]
    TaxInclusive,
}

/// The monthly payment under the selected display mode.
pub fn displayed_payment(offer: &Offer, mode: DisplayMode) -> Money {
    match mode {
        DisplayMode::PreTax => offer.monthly_payment_ht,
        DisplayMode::TaxInclusive => offer.monthly_payment_ttc,
    }
}

/// The residual value under the selected display mode.
pub fn displayed_residual(value: &ResidualValue, mode: DisplayMode) -> Money {
    match mode {
        DisplayMode::PreTax => value.value_ht,
        DisplayMode::TaxInclusive => value.value_ttc,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientKind {
    #[default]
    Individual,
    Business,
}

/// What the offer card shows in place of the affordability figure.
/// Individuals see the minimum-income rule; businesses go through a credit
/// study instead of the banding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffordabilityDisplay {
    MinimumAnnualRevenue(Money),
    SubjectToCreditStudy,
}

pub fn affordability(offer: &Offer, client: ClientKind) -> AffordabilityDisplay {
    match client {
        ClientKind::Individual => {
            AffordabilityDisplay::MinimumAnnualRevenue(offer.min_annual_revenue)
        }
        ClientKind::Business => AffordabilityDisplay::SubjectToCreditStudy,
    }
}

/// Gross savings split into the paid subscription period and the free years
/// after it. The engine's canonical figure stays gross; this view is layered
/// on top for comparison cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetSavingsBreakdown {
    pub projection_years: u32,
    pub subscription_years: u32,
    /// Total subscription cost over the paid period.
    pub subscription_cost: Money,
    /// Gross savings of the paid period, less the subscription cost.
    pub subscription_period_net: Money,
    /// Savings of the years after the subscription ends, fully kept.
    pub post_subscription_savings: Money,
    pub total_net_savings: Money,
}

/// Split an analysis span around a subscription of `subscription_years` paid
/// at `monthly_payment` (in whichever display mode the caller is showing).
/// Annual savings are flat across the span, so each period takes its
/// proportional share of the gross figure.
pub fn net_savings(
    analysis: &EconomicAnalysis,
    subscription_years: u32,
    monthly_payment: Money,
) -> NetSavingsBreakdown {
    let projection_years = analysis.duration_years;
    let paid_years = subscription_years.min(projection_years);
    let free_years = projection_years - paid_years;

    let annual_gross = if projection_years == 0 {
        Decimal::ZERO
    } else {
        analysis.total_gross_savings / Decimal::from(projection_years)
    };

    let subscription_cost = monthly_payment * dec!(12) * Decimal::from(paid_years);
    let subscription_period_net = annual_gross * Decimal::from(paid_years) - subscription_cost;
    let post_subscription_savings = annual_gross * Decimal::from(free_years);

    NetSavingsBreakdown {
        projection_years,
        subscription_years,
        subscription_cost,
        subscription_period_net,
        post_subscription_savings,
        total_net_savings: subscription_period_net + post_subscription_savings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::economics::{project_savings, EconomicStudyInput};
    use crate::types::SelfConsumption;

    fn sample_analysis(duration_years: u32) -> EconomicAnalysis {
        let input = EconomicStudyInput {
            annual_yield_kwh: dec!(8000),
            electricity_price: dec!(0.25),
            monthly_bill: None,
            self_consumption: SelfConsumption::Standard,
        };
        project_savings(&input, &EngineConfig::default())
            .unwrap()
            .into_iter()
            .find(|a| a.duration_years == duration_years)
            .unwrap()
    }

    #[test]
    fn test_net_savings_full_span_subscription() {
        // 20-year span, 20-year subscription at 100 €/month.
        // Gross = 8 000 × 20 × (0.6 × 0.25 + 0.4 × 0.004) = 24 256 €.
        let analysis = sample_analysis(20);
        let breakdown = net_savings(&analysis, 20, dec!(100));

        assert_eq!(breakdown.subscription_cost, dec!(24000));
        assert_eq!(breakdown.subscription_period_net, dec!(256.0));
        assert_eq!(breakdown.post_subscription_savings, Decimal::ZERO);
        assert_eq!(breakdown.total_net_savings, dec!(256.0));
    }

    #[test]
    fn test_net_savings_free_years_after_subscription() {
        // 30-year span with a 10-year subscription: 20 free years.
        let analysis = sample_analysis(30);
        let breakdown = net_savings(&analysis, 10, dec!(100));

        let annual_gross = analysis.total_gross_savings / dec!(30);
        assert_eq!(breakdown.subscription_cost, dec!(12000));
        assert_eq!(
            breakdown.subscription_period_net,
            annual_gross * dec!(10) - dec!(12000),
        );
        assert_eq!(breakdown.post_subscription_savings, annual_gross * dec!(20));
        assert_eq!(
            breakdown.total_net_savings,
            breakdown.subscription_period_net + breakdown.post_subscription_savings,
        );
    }

    #[test]
    fn test_net_savings_subscription_capped_at_span() {
        let analysis = sample_analysis(10);
        let breakdown = net_savings(&analysis, 25, dec!(100));
        // Only 10 of the 25 subscription years fall inside the span.
        assert_eq!(breakdown.subscription_cost, dec!(12000));
        assert_eq!(breakdown.post_subscription_savings, Decimal::ZERO);
    }

    #[test]
    fn test_net_savings_can_be_negative() {
        let analysis = sample_analysis(10);
        let breakdown = net_savings(&analysis, 10, dec!(500));
        assert!(breakdown.total_net_savings < Decimal::ZERO);
    }

    #[test]
    fn test_display_mode_selection() {
        let config = EngineConfig::default();
        let offer = Offer {
            duration: crate::types::ContractTerm::TenYears,
            monthly_payment_ht: dec!(100.00),
            monthly_payment_ttc: dec!(120.00),
            min_annual_revenue: dec!(36000),
            solvability: crate::offer::Solvability::Excellent,
            residual_values: crate::offer::residual_values(
                dec!(10000),
                crate::types::ContractTerm::TenYears,
                &config,
            ),
            economic_analysis: sample_analysis(10),
        };

        assert_eq!(displayed_payment(&offer, DisplayMode::PreTax), dec!(100.00));
        assert_eq!(displayed_payment(&offer, DisplayMode::TaxInclusive), dec!(120.00));

        let residual = &offer.residual_values[0];
        assert_eq!(displayed_residual(residual, DisplayMode::PreTax), residual.value_ht);
        assert_eq!(
            displayed_residual(residual, DisplayMode::TaxInclusive),
            residual.value_ttc,
        );

        assert_eq!(
            affordability(&offer, ClientKind::Individual),
            AffordabilityDisplay::MinimumAnnualRevenue(dec!(36000)),
        );
        assert_eq!(
            affordability(&offer, ClientKind::Business),
            AffordabilityDisplay::SubjectToCreditStudy,
        );
    }
}
