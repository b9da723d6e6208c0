use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use sunlease_core::config::EngineConfig;
use sunlease_core::display;
use sunlease_core::economics::{project_savings, EconomicStudyInput, PROJECTION_YEARS};
use sunlease_core::types::SelfConsumption;

// ===========================================================================
// Savings projection tests
// ===========================================================================

fn sample_study() -> EconomicStudyInput {
    EconomicStudyInput {
        annual_yield_kwh: dec!(8000),
        electricity_price: dec!(0.25),
        monthly_bill: Some(dec!(120)),
        self_consumption: SelfConsumption::Standard,
    }
}

#[test]
fn test_projection_covers_every_span() {
    let analyses = project_savings(&sample_study(), &EngineConfig::default()).unwrap();
    let spans: Vec<u32> = analyses.iter().map(|a| a.duration_years).collect();
    assert_eq!(spans, PROJECTION_YEARS.to_vec());
}

#[test]
fn test_gross_savings_formula() {
    let analyses = project_savings(&sample_study(), &EngineConfig::default()).unwrap();
    for analysis in &analyses {
        let years = Decimal::from(analysis.duration_years);
        assert_eq!(analysis.total_production_kwh, dec!(8000) * years);
        assert_eq!(
            analysis.total_electricity_savings,
            analysis.total_self_consumption_kwh * dec!(0.25),
        );
        assert_eq!(
            analysis.total_surplus_revenue,
            analysis.total_surplus_kwh * dec!(0.004),
        );
        assert_eq!(
            analysis.total_gross_savings,
            analysis.total_electricity_savings + analysis.total_surplus_revenue,
        );
    }
}

#[test]
fn test_production_split_is_exact() {
    let analyses = project_savings(&sample_study(), &EngineConfig::default()).unwrap();
    for analysis in &analyses {
        assert_eq!(
            analysis.total_self_consumption_kwh + analysis.total_surplus_kwh,
            analysis.total_production_kwh,
        );
    }
}

#[test]
fn test_savings_grow_with_span() {
    let analyses = project_savings(&sample_study(), &EngineConfig::default()).unwrap();
    for pair in analyses.windows(2) {
        assert!(pair[1].total_gross_savings > pair[0].total_gross_savings);
    }
}

#[test]
fn test_thirty_year_span_extrapolates_annual_rate() {
    let analyses = project_savings(&sample_study(), &EngineConfig::default()).unwrap();
    let ten = analyses.iter().find(|a| a.duration_years == 10).unwrap();
    let thirty = analyses.iter().find(|a| a.duration_years == 30).unwrap();
    assert_eq!(thirty.total_gross_savings, ten.total_gross_savings * dec!(3));
}

#[test]
fn test_virtual_battery_shifts_the_split() {
    let mut study = sample_study();
    study.self_consumption = SelfConsumption::VirtualBattery;
    let analyses = project_savings(&study, &EngineConfig::default()).unwrap();
    let ten = &analyses[0];
    assert_eq!(ten.total_self_consumption_kwh, dec!(72000));
    assert_eq!(ten.total_surplus_kwh, dec!(8000));
    // More self-consumption at 0.25 €/kWh beats selling at 0.004 €/kWh.
    let baseline = project_savings(&sample_study(), &EngineConfig::default()).unwrap();
    assert!(ten.total_gross_savings > baseline[0].total_gross_savings);
}

#[test]
fn test_historical_resale_tariffs_are_config() {
    for (revision, resale) in [("2023-06", dec!(0.04)), ("2022-01", dec!(0.40))] {
        let config = EngineConfig {
            revision: revision.into(),
            resale_unit_price: resale,
            ..EngineConfig::default()
        };
        let analyses = project_savings(&sample_study(), &config).unwrap();
        assert_eq!(
            analyses[0].total_surplus_revenue,
            analyses[0].total_surplus_kwh * resale,
        );
    }
}

// ===========================================================================
// Net-savings display transform
// ===========================================================================

#[test]
fn test_net_savings_periods_sum_to_total() {
    let analyses = project_savings(&sample_study(), &EngineConfig::default()).unwrap();
    let twenty_five = analyses.iter().find(|a| a.duration_years == 25).unwrap();

    let breakdown = display::net_savings(twenty_five, 15, dec!(150));
    assert_eq!(breakdown.projection_years, 25);
    assert_eq!(breakdown.subscription_cost, dec!(150) * dec!(12) * dec!(15));
    assert_eq!(
        breakdown.total_net_savings,
        breakdown.subscription_period_net + breakdown.post_subscription_savings,
    );
    // The gross figure is untouched by the transform.
    assert_eq!(
        twenty_five.total_gross_savings,
        breakdown.subscription_cost + breakdown.total_net_savings,
    );
}
