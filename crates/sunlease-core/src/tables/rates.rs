use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::tables::{rate_tier, RATE_TIER_COUNT};
use crate::types::{ContractTerm, Rate};

// Annual variable rates stored ×100 (8.50 ⇒ 8.5 %/year), one column per
// power tier. Shorter contracts carry higher rates.
const RATES_10Y: [Decimal; RATE_TIER_COUNT] = [
    dec!(10.00),
    dec!(10.00),
    dec!(10.00),
    dec!(10.60),
    dec!(10.70),
    dec!(10.80),
    dec!(10.84),
    dec!(10.89),
    dec!(11.00),
    dec!(11.10),
    dec!(11.21),
    dec!(11.30),
    dec!(11.35),
    dec!(11.39),
    dec!(11.50),
    dec!(11.60),
    dec!(11.72),
    dec!(11.80),
    dec!(11.85),
    dec!(11.90),
    dec!(11.98),
    dec!(12.10),
    dec!(12.20),
    dec!(12.30),
    dec!(12.40),
    dec!(12.50),
];

const RATES_15Y: [Decimal; RATE_TIER_COUNT] = [
    dec!(9.10),
    dec!(9.10),
    dec!(9.10),
    dec!(9.70),
    dec!(9.80),
    dec!(9.90),
    dec!(9.94),
    dec!(9.99),
    dec!(10.10),
    dec!(10.20),
    dec!(10.31),
    dec!(10.40),
    dec!(10.45),
    dec!(10.49),
    dec!(10.60),
    dec!(10.70),
    dec!(10.82),
    dec!(10.90),
    dec!(10.95),
    dec!(11.00),
    dec!(11.08),
    dec!(11.20),
    dec!(11.30),
    dec!(11.40),
    dec!(11.50),
    dec!(11.60),
];

const RATES_20Y: [Decimal; RATE_TIER_COUNT] = [
    dec!(8.75),
    dec!(8.75),
    dec!(8.75),
    dec!(9.35),
    dec!(9.45),
    dec!(9.55),
    dec!(9.59),
    dec!(9.64),
    dec!(9.75),
    dec!(9.85),
    dec!(9.96),
    dec!(10.05),
    dec!(10.10),
    dec!(10.14),
    dec!(10.25),
    dec!(10.35),
    dec!(10.47),
    dec!(10.55),
    dec!(10.60),
    dec!(10.65),
    dec!(10.73),
    dec!(10.85),
    dec!(10.95),
    dec!(11.05),
    dec!(11.15),
    dec!(11.25),
];

const RATES_25Y: [Decimal; RATE_TIER_COUNT] = [
    dec!(8.50),
    dec!(8.50),
    dec!(8.50),
    dec!(9.10),
    dec!(9.20),
    dec!(9.30),
    dec!(9.34),
    dec!(9.39),
    dec!(9.50),
    dec!(9.60),
    dec!(9.71),
    dec!(9.80),
    dec!(9.85),
    dec!(9.89),
    dec!(10.00),
    dec!(10.10),
    dec!(10.22),
    dec!(10.30),
    dec!(10.35),
    dec!(10.40),
    dec!(10.48),
    dec!(10.60),
    dec!(10.70),
    dec!(10.80),
    dec!(10.90),
    dec!(11.00),
];

fn table(term: ContractTerm) -> &'static [Decimal; RATE_TIER_COUNT] {
    match term {
        ContractTerm::TenYears => &RATES_10Y,
        ContractTerm::FifteenYears => &RATES_15Y,
        ContractTerm::TwentyYears => &RATES_20Y,
        ContractTerm::TwentyFiveYears => &RATES_25Y,
    }
}

/// Annual interest rate for a term and power rating, as a fraction.
pub fn annual_rate(term: ContractTerm, power_kwc: Decimal) -> Rate {
    table(term)[rate_tier(power_kwc)] / dec!(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_is_scaled_down() {
        assert_eq!(annual_rate(ContractTerm::TenYears, dec!(2)), dec!(0.10));
        assert_eq!(annual_rate(ContractTerm::TwentyFiveYears, dec!(2)), dec!(0.085));
    }

    #[test]
    fn test_rate_matches_tier() {
        // 6 kWc is tier 8.
        assert_eq!(annual_rate(ContractTerm::TenYears, dec!(6)), dec!(0.11));
        assert_eq!(annual_rate(ContractTerm::FifteenYears, dec!(6)), dec!(0.1010));
        assert_eq!(annual_rate(ContractTerm::TwentyYears, dec!(6)), dec!(0.0975));
        assert_eq!(annual_rate(ContractTerm::TwentyFiveYears, dec!(6)), dec!(0.0950));
    }

    #[test]
    fn test_oversized_installation_uses_top_tier() {
        assert_eq!(
            annual_rate(ContractTerm::TenYears, dec!(50)),
            annual_rate(ContractTerm::TenYears, dec!(36)),
        );
        assert_eq!(annual_rate(ContractTerm::TenYears, dec!(50)), dec!(0.125));
    }

    #[test]
    fn test_rates_non_negative_and_non_decreasing() {
        for term in ContractTerm::ALL {
            let rates = table(term);
            for pair in rates.windows(2) {
                assert!(pair[0] >= Decimal::ZERO);
                assert!(pair[1] >= pair[0], "{term:?} rates must not decrease by tier");
            }
        }
    }

    #[test]
    fn test_shorter_terms_cost_more() {
        for tier_power in [dec!(2), dec!(6), dec!(14.5)] {
            let r10 = annual_rate(ContractTerm::TenYears, tier_power);
            let r15 = annual_rate(ContractTerm::FifteenYears, tier_power);
            let r20 = annual_rate(ContractTerm::TwentyYears, tier_power);
            let r25 = annual_rate(ContractTerm::TwentyFiveYears, tier_power);
            assert!(r10 > r15 && r15 > r20 && r20 > r25);
        }
    }
}
