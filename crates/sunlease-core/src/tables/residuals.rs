use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::ContractTerm;

/// First contract year with a tabulated buy-out value. Year 1 has none: the
/// subscription cannot be bought out before its second year.
pub const FIRST_RESIDUAL_YEAR: u32 = 2;

// Buy-out value as a percentage of the original pre-tax price, one entry per
// year from year 2 through the final contract year. The option is exhausted
// at term end, so each schedule closes at zero.
const RESIDUALS_10Y: [Decimal; 9] = [
    dec!(94.0),
    dec!(91.0),
    dec!(87.0),
    dec!(81.0),
    dec!(71.0),
    dec!(60.0),
    dec!(42.0),
    dec!(15.5),
    dec!(0.0),
];

const RESIDUALS_15Y: [Decimal; 14] = [
    dec!(97.5),
    dec!(95.0),
    dec!(93.0),
    dec!(91.0),
    dec!(89.0),
    dec!(86.0),
    dec!(81.0),
    dec!(75.0),
    dec!(69.0),
    dec!(61.0),
    dec!(51.0),
    dec!(37.0),
    dec!(13.8),
    dec!(0.0),
];

const RESIDUALS_20Y: [Decimal; 19] = [
    dec!(106.0),
    dec!(105.0),
    dec!(104.0),
    dec!(103.0),
    dec!(102.0),
    dec!(100.0),
    dec!(96.0),
    dec!(93.0),
    dec!(90.0),
    dec!(86.0),
    dec!(80.0),
    dec!(75.0),
    dec!(66.0),
    dec!(59.0),
    dec!(47.4),
    dec!(37.8),
    dec!(24.0),
    dec!(12.9),
    dec!(0.0),
];

const RESIDUALS_25Y: [Decimal; 24] = [
    dec!(106.0),
    dec!(105.0),
    dec!(104.0),
    dec!(103.0),
    dec!(102.0),
    dec!(101.0),
    dec!(99.0),
    dec!(96.0),
    dec!(95.0),
    dec!(94.0),
    dec!(93.0),
    dec!(92.0),
    dec!(91.0),
    dec!(90.0),
    dec!(87.0),
    dec!(80.0),
    dec!(71.0),
    dec!(64.0),
    dec!(55.0),
    dec!(46.0),
    dec!(36.0),
    dec!(24.0),
    dec!(12.8),
    dec!(0.0),
];

/// Residual percentages for a term, year 2 first.
pub fn schedule(term: ContractTerm) -> &'static [Decimal] {
    match term {
        ContractTerm::TenYears => &RESIDUALS_10Y,
        ContractTerm::FifteenYears => &RESIDUALS_15Y,
        ContractTerm::TwentyYears => &RESIDUALS_20Y,
        ContractTerm::TwentyFiveYears => &RESIDUALS_25Y,
    }
}
