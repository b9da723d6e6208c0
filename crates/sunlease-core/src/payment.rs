use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::SunleaseError;
use crate::types::{round_currency, Money, Rate};
use crate::SunleaseResult;

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
fn compound(rate: Decimal, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result *= factor;
    }
    result
}

/// Fixed-rate amortized monthly payment, rounded to the cent.
///
/// `payment = principal · (r/12) / (1 − (1 + r/12)^−n)`. A zero rate
/// degenerates to `principal / n`; the formula itself would divide by zero.
pub fn monthly_payment(
    principal: Money,
    annual_rate: Rate,
    term_months: u32,
) -> SunleaseResult<Money> {
    if principal <= Decimal::ZERO {
        return Err(SunleaseError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be positive".into(),
        });
    }
    if annual_rate < Decimal::ZERO {
        return Err(SunleaseError::InvalidInput {
            field: "annual_rate".into(),
            reason: "Annual rate cannot be negative".into(),
        });
    }
    if term_months == 0 {
        return Err(SunleaseError::InvalidInput {
            field: "term_months".into(),
            reason: "Term must be at least one month".into(),
        });
    }

    if annual_rate.is_zero() {
        return Ok(round_currency(principal / Decimal::from(term_months)));
    }

    let monthly_rate = annual_rate / dec!(12);
    let discount = Decimal::ONE - Decimal::ONE / compound(monthly_rate, term_months);
    Ok(round_currency(principal * monthly_rate / discount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_known_value() {
        // 14 000 € at 11 %/yr over 120 months ≈ 192.86 €/month.
        let payment = monthly_payment(dec!(14000), dec!(0.11), 120).unwrap();
        assert!((payment - dec!(192.86)).abs() < dec!(0.5), "got {payment}");
        assert_eq!(payment, round_currency(payment), "payment is cent-rounded");
    }

    #[test]
    fn test_amortization_identity() {
        let principal = dec!(14000);
        let rate = dec!(0.11);
        let months = 120;
        let payment = monthly_payment(principal, rate, months).unwrap();

        let monthly_rate = rate / dec!(12);
        let mut discount = Decimal::ONE;
        let mut present_value = Decimal::ZERO;
        for _ in 0..months {
            discount *= Decimal::ONE + monthly_rate;
            present_value += payment / discount;
        }
        // The payment is rounded to the cent, so the discounted sum drifts
        // from the principal by at most half a cent per period.
        assert!(
            (present_value - principal).abs() < dec!(0.005) * Decimal::from(months),
            "present value {present_value} vs principal {principal}",
        );
    }

    #[test]
    fn test_zero_rate_divides_evenly() {
        let payment = monthly_payment(dec!(12000), Decimal::ZERO, 120).unwrap();
        assert_eq!(payment, dec!(100));
    }

    #[test]
    fn test_zero_rate_rounds_to_cent() {
        let payment = monthly_payment(dec!(10000), Decimal::ZERO, 300).unwrap();
        assert_eq!(payment, dec!(33.33));
    }

    #[test]
    fn test_higher_rate_costs_more() {
        let low = monthly_payment(dec!(14000), dec!(0.09), 120).unwrap();
        let high = monthly_payment(dec!(14000), dec!(0.12), 120).unwrap();
        assert!(high > low);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let err = monthly_payment(Decimal::ZERO, dec!(0.10), 120).unwrap_err();
        match err {
            SunleaseError::InvalidInput { field, .. } => assert_eq!(field, "principal"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
        assert!(monthly_payment(dec!(1000), dec!(-0.01), 120).is_err());
        assert!(monthly_payment(dec!(1000), dec!(0.10), 0).is_err());
    }

    #[test]
    fn test_idempotent() {
        let a = monthly_payment(dec!(14000), dec!(0.11), 120).unwrap();
        let b = monthly_payment(dec!(14000), dec!(0.11), 120).unwrap();
        assert_eq!(a, b);
    }
}
