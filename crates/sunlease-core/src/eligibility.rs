use rust_decimal::Decimal;

use crate::error::SunleaseError;
use crate::tables::{ceilings, MIN_POWER_KWC};
use crate::types::{Energy, Money, OfferRequest};
use crate::SunleaseResult;

/// The economic-study fields once their presence has been established.
/// Downstream computation takes these instead of re-unwrapping options.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedStudy {
    pub annual_yield_kwh: Energy,
    pub monthly_bill: Money,
    pub electricity_price: Money,
}

/// Check a request against the eligibility rules and hand back the unwrapped
/// study fields. The first violated rule wins; the check order is fixed so
/// error messages are deterministic:
/// power and price, then site, then yield, then billing inputs, then ceiling.
pub fn validate_request(request: &OfferRequest) -> SunleaseResult<ValidatedStudy> {
    if request.power_kwc < MIN_POWER_KWC {
        return Err(SunleaseError::InvalidInput {
            field: "power_kwc".into(),
            reason: "Enter a valid power rating (at least 2 kWc)".into(),
        });
    }
    if request.installation_price <= Decimal::ZERO {
        return Err(SunleaseError::InvalidInput {
            field: "installation_price".into(),
            reason: "Enter a pre-tax installation price".into(),
        });
    }

    if request.site.is_none() {
        return Err(SunleaseError::InvalidInput {
            field: "site".into(),
            reason: "Select an address for the economic study".into(),
        });
    }

    let annual_yield_kwh = match request.annual_yield_kwh {
        Some(yield_kwh) if yield_kwh > Decimal::ZERO => yield_kwh,
        _ => {
            return Err(SunleaseError::InvalidInput {
                field: "annual_yield_kwh".into(),
                reason: "Solar production data is not available for this site".into(),
            })
        }
    };

    let (monthly_bill, electricity_price) = match (request.monthly_bill, request.electricity_price)
    {
        (Some(bill), Some(price)) if bill > Decimal::ZERO && price > Decimal::ZERO => {
            (bill, price)
        }
        _ => {
            return Err(SunleaseError::InvalidInput {
                field: "billing".into(),
                reason: "Enter the monthly bill and the electricity unit price".into(),
            })
        }
    };

    // Installations above the tabulated range carry no price ceiling.
    if let Some(ceiling) = ceilings::ceiling(request.power_kwc) {
        if request.installation_price > ceiling {
            return Err(SunleaseError::PriceCeilingExceeded { ceiling });
        }
    }

    Ok(ValidatedStudy {
        annual_yield_kwh,
        monthly_bill,
        electricity_price,
    })
}
