use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use sunlease_core::payment;

/// Arguments for a single amortized payment
#[derive(Args)]
pub struct PaymentArgs {
    /// Financed principal in €
    #[arg(long)]
    pub principal: Decimal,

    /// Annual rate as a fraction (e.g. 0.095 for 9.5%)
    #[arg(long)]
    pub annual_rate: Decimal,

    /// Term in months
    #[arg(long)]
    pub months: u32,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let monthly = payment::monthly_payment(args.principal, args.annual_rate, args.months)?;
    Ok(serde_json::json!({
        "monthly_payment": monthly,
        "principal": args.principal,
        "annual_rate": args.annual_rate,
        "term_months": args.months,
    }))
}
