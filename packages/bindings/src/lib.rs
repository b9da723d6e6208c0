use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_config(config_json: Option<String>) -> NapiResult<sunlease_core::config::EngineConfig> {
    match config_json {
        Some(json) => serde_json::from_str(&json).map_err(to_napi_error),
        None => Ok(sunlease_core::config::EngineConfig::default()),
    }
}

// ---------------------------------------------------------------------------
// Offers
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_offers(request_json: String, config_json: Option<String>) -> NapiResult<String> {
    let request: sunlease_core::types::OfferRequest =
        serde_json::from_str(&request_json).map_err(to_napi_error)?;
    let config = parse_config(config_json)?;
    let output =
        sunlease_core::offer::calculate_offers(&request, &config).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Economics
// ---------------------------------------------------------------------------

#[napi]
pub fn project_savings(study_json: String, config_json: Option<String>) -> NapiResult<String> {
    let study: sunlease_core::economics::EconomicStudyInput =
        serde_json::from_str(&study_json).map_err(to_napi_error)?;
    let config = parse_config(config_json)?;
    let analyses =
        sunlease_core::economics::project_savings(&study, &config).map_err(to_napi_error)?;
    serde_json::to_string(&analyses).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Payment
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct PaymentParams {
    principal: Decimal,
    annual_rate: Decimal,
    term_months: u32,
}

#[napi]
pub fn monthly_payment(params_json: String) -> NapiResult<String> {
    let params: PaymentParams = serde_json::from_str(&params_json).map_err(to_napi_error)?;
    let monthly =
        sunlease_core::payment::monthly_payment(params.principal, params.annual_rate, params.term_months)
            .map_err(to_napi_error)?;
    serde_json::to_string(&monthly).map_err(to_napi_error)
}
