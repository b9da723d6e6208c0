//! Seams for the two network collaborators the engine depends on but does
//! not own. Implementations live with the caller (HTTP clients, fixtures);
//! the engine only consumes their outputs and refuses to compute without
//! them.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::SunleaseError;
use crate::types::Energy;
use crate::SunleaseResult;

// Mounting assumptions sent with every irradiance query. The estimate is for
// a building-mounted array at 35° tilt facing due south, with 14% system
// losses.
pub const SYSTEM_LOSS_PERCENT: Decimal = dec!(14);
pub const PANEL_TILT_DEGREES: Decimal = dec!(35);
pub const PANEL_ASPECT_DEGREES: Decimal = dec!(0);

/// One geocoder hit for an address query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressMatch {
    pub label: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    /// Geocoder relevance score, when the service provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<Decimal>,
}

/// Interactive address search used to obtain site coordinates before a
/// calculation.
pub trait AddressResolver {
    fn search(&self, query: &str) -> SunleaseResult<Vec<AddressMatch>>;
}

/// Parameters for an annual-yield estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrradianceRequest {
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub peak_power_kwc: Decimal,
}

impl IrradianceRequest {
    /// Bounds check before the query leaves the process.
    pub fn validate(&self) -> SunleaseResult<()> {
        if self.latitude < dec!(-90) || self.latitude > dec!(90) {
            return Err(SunleaseError::InvalidInput {
                field: "latitude".into(),
                reason: "Latitude must be between -90 and 90".into(),
            });
        }
        if self.longitude < dec!(-180) || self.longitude > dec!(180) {
            return Err(SunleaseError::InvalidInput {
                field: "longitude".into(),
                reason: "Longitude must be between -180 and 180".into(),
            });
        }
        if self.peak_power_kwc < dec!(0.1) || self.peak_power_kwc > dec!(1000) {
            return Err(SunleaseError::InvalidInput {
                field: "peak_power_kwc".into(),
                reason: "Peak power must be between 0.1 and 1000 kWc".into(),
            });
        }
        Ok(())
    }
}

/// Geospatial irradiance service returning the estimated annual production
/// for an installation at a site.
pub trait IrradianceProvider {
    fn estimate(&self, request: &IrradianceRequest) -> SunleaseResult<Energy>;
}

/// Validate a request, then ask the provider for the annual yield. A failure
/// propagates as-is; retrying is the network layer's business, not ours.
pub fn estimated_annual_yield<P: IrradianceProvider>(
    provider: &P,
    request: &IrradianceRequest,
) -> SunleaseResult<Energy> {
    request.validate()?;
    provider.estimate(request)
}
