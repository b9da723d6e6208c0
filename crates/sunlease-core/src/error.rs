use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SunleaseError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Pre-tax price exceeds the authorised ceiling of {ceiling} € for this power band")]
    PriceCeilingExceeded { ceiling: Decimal },

    #[error("{service} unavailable: {reason}")]
    DependencyUnavailable { service: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for SunleaseError {
    fn from(e: serde_json::Error) -> Self {
        SunleaseError::SerializationError(e.to_string())
    }
}
