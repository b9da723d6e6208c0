pub mod config;
pub mod display;
pub mod economics;
pub mod eligibility;
pub mod error;
pub mod offer;
pub mod payment;
pub mod providers;
pub mod tables;
pub mod types;

pub use error::SunleaseError;
pub use types::*;

/// Standard result type for all sunlease operations
pub type SunleaseResult<T> = Result<T, SunleaseError>;
