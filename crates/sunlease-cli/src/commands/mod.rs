pub mod economics;
pub mod offers;
pub mod payment;
pub mod residuals;
