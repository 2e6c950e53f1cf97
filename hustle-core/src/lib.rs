pub mod classification;
pub mod comparison;
pub mod models;
pub mod risks;

pub use models::*;
pub use risks::RiskReport;
