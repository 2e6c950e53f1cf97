mod bafog_status;
mod calculator_input;
mod insurance_status;
mod threshold_config;

pub use bafog_status::BafogStatus;
pub use calculator_input::{CalculatorInput, InputError};
pub use insurance_status::InsuranceStatus;
pub use threshold_config::{ThresholdConfig, ThresholdConfigError};

use thiserror::Error;

/// Error returned when a status string does not match any known tag.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} status '{value}'")]
pub struct ParseStatusError {
    pub kind: &'static str,
    pub value: String,
}
