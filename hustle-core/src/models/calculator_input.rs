use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{BafogStatus, InsuranceStatus};

/// Errors raised when a calculator input breaks its invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// Annual income must be non-negative.
    #[error("annual income must be non-negative, got {0}")]
    NegativeIncome(Decimal),

    /// Weekly hours must be non-negative.
    #[error("weekly hours must be non-negative, got {0}")]
    NegativeHours(Decimal),
}

/// The student's situation as entered on the calculator surface.
///
/// Rebuilt from scratch on every input change; the evaluators never mutate
/// it. The UI constrains income to [0, 30000] and hours to [0, 40], but the
/// evaluators accept any non-negative value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorInput {
    pub bafog_status: BafogStatus,
    pub insurance_status: InsuranceStatus,

    /// Expected gross income for the calendar year, in euros.
    pub annual_income: Decimal,

    /// Average working hours per week during the lecture period.
    pub weekly_hours: Decimal,

    /// Expected monthly BAföG entitlement, in euros.
    ///
    /// Collected by the surface but consumed by no current calculation.
    /// Reserved for a future entitlement-reduction estimate; kept so the
    /// surface contract stays stable.
    pub bafog_entitlement: Decimal,
}

impl Default for CalculatorInput {
    fn default() -> Self {
        Self {
            bafog_status: BafogStatus::Receiving,
            insurance_status: InsuranceStatus::Family,
            annual_income: Decimal::from(5000),
            weekly_hours: Decimal::from(15),
            bafog_entitlement: Decimal::from(450),
        }
    }
}

impl CalculatorInput {
    /// Checks the non-negativity invariants.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if `annual_income` or `weekly_hours` is
    /// negative. Out-of-range values are a boundary concern; callers should
    /// discard the offending entry and retain the last valid input.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.annual_income < Decimal::ZERO {
            return Err(InputError::NegativeIncome(self.annual_income));
        }
        if self.weekly_hours < Decimal::ZERO {
            return Err(InputError::NegativeHours(self.weekly_hours));
        }
        Ok(())
    }
}
