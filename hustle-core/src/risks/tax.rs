//! Tax filing obligation risk.
//!
//! Income above the annual tax-free allowance (Grundfreibetrag) obliges the
//! student to file a return.
//!
//! | Step | Rule |
//! |------|------|
//! | 1    | `remaining = tax_free_allowance − annual_income` (signed) |
//! | 2    | at risk iff `annual_income > tax_free_allowance` |
//!
//! The signed `remaining` is carried internally; surfaces floor it at zero
//! via [`TaxRiskResult::remaining_for_display`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CalculatorInput, ThresholdConfig};
use crate::risks::common::{max, round_half_up};

/// Outcome of the tax allowance check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRiskResult {
    /// Allowance still unused; negative once the allowance is breached.
    pub remaining: Decimal,

    /// True when income exceeds the allowance.
    pub is_at_risk: bool,
}

impl TaxRiskResult {
    /// Remaining allowance floored at zero for presentation.
    pub fn remaining_for_display(&self) -> Decimal {
        max(self.remaining, Decimal::ZERO)
    }
}

/// Evaluates annual income against the tax-free allowance.
#[derive(Debug, Clone)]
pub struct TaxEvaluator<'a> {
    config: &'a ThresholdConfig,
}

impl<'a> TaxEvaluator<'a> {
    pub fn new(config: &'a ThresholdConfig) -> Self {
        Self { config }
    }

    /// Runs the allowance check for the given input.
    pub fn evaluate(
        &self,
        input: &CalculatorInput,
    ) -> TaxRiskResult {
        let remaining = round_half_up(self.config.tax_free_allowance - input.annual_income);

        TaxRiskResult {
            remaining,
            is_at_risk: input.annual_income > self.config.tax_free_allowance,
        }
    }
}
