//! BAföG repayment risk.
//!
//! Under § 23 BAföG, income above the annual allowance is offset against the
//! aid received; the rule of thumb used here claws back a fixed share of the
//! excess.
//!
//! | Step | Rule |
//! |------|------|
//! | 1    | `excess = max(0, annual_income − bafog_annual_limit)` |
//! | 2    | `repayment = excess × bafog_repayment_rate` |
//! | 3    | at risk iff `excess > 0` |
//!
//! Defined for every non-negative income; there are no error conditions.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use hustle_core::models::{CalculatorInput, ThresholdConfig};
//! use hustle_core::risks::BafogEvaluator;
//!
//! let config = ThresholdConfig::default();
//! let input = CalculatorInput {
//!     annual_income: dec!(8000),
//!     ..Default::default()
//! };
//!
//! let result = BafogEvaluator::new(&config).evaluate(&input);
//!
//! assert_eq!(result.excess, dec!(1328.00));
//! assert_eq!(result.repayment, dec!(996.00));
//! assert!(result.is_at_risk);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CalculatorInput, ThresholdConfig};
use crate::risks::common::{max, round_half_up};

/// Outcome of the BAföG repayment check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BafogRiskResult {
    /// Income above the annual allowance, floored at zero.
    pub excess: Decimal,

    /// Estimated repayment on the excess.
    pub repayment: Decimal,

    /// True when any excess exists.
    pub is_at_risk: bool,
}

/// Evaluates annual income against the BAföG allowance.
#[derive(Debug, Clone)]
pub struct BafogEvaluator<'a> {
    config: &'a ThresholdConfig,
}

impl<'a> BafogEvaluator<'a> {
    pub fn new(config: &'a ThresholdConfig) -> Self {
        Self { config }
    }

    /// Runs the repayment check for the given input.
    pub fn evaluate(
        &self,
        input: &CalculatorInput,
    ) -> BafogRiskResult {
        let excess = max(
            round_half_up(input.annual_income - self.config.bafog_annual_limit),
            Decimal::ZERO,
        );
        let repayment = round_half_up(excess * self.config.bafog_repayment_rate);

        BafogRiskResult {
            excess,
            repayment,
            is_at_risk: excess > Decimal::ZERO,
        }
    }
}
