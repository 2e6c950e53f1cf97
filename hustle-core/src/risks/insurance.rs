//! Insurance coverage risk.
//!
//! The applicable rule depends on how the student is insured:
//!
//! | Status  | Rule |
//! |---------|------|
//! | Family  | at risk iff `annual_income / 12 > family_insurance_monthly_limit` |
//! | KVdS    | at risk iff `weekly_hours > kvds_weekly_hours_limit` |
//! | Other   | never at risk |
//!
//! The result carries the compared quantity so the surface can show what the
//! decision was based on.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use hustle_core::models::{CalculatorInput, InsuranceStatus, ThresholdConfig};
//! use hustle_core::risks::InsuranceEvaluator;
//!
//! let config = ThresholdConfig::default();
//! let input = CalculatorInput {
//!     insurance_status: InsuranceStatus::Family,
//!     annual_income: dec!(5000),
//!     ..Default::default()
//! };
//!
//! let result = InsuranceEvaluator::new(&config).evaluate(&input);
//!
//! assert!(!result.is_at_risk);
//! assert_eq!(result.basis.to_string(), "Monthly income: €416.67");
//! ```

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CalculatorInput, InsuranceStatus, ThresholdConfig};
use crate::risks::common::round_half_up;

/// The quantity an insurance decision was compared against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsuranceBasis {
    /// Family insurance: average monthly income, rounded to cents.
    MonthlyIncome(Decimal),
    /// KVdS: average weekly working hours.
    WeeklyHours(Decimal),
    /// Other coverage: the student limits do not apply.
    NotApplicable,
}

impl fmt::Display for InsuranceBasis {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::MonthlyIncome(monthly) => write!(f, "Monthly income: €{monthly:.2}"),
            Self::WeeklyHours(hours) => write!(f, "Weekly hours: {}h", hours.normalize()),
            Self::NotApplicable => write!(f, "Other insurance"),
        }
    }
}

/// Outcome of the insurance coverage check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceRiskResult {
    /// True when the applicable limit is exceeded.
    pub is_at_risk: bool,

    /// The quantity the decision was based on.
    pub basis: InsuranceBasis,
}

/// Evaluates income or working hours against the insurance limits.
#[derive(Debug, Clone)]
pub struct InsuranceEvaluator<'a> {
    config: &'a ThresholdConfig,
}

impl<'a> InsuranceEvaluator<'a> {
    pub fn new(config: &'a ThresholdConfig) -> Self {
        Self { config }
    }

    /// Runs the coverage check for the given input.
    ///
    /// The family branch compares the unrounded monthly income so the cutoff
    /// sits exactly at twelve times the monthly limit; rounding happens only
    /// for the reported basis.
    pub fn evaluate(
        &self,
        input: &CalculatorInput,
    ) -> InsuranceRiskResult {
        match input.insurance_status {
            InsuranceStatus::Family => {
                let monthly = input.annual_income / Decimal::from(12);
                InsuranceRiskResult {
                    is_at_risk: monthly > self.config.family_insurance_monthly_limit,
                    basis: InsuranceBasis::MonthlyIncome(round_half_up(monthly)),
                }
            }
            InsuranceStatus::Kvds => InsuranceRiskResult {
                is_at_risk: input.weekly_hours > self.config.kvds_weekly_hours_limit,
                basis: InsuranceBasis::WeeklyHours(input.weekly_hours),
            },
            InsuranceStatus::Other => InsuranceRiskResult {
                is_at_risk: false,
                basis: InsuranceBasis::NotApplicable,
            },
        }
    }
}
