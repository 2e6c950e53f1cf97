//! Combined risk report over all three statutory limits.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{CalculatorInput, ThresholdConfig};
use crate::risks::{
    BafogEvaluator, BafogRiskResult, InsuranceEvaluator, InsuranceRiskResult, TaxEvaluator,
    TaxRiskResult,
};

/// The three independent risk assessments for one input snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskReport {
    pub bafog: BafogRiskResult,
    pub insurance: InsuranceRiskResult,
    pub tax: TaxRiskResult,
}

impl RiskReport {
    /// Runs all three evaluators against the same input.
    pub fn evaluate(
        config: &ThresholdConfig,
        input: &CalculatorInput,
    ) -> Self {
        let bafog = BafogEvaluator::new(config).evaluate(input);
        let insurance = InsuranceEvaluator::new(config).evaluate(input);
        let tax = TaxEvaluator::new(config).evaluate(input);

        debug!(
            annual_income = %input.annual_income,
            weekly_hours = %input.weekly_hours,
            insurance_status = input.insurance_status.as_str(),
            bafog_at_risk = bafog.is_at_risk,
            insurance_at_risk = insurance.is_at_risk,
            tax_at_risk = tax.is_at_risk,
            "evaluated risk report"
        );

        Self {
            bafog,
            insurance,
            tax,
        }
    }

    /// True when any of the three categories is at risk.
    pub fn any_at_risk(&self) -> bool {
        self.bafog.is_at_risk || self.insurance.is_at_risk || self.tax.is_at_risk
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::models::InsuranceStatus;

    use super::*;

    #[test]
    fn default_input_is_fully_compliant() {
        let config = ThresholdConfig::default();

        let report = RiskReport::evaluate(&config, &CalculatorInput::default());

        assert!(!report.bafog.is_at_risk);
        assert!(!report.insurance.is_at_risk);
        assert!(!report.tax.is_at_risk);
        assert!(!report.any_at_risk());
    }

    #[test]
    fn high_income_trips_all_income_based_categories() {
        let config = ThresholdConfig::default();
        let input = CalculatorInput {
            annual_income: dec!(15000),
            ..Default::default()
        };

        let report = RiskReport::evaluate(&config, &input);

        assert!(report.bafog.is_at_risk);
        assert!(report.insurance.is_at_risk); // 15000 / 12 = 1250 monthly
        assert!(report.tax.is_at_risk);
        assert!(report.any_at_risk());
    }

    #[test]
    fn categories_are_independent() {
        let config = ThresholdConfig::default();
        // Income is safe everywhere; only the hours limit is exceeded.
        let input = CalculatorInput {
            insurance_status: InsuranceStatus::Kvds,
            annual_income: dec!(4000),
            weekly_hours: dec!(25),
            ..Default::default()
        };

        let report = RiskReport::evaluate(&config, &input);

        assert!(!report.bafog.is_at_risk);
        assert!(report.insurance.is_at_risk);
        assert!(!report.tax.is_at_risk);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let config = ThresholdConfig::default();
        let input = CalculatorInput {
            annual_income: dec!(9000),
            ..Default::default()
        };

        assert_eq!(
            RiskReport::evaluate(&config, &input),
            RiskReport::evaluate(&config, &input)
        );
    }
}
