//! End-to-end boundary checks over the public API.

use hustle_core::classification::{Classification, QuizFlow};
use hustle_core::models::{CalculatorInput, InsuranceStatus, ThresholdConfig};
use hustle_core::risks::RiskReport;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn report_for(
    income: Decimal,
    hours: Decimal,
    insurance: InsuranceStatus,
) -> RiskReport {
    let config = ThresholdConfig::default();
    let input = CalculatorInput {
        insurance_status: insurance,
        annual_income: income,
        weekly_hours: hours,
        ..Default::default()
    };
    RiskReport::evaluate(&config, &input)
}

#[test]
fn bafog_boundary_sits_at_6672() {
    let below = report_for(dec!(6672), dec!(15), InsuranceStatus::Family);
    let above = report_for(dec!(6673), dec!(15), InsuranceStatus::Family);

    assert!(!below.bafog.is_at_risk);
    assert_eq!(below.bafog.excess, dec!(0));
    assert!(above.bafog.is_at_risk);
    assert_eq!(above.bafog.repayment, dec!(0.75));
}

#[test]
fn family_insurance_boundary_sits_at_annual_6456() {
    let safe = report_for(dec!(6455), dec!(15), InsuranceStatus::Family);
    let risky = report_for(dec!(6457), dec!(15), InsuranceStatus::Family);

    assert!(!safe.insurance.is_at_risk);
    assert!(risky.insurance.is_at_risk);
}

#[test]
fn kvds_boundary_sits_at_20_hours() {
    let safe = report_for(dec!(5000), dec!(20), InsuranceStatus::Kvds);
    let risky = report_for(dec!(5000), dec!(21), InsuranceStatus::Kvds);

    assert!(!safe.insurance.is_at_risk);
    assert!(risky.insurance.is_at_risk);
}

#[test]
fn tax_boundary_sits_at_12096() {
    let safe = report_for(dec!(12096), dec!(15), InsuranceStatus::Other);
    let risky = report_for(dec!(12097), dec!(15), InsuranceStatus::Other);

    assert!(!safe.tax.is_at_risk);
    assert_eq!(safe.tax.remaining, dec!(0));
    assert!(risky.tax.is_at_risk);
}

#[test]
fn quiz_reaches_both_outcomes_and_resets() {
    let mut flow = QuizFlow::new();

    flow.answer(true);
    flow.answer(true);
    assert_eq!(flow.result(), Some(Classification::Freelancer));

    flow.reset();
    assert_eq!(flow.result(), None);

    flow.answer(false);
    flow.answer(false);
    assert_eq!(flow.result(), Some(Classification::Trader));
}
