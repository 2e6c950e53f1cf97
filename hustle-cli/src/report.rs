//! Plain-text rendering of risk reports and the comparison table.
//!
//! Rendering is kept apart from printing so it can be asserted on directly.

use std::fmt::Write;

use hustle_core::comparison::EMPLOYMENT_MODELS;
use hustle_core::models::{CalculatorInput, ThresholdConfig};
use hustle_core::risks::RiskReport;
use rust_decimal::Decimal;

const AT_RISK: &str = "⚠";
const OK: &str = "✓";

/// Repayment rate as a percentage without trailing zeros, e.g. "75".
fn rate_percent(rate: Decimal) -> Decimal {
    (rate * Decimal::from(100)).normalize()
}

/// Renders the full compliance check output.
pub fn render_check(
    config: &ThresholdConfig,
    input: &CalculatorInput,
    report: &RiskReport,
) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Student Compliance Check ({} limits)", config.year);
    let _ = writeln!(
        out,
        "  {} BAföG, {} insurance, €{:.2}/year, {}h/week",
        input.bafog_status.as_str(),
        input.insurance_status.as_str(),
        input.annual_income,
        input.weekly_hours.normalize(),
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "BAföG Risk");
    let _ = writeln!(out, "  Excess income: €{:.2}", report.bafog.excess);
    if report.bafog.is_at_risk {
        let _ = writeln!(
            out,
            "  Est. repayment ({}%): €{:.2}",
            rate_percent(config.bafog_repayment_rate),
            report.bafog.repayment
        );
        let _ = writeln!(out, "  {AT_RISK} Repayment likely");
    } else {
        let _ = writeln!(out, "  {OK} Within limit");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Insurance Risk");
    let _ = writeln!(out, "  {}", report.insurance.basis);
    if report.insurance.is_at_risk {
        let _ = writeln!(out, "  {AT_RISK} May lose coverage");
    } else {
        let _ = writeln!(out, "  {OK} Covered");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Tax Risk");
    let _ = writeln!(
        out,
        "  Remaining allowance: €{:.2}",
        report.tax.remaining_for_display()
    );
    if report.tax.is_at_risk {
        let _ = writeln!(out, "  {AT_RISK} File tax return");
    } else {
        let _ = writeln!(out, "  {OK} Tax-free");
    }

    out
}

/// Renders the static employment-model comparison.
pub fn render_comparison() -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Side Hustle Comparison");
    for model in EMPLOYMENT_MODELS {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", model.name);
        let _ = writeln!(out, "  Advantages:");
        for line in model.advantages {
            let _ = writeln!(out, "    {OK} {line}");
        }
        let _ = writeln!(out, "  Risks:");
        for line in model.risks {
            let _ = writeln!(out, "    {AT_RISK} {line}");
        }
    }

    out
}
