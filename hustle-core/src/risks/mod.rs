//! Compliance risk evaluations for the three statutory student limits.
//!
//! Each evaluator is a pure function of a [`CalculatorInput`](crate::models::CalculatorInput)
//! and a [`ThresholdConfig`](crate::models::ThresholdConfig); results carry no
//! identity and no lifecycle beyond the call that produced them.

pub mod bafog;
pub mod common;
pub mod insurance;
pub mod report;
pub mod tax;

pub use bafog::{BafogEvaluator, BafogRiskResult};
pub use insurance::{InsuranceBasis, InsuranceEvaluator, InsuranceRiskResult};
pub use report::RiskReport;
pub use tax::{TaxEvaluator, TaxRiskResult};
