use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use hustle_cli::{quiz, report, settings};
use hustle_core::models::{BafogStatus, CalculatorInput, InsuranceStatus, ThresholdConfig};
use hustle_core::risks::RiskReport;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Compliance helper for German students with a side hustle.
///
/// Checks income and working hours against the BAföG, insurance, and
/// tax-free-allowance limits, and classifies a self-employed activity as
/// freelance or trade.
#[derive(Debug, Parser)]
#[command(name = "hustle", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate the three compliance risks for a given situation.
    Check(CheckArgs),

    /// Walk through the freelancer-vs-trader classification quiz.
    Quiz,

    /// Show the employment-model comparison.
    Compare,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// BAföG status: receiving or not-receiving.
    #[arg(long, default_value = "receiving")]
    bafog_status: BafogStatus,

    /// Insurance status: family, kvds, or other.
    #[arg(long, default_value = "family")]
    insurance_status: InsuranceStatus,

    /// Expected gross income for the calendar year, in euros.
    #[arg(long, default_value = "5000")]
    annual_income: Decimal,

    /// Average working hours per week during the lecture period.
    #[arg(long, default_value = "15")]
    weekly_hours: Decimal,

    /// Expected monthly BAföG entitlement, in euros.
    #[arg(long, default_value = "450")]
    bafog_entitlement: Decimal,

    /// TOML file overriding the statutory limits.
    #[arg(long)]
    thresholds: Option<PathBuf>,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Check(args) => run_check(args),
        Command::Quiz => {
            let stdin = io::stdin();
            quiz::run_quiz(stdin.lock(), &mut io::stdout())
        }
        Command::Compare => {
            print!("{}", report::render_comparison());
            Ok(())
        }
    }
}

fn run_check(args: CheckArgs) -> Result<()> {
    let config = match &args.thresholds {
        Some(path) => settings::load_thresholds(path)?,
        None => ThresholdConfig::default(),
    };

    let input = CalculatorInput {
        bafog_status: args.bafog_status,
        insurance_status: args.insurance_status,
        annual_income: args.annual_income,
        weekly_hours: args.weekly_hours,
        bafog_entitlement: args.bafog_entitlement,
    };
    input.validate()?;

    let risk_report = RiskReport::evaluate(&config, &input);
    print!("{}", report::render_check(&config, &input, &risk_report));

    Ok(())
}
