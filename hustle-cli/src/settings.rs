//! Threshold configuration loading.
//!
//! The statutory limits ship as compiled-in 2025 defaults; a TOML file can
//! override any subset of them when the figures change, e.g.
//!
//! ```toml
//! year = 2026
//! bafog_annual_limit = "6900"
//! tax_free_allowance = "12348"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hustle_core::models::ThresholdConfig;
use tracing::info;

/// Parses a threshold override from TOML text and validates it.
pub fn parse_thresholds(text: &str) -> Result<ThresholdConfig> {
    let config: ThresholdConfig =
        toml::from_str(text).context("invalid threshold configuration")?;
    config.validate()?;
    Ok(config)
}

/// Loads and validates a threshold override file.
///
/// Fields absent from the file keep their compiled-in defaults.
pub fn load_thresholds(path: &Path) -> Result<ThresholdConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read threshold file '{}'", path.display()))?;
    let config = parse_thresholds(&text)
        .with_context(|| format!("in threshold file '{}'", path.display()))?;

    info!(year = config.year, "loaded threshold overrides");
    Ok(config)
}
