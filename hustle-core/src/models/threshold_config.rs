use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a threshold configuration is out of range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThresholdConfigError {
    /// The BAföG repayment rate must be between 0 and 1.
    #[error("BAföG repayment rate must be between 0 and 1, got {0}")]
    InvalidRepaymentRate(Decimal),

    /// The BAföG annual income limit must be non-negative.
    #[error("BAföG annual limit must be non-negative, got {0}")]
    InvalidBafogLimit(Decimal),

    /// The family insurance monthly income limit must be non-negative.
    #[error("family insurance monthly limit must be non-negative, got {0}")]
    InvalidFamilyMonthlyLimit(Decimal),

    /// The KVdS weekly hours limit must be non-negative.
    #[error("KVdS weekly hours limit must be non-negative, got {0}")]
    InvalidWeeklyHoursLimit(Decimal),

    /// The tax-free allowance must be non-negative.
    #[error("tax-free allowance must be non-negative, got {0}")]
    InvalidTaxFreeAllowance(Decimal),
}

/// Statutory limits the risk evaluators compare against.
///
/// These are fixed legal figures, not computed values, and they change from
/// year to year. `Default` carries the 2025 numbers; a TOML file can override
/// any subset of fields when the law moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Statutory year the limits belong to.
    pub year: i32,

    /// Annual income above which BAföG repayment is triggered (§ 23 BAföG).
    ///
    /// For 2025 this is €6,672.
    pub bafog_annual_limit: Decimal,

    /// Share of the excess income that is clawed back, typically 75%.
    pub bafog_repayment_rate: Decimal,

    /// Monthly income ceiling for family insurance coverage.
    ///
    /// For 2025 this is €538.
    pub family_insurance_monthly_limit: Decimal,

    /// Weekly working-hours ceiling for KVdS student insurance, typically 20.
    pub kvds_weekly_hours_limit: Decimal,

    /// Annual tax-free allowance (Grundfreibetrag).
    ///
    /// For 2025 this is €12,096.
    pub tax_free_allowance: Decimal,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            year: 2025,
            bafog_annual_limit: Decimal::from(6672),
            bafog_repayment_rate: Decimal::new(75, 2),
            family_insurance_monthly_limit: Decimal::from(538),
            kvds_weekly_hours_limit: Decimal::from(20),
            tax_free_allowance: Decimal::from(12096),
        }
    }
}

impl ThresholdConfig {
    /// Validates the configuration values.
    ///
    /// Returns an error if any value is outside its valid range.
    ///
    /// # Errors
    ///
    /// Returns [`ThresholdConfigError`] if:
    /// - `bafog_repayment_rate` is not in [0, 1]
    /// - any limit or allowance is negative
    pub fn validate(&self) -> Result<(), ThresholdConfigError> {
        if self.bafog_repayment_rate < Decimal::ZERO || self.bafog_repayment_rate > Decimal::ONE {
            return Err(ThresholdConfigError::InvalidRepaymentRate(
                self.bafog_repayment_rate,
            ));
        }
        if self.bafog_annual_limit < Decimal::ZERO {
            return Err(ThresholdConfigError::InvalidBafogLimit(
                self.bafog_annual_limit,
            ));
        }
        if self.family_insurance_monthly_limit < Decimal::ZERO {
            return Err(ThresholdConfigError::InvalidFamilyMonthlyLimit(
                self.family_insurance_monthly_limit,
            ));
        }
        if self.kvds_weekly_hours_limit < Decimal::ZERO {
            return Err(ThresholdConfigError::InvalidWeeklyHoursLimit(
                self.kvds_weekly_hours_limit,
            ));
        }
        if self.tax_free_allowance < Decimal::ZERO {
            return Err(ThresholdConfigError::InvalidTaxFreeAllowance(
                self.tax_free_allowance,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_carries_2025_limits() {
        let config = ThresholdConfig::default();

        assert_eq!(config.year, 2025);
        assert_eq!(config.bafog_annual_limit, dec!(6672));
        assert_eq!(config.bafog_repayment_rate, dec!(0.75));
        assert_eq!(config.family_insurance_monthly_limit, dec!(538));
        assert_eq!(config.kvds_weekly_hours_limit, dec!(20));
        assert_eq!(config.tax_free_allowance, dec!(12096));
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(ThresholdConfig::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_rate_above_one() {
        let config = ThresholdConfig {
            bafog_repayment_rate: dec!(1.5),
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(ThresholdConfigError::InvalidRepaymentRate(dec!(1.5)))
        );
    }

    #[test]
    fn validate_rejects_negative_rate() {
        let config = ThresholdConfig {
            bafog_repayment_rate: dec!(-0.75),
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(ThresholdConfigError::InvalidRepaymentRate(dec!(-0.75)))
        );
    }

    #[test]
    fn validate_rejects_negative_bafog_limit() {
        let config = ThresholdConfig {
            bafog_annual_limit: dec!(-1),
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(ThresholdConfigError::InvalidBafogLimit(dec!(-1)))
        );
    }

    #[test]
    fn validate_rejects_negative_family_limit() {
        let config = ThresholdConfig {
            family_insurance_monthly_limit: dec!(-538),
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(ThresholdConfigError::InvalidFamilyMonthlyLimit(dec!(-538)))
        );
    }

    #[test]
    fn validate_rejects_negative_hours_limit() {
        let config = ThresholdConfig {
            kvds_weekly_hours_limit: dec!(-20),
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(ThresholdConfigError::InvalidWeeklyHoursLimit(dec!(-20)))
        );
    }

    #[test]
    fn validate_rejects_negative_allowance() {
        let config = ThresholdConfig {
            tax_free_allowance: dec!(-1),
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(ThresholdConfigError::InvalidTaxFreeAllowance(dec!(-1)))
        );
    }
}
