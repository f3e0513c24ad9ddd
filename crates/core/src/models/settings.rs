use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Reference hourly wages used for opportunity-cost comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WageRates {
    pub minimum_wage: f64,
    pub software_dev: f64,
    pub finance: f64,
}

impl WageRates {
    pub const DEFAULT_MINIMUM_WAGE: f64 = 15.0;
    pub const DEFAULT_SOFTWARE_DEV: f64 = 50.0;
    pub const DEFAULT_FINANCE: f64 = 40.0;

    /// Rates must be finite and non-negative.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (name, rate) in [
            ("minimum_wage", self.minimum_wage),
            ("software_dev", self.software_dev),
            ("finance", self.finance),
        ] {
            if !rate.is_finite() || rate < 0.0 {
                return Err(CoreError::ValidationError(format!(
                    "Wage rate '{name}' must be a finite, non-negative number (got {rate})"
                )));
            }
        }
        Ok(())
    }
}

impl Default for WageRates {
    fn default() -> Self {
        Self {
            minimum_wage: Self::DEFAULT_MINIMUM_WAGE,
            software_dev: Self::DEFAULT_SOFTWARE_DEV,
            finance: Self::DEFAULT_FINANCE,
        }
    }
}

/// User-configurable settings, stored inside the tracker snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Hourly wages that poker results are compared against.
    pub wage_rates: WageRates,

    /// Length of a working day when turning goal hours into days.
    pub work_hours_per_day: f64,

    /// Domain suffix every signup address must end with (e.g. ".edu").
    /// `None` accepts any domain.
    #[serde(default)]
    pub required_email_suffix: Option<String>,
}

impl Settings {
    pub const DEFAULT_WORK_HOURS_PER_DAY: f64 = 8.0;

    /// Working day must be in `(0, 24]` hours.
    pub fn validate_work_hours_per_day(hours: f64) -> Result<(), CoreError> {
        if !hours.is_finite() || hours <= 0.0 || hours > 24.0 {
            return Err(CoreError::ValidationError(format!(
                "Working day must be between 0 and 24 hours (got {hours})"
            )));
        }
        Ok(())
    }

    /// Check every field against the same rules the setters apply.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.wage_rates.validate()?;
        Self::validate_work_hours_per_day(self.work_hours_per_day)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wage_rates: WageRates::default(),
            work_hours_per_day: Self::DEFAULT_WORK_HOURS_PER_DAY,
            required_email_suffix: Some(".edu".to_string()),
        }
    }
}
