//! Configuration types for band calculation.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::calculation::{
    BoundaryHour, DEFAULT_EARLY_MORNING_END_HOUR, DEFAULT_LATE_NIGHT_START_HOUR, Rounding,
};
use crate::error::EngineResult;

/// Band edges and rounding used when a caller does not specify them.
///
/// Every field is optional in YAML and falls back to the legal defaults:
/// late night from 22:00, early morning until 05:00, nearest-minute rounding.
///
/// # Example
///
/// ```
/// use overnight_worktime::config::BandConfig;
///
/// let config: BandConfig = serde_yaml::from_str("late_night_start_hour: 21").unwrap();
/// assert_eq!(config.late_night_start_hour, 21);
/// assert_eq!(config.early_morning_end_hour, 5);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BandConfig {
    /// Hour at which the early-morning band ends.
    pub early_morning_end_hour: i32,
    /// Hour at which the late-night band starts.
    pub late_night_start_hour: i32,
    /// Rounding applied to minute results.
    pub rounding: Rounding,
}

impl Default for BandConfig {
    fn default() -> Self {
        Self {
            early_morning_end_hour: DEFAULT_EARLY_MORNING_END_HOUR,
            late_night_start_hour: DEFAULT_LATE_NIGHT_START_HOUR,
            rounding: Rounding::Nearest,
        }
    }
}

impl BandConfig {
    /// Checks that both hours are valid band edges.
    pub fn validate(&self) -> EngineResult<()> {
        BoundaryHour::new(self.early_morning_end_hour)?;
        BoundaryHour::new(self.late_night_start_hour)?;
        Ok(())
    }
}
