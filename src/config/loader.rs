//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading band
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::BandConfig;

/// Loads and provides access to band configuration.
///
/// # File Format
///
/// ```text
/// early_morning_end_hour: 5   # early morning is [00:00, 05:00)
/// late_night_start_hour: 22   # late night is [22:00, 24:00)
/// rounding: nearest           # raw | nearest | ceiling | floor
/// ```
///
/// # Example
///
/// ```no_run
/// use overnight_worktime::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/bands.yaml").unwrap();
/// println!("Late night starts at {}:00", loader.config().late_night_start_hour);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: BandConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or unknown fields
    /// - Either boundary hour is outside `0..24`
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml::<BandConfig>(path)?;
        config.validate()?;

        info!(
            path = %path.display(),
            early_morning_end_hour = config.early_morning_end_hour,
            late_night_start_hour = config.late_night_start_hour,
            rounding = %config.rounding,
            "Loaded band configuration"
        );

        Ok(Self { config })
    }

    /// A loader holding the default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: BandConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying band configuration.
    pub fn config(&self) -> &BandConfig {
        &self.config
    }
}
