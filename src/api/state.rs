//! Application state for the overnight worktime API.

use std::sync::Arc;

use crate::config::{BandConfig, ConfigLoader};

/// Shared application state.
///
/// Holds the loaded band configuration used to fill in omitted request
/// fields.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the band configuration.
    pub fn config(&self) -> &BandConfig {
        self.config.config()
    }
}
