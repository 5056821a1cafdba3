//! Configuration loading and management for the overnight worktime engine.
//!
//! This module provides functionality to load the band edges and rounding
//! policy from a YAML file, falling back to the legal defaults.
//!
//! # Example
//!
//! ```no_run
//! use overnight_worktime::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/bands.yaml").unwrap();
//! println!("Early morning ends at {}:00", config.config().early_morning_end_hour);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::BandConfig;
