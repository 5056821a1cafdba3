//! Error types for the overnight worktime engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while measuring worktime bands.

use thiserror::Error;

/// Message used when a boundary hour is negative.
pub const HOUR_NEGATIVE_MESSAGE: &str = "The hour must be greater than or equal to 0.";

/// Message used when a band boundary hour is 24 or above.
pub const HOUR_TOO_LARGE_MESSAGE: &str = "The hour must be less than 24.";

/// Message used when a clamp target hour is above 24.
pub const HOUR_PAST_END_OF_DAY_MESSAGE: &str = "The hour must be less than or equal to 24.";

/// The main error type for the overnight worktime engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use overnight_worktime::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/bands.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/bands.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The end of an interval precedes its start.
    #[error("The end time must be after the start time. (start: {start}, end: {end})")]
    OutOfOrderInterval {
        /// The interval start, as displayed by the instant type.
        start: String,
        /// The interval end, as displayed by the instant type.
        end: String,
    },

    /// A boundary hour fell outside the accepted range.
    #[error("{message} (got {hour})")]
    BoundaryHourOutOfRange {
        /// The rejected hour.
        hour: i32,
        /// Which bound was violated.
        message: &'static str,
    },

    /// A duration was constructed from invalid components.
    #[error("Invalid duration: {message}")]
    InvalidDuration {
        /// A description of the violated invariant.
        message: &'static str,
    },

    /// A point in time could not be parsed.
    #[error("Invalid timestamp '{input}': {message}")]
    InvalidTimestamp {
        /// The raw input.
        input: String,
        /// A description of the parse failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Builds an [`EngineError::OutOfOrderInterval`] from any displayable instants.
    pub fn out_of_order(start: impl std::fmt::Display, end: impl std::fmt::Display) -> Self {
        EngineError::OutOfOrderInterval {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
