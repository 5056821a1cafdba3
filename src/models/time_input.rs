//! Normalization of heterogeneous point-in-time inputs.
//!
//! Callers hand in timestamps as text or as unix epoch seconds; everything is
//! turned into a [`NaiveDateTime`] before any comparison happens.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// A point in time as supplied by a caller.
///
/// Deserializes from either a JSON integer (unix seconds) or a string.
///
/// # Example
///
/// ```
/// use overnight_worktime::models::TimeInput;
/// use chrono::NaiveDateTime;
///
/// let expected = NaiveDateTime::parse_from_str("2024-01-01 02:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(TimeInput::Epoch(1704074400).to_instant().unwrap(), expected);
/// assert_eq!(TimeInput::Text("2024-01-01T02:00:00".into()).to_instant().unwrap(), expected);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeInput {
    /// Seconds since 1970-01-01 00:00:00, read as UTC wall-clock time.
    Epoch(i64),
    /// A textual date-time.
    Text(String),
}

impl TimeInput {
    /// Normalizes the input to a wall-clock instant.
    ///
    /// Text is tried as `YYYY-MM-DD HH:MM:SS` (space or `T`, optional
    /// fraction, optional seconds), then RFC 3339 keeping the local wall
    /// clock of the given offset, then a bare `YYYY-MM-DD` meaning midnight.
    pub fn to_instant(&self) -> EngineResult<NaiveDateTime> {
        match self {
            TimeInput::Epoch(seconds) => DateTime::from_timestamp(*seconds, 0)
                .map(|utc| utc.naive_utc())
                .ok_or_else(|| EngineError::InvalidTimestamp {
                    input: seconds.to_string(),
                    message: "epoch seconds out of range".to_string(),
                }),
            TimeInput::Text(text) => parse_text(text.trim()),
        }
    }
}

fn parse_text(text: &str) -> EngineResult<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(instant) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(instant);
        }
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(text) {
        return Ok(with_offset.naive_local());
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| EngineError::InvalidTimestamp {
            input: text.to_string(),
            message: "expected YYYY-MM-DD[ HH:MM[:SS]], RFC 3339 or unix seconds".to_string(),
        })
}
