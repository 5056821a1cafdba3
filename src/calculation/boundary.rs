//! Band edges as concrete instants.
//!
//! Both band calculators clamp interval endpoints to "hour H on this date";
//! [`boundary_at`] produces that instant and [`BoundaryHour`] guards the
//! hours callers are allowed to configure.

use serde::Serialize;

use crate::error::{
    EngineError, EngineResult, HOUR_NEGATIVE_MESSAGE, HOUR_PAST_END_OF_DAY_MESSAGE,
    HOUR_TOO_LARGE_MESSAGE,
};
use crate::models::CalendarInstant;

/// A caller-supplied band edge, validated to `0..24`.
///
/// # Example
///
/// ```
/// use overnight_worktime::calculation::BoundaryHour;
///
/// assert_eq!(BoundaryHour::new(22).unwrap().get(), 22);
/// assert!(BoundaryHour::new(-1).is_err());
/// assert!(BoundaryHour::new(24).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BoundaryHour(u32);

impl BoundaryHour {
    /// Validates a band edge hour.
    ///
    /// # Errors
    ///
    /// [`EngineError::BoundaryHourOutOfRange`] with one message for negative
    /// hours and another for hours of 24 or more.
    pub fn new(hour: i32) -> EngineResult<Self> {
        if hour < 0 {
            return Err(EngineError::BoundaryHourOutOfRange {
                hour,
                message: HOUR_NEGATIVE_MESSAGE,
            });
        }
        if hour >= 24 {
            return Err(EngineError::BoundaryHourOutOfRange {
                hour,
                message: HOUR_TOO_LARGE_MESSAGE,
            });
        }
        Ok(Self(hour as u32))
    }

    /// The hour as an unsigned value.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Seconds from this hour to the end of the day.
    pub(crate) fn seconds_to_end_of_day(self) -> i64 {
        i64::from(24 - self.0) * 3600
    }

    /// Seconds from the start of the day to this hour.
    pub(crate) fn seconds_from_start_of_day(self) -> i64 {
        i64::from(self.0) * 3600
    }
}

impl std::fmt::Display for BoundaryHour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

/// Returns `instant`'s date at `hour:00:00` with sub-seconds zeroed.
///
/// `hour` may be `0..=24`; 24 is midnight of the following date.
///
/// # Errors
///
/// [`EngineError::BoundaryHourOutOfRange`] for hours outside `0..=24`, and
/// [`EngineError::CalculationError`] if the resulting date is not
/// representable.
///
/// # Example
///
/// ```
/// use overnight_worktime::calculation::boundary_at;
/// use chrono::NaiveDateTime;
///
/// let t = NaiveDateTime::parse_from_str("2024-01-01 23:12:45", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(boundary_at(t, 22).unwrap().to_string(), "2024-01-01 22:00:00");
/// assert_eq!(boundary_at(t, 24).unwrap().to_string(), "2024-01-02 00:00:00");
/// ```
pub fn boundary_at<T: CalendarInstant>(instant: T, hour: i32) -> EngineResult<T> {
    if hour < 0 {
        return Err(EngineError::BoundaryHourOutOfRange {
            hour,
            message: HOUR_NEGATIVE_MESSAGE,
        });
    }
    if hour > 24 {
        return Err(EngineError::BoundaryHourOutOfRange {
            hour,
            message: HOUR_PAST_END_OF_DAY_MESSAGE,
        });
    }
    clamp_to_hour(instant, hour as u32)
}

/// [`boundary_at`] for hours already known to be in range.
pub(crate) fn clamp_to_hour<T: CalendarInstant>(instant: T, hour: u32) -> EngineResult<T> {
    instant
        .at_boundary_hour(hour)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("cannot place {} at hour {}", instant, hour),
        })
}
