//! Late-night worktime: the recurring `[H2, 24:00)` band.
//!
//! This is the part of late-night work that lies before the date changes;
//! the default start hour is 22:00.

use crate::error::EngineResult;
use crate::models::{CalendarInstant, Duration};

use super::boundary::{BoundaryHour, clamp_to_hour};
use super::day_decomposition::{BandKind, band_seconds, ensure_single_day};
use super::elapsed::{elapsed_seconds, ensure_ordered};
use super::rounding::{RoundedMinutes, Rounding, apply_rounding};

/// The hour the late-night band starts at unless configured otherwise.
pub const DEFAULT_LATE_NIGHT_START_HOUR: i32 = 22;

/// Seconds of `[start, end]` that fall inside `[hour, 24:00)` on any day.
///
/// # Errors
///
/// - [`OutOfOrderInterval`](crate::error::EngineError::OutOfOrderInterval)
///   if `end < start`
/// - [`BoundaryHourOutOfRange`](crate::error::EngineError::BoundaryHourOutOfRange)
///   if `hour` is outside `0..24`
///
/// # Example
///
/// ```
/// use overnight_worktime::calculation::late_night_seconds;
/// use chrono::NaiveDateTime;
///
/// // Three evenings from 21:00: 3h + 3h + 2h.
/// let start = NaiveDateTime::parse_from_str("2024-01-01 21:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2024-01-03 23:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(late_night_seconds(start, end, 21).unwrap(), 28800);
/// ```
pub fn late_night_seconds<T: CalendarInstant>(start: T, end: T, hour: i32) -> EngineResult<i64> {
    band_seconds(start, end, hour, BandKind::LateNight)
}

/// Late-night worktime in minutes under `rounding`.
pub fn late_night_minutes<T: CalendarInstant>(
    start: T,
    end: T,
    hour: i32,
    rounding: Option<Rounding>,
) -> EngineResult<RoundedMinutes> {
    let duration = late_night_duration(start, end, hour)?;
    Ok(apply_rounding(duration.total_minutes(), rounding))
}

/// Late-night worktime as an exact [`Duration`].
pub fn late_night_duration<T: CalendarInstant>(
    start: T,
    end: T,
    hour: i32,
) -> EngineResult<Duration> {
    late_night_seconds(start, end, hour).map(|seconds| Duration::from_seconds(seconds as u64))
}

/// Late-night overlap of an interval confined to one calendar day.
///
/// `end` may be the midnight that closes `start`'s day. Any later date is
/// cut back to that midnight, since the band ends with the day.
pub(crate) fn late_night_in_day<T: CalendarInstant>(
    start: T,
    end: T,
    hour: BoundaryHour,
) -> EngineResult<i64> {
    ensure_ordered(&start, &end)?;
    ensure_single_day(&start, &end)?;

    let hour = hour.get();
    let mut start = start;
    let mut end = end;

    if start.same_calendar_day(&end) {
        if end.hour_of_day() < hour {
            return Ok(0);
        }
    } else {
        end = clamp_to_hour(start, 24)?;
    }

    if start.hour_of_day() < hour {
        start = clamp_to_hour(start, hour)?;
    }

    elapsed_seconds(start, end)
}
