//! Validated elapsed time between two instants.
//!
//! [`elapsed_seconds`] is the ordering gate every band calculator passes
//! through before doing anything else.

use crate::error::{EngineError, EngineResult};
use crate::models::{CalendarInstant, Duration};

use super::rounding::{RoundedMinutes, Rounding, apply_rounding};

/// Elapsed whole seconds from `start` to `end`.
///
/// # Errors
///
/// [`EngineError::OutOfOrderInterval`] if `end` is strictly before `start`.
/// Equal instants give zero.
///
/// # Example
///
/// ```
/// use overnight_worktime::calculation::elapsed_seconds;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2024-01-01 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2024-01-01 10:00:01", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(elapsed_seconds(start, end).unwrap(), 3601);
/// ```
pub fn elapsed_seconds<T: CalendarInstant>(start: T, end: T) -> EngineResult<i64> {
    ensure_ordered(&start, &end)?;
    Ok(start.seconds_until(&end))
}

/// Elapsed time in minutes under `rounding`.
pub fn elapsed_minutes<T: CalendarInstant>(
    start: T,
    end: T,
    rounding: Option<Rounding>,
) -> EngineResult<RoundedMinutes> {
    let duration = elapsed_duration(start, end)?;
    Ok(apply_rounding(duration.total_minutes(), rounding))
}

/// Elapsed time as an exact [`Duration`].
pub fn elapsed_duration<T: CalendarInstant>(start: T, end: T) -> EngineResult<Duration> {
    elapsed_seconds(start, end).map(|seconds| Duration::from_seconds(seconds as u64))
}

/// Fails with [`EngineError::OutOfOrderInterval`] when `end < start`.
pub(crate) fn ensure_ordered<T: CalendarInstant>(start: &T, end: &T) -> EngineResult<()> {
    if end < start {
        return Err(EngineError::out_of_order(start, end));
    }
    Ok(())
}
