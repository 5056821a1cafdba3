//! Early-morning worktime: the recurring `[00:00, H1)` band.
//!
//! Under current labor law the early-morning part of late-night work runs
//! from midnight until 05:00, which is the default end hour.

use crate::error::EngineResult;
use crate::models::{CalendarInstant, Duration};

use super::boundary::{BoundaryHour, clamp_to_hour};
use super::day_decomposition::{BandKind, band_seconds, ensure_single_day};
use super::elapsed::{elapsed_seconds, ensure_ordered};
use super::rounding::{RoundedMinutes, Rounding, apply_rounding};

/// The hour the early-morning band ends at unless configured otherwise.
pub const DEFAULT_EARLY_MORNING_END_HOUR: i32 = 5;

/// Seconds of `[start, end]` that fall inside `[00:00, hour)` on any day.
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
/// use overnight_worktime::calculation::early_morning_seconds;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2024-01-01 23:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2024-01-02 04:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(early_morning_seconds(start, end, 5).unwrap(), 14400);
/// ```
pub fn early_morning_seconds<T: CalendarInstant>(start: T, end: T, hour: i32) -> EngineResult<i64> {
    band_seconds(start, end, hour, BandKind::EarlyMorning)
}

/// Early-morning worktime in minutes under `rounding`.
pub fn early_morning_minutes<T: CalendarInstant>(
    start: T,
    end: T,
    hour: i32,
    rounding: Option<Rounding>,
) -> EngineResult<RoundedMinutes> {
    let duration = early_morning_duration(start, end, hour)?;
    Ok(apply_rounding(duration.total_minutes(), rounding))
}

/// Early-morning worktime as an exact [`Duration`].
pub fn early_morning_duration<T: CalendarInstant>(
    start: T,
    end: T,
    hour: i32,
) -> EngineResult<Duration> {
    early_morning_seconds(start, end, hour).map(|seconds| Duration::from_seconds(seconds as u64))
}

/// Early-morning overlap of an interval confined to one calendar day.
///
/// `end` may be the midnight that closes `start`'s day. The band exists once
/// per day, so when `end` is on the next date it is pulled back to `hour` on
/// `start`'s date.
pub(crate) fn early_morning_in_day<T: CalendarInstant>(
    start: T,
    end: T,
    hour: BoundaryHour,
) -> EngineResult<i64> {
    ensure_ordered(&start, &end)?;
    ensure_single_day(&start, &end)?;

    let hour = hour.get();
    if start.hour_of_day() >= hour {
        return Ok(0);
    }

    let mut end = end;
    if !start.same_calendar_day(&end) {
        end = clamp_to_hour(start, hour)?;
    }
    if end.hour_of_day() >= hour {
        end = clamp_to_hour(end, hour)?;
    }

    elapsed_seconds(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use chrono::NaiveDateTime;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn seconds(start: &str, end: &str) -> i64 {
        early_morning_seconds(dt(start), dt(end), DEFAULT_EARLY_MORNING_END_HOUR).unwrap()
    }

    fn minutes(start: &str, end: &str, rounding: Rounding) -> RoundedMinutes {
        early_morning_minutes(dt(start), dt(end), DEFAULT_EARLY_MORNING_END_HOUR, Some(rounding))
            .unwrap()
    }

    fn hour(h: i32) -> BoundaryHour {
        BoundaryHour::new(h).unwrap()
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let result = early_morning_seconds(dt("2024-01-03 03:00:00"), dt("2024-01-02 03:00:00"), 5);
        assert!(matches!(result, Err(EngineError::OutOfOrderInterval { .. })));
    }

    #[test]
    fn test_hour_out_of_range_is_rejected() {
        let start = dt("2024-01-02 03:00:00");
        let end = dt("2024-01-02 10:00:00");
        for bad in [-1, -999, 24, 999] {
            assert!(matches!(
                early_morning_seconds(start, end, bad),
                Err(EngineError::BoundaryHourOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn test_order_is_checked_before_hour() {
        let result = early_morning_seconds(dt("2024-01-02 03:00:00"), dt("2024-01-01 03:00:00"), -1);
        assert!(matches!(result, Err(EngineError::OutOfOrderInterval { .. })));
    }

    #[test]
    fn test_whole_band() {
        assert_eq!(seconds("2024-01-01 00:00:00", "2024-01-01 05:00:00"), 18000);
    }

    #[test]
    fn test_day_crossing_from_outside_band() {
        assert_eq!(seconds("2024-01-01 23:00:00", "2024-01-02 04:00:00"), 14400);
    }

    #[test]
    fn test_outside_band() {
        assert_eq!(seconds("2024-01-01 06:00:00", "2024-01-01 07:00:00"), 0);
        assert_eq!(seconds("2024-01-01 22:00:00", "2024-01-02 00:00:00"), 0);
        assert_eq!(seconds("2024-01-01 05:00:00", "2024-01-01 05:00:00"), 0);
    }

    #[test]
    fn test_one_second_after_midnight() {
        assert_eq!(seconds("2024-01-01 22:00:00", "2024-01-02 00:00:01"), 1);
    }

    #[test]
    fn test_end_past_band_is_clamped() {
        assert_eq!(seconds("2024-01-01 03:00:00", "2024-01-01 05:00:00"), 7200);
        assert_eq!(seconds("2024-01-01 03:00:00", "2024-01-01 06:00:00"), 7200);
        assert_eq!(seconds("2024-01-01 00:00:00", "2024-01-01 05:00:01"), 18000);
    }

    #[test]
    fn test_start_in_band_to_next_day() {
        assert_eq!(seconds("2024-01-01 03:00:00", "2024-01-02 00:00:00"), 7200);
        assert_eq!(seconds("2024-01-01 03:00:00", "2024-01-02 03:00:00"), 18000);
        assert_eq!(seconds("2024-01-01 23:59:01", "2024-01-02 05:00:00"), 18000);
    }

    #[test]
    fn test_custom_hour() {
        let duration =
            early_morning_duration(dt("2024-01-01 00:00:00"), dt("2024-01-01 05:00:01"), 4).unwrap();
        assert_eq!(duration.minutes(), 240);
        assert_eq!(duration.seconds(), 0);
    }

    #[test]
    fn test_minutes_rounding() {
        let start = "2024-01-01 03:00:00";
        assert_eq!(minutes(start, "2024-01-01 03:00:29", Rounding::Nearest), RoundedMinutes::Whole(0));
        assert_eq!(minutes(start, "2024-01-01 03:00:30", Rounding::Nearest), RoundedMinutes::Whole(1));
        assert_eq!(minutes(start, "2024-01-01 04:00:01", Rounding::Nearest), RoundedMinutes::Whole(60));
        assert_eq!(minutes(start, "2024-01-01 04:00:01", Rounding::Ceiling), RoundedMinutes::Whole(61));
        assert_eq!(minutes(start, "2024-01-01 03:00:30", Rounding::Floor), RoundedMinutes::Whole(0));
    }

    #[test]
    fn test_in_day_start_past_band() {
        let result =
            early_morning_in_day(dt("2024-01-01 05:00:00"), dt("2024-01-01 23:00:00"), hour(5));
        assert_eq!(result.unwrap(), 0);
    }

    #[test]
    fn test_in_day_closing_midnight_clamps_to_start_day() {
        let result =
            early_morning_in_day(dt("2024-01-01 01:00:00"), dt("2024-01-02 00:00:00"), hour(5));
        assert_eq!(result.unwrap(), 4 * 3600);
    }

    #[test]
    fn test_in_day_hour_zero_is_empty() {
        let result =
            early_morning_in_day(dt("2024-01-01 00:00:00"), dt("2024-01-01 12:00:00"), hour(0));
        assert_eq!(result.unwrap(), 0);
    }

    #[test]
    fn test_in_day_rejects_multi_day_span() {
        let result =
            early_morning_in_day(dt("2024-01-01 01:00:00"), dt("2024-01-03 01:00:00"), hour(5));
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }
}
