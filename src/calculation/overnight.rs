//! Overnight (late-night labor) worktime.
//!
//! Late-night labor is the union of the late-night band before midnight and
//! the early-morning band after it, 22:00 to 05:00 by default. The two
//! hours are independent, so the bands need not meet.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::BandConfig;
use crate::error::EngineResult;
use crate::models::{CalendarInstant, Duration, Interval};

use super::day_decomposition::{BandKind, DayDecomposition, band_seconds, decompose};
use super::rounding::{RoundedMinutes, Rounding, apply_rounding};

/// Overnight worktime of one interval, split by band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OvernightResult {
    /// Worktime in the late-night band.
    pub late_night: Duration,
    /// Worktime in the early-morning band.
    pub early_morning: Duration,
    /// Combined worktime.
    pub total: Duration,
    /// The combined worktime in minutes, rounded once.
    pub minutes: RoundedMinutes,
    /// The combined worktime in hours.
    pub hours: Decimal,
    /// Per-day breakdown of the late-night band.
    pub late_night_days: DayDecomposition,
    /// Per-day breakdown of the early-morning band.
    pub early_morning_days: DayDecomposition,
}

/// Seconds of `[start, end]` inside either band.
///
/// # Example
///
/// ```
/// use overnight_worktime::calculation::overnight_seconds;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2024-01-01 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2024-01-02 05:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(overnight_seconds(start, end, 22, 5).unwrap(), 25200);
/// ```
pub fn overnight_seconds<T: CalendarInstant>(
    start: T,
    end: T,
    late_night_start_hour: i32,
    early_morning_end_hour: i32,
) -> EngineResult<i64> {
    let late_night = band_seconds(start, end, late_night_start_hour, BandKind::LateNight)?;
    let early_morning = band_seconds(start, end, early_morning_end_hour, BandKind::EarlyMorning)?;
    Ok(late_night + early_morning)
}

/// Overnight worktime in minutes under `rounding`.
///
/// Rounding is applied to the combined total, not to each band.
pub fn overnight_minutes<T: CalendarInstant>(
    start: T,
    end: T,
    late_night_start_hour: i32,
    early_morning_end_hour: i32,
    rounding: Option<Rounding>,
) -> EngineResult<RoundedMinutes> {
    let duration = overnight_duration(start, end, late_night_start_hour, early_morning_end_hour)?;
    Ok(apply_rounding(duration.total_minutes(), rounding))
}

/// Overnight worktime as an exact [`Duration`].
pub fn overnight_duration<T: CalendarInstant>(
    start: T,
    end: T,
    late_night_start_hour: i32,
    early_morning_end_hour: i32,
) -> EngineResult<Duration> {
    overnight_seconds(start, end, late_night_start_hour, early_morning_end_hour)
        .map(|seconds| Duration::from_seconds(seconds as u64))
}

/// Measures both bands of `interval` using the hours and rounding in `config`.
pub fn calculate_overnight<T: CalendarInstant>(
    interval: &Interval<T>,
    config: &BandConfig,
) -> EngineResult<OvernightResult> {
    let late_night_days = decompose(
        interval.start(),
        interval.end(),
        config.late_night_start_hour,
        BandKind::LateNight,
    )?;
    let early_morning_days = decompose(
        interval.start(),
        interval.end(),
        config.early_morning_end_hour,
        BandKind::EarlyMorning,
    )?;

    let late_night = Duration::from_seconds(late_night_days.total_seconds() as u64);
    let early_morning = Duration::from_seconds(early_morning_days.total_seconds() as u64);
    let total = late_night + early_morning;

    Ok(OvernightResult {
        late_night,
        early_morning,
        total,
        minutes: apply_rounding(total.total_minutes(), Some(config.rounding)),
        hours: total.hours(),
        late_night_days,
        early_morning_days,
    })
}
