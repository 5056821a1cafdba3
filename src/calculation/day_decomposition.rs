//! Multi-day decomposition of band overlaps.
//!
//! An interval that crosses one or more midnights is split into the tail of
//! its first day, any number of complete interior days and the head of its
//! last day. The first and last pieces go through the single-day calculators;
//! interior days contribute the whole band each, in closed form.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::CalendarInstant;

use super::boundary::{BoundaryHour, clamp_to_hour};
use super::early_morning::early_morning_in_day;
use super::elapsed::ensure_ordered;
use super::late_night::late_night_in_day;

/// Which recurring daily band is being measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandKind {
    /// `[00:00, hour)`
    EarlyMorning,
    /// `[hour, 24:00)`
    LateNight,
}

impl BandKind {
    /// Band overlap of an interval confined to one calendar day.
    fn overlap_in_day<T: CalendarInstant>(
        self,
        start: T,
        end: T,
        hour: BoundaryHour,
    ) -> EngineResult<i64> {
        match self {
            BandKind::EarlyMorning => early_morning_in_day(start, end, hour),
            BandKind::LateNight => late_night_in_day(start, end, hour),
        }
    }

    /// The snake_case name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            BandKind::EarlyMorning => "early_morning",
            BandKind::LateNight => "late_night",
        }
    }

    /// Seconds one complete calendar day contributes to this band.
    pub fn full_day_seconds(self, hour: BoundaryHour) -> i64 {
        match self {
            BandKind::EarlyMorning => hour.seconds_from_start_of_day(),
            BandKind::LateNight => hour.seconds_to_end_of_day(),
        }
    }
}

impl std::fmt::Display for BandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-day breakdown of a band overlap.
///
/// For an interval inside a single calendar day everything is reported in
/// `first_day_seconds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayDecomposition {
    /// The measured band.
    pub kind: BandKind,
    /// Overlap between the start and the end of the start's day.
    pub first_day_seconds: i64,
    /// Number of complete calendar days strictly between the first and last day.
    pub interior_days: i64,
    /// Overlap contributed by the interior days.
    pub interior_seconds: i64,
    /// Overlap between the midnight opening the end's day and the end.
    pub last_day_seconds: i64,
}

impl DayDecomposition {
    /// Total overlap in seconds.
    pub fn total_seconds(&self) -> i64 {
        self.first_day_seconds + self.interior_seconds + self.last_day_seconds
    }
}

/// Splits `[start, end]` by calendar day and measures its overlap with the
/// band of `kind` bounded by `hour`.
///
/// Ordering is validated first, then the hour (`0..24`).
///
/// # Example
///
/// ```
/// use overnight_worktime::calculation::{BandKind, decompose};
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2024-01-01 21:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2024-01-03 23:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let days = decompose(start, end, 21, BandKind::LateNight).unwrap();
/// assert_eq!(days.first_day_seconds, 3 * 3600);
/// assert_eq!(days.interior_days, 1);
/// assert_eq!(days.interior_seconds, 3 * 3600);
/// assert_eq!(days.last_day_seconds, 2 * 3600);
/// ```
pub fn decompose<T: CalendarInstant>(
    start: T,
    end: T,
    hour: i32,
    kind: BandKind,
) -> EngineResult<DayDecomposition> {
    ensure_ordered(&start, &end)?;
    let hour = BoundaryHour::new(hour)?;

    if start.same_calendar_day(&end) {
        return Ok(DayDecomposition {
            kind,
            first_day_seconds: kind.overlap_in_day(start, end, hour)?,
            interior_days: 0,
            interior_seconds: 0,
            last_day_seconds: 0,
        });
    }

    let days = start.calendar_days_until(&end);

    let first_day_end = clamp_to_hour(start, 24)?;
    let first_day_seconds = kind.overlap_in_day(start, first_day_end, hour)?;

    let interior_days = days - 1;
    let interior_seconds = interior_days * kind.full_day_seconds(hour);

    let last_day_start = clamp_to_hour(end, 0)?;
    let last_day_seconds = kind.overlap_in_day(last_day_start, end, hour)?;

    debug!(
        band = %kind,
        hour = %hour,
        days,
        first_day_seconds,
        interior_seconds,
        last_day_seconds,
        "Decomposed multi-day interval"
    );

    Ok(DayDecomposition {
        kind,
        first_day_seconds,
        interior_days,
        interior_seconds,
        last_day_seconds,
    })
}

/// Total seconds of `[start, end]` inside the band of `kind`.
pub fn band_seconds<T: CalendarInstant>(
    start: T,
    end: T,
    hour: i32,
    kind: BandKind,
) -> EngineResult<i64> {
    decompose(start, end, hour, kind).map(|days| days.total_seconds())
}

/// Fails unless `end` is on `start`'s date or is the midnight closing it.
///
/// The single-day calculators only ever see such intervals; anything longer
/// must be split by [`decompose`] first.
pub(crate) fn ensure_single_day<T: CalendarInstant>(start: &T, end: &T) -> EngineResult<()> {
    if start.same_calendar_day(end) || start.at_boundary_hour(24).as_ref() == Some(end) {
        return Ok(());
    }
    Err(EngineError::CalculationError {
        message: format!(
            "single-day overlap requested for {} to {}, which spans more than one day",
            start, end
        ),
    })
}
