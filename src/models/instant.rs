//! The calendar capability the band calculators rely on.
//!
//! The calculators never care how a point in time was produced, only that it
//! can be ordered, report its hour of day, compare calendar days and be
//! snapped to a whole hour on its own date.

use chrono::{NaiveDateTime, SubsecRound, Timelike};

/// A point in time with second resolution and a calendar date.
///
/// Implemented for [`NaiveDateTime`], which treats every instant as local
/// wall-clock time with no zone or daylight-saving adjustment.
pub trait CalendarInstant: Copy + Ord + std::fmt::Display {
    /// The hour of day, `0..24`.
    fn hour_of_day(&self) -> u32;

    /// Whether both instants fall on the same calendar date.
    fn same_calendar_day(&self, other: &Self) -> bool;

    /// The instant at `hour:00:00.000` on this instant's date.
    ///
    /// `hour == 24` yields midnight of the following date. Returns `None`
    /// when `hour > 24` or the result is not representable.
    fn at_boundary_hour(&self, hour: u32) -> Option<Self>;

    /// Number of calendar-day transitions between this instant's date and
    /// `later`'s date.
    fn calendar_days_until(&self, later: &Self) -> i64;

    /// Elapsed seconds from this instant to `later`, both truncated to the
    /// whole second first.
    ///
    /// Band edges are always whole seconds, so counts taken piece by piece
    /// between them add up to the count over the whole interval.
    fn seconds_until(&self, later: &Self) -> i64;
}

impl CalendarInstant for NaiveDateTime {
    fn hour_of_day(&self) -> u32 {
        self.hour()
    }

    fn same_calendar_day(&self, other: &Self) -> bool {
        self.date() == other.date()
    }

    fn at_boundary_hour(&self, hour: u32) -> Option<Self> {
        match hour {
            24 => self.date().succ_opt()?.and_hms_opt(0, 0, 0),
            _ => self.date().and_hms_opt(hour, 0, 0),
        }
    }

    fn calendar_days_until(&self, later: &Self) -> i64 {
        (later.date() - self.date()).num_days()
    }

    fn seconds_until(&self, later: &Self) -> i64 {
        (later.trunc_subsecs(0) - self.trunc_subsecs(0)).num_seconds()
    }
}
