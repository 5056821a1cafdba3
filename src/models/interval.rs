//! Ordered time intervals.

use serde::Serialize;

use crate::error::{EngineError, EngineResult};

use super::instant::CalendarInstant;

/// A `(start, end)` pair with `start <= end`.
///
/// # Example
///
/// ```
/// use overnight_worktime::models::Interval;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2024-01-01 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2024-01-02 05:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let interval = Interval::new(start, end).unwrap();
/// assert_eq!(interval.elapsed_seconds(), 25200);
/// assert!(Interval::new(end, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval<T> {
    start: T,
    end: T,
}

impl<T: CalendarInstant> Interval<T> {
    /// Creates an interval, rejecting `end < start`.
    ///
    /// Equal instants form a valid zero-length interval.
    pub fn new(start: T, end: T) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::out_of_order(start, end));
        }
        Ok(Self { start, end })
    }

    /// The start of the interval.
    pub fn start(&self) -> T {
        self.start
    }

    /// The end of the interval.
    pub fn end(&self) -> T {
        self.end
    }

    /// Elapsed whole seconds, never negative.
    pub fn elapsed_seconds(&self) -> i64 {
        self.start.seconds_until(&self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_zero_length_interval_is_valid() {
        let instant = dt("2024-01-01 09:00:00");
        let interval = Interval::new(instant, instant).unwrap();
        assert_eq!(interval.elapsed_seconds(), 0);
    }

    #[test]
    fn test_out_of_order_is_rejected() {
        let result = Interval::new(dt("2024-01-03 00:00:00"), dt("2024-01-02 00:00:00"));
        match result {
            Err(EngineError::OutOfOrderInterval { start, end }) => {
                assert_eq!(start, "2024-01-03 00:00:00");
                assert_eq!(end, "2024-01-02 00:00:00");
            }
            other => panic!("Expected OutOfOrderInterval, got {:?}", other),
        }
    }

    #[test]
    fn test_multi_day_interval() {
        let interval = Interval::new(dt("2024-01-01 23:00:00"), dt("2024-01-02 01:00:00")).unwrap();
        assert_eq!(interval.elapsed_seconds(), 7200);
    }
}
