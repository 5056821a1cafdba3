//! Exact worktime durations.
//!
//! A [`Duration`] keeps whole minutes and a seconds remainder so that the
//! exact elapsed time is never lost, while still offering the rounded minute
//! views that payroll rules are expressed in.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// How a half-minute (exactly 30 seconds) is resolved by [`Duration::rounded`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// 30 seconds rounds up.
    #[default]
    HalfUp,
    /// 30 seconds rounds down.
    HalfDown,
    /// 30 seconds rounds to the even minute.
    HalfEven,
    /// 30 seconds rounds to the odd minute.
    HalfOdd,
}

/// An exact duration made of whole minutes and a seconds remainder.
///
/// Invariant: `seconds < 60`. Both parts are unsigned, so negative durations
/// cannot be represented.
///
/// # Example
///
/// ```
/// use overnight_worktime::models::Duration;
///
/// let duration = Duration::from_seconds(3601);
/// assert_eq!(duration.minutes(), 60);
/// assert_eq!(duration.seconds(), 1);
/// assert_eq!(duration.ceiled(), 61);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Duration {
    minutes: u64,
    seconds: u8,
}

impl Duration {
    /// Creates a duration from minutes and a seconds remainder.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDuration`] when either part is negative
    /// or `seconds >= 60`.
    pub fn new(minutes: i64, seconds: i64) -> EngineResult<Self> {
        if minutes < 0 {
            return Err(EngineError::InvalidDuration {
                message: "The minutes must be greater than or equal to 0.",
            });
        }
        if seconds < 0 {
            return Err(EngineError::InvalidDuration {
                message: "The seconds must be greater than or equal to 0.",
            });
        }
        if seconds >= 60 {
            return Err(EngineError::InvalidDuration {
                message: "The seconds must be less than 60.",
            });
        }
        Ok(Self {
            minutes: minutes as u64,
            seconds: seconds as u8,
        })
    }

    /// Splits a raw elapsed-seconds count into minutes and seconds.
    pub fn from_seconds(total_seconds: u64) -> Self {
        Self {
            minutes: total_seconds / 60,
            seconds: (total_seconds % 60) as u8,
        }
    }

    /// Whole minutes.
    pub fn minutes(&self) -> u64 {
        self.minutes
    }

    /// Seconds remainder, always below 60.
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// The duration expressed in seconds.
    pub fn total_seconds(&self) -> u64 {
        self.minutes * 60 + u64::from(self.seconds)
    }

    /// The duration expressed in (fractional) minutes.
    pub fn total_minutes(&self) -> f64 {
        self.minutes as f64 + f64::from(self.seconds) / 60.0
    }

    /// Minutes, counting any leftover second as a full minute.
    pub fn ceiled(&self) -> u64 {
        if self.seconds > 0 {
            self.minutes + 1
        } else {
            self.minutes
        }
    }

    /// Minutes, dropping the seconds remainder.
    pub fn floored(&self) -> u64 {
        self.minutes
    }

    /// Minutes rounded to the nearest minute, resolving exact half-minutes
    /// with `tie_break`.
    pub fn rounded(&self, tie_break: TieBreak) -> u64 {
        let up = self.minutes + 1;
        match self.seconds {
            0..30 => self.minutes,
            31.. => up,
            _ => match tie_break {
                TieBreak::HalfUp => up,
                TieBreak::HalfDown => self.minutes,
                TieBreak::HalfEven if self.minutes % 2 == 0 => self.minutes,
                TieBreak::HalfEven => up,
                TieBreak::HalfOdd if self.minutes % 2 == 1 => self.minutes,
                TieBreak::HalfOdd => up,
            },
        }
    }

    /// The duration in hours as a [`Decimal`], for multiplying against
    /// hourly premium rates.
    pub fn hours(&self) -> Decimal {
        Decimal::from(self.total_seconds()) / Decimal::from(3600)
    }
}

impl std::ops::Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration::from_seconds(self.total_seconds() + rhs.total_seconds())
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}m{:02}s", self.minutes, self.seconds)
    }
}

#[derive(Deserialize)]
struct RawDuration {
    minutes: i64,
    #[serde(default)]
    seconds: i64,
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawDuration::deserialize(deserializer)?;
        Duration::new(raw.minutes, raw.seconds).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_new_rejects_negative_minutes() {
        match Duration::new(-1, 0) {
            Err(EngineError::InvalidDuration { message }) => {
                assert_eq!(message, "The minutes must be greater than or equal to 0.");
            }
            other => panic!("Expected InvalidDuration, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_negative_seconds() {
        match Duration::new(0, -1) {
            Err(EngineError::InvalidDuration { message }) => {
                assert_eq!(message, "The seconds must be greater than or equal to 0.");
            }
            other => panic!("Expected InvalidDuration, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_sixty_seconds() {
        match Duration::new(0, 60) {
            Err(EngineError::InvalidDuration { message }) => {
                assert_eq!(message, "The seconds must be less than 60.");
            }
            other => panic!("Expected InvalidDuration, got {:?}", other),
        }
    }

    #[test]
    fn test_from_seconds_splits_minutes_and_remainder() {
        let cases = [(0, 0, 0), (1, 0, 1), (59, 0, 59), (60, 1, 0), (61, 1, 1), (3599, 59, 59)];
        for (total, minutes, seconds) in cases {
            let duration = Duration::from_seconds(total);
            assert_eq!(duration.minutes(), minutes, "minutes of {}s", total);
            assert_eq!(duration.seconds(), seconds, "seconds of {}s", total);
            assert_eq!(duration.total_seconds(), total);
        }
    }

    #[test]
    fn test_3601_seconds() {
        let duration = Duration::from_seconds(3601);
        assert_eq!(duration.minutes(), 60);
        assert_eq!(duration.seconds(), 1);
        assert_eq!(duration.rounded(TieBreak::default()), 60);
        assert_eq!(duration.ceiled(), 61);
        assert_eq!(duration.floored(), 60);
    }

    #[test]
    fn test_total_minutes_is_fractional() {
        let duration = Duration::new(2, 30).unwrap();
        assert_eq!(duration.total_minutes(), 2.5);
        assert_eq!(duration.total_seconds(), 150);
    }

    #[test]
    fn test_rounded_below_and_above_half() {
        assert_eq!(Duration::new(10, 29).unwrap().rounded(TieBreak::HalfUp), 10);
        assert_eq!(Duration::new(10, 31).unwrap().rounded(TieBreak::HalfDown), 11);
    }

    #[test]
    fn test_rounded_tie_breaks() {
        let even = Duration::new(10, 30).unwrap();
        let odd = Duration::new(11, 30).unwrap();

        assert_eq!(even.rounded(TieBreak::HalfUp), 11);
        assert_eq!(even.rounded(TieBreak::HalfDown), 10);
        assert_eq!(even.rounded(TieBreak::HalfEven), 10);
        assert_eq!(even.rounded(TieBreak::HalfOdd), 11);

        assert_eq!(odd.rounded(TieBreak::HalfEven), 12);
        assert_eq!(odd.rounded(TieBreak::HalfOdd), 11);
    }

    #[test]
    fn test_ceiled_without_remainder_is_exact() {
        assert_eq!(Duration::new(5, 0).unwrap().ceiled(), 5);
    }

    #[test]
    fn test_hours_as_decimal() {
        assert_eq!(Duration::from_seconds(25200).hours(), Decimal::from(7));
        assert_eq!(
            Duration::from_seconds(5400).hours(),
            Decimal::from_str("1.5").unwrap()
        );
    }

    #[test]
    fn test_add_carries_seconds() {
        let sum = Duration::new(1, 45).unwrap() + Duration::new(2, 30).unwrap();
        assert_eq!(sum, Duration::new(4, 15).unwrap());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(Duration::from_seconds(61)).unwrap();
        assert_eq!(json, serde_json::json!({"minutes": 1, "seconds": 1}));

        let parsed: Duration = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.total_seconds(), 61);

        let invalid: Result<Duration, _> =
            serde_json::from_value(serde_json::json!({"minutes": 1, "seconds": 75}));
        assert!(invalid.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Duration::from_seconds(3601).to_string(), "60m01s");
    }
}
