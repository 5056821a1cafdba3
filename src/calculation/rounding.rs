//! Rounding of fractional minute values.
//!
//! Payroll rules disagree on how leftover seconds are treated, so every
//! `*_minutes` calculator takes an optional [`Rounding`] and resolves it
//! through [`apply_rounding`].

use serde::{Deserialize, Serialize};

/// How a fractional minute value is turned into a reported number.
///
/// # Example
///
/// ```
/// use overnight_worktime::calculation::{Rounding, RoundedMinutes, apply_rounding};
///
/// assert_eq!(apply_rounding(60.5, Some(Rounding::Nearest)), RoundedMinutes::Whole(61));
/// assert_eq!(apply_rounding(60.5, Some(Rounding::Floor)), RoundedMinutes::Whole(60));
/// assert_eq!(apply_rounding(60.5, None), RoundedMinutes::Fractional(60.5));
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Keep the fractional value.
    Raw,
    /// Round half away from zero.
    #[default]
    #[serde(alias = "round")]
    Nearest,
    /// Round up.
    #[serde(alias = "ceil")]
    Ceiling,
    /// Round down.
    Floor,
    /// Caller-supplied rounding; its result is reported verbatim.
    #[serde(skip)]
    Custom(fn(f64) -> f64),
}

impl std::str::FromStr for Rounding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "raw" => Ok(Rounding::Raw),
            "nearest" | "round" => Ok(Rounding::Nearest),
            "ceiling" | "ceil" => Ok(Rounding::Ceiling),
            "floor" => Ok(Rounding::Floor),
            other => Err(format!("Unknown rounding method: {}", other)),
        }
    }
}

impl std::fmt::Display for Rounding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rounding::Raw => write!(f, "raw"),
            Rounding::Nearest => write!(f, "nearest"),
            Rounding::Ceiling => write!(f, "ceiling"),
            Rounding::Floor => write!(f, "floor"),
            Rounding::Custom(_) => write!(f, "custom"),
        }
    }
}

/// A minute count after rounding.
///
/// Serializes as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RoundedMinutes {
    /// Produced by nearest, ceiling and floor rounding.
    Whole(i64),
    /// Produced by raw and custom rounding.
    Fractional(f64),
}

impl RoundedMinutes {
    /// The value as a float, whichever variant it is.
    pub fn as_f64(&self) -> f64 {
        match self {
            RoundedMinutes::Whole(minutes) => *minutes as f64,
            RoundedMinutes::Fractional(minutes) => *minutes,
        }
    }
}

impl std::fmt::Display for RoundedMinutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundedMinutes::Whole(minutes) => write!(f, "{}", minutes),
            RoundedMinutes::Fractional(minutes) => write!(f, "{}", minutes),
        }
    }
}

/// Applies a rounding strategy to a fractional minute value.
///
/// `None` leaves the value untouched, the same as [`Rounding::Raw`].
pub fn apply_rounding(value: f64, rounding: Option<Rounding>) -> RoundedMinutes {
    match rounding {
        None | Some(Rounding::Raw) => RoundedMinutes::Fractional(value),
        Some(Rounding::Nearest) => RoundedMinutes::Whole(value.round() as i64),
        Some(Rounding::Ceiling) => RoundedMinutes::Whole(value.ceil() as i64),
        Some(Rounding::Floor) => RoundedMinutes::Whole(value.floor() as i64),
        Some(Rounding::Custom(round)) => RoundedMinutes::Fractional(round(value)),
    }
}
