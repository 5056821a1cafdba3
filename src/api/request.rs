//! Request types for the overnight worktime API.
//!
//! This module defines the JSON request bodies accepted by the calculation
//! endpoints. Timestamps may be strings or unix seconds; omitted hours and
//! rounding fall back to the server's [`BandConfig`](crate::config::BandConfig).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::calculation::Rounding;
use crate::error::EngineResult;
use crate::models::{Interval, TimeInput};

/// Request body for the `/elapsed` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElapsedRequest {
    /// Start of the interval.
    pub start: TimeInput,
    /// End of the interval.
    pub end: TimeInput,
    /// Rounding for the minute result.
    #[serde(default)]
    pub rounding: Option<Rounding>,
}

/// Request body for the `/early-morning` and `/late-night` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandRequest {
    /// Start of the interval.
    pub start: TimeInput,
    /// End of the interval.
    pub end: TimeInput,
    /// The band edge: end hour for early morning, start hour for late night.
    #[serde(default)]
    pub hour: Option<i32>,
    /// Rounding for the minute result.
    #[serde(default)]
    pub rounding: Option<Rounding>,
}

/// Request body for the `/overnight` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvernightRequest {
    /// Start of the interval.
    pub start: TimeInput,
    /// End of the interval.
    pub end: TimeInput,
    /// Hour the late-night band starts at.
    #[serde(default)]
    pub late_night_start_hour: Option<i32>,
    /// Hour the early-morning band ends at.
    #[serde(default)]
    pub early_morning_end_hour: Option<i32>,
    /// Rounding for the minute result.
    #[serde(default)]
    pub rounding: Option<Rounding>,
}

/// Parses both ends and checks their order.
pub(crate) fn parse_interval(
    start: &TimeInput,
    end: &TimeInput,
) -> EngineResult<Interval<NaiveDateTime>> {
    Interval::new(start.to_instant()?, end.to_instant()?)
}
