//! Core data models for the overnight worktime engine.
//!
//! This module contains the value types shared by every calculator: exact
//! durations, ordered intervals, the calendar capability trait and the
//! normalization of caller-supplied timestamps.

mod duration;
mod instant;
mod interval;
mod time_input;

pub use duration::{Duration, TieBreak};
pub use instant::CalendarInstant;
pub use interval::Interval;
pub use time_input::TimeInput;
