//! Calculation logic for the overnight worktime engine.
//!
//! This module contains the validated elapsed-time calculator, the band
//! boundary helper, the rounding policy, the early-morning and late-night
//! band calculators, the multi-day decomposition they share and the
//! overnight aggregator combining both bands.

mod boundary;
mod day_decomposition;
mod early_morning;
mod elapsed;
mod late_night;
mod overnight;
mod rounding;

pub use boundary::{BoundaryHour, boundary_at};
pub use day_decomposition::{BandKind, DayDecomposition, band_seconds, decompose};
pub use early_morning::{
    DEFAULT_EARLY_MORNING_END_HOUR, early_morning_duration, early_morning_minutes,
    early_morning_seconds,
};
pub use elapsed::{elapsed_duration, elapsed_minutes, elapsed_seconds};
pub use late_night::{
    DEFAULT_LATE_NIGHT_START_HOUR, late_night_duration, late_night_minutes, late_night_seconds,
};
pub use overnight::{
    OvernightResult, calculate_overnight, overnight_duration, overnight_minutes, overnight_seconds,
};
pub use rounding::{RoundedMinutes, Rounding, apply_rounding};
