//! Overnight worktime calculation for late-night premium pay
//!
//! This crate measures how much of a work interval falls in the late-night
//! band before midnight and the early-morning band after it, across any
//! number of calendar days, and serves the calculators over a JSON API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
