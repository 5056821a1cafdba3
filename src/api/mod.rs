//! HTTP API module for the overnight worktime engine.
//!
//! This module provides the REST API endpoints for measuring elapsed time
//! and the late-night and early-morning bands of a work interval.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BandRequest, ElapsedRequest, OvernightRequest};
pub use response::{ApiError, CalculationResponse};
pub use state::AppState;
