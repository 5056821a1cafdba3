//! Response types for the overnight worktime API.
//!
//! This module defines the success body shared by the calculation endpoints
//! and the error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{DayDecomposition, RoundedMinutes};
use crate::error::EngineError;
use crate::models::Duration;

/// Successful calculation body.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse {
    /// What was measured: `elapsed`, `early_morning`, `late_night` or `overnight`.
    pub kind: &'static str,
    /// Normalized interval start.
    pub start: NaiveDateTime,
    /// Normalized interval end.
    pub end: NaiveDateTime,
    /// Exact result in seconds.
    pub seconds: i64,
    /// Exact result as minutes and seconds.
    pub duration: Duration,
    /// Result in minutes under the requested rounding.
    pub minutes: RoundedMinutes,
    /// Result in hours.
    pub hours: Decimal,
    /// Per-day breakdown for single-band endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<DayDecomposition>,
    /// Late-night part of an overnight result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub late_night: Option<Duration>,
    /// Early-morning part of an overnight result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub early_morning: Option<Duration>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::OutOfOrderInterval { start, end } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "OUT_OF_ORDER_INTERVAL",
                    "The end time must be after the start time.",
                    format!("start: {}, end: {}", start, end),
                ),
            },
            EngineError::BoundaryHourOutOfRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("BOUNDARY_HOUR_OUT_OF_RANGE", message),
            },
            EngineError::InvalidTimestamp { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_TIMESTAMP", message),
            },
            EngineError::InvalidDuration { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
