//! HTTP request handlers for the overnight worktime API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{BandKind, apply_rounding, calculate_overnight, decompose};
use crate::config::BandConfig;
use crate::error::EngineResult;
use crate::models::{CalendarInstant, Duration};

use super::request::{BandRequest, ElapsedRequest, OvernightRequest, parse_interval};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/elapsed", post(elapsed_handler))
        .route("/early-morning", post(early_morning_handler))
        .route("/late-night", post(late_night_handler))
        .route("/overnight", post(overnight_handler))
        .with_state(state)
}

/// Handler for POST /elapsed.
async fn elapsed_handler(
    State(state): State<AppState>,
    payload: Result<Json<ElapsedRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, endpoint = "elapsed", "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let started = Instant::now();
    let result = perform_elapsed(&request, state.config());
    respond(correlation_id, started, result)
}

/// Handler for POST /early-morning.
async fn early_morning_handler(
    State(state): State<AppState>,
    payload: Result<Json<BandRequest>, JsonRejection>,
) -> Response {
    band_handler(state, payload, BandKind::EarlyMorning)
}

/// Handler for POST /late-night.
async fn late_night_handler(
    State(state): State<AppState>,
    payload: Result<Json<BandRequest>, JsonRejection>,
) -> Response {
    band_handler(state, payload, BandKind::LateNight)
}

fn band_handler(
    state: AppState,
    payload: Result<Json<BandRequest>, JsonRejection>,
    kind: BandKind,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, endpoint = %kind, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let started = Instant::now();
    let result = perform_band(&request, state.config(), kind);
    respond(correlation_id, started, result)
}

/// Handler for POST /overnight.
///
/// Measures both bands and reports the combined total alongside each part.
async fn overnight_handler(
    State(state): State<AppState>,
    payload: Result<Json<OvernightRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, endpoint = "overnight", "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let started = Instant::now();
    let result = perform_overnight(&request, state.config());
    respond(correlation_id, started, result)
}

fn perform_elapsed(request: &ElapsedRequest, config: &BandConfig) -> EngineResult<CalculationResponse> {
    let interval = parse_interval(&request.start, &request.end)?;
    let seconds = interval.elapsed_seconds();
    let duration = Duration::from_seconds(seconds as u64);
    let rounding = request.rounding.unwrap_or(config.rounding);

    Ok(CalculationResponse {
        kind: "elapsed",
        start: interval.start(),
        end: interval.end(),
        seconds,
        duration,
        minutes: apply_rounding(duration.total_minutes(), Some(rounding)),
        hours: duration.hours(),
        breakdown: None,
        late_night: None,
        early_morning: None,
    })
}

fn perform_band(
    request: &BandRequest,
    config: &BandConfig,
    kind: BandKind,
) -> EngineResult<CalculationResponse> {
    let interval = parse_interval(&request.start, &request.end)?;
    let hour = request.hour.unwrap_or(match kind {
        BandKind::EarlyMorning => config.early_morning_end_hour,
        BandKind::LateNight => config.late_night_start_hour,
    });
    let rounding = request.rounding.unwrap_or(config.rounding);

    let breakdown = decompose(interval.start(), interval.end(), hour, kind)?;
    let seconds = breakdown.total_seconds();
    let duration = Duration::from_seconds(seconds as u64);

    Ok(CalculationResponse {
        kind: kind.as_str(),
        start: interval.start(),
        end: interval.end(),
        seconds,
        duration,
        minutes: apply_rounding(duration.total_minutes(), Some(rounding)),
        hours: duration.hours(),
        breakdown: Some(breakdown),
        late_night: None,
        early_morning: None,
    })
}

fn perform_overnight(
    request: &OvernightRequest,
    config: &BandConfig,
) -> EngineResult<CalculationResponse> {
    let interval = parse_interval(&request.start, &request.end)?;
    let effective = BandConfig {
        early_morning_end_hour: request
            .early_morning_end_hour
            .unwrap_or(config.early_morning_end_hour),
        late_night_start_hour: request
            .late_night_start_hour
            .unwrap_or(config.late_night_start_hour),
        rounding: request.rounding.unwrap_or(config.rounding),
    };

    let result = calculate_overnight(&interval, &effective)?;

    Ok(CalculationResponse {
        kind: "overnight",
        start: interval.start(),
        end: interval.end(),
        seconds: result.total.total_seconds() as i64,
        duration: result.total,
        minutes: result.minutes,
        hours: result.hours,
        breakdown: None,
        late_night: Some(result.late_night),
        early_morning: Some(result.early_morning),
    })
}

/// Logs the outcome and turns it into a JSON response.
fn respond(
    correlation_id: Uuid,
    started: Instant,
    result: EngineResult<CalculationResponse>,
) -> Response {
    match result {
        Ok(body) => {
            let elapsed = started.elapsed();
            info!(
                correlation_id = %correlation_id,
                kind = body.kind,
                days = body.start.calendar_days_until(&body.end),
                seconds = body.seconds,
                duration_us = elapsed.as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(body),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Maps a body extraction failure to a 400 response.
///
/// Field-level problems from serde, such as an unknown rounding name or a
/// missing `start`, are reported as validation errors.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("unknown variant") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
