//! HTTP request handlers for the wage calculator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ValidationFailure;
use crate::state::CalculatorState;

use super::request::{CalculationRequest, EditRequest};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, EditResponse};

/// Creates the API router with all endpoints.
pub fn create_router() -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/edit", post(edit_handler))
}

/// Handler for POST /calculate endpoint.
///
/// Runs a complete calculation and returns the total, or the first
/// validation failure as a 400.
async fn calculate_handler(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let day_count = request.days.len();
    let start_time = Instant::now();
    match perform_calculation(request) {
        Ok(total) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                day_count,
                total,
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            let body = CalculationResponse {
                calculation_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                day_count,
                total,
            };
            json_response(StatusCode::OK, body)
        }
        Err(failure) => {
            warn!(
                correlation_id = %correlation_id,
                code = failure.code(),
                error = %failure,
                "Calculation failed"
            );
            ApiErrorResponse::from(failure).into_response()
        }
    }
}

/// Handler for POST /edit endpoint.
///
/// Applies one edit to the caller's state. Validation failures are part of
/// the returned state, so this always answers 200 for a well-formed body.
async fn edit_handler(payload: Result<Json<EditRequest>, JsonRejection>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let EditRequest { state, edit } = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let next = state.apply(edit);
    info!(
        correlation_id = %correlation_id,
        day_count = next.day_count(),
        has_error = next.error.is_some(),
        total = ?next.total,
        "Applied edit"
    );

    json_response(StatusCode::OK, EditResponse::from(next))
}

/// Replays a calculation request through a fresh calculator.
///
/// Stops at the first edit that surfaces a failure, so a bad rate is not
/// masked by a later valid day count.
fn perform_calculation(request: CalculationRequest) -> Result<u64, ValidationFailure> {
    let mut state = CalculatorState::default();

    for edit in request.into_edits() {
        state = state.apply(edit);
        if let Some(failure) = state.error.take() {
            return Err(failure);
        }
    }

    Ok(state.total.unwrap_or(0))
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
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

    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
