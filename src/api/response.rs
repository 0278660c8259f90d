//! Response types for the wage calculator API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from validation failures to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationFailure;
use crate::models::WageResult;
use crate::state::CalculatorState;

/// Response body for a successful `/calculate` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// Number of days that were paid for.
    pub day_count: usize,
    /// The total wage.
    pub total: u64,
}

/// Response body for the `/edit` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditResponse {
    /// The state after the edit.
    pub state: CalculatorState,
    /// What the presentation layer should display, if anything.
    pub outcome: Option<WageResult>,
    /// The user-facing failure message, if a failure is held.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<CalculatorState> for EditResponse {
    fn from(state: CalculatorState) -> Self {
        let outcome = state.outcome();
        let message = outcome.as_ref().and_then(WageResult::reason);
        Self {
            state,
            outcome,
            message,
        }
    }
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

    /// Creates an error response for a rejected input value.
    ///
    /// The message is exactly what the user would see in a form.
    pub fn from_failure(failure: &ValidationFailure) -> Self {
        match failure {
            ValidationFailure::InvalidInterval { day } => Self::with_details(
                failure.code(),
                failure.to_string(),
                format!("Day {} has invalid hours", day + 1),
            ),
            _ => Self::new(failure.code(), failure.to_string()),
        }
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

impl From<ValidationFailure> for ApiErrorResponse {
    fn from(failure: ValidationFailure) -> Self {
        ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::from_failure(&failure),
        }
    }
}
