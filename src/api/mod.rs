//! HTTP API module for the wage calculator.
//!
//! This module provides the REST endpoints a presentation layer uses to
//! drive the calculator: a one-shot `/calculate` and a stateless `/edit`.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::{CalculationRequest, DayRequest, EditRequest, RatesRequest};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse, EditResponse};
