//! Error types for the wage calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! [`ValidationFailure`] covers the three user-facing failure categories and
//! carries their fixed messages; [`EngineError`] covers the configuration and
//! server errors of the service binary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::RateField;

/// A user-facing validation failure.
///
/// Only one failure is surfaced at a time. The `Display` output of each
/// variant is the exact message shown to the user.
///
/// # Example
///
/// ```
/// use wage_calculator::error::ValidationFailure;
/// use wage_calculator::models::RateField;
///
/// let failure = ValidationFailure::RateOutOfRange {
///     field: RateField::Nighttime,
/// };
/// assert_eq!(
///     failure.to_string(),
///     "Invalid value for nighttime. It must be between 0 and 3000."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationFailure {
    /// A rate parsed to an integer outside `[0, 3000]`.
    #[error("Invalid value for {field}. It must be between 0 and 3000.")]
    RateOutOfRange {
        /// The rate field that was being edited.
        field: RateField,
    },

    /// The day count was not a number or was outside `[1, 100]`.
    #[error("Number of days (N) must be between 1 and 100.")]
    DayCountOutOfRange,

    /// A day's start/end hours were missing or out of bounds.
    #[error("Invalid start or end time. Ensure 0 ≦ S < T ≦ 23.")]
    InvalidInterval {
        /// The 0-based index of the first offending day.
        day: usize,
    },
}

impl ValidationFailure {
    /// Returns a stable machine-readable code for this failure.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationFailure::RateOutOfRange { .. } => "RATE_OUT_OF_RANGE",
            ValidationFailure::DayCountOutOfRange => "DAY_COUNT_OUT_OF_RANGE",
            ValidationFailure::InvalidInterval { .. } => "INVALID_INTERVAL",
        }
    }
}

/// The main error type for the wage calculator service.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The HTTP server could not be started or stopped unexpectedly.
    #[error("Server error: {message}")]
    Server {
        /// A description of the server failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_out_of_range_message_names_field() {
        let failure = ValidationFailure::RateOutOfRange {
            field: RateField::Regular,
        };
        assert_eq!(
            failure.to_string(),
            "Invalid value for regular. It must be between 0 and 3000."
        );

        let failure = ValidationFailure::RateOutOfRange {
            field: RateField::Midnight,
        };
        assert_eq!(
            failure.to_string(),
            "Invalid value for midnight. It must be between 0 and 3000."
        );
    }

    #[test]
    fn test_day_count_message() {
        assert_eq!(
            ValidationFailure::DayCountOutOfRange.to_string(),
            "Number of days (N) must be between 1 and 100."
        );
    }

    #[test]
    fn test_invalid_interval_message_omits_day_index() {
        let failure = ValidationFailure::InvalidInterval { day: 4 };
        assert_eq!(
            failure.to_string(),
            "Invalid start or end time. Ensure 0 ≦ S < T ≦ 23."
        );
    }

    #[test]
    fn test_failure_codes() {
        assert_eq!(
            ValidationFailure::RateOutOfRange {
                field: RateField::Regular
            }
            .code(),
            "RATE_OUT_OF_RANGE"
        );
        assert_eq!(
            ValidationFailure::DayCountOutOfRange.code(),
            "DAY_COUNT_OUT_OF_RANGE"
        );
        assert_eq!(
            ValidationFailure::InvalidInterval { day: 0 }.code(),
            "INVALID_INTERVAL"
        );
    }

    #[test]
    fn test_validation_failure_serializes_with_kind_tag() {
        let failure = ValidationFailure::InvalidInterval { day: 2 };
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["kind"], "invalid_interval");
        assert_eq!(json["day"], 2);

        let back: ValidationFailure = serde_json::from_value(json).unwrap();
        assert_eq!(back, failure);
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/server.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/server.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "config/server.yaml".to_string(),
            message: "invalid type".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file 'config/server.yaml': invalid type"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
        assert_error::<ValidationFailure>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(matches!(
            propagates_error(),
            Err(EngineError::ConfigNotFound { .. })
        ));
    }
}
