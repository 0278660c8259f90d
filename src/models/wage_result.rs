//! Calculation outcome model.

use serde::{Deserialize, Serialize};

use crate::error::ValidationFailure;

/// The outcome of a wage calculation.
///
/// Exactly one of a total or a failure; a failed calculation never carries a
/// partial total.
///
/// # Example
///
/// ```
/// use wage_calculator::models::WageResult;
///
/// let result = WageResult::Total { total: 8000 };
/// assert!(result.failure().is_none());
/// assert_eq!(result.reason(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WageResult {
    /// The grand total over every day in the schedule.
    Total {
        /// Total wage.
        total: u64,
    },
    /// The first validation failure encountered.
    Failure {
        /// What went wrong.
        failure: ValidationFailure,
    },
}

impl WageResult {
    /// Returns the failure, if the calculation failed.
    pub fn failure(&self) -> Option<&ValidationFailure> {
        match self {
            WageResult::Total { .. } => None,
            WageResult::Failure { failure } => Some(failure),
        }
    }

    /// Returns the user-facing failure message, if any.
    pub fn reason(&self) -> Option<String> {
        self.failure().map(ToString::to_string)
    }
}

impl From<ValidationFailure> for WageResult {
    fn from(failure: ValidationFailure) -> Self {
        WageResult::Failure { failure }
    }
}
