//! Caller-owned calculator state and the edits that transform it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculation::{calculate_earnings, set_day_count, set_day_time, set_rate};
use crate::error::ValidationFailure;
use crate::models::{RateField, RateTable, RawInput, TimeField, WageResult, WorkSchedule};

/// A single user action against the calculator.
///
/// # Example
///
/// ```
/// use wage_calculator::models::RateField;
/// use wage_calculator::state::Edit;
///
/// let edit: Edit = serde_json::from_str(
///     r#"{"action": "set_rate", "field": "regular", "value": "1000"}"#,
/// ).unwrap();
/// assert!(matches!(edit, Edit::SetRate { field: RateField::Regular, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Edit {
    /// Replace one rate.
    SetRate {
        /// The rate being edited.
        field: RateField,
        /// The raw value entered.
        #[serde(default)]
        value: RawInput,
    },
    /// Declare the number of workdays, discarding all entered hours.
    SetDayCount {
        /// The raw day count entered.
        #[serde(default)]
        value: RawInput,
    },
    /// Enter the start or end hour of one day.
    SetDayTime {
        /// 0-based index of the day.
        index: usize,
        /// Which hour is being edited.
        field: TimeField,
        /// The raw hour entered.
        #[serde(default)]
        value: RawInput,
    },
    /// Compute the total wage.
    Calculate,
}

/// Everything a presentation layer needs to render the calculator.
///
/// The state is a plain value: [`CalculatorState::apply`] never mutates it
/// and instead returns the next state. At most one failure is held; a new
/// failure replaces the previous one.
///
/// # Example
///
/// ```
/// use wage_calculator::models::{RateField, RawInput, TimeField, WageResult};
/// use wage_calculator::state::{CalculatorState, Edit};
///
/// let state = CalculatorState::default()
///     .apply(Edit::SetRate { field: RateField::Regular, value: RawInput::from("1000") })
///     .apply(Edit::SetRate { field: RateField::Nighttime, value: RawInput::from("1200") })
///     .apply(Edit::SetRate { field: RateField::Midnight, value: RawInput::from("1500") })
///     .apply(Edit::SetDayCount { value: RawInput::from("1") })
///     .apply(Edit::SetDayTime { index: 0, field: TimeField::StartHour, value: RawInput::from("9") })
///     .apply(Edit::SetDayTime { index: 0, field: TimeField::EndHour, value: RawInput::from("17") })
///     .apply(Edit::Calculate);
///
/// assert_eq!(state.outcome(), Some(WageResult::Total { total: 8000 }));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// The accepted rates.
    #[serde(default)]
    pub rates: RateTable,
    /// One entry per declared workday.
    #[serde(default)]
    pub schedule: WorkSchedule,
    /// The failure currently shown, if any.
    #[serde(default)]
    pub error: Option<ValidationFailure>,
    /// The most recent successful total.
    #[serde(default)]
    pub total: Option<u64>,
}

impl CalculatorState {
    /// Returns the state that results from applying `edit`.
    pub fn apply(&self, edit: Edit) -> CalculatorState {
        match edit {
            Edit::SetRate { field, value } => self.set_rate(field, &value),
            Edit::SetDayCount { value } => self.set_day_count(&value),
            Edit::SetDayTime {
                index,
                field,
                value,
            } => self.set_day_time(index, field, &value),
            Edit::Calculate => self.calculate(),
        }
    }

    /// Applies a rate edit.
    ///
    /// On success the rate is stored and any failure is cleared. On failure
    /// the rates are left as they were.
    pub fn set_rate(&self, field: RateField, value: &RawInput) -> CalculatorState {
        match set_rate(&self.rates, field, value) {
            Ok(rates) => CalculatorState {
                rates,
                error: None,
                ..self.clone()
            },
            Err(failure) => self.with_error(failure),
        }
    }

    /// Applies a day-count edit.
    ///
    /// Always rebuilds the schedule: a valid count gives that many empty
    /// days, an invalid one gives no days and a failure.
    pub fn set_day_count(&self, value: &RawInput) -> CalculatorState {
        match set_day_count(value) {
            Ok(schedule) => CalculatorState {
                schedule,
                error: None,
                ..self.clone()
            },
            Err(failure) => CalculatorState {
                schedule: WorkSchedule::default(),
                ..self.with_error(failure)
            },
        }
    }

    /// Stores a raw hour for one day. Never fails.
    pub fn set_day_time(&self, index: usize, field: TimeField, value: &RawInput) -> CalculatorState {
        CalculatorState {
            schedule: set_day_time(&self.schedule, index, field, value),
            ..self.clone()
        }
    }

    /// Calculates the total wage for the current rates and schedule.
    ///
    /// A failure leaves the previous total in place but hidden behind the
    /// error; see [`CalculatorState::outcome`].
    pub fn calculate(&self) -> CalculatorState {
        match calculate_earnings(&self.rates, &self.schedule) {
            WageResult::Total { total } => CalculatorState {
                total: Some(total),
                error: None,
                ..self.clone()
            },
            WageResult::Failure { failure } => self.with_error(failure),
        }
    }

    /// Number of declared workdays.
    pub fn day_count(&self) -> usize {
        self.schedule.len()
    }

    /// Returns what should be shown to the user.
    ///
    /// A held failure takes precedence over any total. `None` means nothing
    /// has been calculated yet.
    pub fn outcome(&self) -> Option<WageResult> {
        match (&self.error, self.total) {
            (Some(failure), _) => Some(WageResult::Failure {
                failure: failure.clone(),
            }),
            (None, Some(total)) => Some(WageResult::Total { total }),
            (None, None) => None,
        }
    }

    fn with_error(&self, failure: ValidationFailure) -> CalculatorState {
        debug!(error = %failure, code = failure.code(), "Validation failed");
        CalculatorState {
            error: Some(failure),
            ..self.clone()
        }
    }
}
