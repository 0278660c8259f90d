//! Day count handling.
//!
//! Setting the number of workdays rebuilds the [`WorkSchedule`] from scratch.

use crate::error::ValidationFailure;
use crate::models::{RawInput, WorkSchedule};

/// Fewest days a schedule may declare.
pub const MIN_DAYS: i64 = 1;

/// Most days a schedule may declare.
pub const MAX_DAYS: i64 = 100;

/// Validates a raw day count.
///
/// Non-numeric input and integers outside `[MIN_DAYS, MAX_DAYS]` fail with
/// [`ValidationFailure::DayCountOutOfRange`].
pub fn validate_day_count(raw: &RawInput) -> Result<usize, ValidationFailure> {
    match raw.parse_int() {
        Some(days) if (MIN_DAYS..=MAX_DAYS).contains(&days) => {
            usize::try_from(days).map_err(|_| ValidationFailure::DayCountOutOfRange)
        }
        _ => Err(ValidationFailure::DayCountOutOfRange),
    }
}

/// Builds a fresh schedule for a raw day count.
///
/// The schedule always starts empty: any hours entered under a previous day
/// count are discarded, even if the count is unchanged.
///
/// # Example
///
/// ```
/// use wage_calculator::calculation::set_day_count;
/// use wage_calculator::models::RawInput;
///
/// let schedule = set_day_count(&RawInput::from("5"))?;
/// assert_eq!(schedule.len(), 5);
/// assert!(set_day_count(&RawInput::from("0")).is_err());
/// # Ok::<(), wage_calculator::error::ValidationFailure>(())
/// ```
pub fn set_day_count(raw: &RawInput) -> Result<WorkSchedule, ValidationFailure> {
    validate_day_count(raw).map(WorkSchedule::with_days)
}
