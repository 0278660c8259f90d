//! Calculation logic for the wage calculator.
//!
//! This module contains rate and day-count validation, interval validation,
//! time band detection, and the earnings engine that turns a rate table and
//! a work schedule into a total wage.

mod day_count;
mod earnings;
mod interval_validation;
mod rate_validation;
mod time_band;

pub use day_count::{MAX_DAYS, MIN_DAYS, set_day_count, validate_day_count};
pub use earnings::{calculate_day_earnings, calculate_earnings};
pub use interval_validation::{LATEST_END_HOUR, START_HOUR_LIMIT, validate_interval};
pub use rate_validation::{MAX_RATE, MIN_RATE, set_rate, validate_rate};
pub use time_band::{
    MIDNIGHT_START_HOUR, NIGHTTIME_START_HOUR, REGULAR_START_HOUR, TimeBand,
};

use crate::models::{RawInput, TimeField, WorkSchedule};

/// Stores a raw hour for one day of `schedule`.
///
/// No validation happens here; the text is checked when earnings are
/// calculated. See [`WorkSchedule::with_day_time`].
pub fn set_day_time(
    schedule: &WorkSchedule,
    index: usize,
    field: TimeField,
    raw: &RawInput,
) -> WorkSchedule {
    schedule.with_day_time(index, field, raw.to_string())
}
