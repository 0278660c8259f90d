//! Work schedule model.
//!
//! A [`WorkSchedule`] holds one [`DayInterval`] per declared workday. Hours
//! are stored as the raw text the user entered and are only validated, into
//! an [`HourRange`], when earnings are calculated.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculation::MAX_DAYS;
use crate::error::ValidationFailure;

/// Selects the start or end hour of a [`DayInterval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeField {
    /// The clock-in hour.
    StartHour,
    /// The clock-out hour (exclusive).
    EndHour,
}

/// One workday's clock-in and clock-out hours, as entered.
///
/// An empty string means the hour has not been filled in yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayInterval {
    /// Raw clock-in hour.
    #[serde(default)]
    pub start_hour: String,
    /// Raw clock-out hour.
    #[serde(default)]
    pub end_hour: String,
}

impl DayInterval {
    /// Creates an interval from raw start and end text.
    pub fn new(start_hour: impl Into<String>, end_hour: impl Into<String>) -> Self {
        Self {
            start_hour: start_hour.into(),
            end_hour: end_hour.into(),
        }
    }

    /// Returns true if neither hour has been entered.
    pub fn is_empty(&self) -> bool {
        self.start_hour.is_empty() && self.end_hour.is_empty()
    }

    fn set(&mut self, field: TimeField, raw: String) {
        match field {
            TimeField::StartHour => self.start_hour = raw,
            TimeField::EndHour => self.end_hour = raw,
        }
    }
}

/// A validated hour range `[start, end)` within a single day.
///
/// Only produced by interval validation, so `start < end <= 23` and
/// `start <= 22` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HourRange {
    start: u8,
    end: u8,
}

impl HourRange {
    pub(crate) fn new(start: u8, end: u8) -> Self {
        debug_assert!(start < end && end <= 23);
        Self { start, end }
    }

    /// The first counted hour.
    pub fn start(&self) -> u8 {
        self.start
    }

    /// The hour after the last counted hour.
    pub fn end(&self) -> u8 {
        self.end
    }

    /// Iterates over every counted hour.
    pub fn hours(&self) -> Range<u8> {
        self.start..self.end
    }
}

/// The ordered list of workdays being paid for.
///
/// Days are never reordered or removed one at a time; a new day count
/// replaces the whole schedule. Deserializing rejects more than `MAX_DAYS`
/// days.
///
/// # Example
///
/// ```
/// use wage_calculator::models::{TimeField, WorkSchedule};
///
/// let schedule = WorkSchedule::with_days(2)
///     .with_day_time(0, TimeField::StartHour, "9")
///     .with_day_time(0, TimeField::EndHour, "17");
///
/// assert_eq!(schedule.len(), 2);
/// assert_eq!(schedule.days()[0].start_hour, "9");
/// assert!(schedule.days()[1].is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DayInterval>", into = "Vec<DayInterval>")]
pub struct WorkSchedule {
    days: Vec<DayInterval>,
}

impl TryFrom<Vec<DayInterval>> for WorkSchedule {
    type Error = ValidationFailure;

    fn try_from(days: Vec<DayInterval>) -> Result<Self, Self::Error> {
        if days.len() as i64 > MAX_DAYS {
            return Err(ValidationFailure::DayCountOutOfRange);
        }
        Ok(Self { days })
    }
}

impl From<WorkSchedule> for Vec<DayInterval> {
    fn from(schedule: WorkSchedule) -> Self {
        schedule.days
    }
}

impl WorkSchedule {
    /// Creates a schedule of `count` empty days.
    pub fn with_days(count: usize) -> Self {
        Self {
            days: vec![DayInterval::default(); count],
        }
    }

    /// Creates a schedule from already entered days.
    pub fn from_days(days: Vec<DayInterval>) -> Self {
        Self { days }
    }

    /// Returns the days in order.
    pub fn days(&self) -> &[DayInterval] {
        &self.days
    }

    /// Number of days in the schedule.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns true if the schedule has no days.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns a copy with one field of one day replaced by `raw`.
    ///
    /// Every other day is left untouched. An `index` past the end of the
    /// schedule changes nothing.
    pub fn with_day_time(&self, index: usize, field: TimeField, raw: impl Into<String>) -> Self {
        let mut schedule = self.clone();
        match schedule.days.get_mut(index) {
            Some(day) => day.set(field, raw.into()),
            None => warn!(
                index,
                day_count = self.days.len(),
                "Ignoring time edit for a day outside the schedule"
            ),
        }
        schedule
    }
}
