//! Interval validation.
//!
//! Day hours are stored unvalidated and checked here, at calculation time.

use crate::error::ValidationFailure;
use crate::models::{DayInterval, HourRange, parse_leading_int};

/// A start hour must be strictly below this.
pub const START_HOUR_LIMIT: i64 = 23;

/// Latest accepted end hour.
pub const LATEST_END_HOUR: i64 = 23;

/// Validates one day's raw hours.
///
/// Fails with [`ValidationFailure::InvalidInterval`] if either hour does not
/// parse, if `start < 0`, if `start >= 23`, if `end <= start` or if
/// `end > 23`. An end hour of 23 is accepted even though a start hour of 23
/// is not.
///
/// # Example
///
/// ```
/// use wage_calculator::calculation::validate_interval;
/// use wage_calculator::models::DayInterval;
///
/// let range = validate_interval(0, &DayInterval::new("22", "23")).unwrap();
/// assert_eq!(range.hours().len(), 1);
/// assert!(validate_interval(0, &DayInterval::new("10", "10")).is_err());
/// ```
pub fn validate_interval(day: usize, interval: &DayInterval) -> Result<HourRange, ValidationFailure> {
    let invalid = || ValidationFailure::InvalidInterval { day };

    let start = parse_leading_int(&interval.start_hour).ok_or_else(invalid)?;
    let end = parse_leading_int(&interval.end_hour).ok_or_else(invalid)?;

    if !(0..START_HOUR_LIMIT).contains(&start) || end <= start || end > LATEST_END_HOUR {
        return Err(invalid());
    }

    let start = u8::try_from(start).map_err(|_| invalid())?;
    let end = u8::try_from(end).map_err(|_| invalid())?;
    Ok(HourRange::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(start: &str, end: &str) -> Result<HourRange, ValidationFailure> {
        validate_interval(0, &DayInterval::new(start, end))
    }

    #[test]
    fn test_accepts_full_range() {
        let range = check("0", "23").unwrap();
        assert_eq!((range.start(), range.end()), (0, 23));
    }

    #[test]
    fn test_accepts_latest_start() {
        let range = check("22", "23").unwrap();
        assert_eq!((range.start(), range.end()), (22, 23));
    }

    #[test]
    fn test_rejects_start_of_23() {
        assert!(check("23", "24").is_err());
        assert!(check("23", "23").is_err());
    }

    #[test]
    fn test_rejects_end_past_23() {
        assert!(check("20", "24").is_err());
    }

    #[test]
    fn test_rejects_negative_start() {
        assert!(check("-1", "5").is_err());
    }

    #[test]
    fn test_rejects_empty_and_reversed_ranges() {
        assert!(check("10", "10").is_err());
        assert!(check("12", "9").is_err());
    }

    #[test]
    fn test_rejects_unparseable_hours() {
        assert!(check("", "17").is_err());
        assert!(check("9", "").is_err());
        assert!(check("nine", "five").is_err());
    }

    #[test]
    fn test_failure_records_day_index() {
        let result = validate_interval(3, &DayInterval::new("", ""));
        assert_eq!(result, Err(ValidationFailure::InvalidInterval { day: 3 }));
    }

    #[test]
    fn test_leading_integer_hours() {
        let range = check("9am", "17.5").unwrap();
        assert_eq!((range.start(), range.end()), (9, 17));
    }
}
