//! Earnings calculation.
//!
//! This module sums per-hour rates over every day of a [`WorkSchedule`].
//! Each hour is paid at the rate of the [`TimeBand`] it falls into.

use tracing::debug;

use crate::models::{HourRange, RateTable, WageResult, WorkSchedule};

use super::interval_validation::validate_interval;
use super::time_band::TimeBand;

/// Sums the rates for every hour of a single day.
///
/// Returns `None` when an hour falls into a band whose rate is blank; the
/// day's total is then "not a number".
///
/// # Example
///
/// ```
/// use wage_calculator::calculation::{calculate_day_earnings, validate_interval};
/// use wage_calculator::models::{DayInterval, RateTable};
///
/// let rates = RateTable::new(1000, 1200, 500);
/// let range = validate_interval(0, &DayInterval::new("8", "10")).unwrap();
/// assert_eq!(calculate_day_earnings(range, &rates), Some(1500));
/// ```
pub fn calculate_day_earnings(range: HourRange, rates: &RateTable) -> Option<u64> {
    range
        .hours()
        .map(|hour| rates.get(TimeBand::for_hour(hour).rate_field()))
        .try_fold(0u64, |total, rate| Some(total + u64::from(rate?)))
}

/// Calculates the total wage for a schedule.
///
/// Days are processed in order. The first day with invalid hours aborts the
/// calculation and its failure is returned; no partial total is kept.
///
/// If every day is valid but some counted hour had a blank rate, the total
/// is reported as `0` rather than as a failure. An empty schedule totals `0`.
///
/// # Example
///
/// ```
/// use wage_calculator::calculation::calculate_earnings;
/// use wage_calculator::models::{DayInterval, RateTable, WageResult, WorkSchedule};
///
/// let rates = RateTable::new(1000, 1200, 1500);
/// let schedule = WorkSchedule::from_days(vec![DayInterval::new("9", "17")]);
///
/// assert_eq!(calculate_earnings(&rates, &schedule), WageResult::Total { total: 8000 });
/// ```
pub fn calculate_earnings(rates: &RateTable, schedule: &WorkSchedule) -> WageResult {
    let mut total: Option<u64> = Some(0);

    for (day, interval) in schedule.days().iter().enumerate() {
        let range = match validate_interval(day, interval) {
            Ok(range) => range,
            Err(failure) => {
                debug!(day, error = %failure, "Rejected day interval");
                return failure.into();
            }
        };

        let day_total = calculate_day_earnings(range, rates);
        debug!(
            day,
            start_hour = range.start(),
            end_hour = range.end(),
            day_total = ?day_total,
            "Calculated day earnings"
        );
        total = total.zip(day_total).map(|(sum, day_total)| sum + day_total);
    }

    WageResult::Total {
        total: total.unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationFailure;
    use crate::models::DayInterval;

    fn schedule(days: &[(&str, &str)]) -> WorkSchedule {
        WorkSchedule::from_days(
            days.iter()
                .map(|(start, end)| DayInterval::new(*start, *end))
                .collect(),
        )
    }

    fn range(start: &str, end: &str) -> HourRange {
        validate_interval(0, &DayInterval::new(start, end)).unwrap()
    }

    #[test]
    fn test_regular_day() {
        let rates = RateTable::new(1000, 0, 0);
        assert_eq!(calculate_day_earnings(range("9", "17"), &rates), Some(8000));
    }

    #[test]
    fn test_day_crossing_midnight_and_regular_bands() {
        let rates = RateTable::new(1000, 0, 500);
        assert_eq!(calculate_day_earnings(range("8", "10"), &rates), Some(1500));
    }

    #[test]
    fn test_day_crossing_all_bands() {
        // 0..9 midnight (9h), 9..17 regular (8h), 17..22 nighttime (5h), 22 midnight (1h)
        let rates = RateTable::new(1000, 1200, 1500);
        let expected = 9 * 1500 + 8 * 1000 + 5 * 1200 + 1500;
        assert_eq!(calculate_day_earnings(range("0", "23"), &rates), Some(expected));
    }

    #[test]
    fn test_latest_start_counts_one_midnight_hour() {
        let rates = RateTable::new(1000, 1200, 1500);
        assert_eq!(calculate_day_earnings(range("22", "23"), &rates), Some(1500));
    }

    #[test]
    fn test_blank_rate_only_matters_when_its_band_is_worked() {
        let rates = RateTable::default().with_rate(crate::models::RateField::Regular, 1000);
        assert_eq!(calculate_day_earnings(range("9", "17"), &rates), Some(8000));
        assert_eq!(calculate_day_earnings(range("8", "10"), &rates), None);
    }

    #[test]
    fn test_total_over_several_days() {
        let rates = RateTable::new(1000, 1200, 1500);
        let result = calculate_earnings(&rates, &schedule(&[("9", "17"), ("17", "22")]));
        assert_eq!(result, WageResult::Total { total: 8000 + 6000 });
    }

    #[test]
    fn test_first_invalid_day_short_circuits() {
        let rates = RateTable::new(1000, 1200, 1500);
        let result = calculate_earnings(
            &rates,
            &schedule(&[("9", "17"), ("10", "10"), ("", "")]),
        );
        assert_eq!(
            result,
            WageResult::Failure {
                failure: ValidationFailure::InvalidInterval { day: 1 }
            }
        );
    }

    #[test]
    fn test_blank_rates_total_zero() {
        let result = calculate_earnings(&RateTable::default(), &schedule(&[("9", "17")]));
        assert_eq!(result, WageResult::Total { total: 0 });
    }

    #[test]
    fn test_blank_rate_on_one_day_zeroes_whole_total() {
        let rates = RateTable::default().with_rate(crate::models::RateField::Regular, 1000);
        let result = calculate_earnings(&rates, &schedule(&[("9", "17"), ("20", "21")]));
        assert_eq!(result, WageResult::Total { total: 0 });
    }

    #[test]
    fn test_blank_rates_still_validate_intervals() {
        let result = calculate_earnings(&RateTable::default(), &schedule(&[("23", "23")]));
        assert!(result.failure().is_some());
    }

    #[test]
    fn test_empty_schedule_totals_zero() {
        let rates = RateTable::new(1000, 1200, 1500);
        let result = calculate_earnings(&rates, &WorkSchedule::default());
        assert_eq!(result, WageResult::Total { total: 0 });
    }

    #[test]
    fn test_calculation_is_repeatable() {
        let rates = RateTable::new(1000, 1200, 1500);
        let days = schedule(&[("8", "20")]);
        assert_eq!(calculate_earnings(&rates, &days), calculate_earnings(&rates, &days));
    }
}
