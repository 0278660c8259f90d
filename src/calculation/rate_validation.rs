//! Rate validation.
//!
//! A rate edit either replaces one field of the [`RateTable`] or surfaces a
//! [`ValidationFailure::RateOutOfRange`]; never both.

use tracing::debug;

use crate::error::ValidationFailure;
use crate::models::{RateField, RateTable, RawInput};

/// Lowest accepted rate.
pub const MIN_RATE: i64 = 0;

/// Highest accepted rate.
pub const MAX_RATE: i64 = 3000;

/// Validates a raw rate value for `field`.
///
/// Input that does not parse as an integer is accepted as `0`, so clearing
/// a field resets it to zero rather than failing. An integer outside
/// `[MIN_RATE, MAX_RATE]` fails.
///
/// # Example
///
/// ```
/// use wage_calculator::calculation::validate_rate;
/// use wage_calculator::models::{RateField, RawInput};
///
/// assert_eq!(validate_rate(RateField::Regular, &RawInput::from("1000")), Ok(1000));
/// assert_eq!(validate_rate(RateField::Regular, &RawInput::from("")), Ok(0));
/// assert!(validate_rate(RateField::Regular, &RawInput::from("3001")).is_err());
/// ```
pub fn validate_rate(field: RateField, raw: &RawInput) -> Result<u32, ValidationFailure> {
    let Some(value) = raw.parse_int() else {
        debug!(%field, raw = %raw, "Non-numeric rate defaults to zero");
        return Ok(0);
    };

    if !(MIN_RATE..=MAX_RATE).contains(&value) {
        return Err(ValidationFailure::RateOutOfRange { field });
    }

    u32::try_from(value).map_err(|_| ValidationFailure::RateOutOfRange { field })
}

/// Applies a raw rate edit to `rates`.
///
/// Returns the updated table, or the failure with `rates` left as it was.
///
/// # Example
///
/// ```
/// use wage_calculator::calculation::set_rate;
/// use wage_calculator::models::{RateField, RateTable, RawInput};
///
/// let rates = set_rate(&RateTable::default(), RateField::Midnight, &RawInput::from(1500_i64))?;
/// assert_eq!(rates.midnight, Some(1500));
/// # Ok::<(), wage_calculator::error::ValidationFailure>(())
/// ```
pub fn set_rate(
    rates: &RateTable,
    field: RateField,
    raw: &RawInput,
) -> Result<RateTable, ValidationFailure> {
    let value = validate_rate(field, raw)?;
    Ok(rates.with_rate(field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_bounds() {
        assert_eq!(validate_rate(RateField::Regular, &RawInput::from(0_i64)), Ok(0));
        assert_eq!(
            validate_rate(RateField::Regular, &RawInput::from(3000_i64)),
            Ok(3000)
        );
    }

    #[test]
    fn test_rejects_just_outside_bounds() {
        assert_eq!(
            validate_rate(RateField::Nighttime, &RawInput::from(-1_i64)),
            Err(ValidationFailure::RateOutOfRange {
                field: RateField::Nighttime
            })
        );
        assert_eq!(
            validate_rate(RateField::Midnight, &RawInput::from("3001")),
            Err(ValidationFailure::RateOutOfRange {
                field: RateField::Midnight
            })
        );
    }

    #[test]
    fn test_non_numeric_defaults_to_zero() {
        assert_eq!(validate_rate(RateField::Regular, &RawInput::from("")), Ok(0));
        assert_eq!(validate_rate(RateField::Regular, &RawInput::from("abc")), Ok(0));
        assert_eq!(validate_rate(RateField::Regular, &RawInput::from("-")), Ok(0));
    }

    #[test]
    fn test_leading_integer_is_used() {
        assert_eq!(
            validate_rate(RateField::Regular, &RawInput::from("1200yen")),
            Ok(1200)
        );
        assert_eq!(
            validate_rate(RateField::Regular, &RawInput::from(999.9)),
            Ok(999)
        );
    }

    #[test]
    fn test_huge_value_is_out_of_range() {
        assert!(
            validate_rate(
                RateField::Regular,
                &RawInput::from("100000000000000000000000")
            )
            .is_err()
        );
    }

    #[test]
    fn test_set_rate_updates_only_target_field() {
        let rates = RateTable::new(1000, 1200, 1500);
        let updated = set_rate(&rates, RateField::Nighttime, &RawInput::from("1300")).unwrap();
        assert_eq!(updated, RateTable::new(1000, 1300, 1500));
    }

    #[test]
    fn test_set_rate_failure_does_not_touch_table() {
        let rates = RateTable::new(1000, 1200, 1500);
        let result = set_rate(&rates, RateField::Regular, &RawInput::from("5000"));
        assert!(result.is_err());
        assert_eq!(rates, RateTable::new(1000, 1200, 1500));
    }

    #[test]
    fn test_set_rate_blank_fills_zero() {
        let updated = set_rate(&RateTable::default(), RateField::Regular, &RawInput::default())
            .unwrap();
        assert_eq!(updated.regular, Some(0));
        assert_eq!(updated.nighttime, None);
    }
}
