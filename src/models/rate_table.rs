//! Rate table model.
//!
//! This module defines the three per-hour wage rates and the [`RateField`]
//! selector used to edit them one at a time.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculation::MAX_RATE;
use crate::error::ValidationFailure;

/// Selects one of the three rates in a [`RateTable`].
///
/// # Example
///
/// ```
/// use wage_calculator::models::RateField;
///
/// assert_eq!(RateField::Nighttime.to_string(), "nighttime");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateField {
    /// The rate for hours in `[9, 17)`.
    Regular,
    /// The rate for hours in `[17, 22)`.
    Nighttime,
    /// The rate for hours in `[22, 24)` and `[0, 9)`.
    Midnight,
}

impl RateField {
    /// All rate fields, in display order.
    pub const ALL: [RateField; 3] = [RateField::Regular, RateField::Nighttime, RateField::Midnight];

    /// Returns the field name as it appears in user-facing messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            RateField::Regular => "regular",
            RateField::Nighttime => "nighttime",
            RateField::Midnight => "midnight",
        }
    }
}

impl fmt::Display for RateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The per-hour wage rates for each time band.
///
/// A field is `None` while it is blank, i.e. before any value has been
/// accepted for it. Hours that fall in a band with a blank rate make the
/// total "not a number", which is reported as a total of 0.
///
/// Deserializing rejects any rate above `MAX_RATE`.
///
/// # Example
///
/// ```
/// use wage_calculator::models::{RateField, RateTable};
///
/// let rates = RateTable::new(1000, 1200, 1500);
/// assert_eq!(rates.get(RateField::Nighttime), Some(1200));
/// assert_eq!(RateTable::default().get(RateField::Regular), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RateTableFields")]
pub struct RateTable {
    /// Rate for the regular band.
    pub regular: Option<u32>,
    /// Rate for the nighttime band.
    pub nighttime: Option<u32>,
    /// Rate for the midnight band.
    pub midnight: Option<u32>,
}

/// Unchecked wire form of a [`RateTable`].
#[derive(Deserialize)]
struct RateTableFields {
    #[serde(default)]
    regular: Option<u32>,
    #[serde(default)]
    nighttime: Option<u32>,
    #[serde(default)]
    midnight: Option<u32>,
}

impl TryFrom<RateTableFields> for RateTable {
    type Error = ValidationFailure;

    fn try_from(fields: RateTableFields) -> Result<Self, Self::Error> {
        let rates = RateTable {
            regular: fields.regular,
            nighttime: fields.nighttime,
            midnight: fields.midnight,
        };

        match RateField::ALL
            .into_iter()
            .find(|field| rates.get(*field).is_some_and(|rate| i64::from(rate) > MAX_RATE))
        {
            Some(field) => Err(ValidationFailure::RateOutOfRange { field }),
            None => Ok(rates),
        }
    }
}

impl RateTable {
    /// Creates a rate table with all three rates filled in.
    pub fn new(regular: u32, nighttime: u32, midnight: u32) -> Self {
        Self {
            regular: Some(regular),
            nighttime: Some(nighttime),
            midnight: Some(midnight),
        }
    }

    /// Returns the rate stored for `field`, or `None` if it is blank.
    pub fn get(&self, field: RateField) -> Option<u32> {
        match field {
            RateField::Regular => self.regular,
            RateField::Nighttime => self.nighttime,
            RateField::Midnight => self.midnight,
        }
    }

    /// Returns a copy of this table with `field` set to `value`.
    pub fn with_rate(&self, field: RateField, value: u32) -> Self {
        let mut rates = *self;
        match field {
            RateField::Regular => rates.regular = Some(value),
            RateField::Nighttime => rates.nighttime = Some(value),
            RateField::Midnight => rates.midnight = Some(value),
        }
        rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_blank() {
        let rates = RateTable::default();
        for field in RateField::ALL {
            assert_eq!(rates.get(field), None);
        }
    }

    #[test]
    fn test_with_rate_replaces_only_one_field() {
        let rates = RateTable::new(1000, 1200, 1500).with_rate(RateField::Midnight, 0);
        assert_eq!(rates.regular, Some(1000));
        assert_eq!(rates.nighttime, Some(1200));
        assert_eq!(rates.midnight, Some(0));
    }

    #[test]
    fn test_with_rate_leaves_original_untouched() {
        let original = RateTable::default();
        let updated = original.with_rate(RateField::Regular, 900);
        assert_eq!(original.regular, None);
        assert_eq!(updated.regular, Some(900));
        assert_eq!(updated.nighttime, None);
    }

    #[test]
    fn test_rate_field_serde_names() {
        let json = serde_json::to_string(&RateField::Nighttime).unwrap();
        assert_eq!(json, "\"nighttime\"");
        let field: RateField = serde_json::from_str("\"midnight\"").unwrap();
        assert_eq!(field, RateField::Midnight);
    }

    #[test]
    fn test_rate_table_deserializes_missing_fields_as_blank() {
        let rates: RateTable = serde_json::from_str(r#"{"regular": 1000}"#).unwrap();
        assert_eq!(rates.regular, Some(1000));
        assert_eq!(rates.nighttime, None);
        assert_eq!(rates.midnight, None);
    }

    #[test]
    fn test_rate_table_deserializes_bounds() {
        let rates: RateTable =
            serde_json::from_str(r#"{"regular": 0, "nighttime": 3000, "midnight": null}"#).unwrap();
        assert_eq!(rates.regular, Some(0));
        assert_eq!(rates.nighttime, Some(3000));
        assert_eq!(rates.midnight, None);
    }

    #[test]
    fn test_rate_table_rejects_rate_above_maximum() {
        let result: Result<RateTable, _> =
            serde_json::from_str(r#"{"regular": 1000, "nighttime": 4000000000}"#);
        let error = result.unwrap_err().to_string();
        assert!(
            error.contains("Invalid value for nighttime. It must be between 0 and 3000."),
            "unexpected error: {}",
            error
        );

        let result: Result<RateTable, _> = serde_json::from_str(r#"{"midnight": 3001}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rate_table_rejects_negative_rate() {
        let result: Result<RateTable, _> = serde_json::from_str(r#"{"regular": -1}"#);
        assert!(result.is_err());
    }
}
