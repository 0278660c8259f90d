//! Request types for the wage calculator API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/edit` endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{RateField, RawInput, TimeField};
use crate::state::{CalculatorState, Edit};

/// Request body for the `/calculate` endpoint.
///
/// Carries everything a form would collect, so the whole calculation runs in
/// one round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The three rates. Omitted rates stay blank.
    #[serde(default)]
    pub rates: RatesRequest,
    /// One entry per workday, in order.
    pub days: Vec<DayRequest>,
}

/// Rate values in a calculation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatesRequest {
    /// Raw regular rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular: Option<RawInput>,
    /// Raw nighttime rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nighttime: Option<RawInput>,
    /// Raw midnight rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midnight: Option<RawInput>,
}

/// One workday in a calculation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayRequest {
    /// Raw clock-in hour.
    #[serde(default)]
    pub start_hour: RawInput,
    /// Raw clock-out hour.
    #[serde(default)]
    pub end_hour: RawInput,
}

impl CalculationRequest {
    /// Expands the request into the edits a user would make, in order:
    /// rates, day count, each day's hours, then the calculation itself.
    pub fn into_edits(self) -> Vec<Edit> {
        let RatesRequest {
            regular,
            nighttime,
            midnight,
        } = self.rates;

        let rate_edits = [
            (RateField::Regular, regular),
            (RateField::Nighttime, nighttime),
            (RateField::Midnight, midnight),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| Edit::SetRate { field, value }));

        let day_count = Edit::SetDayCount {
            value: RawInput::Integer(self.days.len() as i64),
        };

        let time_edits = self.days.into_iter().enumerate().flat_map(|(index, day)| {
            [
                Edit::SetDayTime {
                    index,
                    field: TimeField::StartHour,
                    value: day.start_hour,
                },
                Edit::SetDayTime {
                    index,
                    field: TimeField::EndHour,
                    value: day.end_hour,
                },
            ]
        });

        rate_edits
            .chain(std::iter::once(day_count))
            .chain(time_edits)
            .chain(std::iter::once(Edit::Calculate))
            .collect()
    }
}

/// Request body for the `/edit` endpoint.
///
/// The caller sends its current state and one edit; the server returns the
/// next state. No state is kept between requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditRequest {
    /// The caller's current state. Defaults to a fresh calculator.
    #[serde(default)]
    pub state: CalculatorState,
    /// The edit to apply.
    pub edit: Edit,
}
