//! Time band detection.
//!
//! Every hour of the day belongs to exactly one of three fixed bands, each
//! paid at its own rate from the [`RateTable`](crate::models::RateTable).

use serde::{Deserialize, Serialize};

use crate::models::RateField;

/// First hour of the regular band.
pub const REGULAR_START_HOUR: u8 = 9;

/// First hour of the nighttime band; the regular band ends here.
pub const NIGHTTIME_START_HOUR: u8 = 17;

/// First hour of the late midnight band; the nighttime band ends here.
pub const MIDNIGHT_START_HOUR: u8 = 22;

/// The band an hour falls into.
///
/// | Band      | Hours                 |
/// |-----------|-----------------------|
/// | Regular   | `[9, 17)`             |
/// | Nighttime | `[17, 22)`            |
/// | Midnight  | `[22, 24)` and `[0, 9)` |
///
/// # Example
///
/// ```
/// use wage_calculator::calculation::TimeBand;
///
/// assert_eq!(TimeBand::for_hour(8), TimeBand::Midnight);
/// assert_eq!(TimeBand::for_hour(9), TimeBand::Regular);
/// assert_eq!(TimeBand::for_hour(17), TimeBand::Nighttime);
/// assert_eq!(TimeBand::for_hour(22), TimeBand::Midnight);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBand {
    /// Daytime hours.
    Regular,
    /// Evening hours.
    Nighttime,
    /// Late night and early morning hours.
    Midnight,
}

impl TimeBand {
    /// Returns the band containing `hour`.
    ///
    /// Hours outside `0..24` are never produced by a validated range; they
    /// fall through to the midnight band.
    pub fn for_hour(hour: u8) -> TimeBand {
        match hour {
            h if (REGULAR_START_HOUR..NIGHTTIME_START_HOUR).contains(&h) => TimeBand::Regular,
            h if (NIGHTTIME_START_HOUR..MIDNIGHT_START_HOUR).contains(&h) => TimeBand::Nighttime,
            _ => TimeBand::Midnight,
        }
    }

    /// Returns the rate field this band is paid from.
    pub fn rate_field(&self) -> RateField {
        match self {
            TimeBand::Regular => RateField::Regular,
            TimeBand::Nighttime => RateField::Nighttime,
            TimeBand::Midnight => RateField::Midnight,
        }
    }
}
