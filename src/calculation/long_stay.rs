//! Long stay pricing.
//!
//! Long stays are billed a flat rate per calendar day touched by the stay.
//! Opening hours and weekends play no part.

use chrono::NaiveDateTime;

use crate::config::TariffConfig;

use super::elapsed_days;

/// Number of calendar days billed for a stay.
///
/// The arrival day is always billed, so this is `elapsed_days + 1` and never
/// less than one. Monday 09:00 to Tuesday 09:00 is two chargeable days.
///
/// # Example
///
/// ```
/// use parking_calculator::calculation::chargeable_days;
/// use chrono::NaiveDateTime;
///
/// let arrival = NaiveDateTime::parse_from_str("2020-12-07 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let departure = NaiveDateTime::parse_from_str("2020-12-08 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(chargeable_days(arrival, departure), 2);
/// ```
pub fn chargeable_days(arrival: NaiveDateTime, departure: NaiveDateTime) -> i64 {
    elapsed_days(arrival, departure) + 1
}

/// Long stay charge in minor currency units.
pub fn long_stay_cost(
    arrival: NaiveDateTime,
    departure: NaiveDateTime,
    config: &TariffConfig,
) -> i64 {
    chargeable_days(arrival, departure) * i64::from(config.long_stay_cost_per_day())
}
