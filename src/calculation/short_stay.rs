//! Short stay pricing.
//!
//! A short stay is billed per minute, but only inside the daily opening
//! window and only on weekdays. The stay is split into three parts:
//!
//! - the arrival day, from arrival (or opening) to closing, or to the
//!   departure if the car leaves the same day
//! - every full weekday strictly between the arrival and departure days
//! - the departure day, from opening to departure (or closing)
//!
//! Each part is counted in billable minutes. Costs are derived from the
//! minutes so the floored total is computed in exact integer arithmetic.

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;

use crate::config::TariffConfig;
use crate::error::{CalculatorError, CalculatorResult};
use crate::models::ChargeBreakdown;

use super::{elapsed_days, is_weekend, time_of_day};

/// Billable minutes on the arrival day.
///
/// Zero when the arrival is on a weekend, at or after closing, or when the
/// car arrives and leaves again before opening on the same day.
pub fn arrival_day_minutes(
    arrival: NaiveDateTime,
    departure: NaiveDateTime,
    config: &TariffConfig,
) -> i64 {
    if is_weekend(arrival) {
        return 0;
    }

    let arrival_time = time_of_day(arrival);
    if arrival_time >= config.closing_time() {
        return 0;
    }

    let end = if elapsed_days(arrival, departure) == 0 {
        let departure_time = time_of_day(departure);
        if departure_time < config.opening_time() {
            return 0;
        }
        departure_time.min(config.closing_time())
    } else {
        config.closing_time()
    };

    let start = arrival_time.max(config.opening_time());
    start.minutes_until(end).max(0)
}

/// Cost of the arrival day, unrounded.
///
/// # Example
///
/// ```
/// use parking_calculator::calculation::arrival_day_cost;
/// use parking_calculator::config::TariffConfig;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// // Monday 16:00 until Tuesday: billed 16:00 to 18:00
/// let arrival = NaiveDateTime::parse_from_str("2020-12-07 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let departure = NaiveDateTime::parse_from_str("2020-12-08 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let cost = arrival_day_cost(arrival, departure, &TariffConfig::default());
/// assert_eq!(cost, Decimal::new(220, 0));
/// ```
pub fn arrival_day_cost(
    arrival: NaiveDateTime,
    departure: NaiveDateTime,
    config: &TariffConfig,
) -> Decimal {
    config.minutes_cost(arrival_day_minutes(arrival, departure, config))
}

/// Billable minutes on the departure day.
///
/// Zero for same-day stays, which the arrival day already covers, and for
/// departures on a weekend or before opening.
pub fn departure_day_minutes(
    arrival: NaiveDateTime,
    departure: NaiveDateTime,
    config: &TariffConfig,
) -> i64 {
    if elapsed_days(arrival, departure) == 0 {
        return 0;
    }

    if is_weekend(departure) {
        return 0;
    }

    let departure_time = time_of_day(departure);
    if departure_time < config.opening_time() {
        return 0;
    }

    let end = departure_time.min(config.closing_time());
    config.opening_time().minutes_until(end)
}

/// Cost of the departure day, unrounded.
pub fn departure_day_cost(
    arrival: NaiveDateTime,
    departure: NaiveDateTime,
    config: &TariffConfig,
) -> Decimal {
    config.minutes_cost(departure_day_minutes(arrival, departure, config))
}

/// Counts the weekdays strictly between the arrival and departure dates.
///
/// Whole weeks contribute five weekdays each. The remaining days are walked
/// from the weekday after the arrival date, so the count takes constant time
/// however far apart the dates are.
pub fn full_weekdays(arrival: NaiveDateTime, departure: NaiveDateTime) -> i64 {
    let days = (elapsed_days(arrival, departure) - 1).max(0);
    // 0 = Monday
    let first = (i64::from(arrival.date().weekday().num_days_from_monday()) + 1) % 7;

    let remainder = (0..days % 7)
        .filter(|offset| (first + offset) % 7 < 5)
        .count() as i64;
    5 * (days / 7) + remainder
}

/// Cost of the full weekdays between arrival and departure, unrounded.
pub fn full_days_cost(
    arrival: NaiveDateTime,
    departure: NaiveDateTime,
    config: &TariffConfig,
) -> Decimal {
    Decimal::from(full_weekdays(arrival, departure)) * config.short_stay_cost_per_day()
}

/// Splits a short stay into its three priced components.
pub fn short_stay_breakdown(
    arrival: NaiveDateTime,
    departure: NaiveDateTime,
    config: &TariffConfig,
) -> ChargeBreakdown {
    let arrival_day_minutes = arrival_day_minutes(arrival, departure, config);
    let departure_day_minutes = departure_day_minutes(arrival, departure, config);
    let full_weekdays = full_weekdays(arrival, departure);

    ChargeBreakdown {
        arrival_day_minutes,
        arrival_day_cost: config.minutes_cost(arrival_day_minutes),
        full_weekdays,
        full_days_minutes: full_weekdays * config.opening_minutes(),
        full_days_cost: Decimal::from(full_weekdays) * config.short_stay_cost_per_day(),
        departure_day_minutes,
        departure_day_cost: config.minutes_cost(departure_day_minutes),
    }
}

/// Short stay charge in minor currency units, rounded down.
///
/// # Errors
///
/// Returns [`CalculatorError::ChargeOverflow`] when the charge does not fit
/// in an `i64`.
///
/// # Example
///
/// ```
/// use parking_calculator::calculation::short_stay_cost;
/// use parking_calculator::config::TariffConfig;
/// use chrono::NaiveDateTime;
///
/// // Thursday 16:50 to Saturday 20:15
/// let arrival = NaiveDateTime::parse_from_str("2017-09-07 16:50:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let departure = NaiveDateTime::parse_from_str("2017-09-09 20:15:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(short_stay_cost(arrival, departure, &TariffConfig::default())?, 1228);
/// # Ok::<(), parking_calculator::error::CalculatorError>(())
/// ```
pub fn short_stay_cost(
    arrival: NaiveDateTime,
    departure: NaiveDateTime,
    config: &TariffConfig,
) -> CalculatorResult<i64> {
    let breakdown = short_stay_breakdown(arrival, departure, config);
    floored_minutes_charge(breakdown.total_minutes(), config)
}

/// `floor(minutes * cost_per_hour / 60)` for a non-negative minute count.
///
/// The product is taken in `i128`, which holds any minute count times any
/// `u32` rate.
pub(crate) fn floored_minutes_charge(
    minutes: i64,
    config: &TariffConfig,
) -> CalculatorResult<i64> {
    let pence = i128::from(minutes) * i128::from(config.short_stay_cost_per_hour()) / 60;
    i64::try_from(pence).map_err(|_| CalculatorError::ChargeOverflow {
        minutes,
        cost_per_hour: config.short_stay_cost_per_hour(),
    })
}
