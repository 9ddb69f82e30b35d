//! The charge calculator entry points.

use chrono::{NaiveDateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::config::TariffConfig;
use crate::error::CalculatorResult;
use crate::models::{ChargeResult, ChargeType, StayInterval};

use super::long_stay::{chargeable_days, long_stay_cost};
use super::short_stay::{floored_minutes_charge, short_stay_breakdown, short_stay_cost};

/// Calculates the parking charge for a stay, in minor currency units.
///
/// # Errors
///
/// Returns [`CalculatorError::InvalidInterval`](crate::error::CalculatorError::InvalidInterval)
/// when `departure` is before `arrival`. Equal timestamps are a valid,
/// zero-length stay. Returns
/// [`CalculatorError::ChargeOverflow`](crate::error::CalculatorError::ChargeOverflow)
/// when a short stay charge does not fit in an `i64`.
///
/// # Example
///
/// ```
/// use parking_calculator::calculation::calculate_charge;
/// use parking_calculator::config::TariffConfig;
/// use parking_calculator::models::ChargeType;
/// use chrono::NaiveDateTime;
///
/// let tariff = TariffConfig::default();
/// let arrival = NaiveDateTime::parse_from_str("2017-09-07 07:50:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let departure = NaiveDateTime::parse_from_str("2017-09-09 05:20:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let charge = calculate_charge(arrival, departure, ChargeType::Long, &tariff)?;
/// assert_eq!(charge, 2250);
/// # Ok::<(), parking_calculator::error::CalculatorError>(())
/// ```
pub fn calculate_charge(
    arrival: NaiveDateTime,
    departure: NaiveDateTime,
    charge_type: ChargeType,
    config: &TariffConfig,
) -> CalculatorResult<i64> {
    let stay = StayInterval::new(arrival, departure)?;

    let charge = match charge_type {
        ChargeType::Long => long_stay_cost(stay.arrival(), stay.departure(), config),
        ChargeType::Short => short_stay_cost(stay.arrival(), stay.departure(), config)?,
    };
    Ok(charge)
}

/// Calculates the charge together with the details behind it.
///
/// Long stays report their chargeable days and short stays their component
/// breakdown. The charge always equals [`calculate_charge`] for the same
/// inputs.
pub fn calculate_charge_detailed(
    arrival: NaiveDateTime,
    departure: NaiveDateTime,
    charge_type: ChargeType,
    config: &TariffConfig,
) -> CalculatorResult<ChargeResult> {
    let stay = StayInterval::new(arrival, departure)?;

    let (charge, chargeable_days, breakdown) = match charge_type {
        ChargeType::Long => {
            let days = chargeable_days(stay.arrival(), stay.departure());
            let charge = long_stay_cost(stay.arrival(), stay.departure(), config);
            (charge, Some(days), None)
        }
        ChargeType::Short => {
            let breakdown = short_stay_breakdown(stay.arrival(), stay.departure(), config);
            let charge = floored_minutes_charge(breakdown.total_minutes(), config)?;
            (charge, None, Some(breakdown))
        }
    };

    debug!(
        charge_type = %charge_type,
        arrival = %arrival,
        departure = %departure,
        charge,
        "Charge calculated"
    );

    Ok(ChargeResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        charge_type,
        arrival,
        departure,
        charge,
        chargeable_days,
        breakdown,
    })
}
