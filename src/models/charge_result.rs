//! Charge result models.
//!
//! This module contains the [`ChargeResult`] record returned by a detailed
//! calculation and the [`ChargeBreakdown`] of a short stay into its
//! arrival-day, full-day and departure-day components.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ChargeType;

/// The three components of a short stay charge.
///
/// Costs are unrounded minor currency units. The charged total is the floor
/// of their sum, which is computed from the minute counts to stay exact.
///
/// # Example
///
/// ```
/// use parking_calculator::models::ChargeBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = ChargeBreakdown {
///     arrival_day_minutes: 420,
///     arrival_day_cost: Decimal::new(770, 0),
///     full_weekdays: 0,
///     full_days_minutes: 0,
///     full_days_cost: Decimal::ZERO,
///     departure_day_minutes: 0,
///     departure_day_cost: Decimal::ZERO,
/// };
/// assert_eq!(breakdown.total_minutes(), 420);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    /// Billable minutes on the arrival day.
    pub arrival_day_minutes: i64,
    /// Cost of the arrival day.
    pub arrival_day_cost: Decimal,
    /// Number of weekdays strictly between the arrival and departure days.
    pub full_weekdays: i64,
    /// Billable minutes across those full weekdays.
    pub full_days_minutes: i64,
    /// Cost of the full weekdays.
    pub full_days_cost: Decimal,
    /// Billable minutes on the departure day.
    pub departure_day_minutes: i64,
    /// Cost of the departure day.
    pub departure_day_cost: Decimal,
}

impl ChargeBreakdown {
    /// Total billable minutes across all three components.
    pub fn total_minutes(&self) -> i64 {
        self.arrival_day_minutes + self.full_days_minutes + self.departure_day_minutes
    }

    /// Unrounded sum of the three component costs.
    pub fn total_cost(&self) -> Decimal {
        self.arrival_day_cost + self.full_days_cost + self.departure_day_cost
    }
}

/// The complete result of pricing one stay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the calculator that produced this result.
    pub engine_version: String,
    /// The tariff the stay was priced under.
    pub charge_type: ChargeType,
    /// The arrival time.
    pub arrival: NaiveDateTime,
    /// The departure time.
    pub departure: NaiveDateTime,
    /// The charge in minor currency units (pence).
    pub charge: i64,
    /// Chargeable calendar days, present for long stays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chargeable_days: Option<i64>,
    /// Component breakdown, present for short stays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ChargeBreakdown>,
}
