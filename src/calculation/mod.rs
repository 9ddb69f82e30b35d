//! Calculation logic for the parking charge calculator.
//!
//! This module contains the time utilities (weekend detection, time-of-day
//! extraction, calendar day counting), long stay pricing, short stay pricing
//! split into arrival-day, full-day and departure-day components, and the
//! [`calculate_charge`] entry point that dispatches between them.

mod charge;
mod long_stay;
mod short_stay;
mod time_utils;

pub use charge::{calculate_charge, calculate_charge_detailed};
pub use long_stay::{chargeable_days, long_stay_cost};
pub use short_stay::{
    arrival_day_cost, arrival_day_minutes, departure_day_cost, departure_day_minutes,
    full_days_cost, full_weekdays, short_stay_breakdown, short_stay_cost,
};
pub use time_utils::{TimeOfDay, elapsed_days, is_weekend, is_weekend_day, time_of_day};
