//! Core data models for the parking charge calculator.
//!
//! This module contains the domain models used throughout the calculator.

mod charge_result;
mod charge_type;
mod stay;

pub use charge_result::{ChargeBreakdown, ChargeResult};
pub use charge_type::ChargeType;
pub use stay::StayInterval;
