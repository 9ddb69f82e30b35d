//! Parking charge calculator
//!
//! This crate prices a car park stay from its arrival and departure times
//! under a short stay (per minute, inside opening hours, weekdays only) or
//! long stay (per calendar day) tariff. Amounts are in minor currency units.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
