//! Error types for the parking charge calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while pricing a stay or loading
//! a tariff.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The main error type for the parking charge calculator.
///
/// # Example
///
/// ```
/// use parking_calculator::error::CalculatorError;
///
/// let error = CalculatorError::ConfigNotFound {
///     path: "/missing/tariffs.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/tariffs.yaml");
/// ```
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// The departure precedes the arrival.
    #[error("Departure date must be after arrival date (arrival {arrival}, departure {departure})")]
    InvalidInterval {
        /// The requested arrival time.
        arrival: NaiveDateTime,
        /// The requested departure time.
        departure: NaiveDateTime,
    },

    /// A tariff name other than `short` or `long` was supplied.
    #[error("Unknown charge type: {value}")]
    UnknownChargeType {
        /// The rejected tariff name.
        value: String,
    },

    /// The charge for a stay is too large to represent.
    #[error("Charge overflow: {minutes} minutes at {cost_per_hour} per hour")]
    ChargeOverflow {
        /// The billable minutes of the stay.
        minutes: i64,
        /// The hourly rate applied.
        cost_per_hour: u32,
    },

    /// A tariff configuration violated one of its invariants.
    #[error("Invalid tariff: {message}")]
    InvalidTariff {
        /// A description of the violated invariant.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return CalculatorError.
pub type CalculatorResult<T> = Result<T, CalculatorError>;
