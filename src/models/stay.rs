//! Stay interval model.

use chrono::NaiveDateTime;

use crate::calculation::elapsed_days;
use crate::error::{CalculatorError, CalculatorResult};

/// An arrival and departure pair with `departure >= arrival`.
///
/// # Example
///
/// ```
/// use parking_calculator::models::StayInterval;
/// use chrono::NaiveDateTime;
///
/// let arrival = NaiveDateTime::parse_from_str("2020-12-08 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let departure = NaiveDateTime::parse_from_str("2020-12-07 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(StayInterval::new(arrival, departure).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayInterval {
    arrival: NaiveDateTime,
    departure: NaiveDateTime,
}

impl StayInterval {
    /// Creates a stay, returning `InvalidInterval` if the departure is
    /// strictly before the arrival. Equal timestamps are accepted.
    pub fn new(arrival: NaiveDateTime, departure: NaiveDateTime) -> CalculatorResult<Self> {
        if departure < arrival {
            return Err(CalculatorError::InvalidInterval { arrival, departure });
        }
        Ok(Self { arrival, departure })
    }

    /// The arrival time.
    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival
    }

    /// The departure time.
    pub fn departure(&self) -> NaiveDateTime {
        self.departure
    }

    /// True when arrival and departure share a calendar date.
    pub fn is_same_day(&self) -> bool {
        self.elapsed_days() == 0
    }

    /// Whole calendar days between the arrival and departure dates.
    pub fn elapsed_days(&self) -> i64 {
        elapsed_days(self.arrival, self.departure)
    }
}
