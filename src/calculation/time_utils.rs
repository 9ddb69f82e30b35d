//! Time utilities used by the charge calculator.
//!
//! These are pure helpers over wall-clock timestamps: weekend detection,
//! time-of-day extraction and whole calendar day counting. No timezone
//! conversion happens here; the hour and minute fields are taken as given.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::CalculatorError;

/// The hour and minute component of a timestamp, independent of its date.
///
/// Ordering follows minutes since midnight, so two values can be compared
/// directly to decide whether a moment falls before opening or after closing.
///
/// # Example
///
/// ```
/// use parking_calculator::calculation::TimeOfDay;
///
/// let opening: TimeOfDay = "08:00".parse().unwrap();
/// let closing = TimeOfDay::from_hm_opt(18, 0).unwrap();
/// assert!(opening < closing);
/// assert_eq!(opening.minutes_until(closing), 600);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    /// Creates a time of day, returning `None` when the hour is not in
    /// `0..=23` or the minute is not in `0..=59`.
    pub fn from_hm_opt(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Builds a constant time of day. Callers guarantee the bounds.
    pub(crate) const fn from_hm_unchecked(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// The hour component.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// The minute component.
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> i64 {
        i64::from(self.hour) * 60 + i64::from(self.minute)
    }

    /// Signed number of minutes from `self` to `later`.
    pub fn minutes_until(&self, later: TimeOfDay) -> i64 {
        later.minutes_since_midnight() - self.minutes_since_midnight()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = CalculatorError;

    /// Parses `HH:MM`, also accepting a trailing `:SS` which is discarded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map(|time| Self {
                hour: time.hour(),
                minute: time.minute(),
            })
            .map_err(|_| CalculatorError::InvalidTariff {
                message: format!("invalid time of day '{}', expected HH:MM", s),
            })
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = CalculatorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// Returns true if the timestamp falls on a Saturday or Sunday.
///
/// # Example
///
/// ```
/// use parking_calculator::calculation::is_weekend;
/// use chrono::NaiveDateTime;
///
/// // 2020-12-12 is a Saturday
/// let saturday = NaiveDateTime::parse_from_str("2020-12-12 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(is_weekend(saturday));
/// ```
pub fn is_weekend(datetime: NaiveDateTime) -> bool {
    is_weekend_day(datetime.date())
}

/// Returns true if the calendar date is a Saturday or Sunday.
pub fn is_weekend_day(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Extracts the hour and minute of a timestamp, dropping seconds.
///
/// Two timestamps with the same hour and minute yield equal values
/// whatever their dates.
pub fn time_of_day(datetime: NaiveDateTime) -> TimeOfDay {
    TimeOfDay {
        hour: datetime.hour(),
        minute: datetime.minute(),
    }
}

/// Counts whole calendar days between the dates of `start` and `end`.
///
/// The time of day is ignored, so Monday 23:59 to Tuesday 00:01 is one day
/// and Monday 00:00 to Monday 23:59 is zero. The result is the absolute
/// difference, so argument order does not matter.
///
/// # Example
///
/// ```
/// use parking_calculator::calculation::elapsed_days;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2020-12-07 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2020-12-08 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(elapsed_days(start, end), 1);
/// assert_eq!(elapsed_days(end, start), 1);
/// ```
pub fn elapsed_days(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end.date() - start.date()).num_days().abs()
}
