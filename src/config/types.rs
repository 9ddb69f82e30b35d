//! Tariff configuration types.
//!
//! This module contains the on-disk tariff file structure and the validated,
//! immutable [`TariffConfig`] handed to the calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::TimeOfDay;
use crate::error::{CalculatorError, CalculatorResult};

/// Default long stay charge per calendar day, in pence.
pub const DEFAULT_LONG_STAY_COST_PER_DAY: u32 = 750;

/// Default short stay charge per hour, in pence.
pub const DEFAULT_SHORT_STAY_COST_PER_HOUR: u32 = 110;

/// Default opening time for short stay charging.
pub const DEFAULT_OPENING_TIME: TimeOfDay = TimeOfDay::from_hm_unchecked(8, 0);

/// Default closing time for short stay charging.
pub const DEFAULT_CLOSING_TIME: TimeOfDay = TimeOfDay::from_hm_unchecked(18, 0);

/// Tariff file structure, as written in `tariffs.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffFile {
    /// Long stay charge per chargeable day, in minor currency units.
    pub long_stay_cost_per_day: u32,
    /// Short stay charge per hour, in minor currency units.
    pub short_stay_cost_per_hour: u32,
    /// Start of the daily short stay charging window.
    pub opening_time: TimeOfDay,
    /// End of the daily short stay charging window.
    pub closing_time: TimeOfDay,
}

/// The rates and opening hours used to price a stay.
///
/// A `TariffConfig` is validated on construction and never changes
/// afterwards, so one instance can be shared by any number of concurrent
/// calculations.
///
/// # Example
///
/// ```
/// use parking_calculator::config::TariffConfig;
/// use rust_decimal::Decimal;
///
/// let tariff = TariffConfig::default();
/// assert_eq!(tariff.long_stay_cost_per_day(), 750);
/// assert_eq!(tariff.short_stay_cost_per_day(), Decimal::new(1100, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TariffConfig {
    long_stay_cost_per_day: u32,
    short_stay_cost_per_hour: u32,
    opening_time: TimeOfDay,
    closing_time: TimeOfDay,
}

impl TariffConfig {
    /// Creates a tariff, rejecting an opening time that is not strictly
    /// before the closing time.
    pub fn new(
        long_stay_cost_per_day: u32,
        short_stay_cost_per_hour: u32,
        opening_time: TimeOfDay,
        closing_time: TimeOfDay,
    ) -> CalculatorResult<Self> {
        if opening_time >= closing_time {
            return Err(CalculatorError::InvalidTariff {
                message: format!(
                    "opening time {} must be before closing time {}",
                    opening_time, closing_time
                ),
            });
        }

        Ok(Self {
            long_stay_cost_per_day,
            short_stay_cost_per_hour,
            opening_time,
            closing_time,
        })
    }

    /// Long stay charge per chargeable day.
    pub fn long_stay_cost_per_day(&self) -> u32 {
        self.long_stay_cost_per_day
    }

    /// Short stay charge per hour.
    pub fn short_stay_cost_per_hour(&self) -> u32 {
        self.short_stay_cost_per_hour
    }

    /// Short stay charge per minute (`cost per hour / 60`).
    pub fn short_stay_per_minute(&self) -> Decimal {
        Decimal::from(self.short_stay_cost_per_hour) / Decimal::from(60)
    }

    /// Start of the daily charging window.
    pub fn opening_time(&self) -> TimeOfDay {
        self.opening_time
    }

    /// End of the daily charging window.
    pub fn closing_time(&self) -> TimeOfDay {
        self.closing_time
    }

    /// Length of the daily charging window in minutes.
    pub fn opening_minutes(&self) -> i64 {
        self.opening_time.minutes_until(self.closing_time)
    }

    /// Short stay charge for one full weekday inside opening hours.
    pub fn short_stay_cost_per_day(&self) -> Decimal {
        self.minutes_cost(self.opening_minutes())
    }

    /// Short stay charge for a number of billable minutes, unrounded.
    ///
    /// Multiplies before dividing so whole-hour amounts stay exact.
    pub fn minutes_cost(&self, minutes: i64) -> Decimal {
        Decimal::from(minutes) * Decimal::from(self.short_stay_cost_per_hour) / Decimal::from(60)
    }
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            long_stay_cost_per_day: DEFAULT_LONG_STAY_COST_PER_DAY,
            short_stay_cost_per_hour: DEFAULT_SHORT_STAY_COST_PER_HOUR,
            opening_time: DEFAULT_OPENING_TIME,
            closing_time: DEFAULT_CLOSING_TIME,
        }
    }
}

impl TryFrom<TariffFile> for TariffConfig {
    type Error = CalculatorError;

    fn try_from(file: TariffFile) -> Result<Self, Self::Error> {
        Self::new(
            file.long_stay_cost_per_day,
            file.short_stay_cost_per_hour,
            file.opening_time,
            file.closing_time,
        )
    }
}

impl From<&TariffConfig> for TariffFile {
    fn from(config: &TariffConfig) -> Self {
        Self {
            long_stay_cost_per_day: config.long_stay_cost_per_day,
            short_stay_cost_per_hour: config.short_stay_cost_per_hour,
            opening_time: config.opening_time,
            closing_time: config.closing_time,
        }
    }
}
