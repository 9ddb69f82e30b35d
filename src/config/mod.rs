//! Tariff configuration for the parking charge calculator.
//!
//! A tariff is either the built-in [`TariffConfig::default`] table or one
//! loaded from a YAML file through [`TariffLoader`].
//!
//! # Example
//!
//! ```no_run
//! use parking_calculator::config::TariffLoader;
//!
//! let loader = TariffLoader::load("./config/tariffs.yaml").unwrap();
//! println!("Opening time: {}", loader.config().opening_time());
//! ```

mod loader;
mod types;

pub use loader::TariffLoader;
pub use types::{
    DEFAULT_CLOSING_TIME, DEFAULT_LONG_STAY_COST_PER_DAY, DEFAULT_OPENING_TIME,
    DEFAULT_SHORT_STAY_COST_PER_HOUR, TariffConfig, TariffFile,
};
