//! Tariff loading functionality.
//!
//! This module provides the [`TariffLoader`] type for loading a tariff
//! from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{CalculatorError, CalculatorResult};

use super::types::{TariffConfig, TariffFile};

/// Loads and provides access to a tariff configuration.
///
/// The tariff file is a single YAML document:
/// ```text
/// long_stay_cost_per_day: 750
/// short_stay_cost_per_hour: 110
/// opening_time: "08:00"
/// closing_time: "18:00"
/// ```
///
/// # Example
///
/// ```no_run
/// use parking_calculator::config::TariffLoader;
///
/// let loader = TariffLoader::load("./config/tariffs.yaml").unwrap();
/// println!("Long stay per day: {}p", loader.config().long_stay_cost_per_day());
/// ```
#[derive(Debug, Clone)]
pub struct TariffLoader {
    config: TariffConfig,
}

impl TariffLoader {
    /// Loads a tariff from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `TariffLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML or lacks a field (`ConfigParseError`)
    /// - The opening time is not before the closing time (`InvalidTariff`)
    pub fn load<P: AsRef<Path>>(path: P) -> CalculatorResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CalculatorError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses a tariff from YAML text. `source` names the text in errors.
    pub fn from_yaml_str(content: &str, source: &str) -> CalculatorResult<Self> {
        let file: TariffFile =
            serde_yaml::from_str(content).map_err(|e| CalculatorError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        let config = TariffConfig::try_from(file)?;
        Ok(Self { config })
    }

    /// Returns the loaded tariff.
    pub fn config(&self) -> &TariffConfig {
        &self.config
    }

    /// Consumes the loader and returns the tariff.
    pub fn into_config(self) -> TariffConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/tariffs.yaml"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = TariffLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config(), &TariffConfig::default());
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = TariffLoader::load("/nonexistent/tariffs.yaml");

        match result {
            Err(CalculatorError::ConfigNotFound { path }) => {
                assert!(path.contains("tariffs.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_from_yaml_str_custom_tariff() {
        let yaml = r#"
long_stay_cost_per_day: 900
short_stay_cost_per_hour: 120
opening_time: "07:30"
closing_time: "19:00"
"#;
        let loader = TariffLoader::from_yaml_str(yaml, "inline").unwrap();
        let config = loader.config();
        assert_eq!(config.long_stay_cost_per_day(), 900);
        assert_eq!(config.short_stay_cost_per_hour(), 120);
        assert_eq!(config.opening_minutes(), 690);
    }

    #[test]
    fn test_from_yaml_str_missing_field() {
        let yaml = "long_stay_cost_per_day: 900\n";
        match TariffLoader::from_yaml_str(yaml, "inline") {
            Err(CalculatorError::ConfigParseError { path, message }) => {
                assert_eq!(path, "inline");
                assert!(message.contains("short_stay_cost_per_hour"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_from_yaml_str_bad_time() {
        let yaml = r#"
long_stay_cost_per_day: 750
short_stay_cost_per_hour: 110
opening_time: "8 o'clock"
closing_time: "18:00"
"#;
        let result = TariffLoader::from_yaml_str(yaml, "inline");
        assert!(matches!(
            result,
            Err(CalculatorError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_from_yaml_str_closing_before_opening() {
        let yaml = r#"
long_stay_cost_per_day: 750
short_stay_cost_per_hour: 110
opening_time: "18:00"
closing_time: "08:00"
"#;
        let result = TariffLoader::from_yaml_str(yaml, "inline");
        assert!(matches!(result, Err(CalculatorError::InvalidTariff { .. })));
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let yaml = r#"
long_stay_cost_per_day: -750
short_stay_cost_per_hour: 110
opening_time: "08:00"
closing_time: "18:00"
"#;
        let result = TariffLoader::from_yaml_str(yaml, "inline");
        assert!(matches!(
            result,
            Err(CalculatorError::ConfigParseError { .. })
        ));
    }
}
