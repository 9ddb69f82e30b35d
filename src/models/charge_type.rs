//! Tariff selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalculatorError;

/// Which tariff a stay is priced under.
///
/// # Example
///
/// ```
/// use parking_calculator::models::ChargeType;
///
/// let charge_type: ChargeType = "long".parse().unwrap();
/// assert_eq!(charge_type, ChargeType::Long);
/// assert_eq!(charge_type.to_string(), "long");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeType {
    /// Per-minute billing inside opening hours, weekends free.
    Short,
    /// Flat billing per calendar day.
    Long,
}

impl fmt::Display for ChargeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChargeType::Short => write!(f, "short"),
            ChargeType::Long => write!(f, "long"),
        }
    }
}

impl FromStr for ChargeType {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(ChargeType::Short),
            "long" => Ok(ChargeType::Long),
            _ => Err(CalculatorError::UnknownChargeType {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Short".parse::<ChargeType>().unwrap(), ChargeType::Short);
        assert_eq!(" LONG ".parse::<ChargeType>().unwrap(), ChargeType::Long);
    }

    #[test]
    fn test_parse_unknown_value() {
        match "weekly".parse::<ChargeType>() {
            Err(CalculatorError::UnknownChargeType { value }) => assert_eq!(value, "weekly"),
            other => panic!("Expected UnknownChargeType, got {:?}", other),
        }
    }

    #[test]
    fn test_charge_type_serialization() {
        let json = serde_json::to_string(&ChargeType::Short).unwrap();
        assert_eq!(json, "\"short\"");

        let deserialized: ChargeType = serde_json::from_str("\"long\"").unwrap();
        assert_eq!(deserialized, ChargeType::Long);
    }

    #[test]
    fn test_unknown_value_fails_to_deserialize() {
        assert!(serde_json::from_str::<ChargeType>("\"medium\"").is_err());
    }
}
