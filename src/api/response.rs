//! Response types for the parking charge API.
//!
//! This module defines the error response structures, the mapping from
//! [`CalculatorError`] to HTTP status codes, and the tariff display body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::TimeOfDay;
use crate::config::TariffConfig;
use crate::error::CalculatorError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<CalculatorError> for ApiErrorResponse {
    fn from(error: CalculatorError) -> Self {
        let message = error.to_string();
        match error {
            CalculatorError::InvalidInterval { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INTERVAL",
                    message,
                    "The departure time must not be earlier than the arrival time",
                ),
            },
            CalculatorError::UnknownChargeType { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_CHARGE_TYPE",
                    message,
                    "Supported charge types are 'short' and 'long'",
                ),
            },
            CalculatorError::ChargeOverflow { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "CHARGE_OVERFLOW",
                    message,
                    "The stay is too long to price under this tariff",
                ),
            },
            CalculatorError::InvalidTariff { .. }
            | CalculatorError::ConfigNotFound { .. }
            | CalculatorError::ConfigParseError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
        }
    }
}

/// Body of the `/tariff` endpoint, for showing rates next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffResponse {
    /// Long stay charge per chargeable day, in pence.
    pub long_stay_cost_per_day: u32,
    /// Short stay charge per hour, in pence.
    pub short_stay_cost_per_hour: u32,
    /// Short stay charge per minute, in pence.
    pub short_stay_per_minute: Decimal,
    /// Short stay charge for one full weekday, in pence.
    pub short_stay_cost_per_day: Decimal,
    /// Start of the daily short stay charging window.
    pub opening_time: TimeOfDay,
    /// End of the daily short stay charging window.
    pub closing_time: TimeOfDay,
}

impl From<&TariffConfig> for TariffResponse {
    fn from(tariff: &TariffConfig) -> Self {
        Self {
            long_stay_cost_per_day: tariff.long_stay_cost_per_day(),
            short_stay_cost_per_hour: tariff.short_stay_cost_per_hour(),
            short_stay_per_minute: tariff.short_stay_per_minute().normalize(),
            short_stay_cost_per_day: tariff.short_stay_cost_per_day().normalize(),
            opening_time: tariff.opening_time(),
            closing_time: tariff.closing_time(),
        }
    }
}
