//! Request types for the parking charge API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::ChargeType;

/// Request body for the `/calculate` endpoint.
///
/// Timestamps are wall-clock values in ISO 8601 form without an offset,
/// e.g. `2020-12-07T09:00:00`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeRequest {
    /// When the car entered the car park.
    pub arrival: NaiveDateTime,
    /// When the car left the car park.
    pub departure: NaiveDateTime,
    /// The tariff to price the stay under.
    pub charge_type: ChargeType,
}
