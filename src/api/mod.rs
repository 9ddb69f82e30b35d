//! HTTP API module for the parking charge calculator.
//!
//! This module exposes the calculator over JSON: `POST /calculate` prices a
//! stay and `GET /tariff` returns the rates in force.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ChargeRequest;
pub use response::{ApiError, ApiErrorResponse, TariffResponse};
pub use state::AppState;
