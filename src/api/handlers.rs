//! HTTP request handlers for the parking charge API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_charge_detailed;

use super::request::ChargeRequest;
use super::response::{ApiError, ApiErrorResponse, TariffResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/tariff", get(tariff_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts an arrival, a departure and a charge type, and returns the priced
/// stay.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChargeRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing charge request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries serde's description of the bad field
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Perform the calculation
    let start_time = Instant::now();
    match calculate_charge_detailed(
        request.arrival,
        request.departure,
        request.charge_type,
        state.tariff(),
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                charge_type = %result.charge_type,
                charge = result.charge,
                duration_us = start_time.elapsed().as_micros(),
                "Charge calculated successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Charge calculation rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for GET /tariff endpoint.
///
/// Returns the rates and opening hours in force, for display.
async fn tariff_handler(State(state): State<AppState>) -> Json<TariffResponse> {
    Json(TariffResponse::from(state.tariff()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TariffConfig;
    use crate::models::{ChargeResult, ChargeType};
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDateTime;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(TariffConfig::default())
    }

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn create_valid_request() -> ChargeRequest {
        ChargeRequest {
            arrival: make_datetime("2020-12-07 09:00:00"),
            departure: make_datetime("2020-12-07 16:00:00"),
            charge_type: ChargeType::Short,
        }
    }

    async fn post_json(router: Router, body: String) -> Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let response = post_json(router, body).await;
        assert_eq!(response.status(), StatusCode::OK);

        // Verify Content-Type header
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        // Verify response body is a valid ChargeResult
        let result: ChargeResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.charge, 770);
        assert_eq!(result.charge_type, ChargeType::Short);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = post_json(router, "{invalid json".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_departure_returns_validation_error() {
        let router = create_router(create_test_state());
        let body = r#"{"arrival": "2020-12-07T09:00:00", "charge_type": "long"}"#;

        let response = post_json(router, body.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("departure"));
    }

    #[tokio::test]
    async fn test_departure_before_arrival_returns_400() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.departure = make_datetime("2020-12-06 09:00:00");
        let body = serde_json::to_string(&request).unwrap();

        let response = post_json(router, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_INTERVAL");
    }

    #[tokio::test]
    async fn test_tariff_endpoint() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/tariff")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let tariff: TariffResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(tariff, TariffResponse::from(&TariffConfig::default()));
    }
}
