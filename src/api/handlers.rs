//! HTTP request handlers for the Ring Road Toll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_toll;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, ApiResponse};
use super::state::AppState;

/// Text served at `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to Lahore Ring Road Toll System";

/// Creates the API router with all endpoints.
///
/// | Method | Path                     | Handler                 |
/// |--------|--------------------------|-------------------------|
/// | GET    | `/`                      | welcome text            |
/// | POST   | `/api/toll/calculate`    | price a trip            |
/// | GET    | `/api/toll/entry-points` | list plaza names        |
/// | GET    | `/api/toll/rates`        | current rate schedule   |
pub fn create_router(state: AppState) -> Router {
    let toll_routes = Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/entry-points", get(entry_points_handler))
        .route("/rates", get(rates_handler));

    Router::new()
        .route("/", get(welcome_handler))
        .nest("/api/toll", toll_routes)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn welcome_handler() -> &'static str {
    WELCOME_MESSAGE
}

/// Handler for POST /api/toll/calculate.
///
/// Validates the request, prices the trip and returns the fare breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing toll calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err.body_text(),
                        "JSON data error"
                    );
                    ApiError::malformed_json(err.body_text())
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::with_message(
                    "Missing content type",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let config = state.config().config();

    let toll_request = match request.validate(config) {
        Ok(toll_request) => toll_request,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                reason = %err,
                "Toll request rejected"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    match calculate_toll(&toll_request, config) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                number_plate = %toll_request.vehicle_plate,
                entry_point = %toll_request.entry_point,
                exit_point = %toll_request.exit_point,
                toll_amount = %result.toll_amount,
                duration_us = duration.as_micros(),
                "Toll calculated successfully"
            );
            ApiResponse::ok(result, "Toll calculated successfully").into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Toll calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /api/toll/entry-points.
async fn entry_points_handler(State(state): State<AppState>) -> impl IntoResponse {
    let names: Vec<String> = state
        .config()
        .list_route_points()
        .into_iter()
        .map(String::from)
        .collect();
    ApiResponse::ok(names, "Entry points retrieved successfully")
}

/// Handler for GET /api/toll/rates.
async fn rates_handler(State(state): State<AppState>) -> impl IntoResponse {
    ApiResponse::ok(
        state.config().current_rate_schedule(),
        "Toll rates retrieved successfully",
    )
}
