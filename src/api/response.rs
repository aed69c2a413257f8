//! Response types for the Ring Road Toll Engine API.
//!
//! Successful responses are wrapped in `{ success: true, data, message }`;
//! failures in `{ success: false, error, ... }`.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::request::{REQUIRED_FIELDS, ValidationError};

/// Success envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always true.
    pub success: bool,
    /// The payload.
    pub data: T,
    /// Human-readable summary.
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// Wraps `data` in a success envelope.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self),
        )
            .into_response()
    }
}

/// Failure envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Always false.
    pub success: bool,
    /// Short description of what went wrong.
    pub error: String,
    /// Optional guidance for the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Required field names, for missing-field errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    /// Known plaza names, for unknown-plaza errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_entry_points: Option<Vec<String>>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: None,
            required: None,
            available_entry_points: None,
        }
    }

    /// Creates a new API error with guidance.
    pub fn with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::new(error)
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::with_message("Malformed JSON", message)
    }

    /// Creates a missing fields error response.
    pub fn missing_fields() -> Self {
        Self {
            required: Some(REQUIRED_FIELDS.iter().map(|f| f.to_string()).collect()),
            ..Self::new("Missing required fields")
        }
    }

    /// Creates an unknown plaza error response.
    pub fn unknown_point(error: impl Into<String>, available: Vec<String>) -> Self {
        Self {
            available_entry_points: Some(available),
            ..Self::new(error)
        }
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<ValidationError> for ApiErrorResponse {
    fn from(error: ValidationError) -> Self {
        let title = error.to_string();
        let body = match error {
            ValidationError::MissingFields => ApiError::missing_fields(),
            ValidationError::InvalidPlate => ApiError::with_message(
                title,
                "Number plate must be in format LLL-NNN (e.g., ABC-123)",
            ),
            ValidationError::SamePoints => {
                ApiError::with_message(title, "Please provide different entry and exit points")
            }
            ValidationError::UnknownEntryPoint { available }
            | ValidationError::UnknownExitPoint { available } => {
                ApiError::unknown_point(title, available)
            }
            ValidationError::InvalidDate => ApiError::with_message(
                title,
                "Dates must be in ISO format (YYYY-MM-DDTHH:mm:ss.sssZ)",
            ),
            ValidationError::InvalidDateRange => {
                ApiError::with_message(title, "Exit date must be after entry date")
            }
        };
        ApiErrorResponse::bad_request(body)
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let status = match error {
            EngineError::UnknownRoutePoint { .. } | EngineError::MalformedPlate { .. } => {
                StatusCode::BAD_REQUEST
            }
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        ApiErrorResponse {
            status,
            error: ApiError::new(error.to_string()),
        }
    }
}
