//! Request types for the Ring Road Toll Engine API.
//!
//! This module defines the JSON body of `POST /api/toll/calculate` and the
//! checks it must pass before the calculator is called.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculation::validate_number_plate;
use crate::config::TollConfig;
use crate::models::TollRequest;

/// Field names every calculation request must carry.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "numberPlate",
    "entryPoint",
    "exitPoint",
    "entryDateTime",
    "exitDateTime",
];

/// Request body for the `/calculate` endpoint.
///
/// Every field is optional at the parsing stage so that a missing field is
/// reported as a validation failure listing all required fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    /// The vehicle's number plate.
    #[serde(default)]
    pub number_plate: Option<String>,
    /// Name of the entry plaza.
    #[serde(default)]
    pub entry_point: Option<String>,
    /// Name of the exit plaza.
    #[serde(default)]
    pub exit_point: Option<String>,
    /// Entry timestamp, RFC 3339 or `YYYY-MM-DDTHH:MM:SS`.
    #[serde(default)]
    pub entry_date_time: Option<String>,
    /// Exit timestamp, RFC 3339 or `YYYY-MM-DDTHH:MM:SS`.
    #[serde(default)]
    pub exit_date_time: Option<String>,
}

/// Why a calculation request was rejected before reaching the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// At least one required field was absent or empty.
    #[error("Missing required fields")]
    MissingFields,
    /// The plate is not in `LLL-NNN` form.
    #[error("Invalid number plate format")]
    InvalidPlate,
    /// Entry and exit name the same plaza.
    #[error("Entry and exit points cannot be the same")]
    SamePoints,
    /// The entry plaza is not on the route map.
    #[error("Invalid entry point")]
    UnknownEntryPoint {
        /// The plazas that are on the route map.
        available: Vec<String>,
    },
    /// The exit plaza is not on the route map.
    #[error("Invalid exit point")]
    UnknownExitPoint {
        /// The plazas that are on the route map.
        available: Vec<String>,
    },
    /// A timestamp could not be parsed.
    #[error("Invalid date format")]
    InvalidDate,
    /// The exit timestamp is before the entry timestamp.
    #[error("Invalid date range")]
    InvalidDateRange,
}

impl CalculationRequest {
    /// Checks the request and converts it into a [`TollRequest`].
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// required fields, plate format, distinct plazas (compared
    /// case-insensitively), known entry, known exit, parsable timestamps,
    /// and exit not before entry.
    pub fn validate(&self, config: &TollConfig) -> Result<TollRequest, ValidationError> {
        let (
            Some(plate),
            Some(entry_point),
            Some(exit_point),
            Some(entry_raw),
            Some(exit_raw),
        ) = (
            present(&self.number_plate),
            present(&self.entry_point),
            present(&self.exit_point),
            present(&self.entry_date_time),
            present(&self.exit_date_time),
        )
        else {
            return Err(ValidationError::MissingFields);
        };

        if !validate_number_plate(plate) {
            return Err(ValidationError::InvalidPlate);
        }

        if entry_point.to_lowercase() == exit_point.to_lowercase() {
            return Err(ValidationError::SamePoints);
        }

        if !config.has_route_point(entry_point) {
            return Err(ValidationError::UnknownEntryPoint {
                available: available_points(config),
            });
        }

        if !config.has_route_point(exit_point) {
            return Err(ValidationError::UnknownExitPoint {
                available: available_points(config),
            });
        }

        let (Some(entry_time), Some(exit_time)) =
            (parse_timestamp(entry_raw), parse_timestamp(exit_raw))
        else {
            return Err(ValidationError::InvalidDate);
        };

        if exit_time < entry_time {
            return Err(ValidationError::InvalidDateRange);
        }

        Ok(TollRequest::new(
            plate,
            entry_point,
            exit_point,
            entry_time.naive_local(),
            exit_time.naive_local(),
        ))
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

fn available_points(config: &TollConfig) -> Vec<String> {
    config
        .list_route_points()
        .into_iter()
        .map(String::from)
        .collect()
}

/// Parses a request timestamp.
///
/// Accepts RFC 3339 (`2025-07-11T08:00:00Z`, `2025-07-11T13:00:00+05:00`),
/// the same without seconds (`2025-07-11T08:00Z`), a naive date-time with or
/// without seconds (`2025-07-11T08:00:00`, `2025-07-11T08:00`, taken as UTC)
/// or a bare date (`2025-07-11`, midnight UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp);
    }

    if let Ok(timestamp) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M%#z") {
        return Some(timestamp);
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}
