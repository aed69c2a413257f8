//! Toll request model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single trip to be priced.
///
/// Timestamps are civil date-times at the toll plaza; weekday and
/// holiday rules are evaluated on their calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TollRequest {
    /// The vehicle's number plate (e.g., "ABC-123").
    pub vehicle_plate: String,
    /// Name of the plaza where the vehicle entered.
    pub entry_point: String,
    /// Name of the plaza where the vehicle left.
    pub exit_point: String,
    /// When the vehicle passed the entry plaza.
    pub entry_time: NaiveDateTime,
    /// When the vehicle passed the exit plaza.
    pub exit_time: NaiveDateTime,
}

impl TollRequest {
    /// Creates a new toll request.
    pub fn new(
        vehicle_plate: impl Into<String>,
        entry_point: impl Into<String>,
        exit_point: impl Into<String>,
        entry_time: NaiveDateTime,
        exit_time: NaiveDateTime,
    ) -> Self {
        Self {
            vehicle_plate: vehicle_plate.into(),
            entry_point: entry_point.into(),
            exit_point: exit_point.into(),
            entry_time,
            exit_time,
        }
    }

    /// Returns the same trip travelled in the opposite direction.
    ///
    /// Only the plazas are swapped; the timestamps stay as they are.
    pub fn reversed(&self) -> Self {
        Self {
            vehicle_plate: self.vehicle_plate.clone(),
            entry_point: self.exit_point.clone(),
            exit_point: self.entry_point.clone(),
            entry_time: self.entry_time,
            exit_time: self.exit_time,
        }
    }
}
