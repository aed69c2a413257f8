//! HTTP API module for the Ring Road Toll Engine.
//!
//! This module provides the REST endpoints for pricing trips and for
//! querying the route map and rate schedule.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{WELCOME_MESSAGE, create_router};
pub use request::{CalculationRequest, REQUIRED_FIELDS, ValidationError, parse_timestamp};
pub use response::{ApiError, ApiErrorResponse, ApiResponse};
pub use state::AppState;
