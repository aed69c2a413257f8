//! Error types for the Ring Road Toll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading reference data
//! or calculating a toll.

use thiserror::Error;

/// The main error type for the Ring Road Toll Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use ring_road_toll::error::EngineError;
///
/// let error = EngineError::UnknownRoutePoint {
///     name: "Airport".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid entry point: Airport");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An entry or exit name did not match any known route point.
    #[error("Invalid entry point: {name}")]
    UnknownRoutePoint {
        /// The name that could not be resolved.
        name: String,
    },

    /// A number plate had no trailing digits to inspect.
    #[error("Invalid number plate format: {plate}")]
    MalformedPlate {
        /// The offending plate.
        plate: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but its contents are inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of what made the configuration invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
