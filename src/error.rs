//! Error types for the climate-api application.
//!
//! A single error enum covers startup failures (configuration, schema,
//! database availability) and request-time query failures.

use axum::http::StatusCode;
use thiserror::Error;

/// The main error type for climate-api operations.
#[derive(Error, Debug)]
pub enum ClimateError {
    /// Database pool or query errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The live schema does not match the expected table definitions
    #[error("Schema mismatch: {message}")]
    Schema { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

impl ClimateError {
    /// HTTP status reported when this error escapes a request handler.
    ///
    /// Request paths are never validated, so every failure that reaches a
    /// handler is a server-side data access problem.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Convenience type alias for Results with ClimateError
pub type Result<T> = std::result::Result<T, ClimateError>;
