//! HTTP request handlers for the climate API.
//!
//! This module contains all the endpoint handlers for the web server.

pub mod index;
pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod tobs;

pub use index::index_handler;
pub use precipitation::precipitation_handler;
pub use stations::stations_handler;
pub use temperature::{temperature_range_handler, temperature_start_handler};
pub use tobs::tobs_handler;

use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::ClimateError;
use crate::logging::log_request_error;

/// Log a failed query and turn it into a JSON error response
pub(crate) fn handle_query_error(
    error: ClimateError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) -> Response {
    log_request_error(&error, endpoint, request_id, params);

    (
        error.status_code(),
        Json(serde_json::json!({
            "error": error.to_string(),
            "request_id": request_id
        })),
    )
        .into_response()
}
