//! Precipitation endpoint handler.
//!
//! Returns a JSON object mapping each date of the trailing year to its
//! precipitation reading.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::handle_query_error;
use crate::logging::generate_request_id;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/precipitation";

/// Handle GET /api/v1.0/precipitation requests
pub async fn precipitation_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        window_start = %state.queries.window_start(),
        "Processing precipitation request"
    );

    match state.queries.precipitation_history().await {
        Ok(history) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                dates = history.len(),
                "Precipitation request successful"
            );

            Json(history).into_response()
        }
        Err(error) => handle_query_error(error, ENDPOINT, &request_id, None),
    }
}
