//! Temperature observations endpoint handler.
//!
//! Returns the trailing year of `{date, tobs}` readings for the station
//! with the most measurements.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::handle_query_error;
use crate::logging::generate_request_id;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/tobs";

/// Handle GET /api/v1.0/tobs requests
pub async fn tobs_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        window_start = %state.queries.window_start(),
        "Processing temperature observations request"
    );

    match state.queries.trailing_year_temperatures().await {
        Ok(observations) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                observations = observations.len(),
                "Temperature observations request successful"
            );

            Json(observations).into_response()
        }
        Err(error) => handle_query_error(error, ENDPOINT, &request_id, None),
    }
}
