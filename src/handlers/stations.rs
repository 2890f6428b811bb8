//! Stations endpoint handler.
//!
//! Returns the identifiers of all stations that have reported measurements.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::handle_query_error;
use crate::logging::generate_request_id;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/stations";

/// Handle GET /api/v1.0/stations requests
pub async fn stations_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(endpoint = ENDPOINT, request_id = %request_id, "Processing stations request");

    match state.queries.list_stations().await {
        Ok(stations) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                station_count = stations.len(),
                "Stations request successful"
            );

            Json(stations).into_response()
        }
        Err(error) => handle_query_error(error, ENDPOINT, &request_id, None),
    }
}
