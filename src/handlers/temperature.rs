//! Temperature statistics endpoint handlers.
//!
//! `/api/v1.0/temp/{start}` and `/api/v1.0/temp/{start}/{end}` return
//! `{TMIN, TAVG, TMAX}` over the requested dates. The dates are not
//! validated; anything that is not an ISO date simply matches nothing
//! sensible and yields nulls.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::handle_query_error;
use crate::logging::generate_request_id;
use crate::state::AppState;

/// Handle GET /api/v1.0/temp/{start} requests
pub async fn temperature_start_handler(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Response {
    temperature_stats(&state, &start, None).await
}

/// Handle GET /api/v1.0/temp/{start}/{end} requests
pub async fn temperature_range_handler(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Response {
    temperature_stats(&state, &start, Some(&end)).await
}

async fn temperature_stats(state: &AppState, start: &str, end: Option<&str>) -> Response {
    const ENDPOINT: &str = "/api/v1.0/temp";

    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        start = start,
        end = ?end,
        "Processing temperature statistics request"
    );

    match state.queries.temperature_stats(start, end).await {
        Ok(stats) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                empty = stats.is_empty(),
                "Temperature statistics request successful"
            );

            Json(stats).into_response()
        }
        Err(error) => {
            let params = format!("start={}, end={}", start, end.unwrap_or("none"));
            handle_query_error(error, ENDPOINT, &request_id, Some(&params))
        }
    }
}
