//! Route table for the climate API.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::handlers::{
    index_handler, precipitation_handler, stations_handler, temperature_range_handler,
    temperature_start_handler, tobs_handler,
};
use crate::logging::create_http_trace_layer;
use crate::state::AppState;

/// Build the router serving every API route
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/temp/:start", get(temperature_start_handler))
        .route("/api/v1.0/temp/:start/:end", get(temperature_range_handler))
        .layer(
            ServiceBuilder::new()
                .layer(create_http_trace_layer())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
