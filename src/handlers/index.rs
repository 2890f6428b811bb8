//! Root endpoint handler.
//!
//! Lists the available API routes.

use axum::response::Html;

/// Route listing served at `/`
pub const INDEX_TEXT: &str = concat!(
    "Available Routes:<br/>",
    "/api/v1.0/precipitation<br/>",
    "/api/v1.0/stations<br/>",
    "/api/v1.0/tobs<br/>",
    "Enter START Date YYYY-MM-DD:<br/>",
    "/api/v1.0/temp/<start><br/>",
    "Enter START and END Date YYYY-MM-DD:<br/>",
    "/api/v1.0/temp/<start>/<end>",
);

/// Handle GET / requests
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_TEXT)
}
