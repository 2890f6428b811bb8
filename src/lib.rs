//! # climate-api
//!
//! A read-only JSON API over a pre-populated SQLite climate dataset of
//! weather stations and their daily measurements.
//!
//! ## Routes
//!
//! - `/api/v1.0/precipitation`: date → precipitation over the trailing year
//! - `/api/v1.0/stations`: stations that have reported measurements
//! - `/api/v1.0/tobs`: trailing-year temperatures of the most active station
//! - `/api/v1.0/temp/{start}` and `/api/v1.0/temp/{start}/{end}`: `{TMIN, TAVG, TMAX}`
//!
//! ## Architecture
//!
//! - **Data Layer**: [`db`] opens the dataset read-only and checks it against [`schema`]
//! - **Query Layer**: [`queries`] runs one bounded read per operation
//! - **API Layer**: [`router`] and [`handlers`] expose the queries over HTTP

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod queries;
pub mod router;
pub mod schema;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use db::Database;
pub use error::{ClimateError, Result};
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_dataset_stats, log_error,
    log_operation_end, log_operation_start, log_request_error,
};
pub use models::{Measurement, Station, TemperatureObservation, TemperatureStats};
pub use queries::QueryService;
pub use router::create_router;
pub use state::AppState;
