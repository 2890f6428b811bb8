//! Records read from the climate dataset.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A weather station
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Station identifier, e.g. "USC00519281"
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// One daily observation
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub id: i64,
    /// Identifier of the reporting station
    pub station: String,
    /// ISO date, "YYYY-MM-DD"
    pub date: String,
    /// Precipitation; absent readings stay `None`, never zero
    pub prcp: Option<f64>,
    /// Observed temperature
    pub tobs: f64,
}

/// A dated temperature reading
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct TemperatureObservation {
    pub date: String,
    pub tobs: f64,
}

/// Minimum, mean and maximum temperature over a date range.
///
/// All three fields are `None` when no measurement falls in the range.
#[derive(Debug, Clone, Copy, PartialEq, FromRow, Serialize, Deserialize)]
pub struct TemperatureStats {
    #[serde(rename = "TMIN")]
    pub tmin: Option<f64>,
    #[serde(rename = "TAVG")]
    pub tavg: Option<f64>,
    #[serde(rename = "TMAX")]
    pub tmax: Option<f64>,
}

impl TemperatureStats {
    /// True when no rows contributed to the aggregate
    pub fn is_empty(&self) -> bool {
        self.tmin.is_none() && self.tavg.is_none() && self.tmax.is_none()
    }
}

/// Number of measurements reported by a station
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct StationActivity {
    pub station: String,
    pub count: i64,
}

/// Size and date span of the loaded dataset
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct DatasetSummary {
    pub station_count: i64,
    pub measurement_count: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}
