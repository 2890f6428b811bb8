//! The four read operations exposed by the API.
//!
//! Each operation acquires its own pooled connection, runs a bounded
//! query and hands back plain records. Date filters compare ISO strings
//! as stored; request-supplied dates are passed through unvalidated.

use chrono::{Duration, NaiveDate};
use sqlx::sqlite::SqliteConnection;
use std::collections::BTreeMap;
use tracing::debug;

use crate::config::DATE_FORMAT;
use crate::db::Database;
use crate::error::Result;
use crate::models::{StationActivity, TemperatureObservation, TemperatureStats};

/// Length of the trailing window ending at the reference date
pub const TRAILING_WINDOW_DAYS: i64 = 365;

/// Precipitation keyed by date, ascending
pub type PrecipitationHistory = BTreeMap<String, Option<f64>>;

const STATS_FROM: &str = "SELECT CAST(MIN(tobs) AS REAL) AS tmin,
        AVG(tobs) AS tavg,
        CAST(MAX(tobs) AS REAL) AS tmax
     FROM measurement
     WHERE date >= ?";

const STATS_BETWEEN: &str = "SELECT CAST(MIN(tobs) AS REAL) AS tmin,
        AVG(tobs) AS tavg,
        CAST(MAX(tobs) AS REAL) AS tmax
     FROM measurement
     WHERE date >= ? AND date <= ?";

/// Read-only queries over the climate dataset
#[derive(Debug, Clone)]
pub struct QueryService {
    db: Database,
    reference_date: NaiveDate,
}

impl QueryService {
    pub fn new(db: Database, reference_date: NaiveDate) -> Self {
        Self { db, reference_date }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// End of the trailing-year window
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// First date inside the trailing-year window, formatted like the stored dates
    pub fn window_start(&self) -> String {
        (self.reference_date - Duration::days(TRAILING_WINDOW_DAYS))
            .format(DATE_FORMAT)
            .to_string()
    }

    /// Precipitation for every measurement in the trailing year.
    ///
    /// Rows from different stations that share a date collapse into one
    /// entry; the last row returned wins.
    pub async fn precipitation_history(&self) -> Result<PrecipitationHistory> {
        let start = self.window_start();
        let mut conn = self.db.session().await?;

        let rows: Vec<(String, Option<f64>)> = sqlx::query_as(
            "SELECT date, CAST(prcp AS REAL) AS prcp FROM measurement WHERE date >= ?",
        )
        .bind(&start)
        .fetch_all(&mut *conn)
        .await?;

        debug!(start = %start, rows = rows.len(), "Fetched precipitation rows");

        Ok(rows.into_iter().collect())
    }

    /// Identifiers of every station with at least one measurement
    pub async fn list_stations(&self) -> Result<Vec<String>> {
        let mut conn = self.db.session().await?;

        let stations: Vec<String> =
            sqlx::query_scalar("SELECT station FROM measurement GROUP BY station")
                .fetch_all(&mut *conn)
                .await?;

        Ok(stations)
    }

    /// Measurement counts per station, busiest first
    pub async fn station_activity(&self) -> Result<Vec<StationActivity>> {
        let mut conn = self.db.session().await?;
        station_activity(&mut conn).await
    }

    /// Trailing-year temperatures of the station with the most measurements.
    ///
    /// An empty measurement table yields an empty list.
    pub async fn trailing_year_temperatures(&self) -> Result<Vec<TemperatureObservation>> {
        let start = self.window_start();
        let mut conn = self.db.session().await?;

        let Some(most_active) = station_activity(&mut conn).await?.into_iter().next() else {
            return Ok(Vec::new());
        };

        debug!(
            station = %most_active.station,
            count = most_active.count,
            "Most active station"
        );

        let observations = sqlx::query_as::<_, TemperatureObservation>(
            "SELECT date, CAST(tobs AS REAL) AS tobs
             FROM measurement
             WHERE date >= ? AND station = ?",
        )
        .bind(&start)
        .bind(&most_active.station)
        .fetch_all(&mut *conn)
        .await?;

        Ok(observations)
    }

    /// Minimum, mean and maximum temperature from `start`, up to `end` when given.
    ///
    /// Both bounds are inclusive. No matching rows is not an error: every
    /// field of the result is `None`.
    pub async fn temperature_stats(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureStats> {
        let mut conn = self.db.session().await?;

        let stats = match end {
            Some(end) => {
                sqlx::query_as::<_, TemperatureStats>(STATS_BETWEEN)
                    .bind(start)
                    .bind(end)
                    .fetch_one(&mut *conn)
                    .await?
            }
            None => {
                sqlx::query_as::<_, TemperatureStats>(STATS_FROM)
                    .bind(start)
                    .fetch_one(&mut *conn)
                    .await?
            }
        };

        Ok(stats)
    }
}

async fn station_activity(conn: &mut SqliteConnection) -> Result<Vec<StationActivity>> {
    let activity = sqlx::query_as::<_, StationActivity>(
        "SELECT station, COUNT(id) AS count
         FROM measurement
         GROUP BY station
         ORDER BY COUNT(id) DESC",
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(activity)
}
