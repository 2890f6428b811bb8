//! Test data generation utilities.
//!
//! This module builds small SQLite files shaped like the Hawaii climate
//! dataset, with known rows so query results can be computed by hand.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use std::path::Path;

type Result<T> = std::result::Result<T, sqlx::Error>;

/// Reference date the fixtures are built around
pub const REFERENCE_DATE: &str = "2017-08-23";

/// First date of the trailing-year window ending at [`REFERENCE_DATE`]
pub const WINDOW_START: &str = "2016-08-23";

/// Station with the most measurements in [`sample_measurements`]
pub const MOST_ACTIVE_STATION: &str = "USC001";

/// A measurement row as inserted into the fixture
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRow {
    pub station: &'static str,
    pub date: String,
    pub prcp: Option<f64>,
    pub tobs: f64,
}

fn row(station: &'static str, date: &str, prcp: Option<f64>, tobs: f64) -> MeasurementRow {
    MeasurementRow {
        station,
        date: date.to_string(),
        prcp,
        tobs,
    }
}

/// Stations of the fixture; USC003 never reports a measurement
pub fn sample_stations() -> Vec<(&'static str, &'static str)> {
    vec![
        ("USC001", "WAIKIKI 717.2, HI US"),
        ("USC002", "KANEOHE 838.1, HI US"),
        ("USC003", "KUALOA RANCH HEADQUARTERS 886.9, HI US"),
    ]
}

/// Measurements of the fixture.
///
/// USC001 reports 14 rows and USC002 reports 6; each has two rows before
/// the trailing-year window.
pub fn sample_measurements() -> Vec<MeasurementRow> {
    let mut rows = vec![
        row("USC001", "2016-08-01", Some(0.3), 80.0),
        row("USC001", "2016-08-22", Some(0.0), 81.0),
        row("USC002", "2016-07-04", Some(1.1), 77.0),
        row("USC002", "2016-08-20", None, 78.0),
    ];

    for day in 1..=10 {
        let prcp = if day == 5 { None } else { Some(day as f64 * 0.25) };
        rows.push(row(
            "USC001",
            &format!("2017-01-{:02}", day),
            prcp,
            60.0 + day as f64,
        ));
    }

    // Shared with USC001 and inserted after it; the 2017-01-03 reading is missing
    for day in 1..=3 {
        let prcp = if day == 3 { None } else { Some(0.0) };
        rows.push(row(
            "USC002",
            &format!("2017-01-{:02}", day),
            prcp,
            70.0 + day as f64,
        ));
    }

    rows.push(row("USC001", "2017-08-01", Some(0.02), 77.0));
    rows.push(row("USC001", "2017-08-23", Some(0.0), 79.0));
    rows.push(row("USC002", "2017-08-10", Some(0.5), 82.0));

    rows
}

async fn connect(path: &Path) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    SqlitePool::connect_with(options).await
}

async fn create_station_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT,
            name TEXT,
            latitude FLOAT,
            longitude FLOAT,
            elevation FLOAT
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Creates a SQLite file holding [`sample_stations`] and [`sample_measurements`].
pub async fn create_sample_db(path: &Path) -> Result<()> {
    let pool = connect(path).await?;

    create_station_table(&pool).await?;
    sqlx::query(
        "CREATE TABLE measurement (
            id INTEGER PRIMARY KEY,
            station TEXT,
            date TEXT,
            prcp FLOAT,
            tobs FLOAT
        )",
    )
    .execute(&pool)
    .await?;

    for (i, (station, name)) in sample_stations().into_iter().enumerate() {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(station)
        .bind(name)
        .bind(21.27 + i as f64 * 0.1)
        .bind(-157.82 + i as f64 * 0.1)
        .bind(3.0 + i as f64 * 4.0)
        .execute(&pool)
        .await?;
    }

    for m in sample_measurements() {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(m.station)
            .bind(&m.date)
            .bind(m.prcp)
            .bind(m.tobs)
            .execute(&pool)
            .await?;
    }

    pool.close().await;
    Ok(())
}

/// Creates a SQLite file with a station table but no measurement table.
pub async fn create_db_without_measurements(path: &Path) -> Result<()> {
    let pool = connect(path).await?;
    create_station_table(&pool).await?;
    pool.close().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_measurements_shape() {
        let rows = sample_measurements();
        let usc001 = rows.iter().filter(|r| r.station == "USC001").count();
        let usc002 = rows.iter().filter(|r| r.station == "USC002").count();

        assert_eq!(usc001, 14);
        assert_eq!(usc002, 6);
        assert!(rows.iter().all(|r| r.station != "USC003"));
    }
}
