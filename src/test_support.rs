//! Fixture datasets for unit tests.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use std::path::Path;

use crate::models::{Measurement, Station};

pub fn station(id: &str) -> Station {
    Station {
        station: id.to_string(),
        name: format!("{} TEST STATION, HI US", id),
        latitude: 21.2716,
        longitude: -157.8168,
        elevation: 3.0,
    }
}

pub fn measurement(id: i64, station: &str, date: &str, prcp: Option<f64>, tobs: f64) -> Measurement {
    Measurement {
        id,
        station: station.to_string(),
        date: date.to_string(),
        prcp,
        tobs,
    }
}

/// Create a SQLite file with the station and measurement tables filled in
pub async fn seed_database(path: &Path, stations: &[Station], measurements: &[Measurement]) {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await.unwrap();

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
    .execute(&pool)
    .await
    .unwrap();

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
    .await
    .unwrap();

    for s in stations {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&s.station)
        .bind(&s.name)
        .bind(s.latitude)
        .bind(s.longitude)
        .bind(s.elevation)
        .execute(&pool)
        .await
        .unwrap();
    }

    for m in measurements {
        sqlx::query("INSERT INTO measurement (id, station, date, prcp, tobs) VALUES (?, ?, ?, ?, ?)")
            .bind(m.id)
            .bind(&m.station)
            .bind(&m.date)
            .bind(m.prcp)
            .bind(m.tobs)
            .execute(&pool)
            .await
            .unwrap();
    }

    pool.close().await;
}
