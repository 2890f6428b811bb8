//! SQLite data source.
//!
//! Opens the dataset read-only behind a small connection pool and checks
//! its layout against [`crate::schema`] before anything is served.

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::error::{ClimateError, Result};
use crate::models::DatasetSummary;
use crate::schema;

/// A request-scoped connection, returned to the pool when dropped
pub type Session = PoolConnection<Sqlite>;

/// Handle to the climate dataset, cheap to clone and shared across requests
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the dataset described by `config`
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self> {
        Self::open(
            &config.path,
            config.max_connections,
            config.acquire_timeout(),
        )
        .await
    }

    /// Open an existing SQLite file read-only and verify its schema.
    ///
    /// The file is never created; a missing file, an unreadable file or a
    /// schema mismatch all fail here.
    pub async fn open(path: &Path, max_connections: u32, acquire_timeout: Duration) -> Result<Self> {
        if !path.exists() {
            return Err(ClimateError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database file not found: {}", path.display()),
            )));
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect_with(options)
            .await?;

        info!("Opened SQLite database: {}", path.display());

        let db = Self { pool };

        {
            let mut conn = db.session().await?;
            schema::verify(&mut conn).await?;
        }
        debug!(version = schema::SCHEMA_VERSION, "Schema verified");

        Ok(db)
    }

    /// Acquire a pooled connection for one query operation
    pub async fn session(&self) -> Result<Session> {
        Ok(self.pool.acquire().await?)
    }

    /// Row counts and date span of the dataset
    pub async fn dataset_summary(&self) -> Result<DatasetSummary> {
        let mut conn = self.session().await?;
        let summary = sqlx::query_as::<_, DatasetSummary>(
            "SELECT
                (SELECT COUNT(*) FROM station) AS station_count,
                (SELECT COUNT(*) FROM measurement) AS measurement_count,
                (SELECT MIN(date) FROM measurement) AS first_date,
                (SELECT MAX(date) FROM measurement) AS last_date",
        )
        .fetch_one(&mut *conn)
        .await?;

        Ok(summary)
    }

    /// Newest measurement date, `None` for an empty table
    pub async fn latest_measurement_date(&self) -> Result<Option<String>> {
        let mut conn = self.session().await?;
        let latest: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
            .fetch_one(&mut *conn)
            .await?;

        Ok(latest)
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
