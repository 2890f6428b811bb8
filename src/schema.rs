//! Expected layout of the climate dataset.
//!
//! The service never creates or migrates tables. Instead the columns it
//! reads are declared here and checked against the live file at startup.

use sqlx::sqlite::SqliteConnection;
use sqlx::Row;
use tracing::debug;

use crate::error::{ClimateError, Result};

/// Revision of the table definitions below
pub const SCHEMA_VERSION: u32 = 1;

/// Required columns of one table
#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

/// Weather stations
pub const STATION: TableSchema = TableSchema {
    name: "station",
    columns: &["station", "name", "latitude", "longitude", "elevation"],
};

/// Daily observations
pub const MEASUREMENT: TableSchema = TableSchema {
    name: "measurement",
    columns: &["id", "station", "date", "prcp", "tobs"],
};

/// Every table the service reads from
pub const TABLES: [TableSchema; 2] = [STATION, MEASUREMENT];

impl TableSchema {
    /// Names of required columns missing from `present`
    pub fn missing_columns(&self, present: &[String]) -> Vec<&'static str> {
        self.columns
            .iter()
            .filter(|column| !present.iter().any(|p| p.eq_ignore_ascii_case(column)))
            .copied()
            .collect()
    }

    /// Column names of this table in the live file; empty if the table does not exist
    async fn live_columns(&self, conn: &mut SqliteConnection) -> Result<Vec<String>> {
        let rows = sqlx::query("SELECT name FROM pragma_table_info(?)")
            .bind(self.name)
            .fetch_all(&mut *conn)
            .await?;

        Ok(rows.iter().map(|row| row.get::<String, _>("name")).collect())
    }
}

/// Check every table definition against the live file.
///
/// All problems are collected into a single error so one failed start
/// reports the whole mismatch.
pub async fn verify(conn: &mut SqliteConnection) -> Result<()> {
    let mut problems = Vec::new();

    for table in TABLES {
        let present = table.live_columns(conn).await?;
        debug!(table = table.name, columns = ?present, "Inspected table");

        if present.is_empty() {
            problems.push(format!("table {} is missing", table.name));
            continue;
        }

        let missing = table.missing_columns(&present);
        if !missing.is_empty() {
            problems.push(format!(
                "table {} is missing columns: {}",
                table.name,
                missing.join(", ")
            ));
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ClimateError::Schema {
            message: format!("schema v{}: {}", SCHEMA_VERSION, problems.join("; ")),
        })
    }
}
