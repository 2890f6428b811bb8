//! Application state management for climate-api.
//!
//! This module defines the shared state that is passed to all handlers:
//! the resolved configuration and the query service wrapping the
//! database handle.

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

use crate::config::{Config, ReferenceDate, DATE_FORMAT};
use crate::db::Database;
use crate::error::{ClimateError, Result};
use crate::queries::QueryService;

/// The main application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Read operations over the dataset
    pub queries: QueryService,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Config, queries: QueryService) -> Self {
        Self { config, queries }
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(config: Config, queries: QueryService) -> Arc<Self> {
        Arc::new(Self::new(config, queries))
    }

    /// Open the configured database and resolve the reference date
    pub async fn initialize(config: Config) -> Result<Self> {
        let db = Database::from_config(&config.database).await?;
        let reference_date = resolve_reference_date(config.reference_date()?, &db).await?;

        info!(
            reference_date = %reference_date,
            "Trailing-year window ends at reference date"
        );

        Ok(Self::new(config, QueryService::new(db, reference_date)))
    }

    pub fn database(&self) -> &Database {
        self.queries.database()
    }
}

/// Turn the configured reference date into a calendar date.
///
/// `Latest` reads the newest measurement once; an empty table cannot
/// provide one and is rejected.
pub async fn resolve_reference_date(reference: ReferenceDate, db: &Database) -> Result<NaiveDate> {
    match reference {
        ReferenceDate::Fixed(date) => Ok(date),
        ReferenceDate::Latest => {
            let latest = db
                .latest_measurement_date()
                .await?
                .ok_or_else(|| ClimateError::Config {
                    message: "reference date \"latest\" requires at least one measurement"
                        .to_string(),
                })?;

            NaiveDate::parse_from_str(&latest, DATE_FORMAT).map_err(|e| ClimateError::Config {
                message: format!("Newest measurement date {} is not YYYY-MM-DD: {}", latest, e),
            })
        }
    }
}
