//! Configuration management for climate-api.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ClimateError, Result};

/// Last date present in the original seed dataset.
pub const DEFAULT_REFERENCE_DATE: &str = "2017-08-23";

/// Storage format of every date column and date parameter.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Command-line arguments for climate-api
#[derive(Parser, Debug)]
#[command(name = "climate-api")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the SQLite database to serve
    #[arg(env = "CLIMATE_DATABASE")]
    pub database: Option<PathBuf>,

    /// Host address to bind to
    #[arg(short = 'H', long, env = "CLIMATE_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "CLIMATE_PORT")]
    pub port: Option<u16>,

    /// Number of worker threads
    #[arg(short, long, env = "CLIMATE_WORKERS")]
    pub workers: Option<usize>,

    /// Maximum number of pooled database connections
    #[arg(long, env = "CLIMATE_MAX_CONNECTIONS")]
    pub max_connections: Option<u32>,

    /// Seconds to wait for a pooled connection
    #[arg(long, env = "CLIMATE_ACQUIRE_TIMEOUT")]
    pub acquire_timeout: Option<u64>,

    /// End of the trailing-year window: YYYY-MM-DD, or "latest" for the newest measurement
    #[arg(long, env = "CLIMATE_REFERENCE_DATE")]
    pub reference_date: Option<String>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "CLIMATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CLIMATE_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads (None = number of CPU cores)
    #[serde(default)]
    pub workers: Option<usize>,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite file
    #[serde(default = "default_database_path")]
    pub path: PathBuf,

    /// Pool size
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Pool acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    /// How long a request waits for a pooled connection
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

/// How the end of the trailing-year window is determined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceDate {
    /// A fixed calendar date
    Fixed(NaiveDate),
    /// The newest measurement date, resolved once at startup
    Latest,
}

impl std::str::FromStr for ReferenceDate {
    type Err = ClimateError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("latest") {
            return Ok(ReferenceDate::Latest);
        }

        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(ReferenceDate::Fixed)
            .map_err(|e| ClimateError::Config {
                message: format!(
                    "Invalid reference date: {}. Must be YYYY-MM-DD or \"latest\" ({})",
                    s, e
                ),
            })
    }
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Trailing-year reference date ("YYYY-MM-DD" or "latest")
    #[serde(default = "default_reference_date")]
    pub reference_date: String,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Build configuration from already-parsed arguments
    pub fn from_args(args: Args) -> Result<Self> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments and environment
        if let Some(database) = args.database {
            config.database.path = database;
        }
        if let Some(host) = args.host {
            config.server.host = host;
        }
        if let Some(port) = args.port {
            config.server.port = port;
        }
        if args.workers.is_some() {
            config.server.workers = args.workers;
        }
        if let Some(max_connections) = args.max_connections {
            config.database.max_connections = max_connections;
        }
        if let Some(acquire_timeout) = args.acquire_timeout {
            config.database.acquire_timeout_secs = acquire_timeout;
        }
        if let Some(reference_date) = args.reference_date {
            config.reference_date = reference_date;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.server.host = other.server.host;
        self.server.port = other.server.port;
        if other.server.workers.is_some() {
            self.server.workers = other.server.workers;
        }
        self.database = other.database;
        self.reference_date = other.reference_date;
        self.log_level = other.log_level;
    }

    /// Parsed trailing-year reference date
    pub fn reference_date(&self) -> Result<ReferenceDate> {
        self.reference_date.parse()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(ClimateError::Config {
                message: "Server host cannot be empty".to_string(),
            });
        }

        // Validate port (0 is not a valid port for users)
        if self.server.port == 0 {
            return Err(ClimateError::Config {
                message: "Server port cannot be 0".to_string(),
            });
        }

        if self.server.workers == Some(0) {
            return Err(ClimateError::Config {
                message: "Worker count cannot be 0".to_string(),
            });
        }

        if self.database.max_connections == 0 {
            return Err(ClimateError::Config {
                message: "Database max_connections cannot be 0".to_string(),
            });
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ClimateError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        self.reference_date()?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            reference_date: default_reference_date(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
        }
    }
}

// Default value functions for serde
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_database_path() -> PathBuf {
    PathBuf::from("Resources/hawaii.sqlite")
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    30
}

fn default_reference_date() -> String {
    DEFAULT_REFERENCE_DATE.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
