//! climate-api - a read-only JSON API over a SQLite climate dataset
//!
//! This is the main entry point for the climate-api application.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::signal;
use tracing::{error, info};

use climate_api::{
    create_router, init_tracing, log_dataset_stats, log_error, log_operation_end,
    log_operation_start, AppState, ClimateError, Config, Result,
};

fn main() -> Result<()> {
    let config = Config::load()?;

    init_tracing(&config.log_level);

    info!("Starting climate-api v{}", env!("CARGO_PKG_VERSION"));

    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    if let Some(workers) = config.server.workers {
        builder.worker_threads(workers);
    }
    let runtime = builder.enable_all().build()?;

    runtime.block_on(run(config))
}

async fn run(config: Config) -> Result<()> {
    let db_path = config.database.path.display().to_string();

    // Open the database and verify its schema before accepting requests
    log_operation_start("open_database", Some(db_path.as_str()));
    let start = Instant::now();
    let app_state = match AppState::initialize(config.clone()).await {
        Ok(state) => {
            log_operation_end("open_database", start, true);
            state
        }
        Err(e) => {
            log_operation_end("open_database", start, false);
            log_error(&e, "Failed to open database");
            return Err(e);
        }
    };

    let summary = app_state.database().dataset_summary().await?;
    log_dataset_stats(&db_path, &summary);

    // Wrap in Arc for sharing
    let state = Arc::new(app_state);
    let app = create_router(state.clone());

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| ClimateError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ClimateError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ClimateError::Server {
            message: format!("Server error: {}", e),
        })?;

    state.database().close().await;

    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
