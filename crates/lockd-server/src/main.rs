//! Main entry point for the Lockd server.
//!
//! This file loads the configuration, opens the lock store, and starts
//! the HTTP server that fronts it.

use std::sync::Arc;

use lockd_core::LockService;
use lockd_server::{
    metrics,
    model::{AppState, Configuration},
    startup::{self, GracefulShutdown},
};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize configuration and logging
    let configuration = Configuration::new();

    let logging_config = configuration.logging_config();
    let _logging_guard = startup::init_logging(&logging_config)?;

    // Initialize metrics for observability
    let metrics_handle = metrics::init_metrics()?;

    // Extract configuration parameters
    let server_address = configuration.server_address();
    let server_main_port = configuration.server_main_port();
    let store_backend = configuration.store_backend();
    let shutdown_timeout = configuration.shutdown_timeout();

    // Open the lock store
    let store = startup::build_store(&store_backend, &configuration.store_data_dir())?;

    // Create application state
    let app_state = Arc::new(AppState {
        configuration,
        lock_service: Arc::new(LockService::new(store)),
    });

    // Initialize graceful shutdown handler
    let shutdown_signal = startup::wait_for_shutdown_signal().await;
    let graceful_shutdown = GracefulShutdown::new(shutdown_signal.clone(), shutdown_timeout);

    info!(
        "Starting lockd server on {}:{}",
        server_address, server_main_port
    );
    let server = startup::main_server(
        app_state.clone(),
        metrics_handle,
        server_address,
        server_main_port,
    )?;

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
            }
        }
        _ = graceful_shutdown.wait_for_shutdown() => {
            info!("Lockd server shutting down gracefully");
        }
    }

    info!("Lockd server shutdown complete");
    Ok(())
}
