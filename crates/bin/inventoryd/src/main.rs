//! # inventoryd: device inventory daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`inventory.toml` plus environment overrides)
//! - Initialize structured logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the repository and readiness probe (adapters)
//! - Construct the device service, injecting the repository via its port
//! - Build the axum router and serve it until SIGINT or SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use inventory_adapter_http_axum::state::AppState;
use inventory_adapter_storage_sqlite_sqlx::{
    Config as DatabaseConfig, SqliteDeviceRepository, SqliteReadinessProbe,
};
use inventory_app::services::device_service::DeviceService;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Database
    let db = DatabaseConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Adapters
    let device_repo = SqliteDeviceRepository::new(pool.clone());
    let readiness = SqliteReadinessProbe::new(pool);

    // HTTP
    let state = AppState::new(DeviceService::new(device_repo), readiness);
    let app = inventory_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "inventoryd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.pool().close().await;
    tracing::info!("inventoryd stopped");
    Ok(())
}

/// Resolves on the first of SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
