//! # lift-api binary
//!
//! ## Usage
//! ```bash
//! lift-api                       # defaults, ./lift.db, port 4567
//! lift-api --config ./lift.toml  # explicit config file
//! LIFT_PORT=8080 lift-api        # environment override
//! ```

use std::path::PathBuf;

use anyhow::Context;
use lift_api::{router, AppState, ServerConfig};
use lift_db::{Database, DbConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path_from_args()).context("loading configuration")?;

    init_tracing(&config.logging.filter);

    info!(
        bind = %config.bind_address(),
        database = %config.database.path.display(),
        "Starting lift pass pricing service"
    );

    let db_config = DbConfig::new(config.database.path.clone())
        .max_connections(config.database.max_connections)
        .min_connections(1);
    let db_config = if db_config.is_in_memory() {
        DbConfig::in_memory()
    } else {
        db_config
    };

    let db = Database::new(db_config)
        .await
        .context("opening database")?;

    let app = router(AppState::from_database(&db));

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("binding {}", config.bind_address()))?;

    info!(addr = %config.bind_address(), "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber. `RUST_LOG` wins over `default_filter`.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Reads `--config <path>` / `-c <path>` from the command line.
fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" || arg == "-c" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
