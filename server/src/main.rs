//! To-do HTTP server.
//!
//! Serves the JSON API and the HTML page over a single flat JSON file.
//!
//! # Usage
//!
//! ```bash
//! TODO_FILE=todo.json TODO_PORT=8000 cargo run --bin todo-server
//! ```

mod config;

use crate::config::{Config, DEFAULT_LOG_FILTER};
use std::sync::Arc;
use todo_core::{JsonFileRepository, TodoStore};
use todo_web::{AppState, todo_router};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is not an error
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_new(&config.server.log_filter)
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting to-do server");
    info!(
        todo_file = %config.storage.todo_file.display(),
        index_path = %config.storage.index_path.display(),
        "Configuration loaded"
    );

    let repository = JsonFileRepository::new(config.storage.todo_file.clone());
    let store = TodoStore::with_uuid_ids(Arc::new(repository));
    let state = AppState::new(store, config.storage.index_path.clone());
    let app = todo_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
///
/// If a handler cannot be installed the failure is logged and that branch
/// never resolves.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
