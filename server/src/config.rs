//! Configuration management for the to-do server.
//!
//! Loads configuration from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "todo_server=info,todo_web=info,todo_core=info,tower_http=debug";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Backing document and page locations
    pub storage: StorageConfig,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Tracing filter directives
    pub log_filter: String,
}

/// File locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// JSON document holding every item
    pub todo_file: PathBuf,
    /// HTML page served at `/`
    pub index_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `TODO_HOST` | `0.0.0.0` |
    /// | `TODO_PORT` | `8000` |
    /// | `TODO_FILE` | `todo.json` |
    /// | `TODO_INDEX_PATH` | `templates/index.html` |
    /// | `RUST_LOG` | [`DEFAULT_LOG_FILTER`] |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Unparseable numbers fall back to their defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            server: ServerConfig {
                host: lookup("TODO_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: lookup("TODO_PORT")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(8000),
                log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            },
            storage: StorageConfig {
                todo_file: lookup("TODO_FILE")
                    .map_or_else(|| PathBuf::from("todo.json"), PathBuf::from),
                index_path: lookup("TODO_INDEX_PATH")
                    .map_or_else(|| PathBuf::from("templates/index.html"), PathBuf::from),
            },
        }
    }

    /// Address the listener binds to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
