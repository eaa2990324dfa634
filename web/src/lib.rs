//! Axum HTTP surface for the to-do service.
//!
//! This crate is the imperative shell around `todo-core`: it parses requests,
//! calls one `TodoStore` operation, and maps the outcome to a response.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Imperative Shell (Axum)         │  ← HTTP, JSON, request ids
//! │  - Body validation (422)                │  ← Tracing spans
//! │  - Error → status mapping (404, 500)    │
//! ├─────────────────────────────────────────┤
//! │         todo-core                       │
//! │  - Priority rule, list operations       │  ← Pure, tested in memory
//! │  - load → mutate → save per request     │  ← Repository trait
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives and gets an `x-request-id`
//! 2. **Extract** path id and JSON body (rejections become `AppError`)
//! 3. **Call** the matching `TodoStore` operation
//! 4. **Map** the item or `TodoError` to an HTTP response
//!
//! # Example
//!
//! ```no_run
//! use todo_core::{JsonFileRepository, TodoStore};
//! use todo_web::{todo_router, AppState};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = TodoStore::with_uuid_ids(Arc::new(JsonFileRepository::new("todo.json")));
//! let app = todo_router(AppState::new(store, "templates/index.html"));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

// Re-export key types for convenience
pub use error::AppError;
pub use extractors::JsonBody;
pub use middleware::{with_request_tracing, REQUEST_ID_HEADER};
pub use router::todo_router;
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
