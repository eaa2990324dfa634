//! To-do HTTP router.
//!
//! Composes every handler into a single Axum router.

use crate::handlers;
use crate::middleware::with_request_tracing;
use crate::state::AppState;
use axum::{
    routing::{get, patch, put},
    Router,
};

/// Create the to-do router with all endpoints.
///
/// # Routes
///
/// - `GET /` - HTML page
/// - `GET /todos` - List items
/// - `POST /todos` - Create an item
/// - `PUT /todos/:id` - Replace an item
/// - `DELETE /todos/:id` - Delete an item
/// - `PATCH /todos/:id/toggle` - Flip completion
/// - `PATCH /todos/:id/priority` - Change priority
/// - `GET /health` - Liveness
/// - `GET /health/ready` - Readiness (backing document loads)
///
/// # Example
///
/// ```rust,ignore
/// let app = todo_router(AppState::new(store, "templates/index.html"));
/// axum::serve(listener, app).await?;
/// ```
pub fn todo_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::index))
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/:id",
            put(handlers::replace_todo).delete(handlers::delete_todo),
        )
        .route("/todos/:id/toggle", patch(handlers::toggle_todo))
        .route("/todos/:id/priority", patch(handlers::update_priority))
        .route("/health", get(handlers::health_check))
        .route("/health/ready", get(handlers::readiness))
        .with_state(state);

    with_request_tracing(routes)
}
