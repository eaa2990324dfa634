//! To-do endpoints.
//!
//! Each handler is one store call. Bodies are validated by [`JsonBody`]
//! before the handler runs; unknown ids come back from the store as
//! `NotFound` and render as 404.

use crate::WebResult;
use crate::extractors::JsonBody;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use todo_core::{NewTodo, PriorityChange, TodoItem, TodoReplacement};

/// Message returned after a successful delete.
pub const DELETED_MESSAGE: &str = "To-Do item deleted";

/// Confirmation body for `DELETE /todos/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always [`DELETED_MESSAGE`]
    pub message: String,
}

/// List every item in document order.
///
/// ```text
/// GET /todos
/// ```
pub async fn list_todos(State(state): State<AppState>) -> WebResult<Json<Vec<TodoItem>>> {
    Ok(Json(state.store.list().await?))
}

/// Create an item.
///
/// ```text
/// POST /todos
/// Content-Type: application/json
///
/// { "title": "Buy milk", "description": "2 litres", "completed": false, "priority": 3.0 }
/// ```
///
/// `completed` and `priority` are optional. Without a priority the item is
/// placed after every open item.
pub async fn create_todo(
    State(state): State<AppState>,
    JsonBody(new): JsonBody<NewTodo>,
) -> WebResult<Json<TodoItem>> {
    Ok(Json(state.store.create(new).await?))
}

/// Replace every field of an item except its id.
///
/// ```text
/// PUT /todos/:id
/// Content-Type: application/json
///
/// { "id": "ignored", "title": "...", "description": "...", "completed": true, "priority": 10.0 }
/// ```
pub async fn replace_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(replacement): JsonBody<TodoReplacement>,
) -> WebResult<Json<TodoItem>> {
    Ok(Json(state.store.replace(&id, replacement).await?))
}

/// Flip the completion flag.
///
/// ```text
/// PATCH /todos/:id/toggle
/// ```
pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebResult<Json<TodoItem>> {
    Ok(Json(state.store.toggle(&id).await?))
}

/// Overwrite the priority only.
///
/// ```text
/// PATCH /todos/:id/priority
/// Content-Type: application/json
///
/// { "priority": 5.5 }
/// ```
pub async fn update_priority(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(change): JsonBody<PriorityChange>,
) -> WebResult<Json<TodoItem>> {
    Ok(Json(state.store.set_priority(&id, change.priority).await?))
}

/// Delete an item.
///
/// ```text
/// DELETE /todos/:id
/// ```
///
/// Answers `{"message": "To-Do item deleted"}`; a second delete of the same
/// id is a 404.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebResult<Json<DeleteResponse>> {
    state.store.delete(&id).await?;
    Ok(Json(DeleteResponse {
        message: DELETED_MESSAGE.to_string(),
    }))
}
