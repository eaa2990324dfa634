//! HTML front page.

use crate::{AppError, WebResult};
use crate::state::AppState;
use anyhow::Context;
use axum::{extract::State, response::Html};

/// Serve the HTML page from disk.
///
/// The file is read on every request, so edits show up without a restart.
///
/// ```text
/// GET /
/// ```
pub async fn index(State(state): State<AppState>) -> WebResult<Html<String>> {
    let content = tokio::fs::read_to_string(&state.index_path)
        .await
        .with_context(|| format!("reading {}", state.index_path.display()))
        .map_err(|err| AppError::internal("Failed to load page").with_source(err))?;
    Ok(Html(content))
}
