//! Health check endpoints.
//!
//! These endpoints are used by load balancers and monitoring systems
//! to verify service health.

use crate::{AppError, WebResult};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

/// Simple health check endpoint (for basic liveness).
///
/// Returns 200 OK to indicate the service is running.
/// This endpoint does NOT touch the backing document.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// Readiness report.
#[derive(Debug, Clone, Serialize)]
pub struct Readiness {
    /// Always `"ready"` when returned
    pub status: &'static str,
    /// Number of items in the backing document
    pub items: usize,
}

/// Health check against the backing document (for readiness).
///
/// # Status Codes
///
/// - 200 OK: the document loads
/// - 503 Service Unavailable: the document cannot be read or parsed
///
/// # Endpoint
///
/// ```text
/// GET /health/ready
/// ```
///
/// # Response
///
/// ```json
/// { "status": "ready", "items": 3 }
/// ```
pub async fn readiness(State(state): State<AppState>) -> WebResult<Json<Readiness>> {
    match state.store.list().await {
        Ok(items) => Ok(Json(Readiness {
            status: "ready",
            items: items.len(),
        })),
        Err(err) => Err(AppError::unavailable("Backing document unavailable")
            .with_source(anyhow::Error::new(err))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use todo_core::TodoStore;
    use todo_testing::{FailingTodoRepository, SequentialIdGenerator, seeded_store, todo_item};

    #[tokio::test]
    async fn test_simple_health_check() {
        let (status, body) = health_check().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_readiness_counts_items() {
        let (store, _repository) = seeded_store(vec![todo_item("a", "A", false, 1.0)]);

        let Json(report) = readiness(State(AppState::new(store, "index.html")))
            .await
            .unwrap();

        assert_eq!(report.status, "ready");
        assert_eq!(report.items, 1);
    }

    #[tokio::test]
    async fn test_readiness_unavailable_when_document_fails() {
        let store = TodoStore::new(
            Arc::new(FailingTodoRepository::default()),
            Arc::new(SequentialIdGenerator::new()),
        );

        let err = readiness(State(AppState::new(store, "index.html")))
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
