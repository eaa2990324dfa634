//! Request id and tracing middleware.
//!
//! Every request gets an `x-request-id`: the client's own if it sent one,
//! otherwise a fresh UUID. The id is recorded on the request's tracing span
//! and echoed back on the response.
//!
//! # Example
//!
//! ```ignore
//! use todo_web::middleware::with_request_tracing;
//!
//! let app = with_request_tracing(Router::new().route("/todos", get(list_todos)));
//! ```

use axum::{
    body::Body,
    http::{HeaderName, Request},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::Span;

/// Header carrying the request id.
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Wrap `router` with request id assignment, per-request spans and id
/// propagation to the response.
pub fn with_request_tracing<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER)),
    )
}

fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;
    use axum::routing::get;
    use tower::ServiceExt;
    use uuid::Uuid;

    fn app() -> Router {
        with_request_tracing(Router::new().route("/test", get(|| async { "ok" })))
    }

    #[tokio::test]
    async fn test_request_id_generated_if_missing() {
        let request = Request::builder().uri("/test").body(Body::empty()).unwrap();

        let response = app().oneshot(request).await.unwrap();

        let request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .expect("Request ID header should be present");
        assert!(Uuid::parse_str(request_id.to_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_request_id_preserved_from_request() {
        let request = Request::builder()
            .uri("/test")
            .header(REQUEST_ID_HEADER, "client-chosen-id")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        let request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .expect("Request ID header should be present")
            .to_str()
            .unwrap();
        assert_eq!(request_id, "client-chosen-id");
    }
}
