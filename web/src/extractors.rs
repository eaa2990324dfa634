//! Custom Axum extractors.
//!
//! - `JsonBody`: `Json` whose rejections render as [`AppError`] bodies
//!
//! # Examples
//!
//! ```ignore
//! use todo_web::extractors::JsonBody;
//!
//! async fn handler(JsonBody(new): JsonBody<NewTodo>) -> Result<Json<TodoItem>, AppError> {
//!     // `new` has a title and a description, or the client already got a 422
//! }
//! ```

use crate::error::AppError;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

/// JSON request body.
///
/// Deserialization runs before the handler, so a request missing a required
/// field is answered with 422 and never reaches the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(status = %rejection.status(), reason = %rejection.body_text(), "Rejected request body");
                Err(AppError::from(rejection))
            }
        }
    }
}
