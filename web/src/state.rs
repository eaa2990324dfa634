//! Application state for Axum handlers.

use std::path::PathBuf;
use todo_core::TodoStore;

/// State shared across all HTTP handlers.
///
/// # Examples
///
/// ```no_run
/// use todo_core::{JsonFileRepository, TodoStore};
/// use todo_web::AppState;
/// use std::sync::Arc;
///
/// let store = TodoStore::with_uuid_ids(Arc::new(JsonFileRepository::new("todo.json")));
/// let state = AppState::new(store, "templates/index.html");
/// ```
#[derive(Clone, Debug)]
pub struct AppState {
    /// The to-do store every endpoint goes through; clones share its backing
    pub store: TodoStore,
    /// HTML page served at `/`, re-read on every request
    pub index_path: PathBuf,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: TodoStore, index_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            index_path: index_path.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_state_is_clone() {
        // Ensure AppState implements Clone (required for Axum)
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_state_clones_share_store() {
        let (store, repository) = todo_testing::test_store();
        let state = AppState::new(store, "index.html");
        let cloned = state.clone();

        cloned
            .store
            .create(todo_core::NewTodo::new("shared", "seen by every clone"))
            .await
            .unwrap();

        assert_eq!(state.store.list().await.unwrap().len(), 1);
        assert_eq!(repository.save_count(), 1);
    }
}
