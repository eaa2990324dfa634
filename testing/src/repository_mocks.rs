//! In-memory repositories for store and HTTP tests
//!
//! - [`InMemoryTodoRepository`]: shared vector standing in for the JSON document
//! - [`FailingTodoRepository`]: always errors, for exercising 500 paths

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Lock poisoning only follows a panicking test

use futures::FutureExt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use todo_core::repository::{RepositoryError, RepositoryFuture, TodoRepository};
use todo_core::TodoItem;

/// In-memory backing document for fast, deterministic tests.
///
/// Clones share the same collection, so a test can keep one handle for
/// inspection while the store owns another.
///
/// # Example
///
/// ```
/// use todo_testing::InMemoryTodoRepository;
/// use todo_core::{NewTodo, TodoStore};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), todo_core::TodoError> {
/// let repository = InMemoryTodoRepository::new();
/// let store = TodoStore::with_uuid_ids(Arc::new(repository.clone()));
///
/// store.create(NewTodo::new("Buy milk", "")).await?;
///
/// assert_eq!(repository.len(), 1);
/// assert_eq!(repository.save_count(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryTodoRepository {
    items: Arc<RwLock<Vec<TodoItem>>>,
    saves: Arc<AtomicUsize>,
}

impl InMemoryTodoRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository already holding `items`
    #[must_use]
    pub fn with_items(items: Vec<TodoItem>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
            saves: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Current contents, in document order
    #[must_use]
    pub fn snapshot(&self) -> Vec<TodoItem> {
        self.items.read().unwrap().clone()
    }

    /// Number of stored items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.read().unwrap().len()
    }

    /// Whether nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.read().unwrap().is_empty()
    }

    /// How many times the collection has been written
    ///
    /// Lets tests assert that failed operations never write.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl TodoRepository for InMemoryTodoRepository {
    fn load(&self) -> RepositoryFuture<'_, Vec<TodoItem>> {
        let items = self.snapshot();
        async move { Ok(items) }.boxed()
    }

    fn save(&self, items: Vec<TodoItem>) -> RepositoryFuture<'_, ()> {
        *self.items.write().unwrap() = items;
        self.saves.fetch_add(1, Ordering::SeqCst);
        async move { Ok(()) }.boxed()
    }
}

/// Repository whose every call fails with a backend error.
#[derive(Clone, Debug)]
pub struct FailingTodoRepository {
    message: String,
}

impl FailingTodoRepository {
    /// Create a repository failing with `message`
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingTodoRepository {
    fn default() -> Self {
        Self::new("backing document unavailable")
    }
}

impl TodoRepository for FailingTodoRepository {
    fn load(&self) -> RepositoryFuture<'_, Vec<TodoItem>> {
        let err = RepositoryError::Backend(self.message.clone());
        async move { Err(err) }.boxed()
    }

    fn save(&self, _items: Vec<TodoItem>) -> RepositoryFuture<'_, ()> {
        let err = RepositoryError::Backend(self.message.clone());
        async move { Err(err) }.boxed()
    }
}
