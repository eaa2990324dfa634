//! The to-do store: one load → mutate → save cycle per operation.
//!
//! The store keeps no state between calls. Each operation reads the full
//! collection from its repository, runs one [`TodoList`] operation, and for
//! mutations writes the full collection back. An operation that fails with
//! `NotFound` never writes.

use crate::environment::{IdGenerator, UuidGenerator};
use crate::error::TodoError;
use crate::item::{NewTodo, TodoItem, TodoReplacement};
use crate::list::TodoList;
use crate::repository::TodoRepository;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Entry point for every to-do operation.
///
/// Cheap to clone; clones share the same repository and id generator.
#[derive(Clone)]
pub struct TodoStore {
    repository: Arc<dyn TodoRepository>,
    ids: Arc<dyn IdGenerator>,
}

impl std::fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore").finish_non_exhaustive()
    }
}

impl TodoStore {
    /// Creates a store over `repository`, drawing ids from `ids`
    #[must_use]
    pub fn new(repository: Arc<dyn TodoRepository>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repository, ids }
    }

    /// Creates a store that assigns random UUID ids
    #[must_use]
    pub fn with_uuid_ids(repository: Arc<dyn TodoRepository>) -> Self {
        Self::new(repository, Arc::new(UuidGenerator))
    }

    /// Returns the whole collection in document order.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Repository` if the document cannot be loaded.
    pub async fn list(&self) -> Result<Vec<TodoItem>, TodoError> {
        let items = self.repository.load().await?;
        debug!(count = items.len(), "Listed todos");
        Ok(items)
    }

    /// Appends a new item and returns it with its id and priority.
    ///
    /// Without an explicit priority, the item is placed one above the highest
    /// priority among incomplete items, or at `1.0` if none are open.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Repository` if the document cannot be loaded or saved.
    pub async fn create(&self, new: NewTodo) -> Result<TodoItem, TodoError> {
        let mut list = self.load().await?;
        let item = list.create(self.ids.next_id(), new);
        self.save(list).await?;

        info!(id = %item.id, priority = item.priority, "Created todo");
        Ok(item)
    }

    /// Replaces every field of item `id` except the id itself.
    ///
    /// # Errors
    ///
    /// - `TodoError::NotFound` if no item has this id
    /// - `TodoError::Repository` if the document cannot be loaded or saved
    pub async fn replace(
        &self,
        id: &str,
        replacement: TodoReplacement,
    ) -> Result<TodoItem, TodoError> {
        let item = self
            .mutate(id, |list| list.replace(id, replacement))
            .await?;
        info!(id = %item.id, "Replaced todo");
        Ok(item)
    }

    /// Flips the completion flag of item `id`.
    ///
    /// # Errors
    ///
    /// - `TodoError::NotFound` if no item has this id
    /// - `TodoError::Repository` if the document cannot be loaded or saved
    pub async fn toggle(&self, id: &str) -> Result<TodoItem, TodoError> {
        let item = self.mutate(id, |list| list.toggle(id)).await?;
        info!(id = %item.id, completed = item.completed, "Toggled todo");
        Ok(item)
    }

    /// Overwrites only the priority of item `id`.
    ///
    /// # Errors
    ///
    /// - `TodoError::NotFound` if no item has this id
    /// - `TodoError::Repository` if the document cannot be loaded or saved
    pub async fn set_priority(&self, id: &str, priority: f64) -> Result<TodoItem, TodoError> {
        let item = self
            .mutate(id, |list| list.set_priority(id, priority))
            .await?;
        info!(id = %item.id, priority = item.priority, "Changed todo priority");
        Ok(item)
    }

    /// Removes item `id`.
    ///
    /// # Errors
    ///
    /// - `TodoError::NotFound` if no item has this id
    /// - `TodoError::Repository` if the document cannot be loaded or saved
    pub async fn delete(&self, id: &str) -> Result<(), TodoError> {
        let mut list = self.load().await?;
        if !list.remove(id) {
            warn!(id, "Delete targeted unknown todo");
            return Err(TodoError::not_found(id));
        }
        self.save(list).await?;

        info!(id, "Deleted todo");
        Ok(())
    }

    /// Runs `operation` on a freshly loaded list and saves it if it found `id`.
    async fn mutate<F>(&self, id: &str, operation: F) -> Result<TodoItem, TodoError>
    where
        F: FnOnce(&mut TodoList) -> Option<TodoItem>,
    {
        let mut list = self.load().await?;
        let Some(item) = operation(&mut list) else {
            warn!(id, "Operation targeted unknown todo");
            return Err(TodoError::not_found(id));
        };
        self.save(list).await?;
        Ok(item)
    }

    async fn load(&self) -> Result<TodoList, TodoError> {
        Ok(TodoList::from_items(self.repository.load().await?))
    }

    async fn save(&self, list: TodoList) -> Result<(), TodoError> {
        self.repository.save(list.into_items()).await?;
        Ok(())
    }
}
