//! # Todo Core
//!
//! Item model, priority rule and persistence for the flat-file to-do service.
//!
//! The crate follows a "functional core, imperative shell" split:
//!
//! - **[`list::TodoList`]**: pure, in-memory operations over the collection
//! - **[`priority`]**: the rule that assigns a priority to new items
//! - **[`repository::TodoRepository`]**: load/save contract for the backing document
//! - **[`store::TodoStore`]**: the load → mutate → save cycle run per request
//!
//! ## Example
//!
//! ```no_run
//! use todo_core::{JsonFileRepository, NewTodo, TodoStore};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), todo_core::TodoError> {
//! let store = TodoStore::with_uuid_ids(Arc::new(JsonFileRepository::new("todo.json")));
//!
//! let item = store.create(NewTodo::new("Buy milk", "2 litres")).await?;
//! assert_eq!(item.priority, 1.0);
//!
//! store.toggle(&item.id).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod item;
pub mod json_file;
pub mod list;
pub mod priority;
pub mod repository;
pub mod store;

/// Environment module - injected dependencies of the store
///
/// Everything the store cannot compute from the collection itself comes in
/// through a trait here, so tests can swap in deterministic versions.
pub mod environment {
    use uuid::Uuid;

    /// Source of fresh item ids.
    ///
    /// Ids are not checked against the existing collection, so an
    /// implementation must make collisions negligible on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_core::environment::{IdGenerator, UuidGenerator};
    ///
    /// let ids = UuidGenerator;
    /// assert_ne!(ids.next_id(), ids.next_id());
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Produce the id for the next created item
        fn next_id(&self) -> String;
    }

    /// Random UUID v4 ids in hyphenated form.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UuidGenerator;

    impl IdGenerator for UuidGenerator {
        fn next_id(&self) -> String {
            Uuid::new_v4().to_string()
        }
    }
}

// Re-export commonly used types
pub use environment::{IdGenerator, UuidGenerator};
pub use error::{NOT_FOUND_MESSAGE, TodoError};
pub use item::{NewTodo, PriorityChange, TodoItem, TodoReplacement};
pub use json_file::JsonFileRepository;
pub use list::TodoList;
pub use repository::{RepositoryError, TodoRepository};
pub use store::TodoStore;
