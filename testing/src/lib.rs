//! # Todo Testing
//!
//! Testing utilities for the to-do service.
//!
//! This crate provides:
//! - In-memory and failing implementations of `TodoRepository`
//! - A predictable `IdGenerator`
//! - Fixture helpers for building stores and items
//!
//! ## Example
//!
//! ```
//! use todo_testing::helpers::test_store;
//! use todo_core::NewTodo;
//!
//! # async fn example() -> Result<(), todo_core::TodoError> {
//! let (store, repository) = test_store();
//!
//! let item = store.create(NewTodo::new("Buy milk", "")).await?;
//!
//! assert_eq!(item.id, "todo-1");
//! assert_eq!(repository.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod repository_mocks;

/// Mock implementations of environment traits
pub mod mocks {
    use std::sync::atomic::{AtomicU64, Ordering};
    use todo_core::environment::IdGenerator;

    /// Id generator handing out `todo-1`, `todo-2`, ...
    ///
    /// # Example
    ///
    /// ```
    /// use todo_testing::mocks::SequentialIdGenerator;
    /// use todo_core::environment::IdGenerator;
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.next_id(), "todo-1");
    /// assert_eq!(ids.next_id(), "todo-2");
    /// ```
    #[derive(Debug)]
    pub struct SequentialIdGenerator {
        prefix: String,
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator with the `todo` prefix
        #[must_use]
        pub fn new() -> Self {
            Self::with_prefix("todo")
        }

        /// Create a generator with a custom prefix
        #[must_use]
        pub fn with_prefix(prefix: impl Into<String>) -> Self {
            Self {
                prefix: prefix.into(),
                next: AtomicU64::new(1),
            }
        }
    }

    impl Default for SequentialIdGenerator {
        fn default() -> Self {
            Self::new()
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> String {
            let n = self.next.fetch_add(1, Ordering::SeqCst);
            format!("{}-{n}", self.prefix)
        }
    }
}

/// Test helpers and fixtures
pub mod helpers {
    use super::mocks::SequentialIdGenerator;
    use super::repository_mocks::InMemoryTodoRepository;
    use std::sync::Arc;
    use todo_core::{TodoItem, TodoStore};

    /// Store over an empty in-memory repository with sequential ids.
    ///
    /// The returned repository handle shares state with the store.
    #[must_use]
    pub fn test_store() -> (TodoStore, InMemoryTodoRepository) {
        seeded_store(Vec::new())
    }

    /// Store over an in-memory repository pre-filled with `items`.
    #[must_use]
    pub fn seeded_store(items: Vec<TodoItem>) -> (TodoStore, InMemoryTodoRepository) {
        let repository = InMemoryTodoRepository::with_items(items);
        let store = TodoStore::new(
            Arc::new(repository.clone()),
            Arc::new(SequentialIdGenerator::new()),
        );
        (store, repository)
    }

    /// Build a stored item directly
    #[must_use]
    pub fn todo_item(id: &str, title: &str, completed: bool, priority: f64) -> TodoItem {
        TodoItem {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("{title} description"),
            completed,
            priority,
        }
    }

    /// Route `tracing` output to the test harness.
    ///
    /// Safe to call from every test; only the first call installs a subscriber.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}

// Re-export commonly used items
pub use helpers::{init_test_tracing, seeded_store, test_store, todo_item};
pub use mocks::SequentialIdGenerator;
pub use repository_mocks::{FailingTodoRepository, InMemoryTodoRepository};
