//! Repository trait for the backing document.
//!
//! The store never caches: every operation loads the full collection through
//! a [`TodoRepository`] and, when it mutates, saves the full collection back.
//!
//! # Implementations
//!
//! - [`JsonFileRepository`](crate::json_file::JsonFileRepository): a single JSON file on disk
//! - `InMemoryTodoRepository` (in `todo-testing`): a shared vector for tests
//!
//! Neither implementation locks across a load/save pair. Two requests racing
//! on the same document can lose an update.

use crate::item::TodoItem;
use futures::future::BoxFuture;
use std::path::PathBuf;
use thiserror::Error;

/// Future returned by repository operations.
pub type RepositoryFuture<'a, T> = BoxFuture<'a, Result<T, RepositoryError>>;

/// Errors that can occur while reading or writing the backing document.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The document exists but could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path of the backing document.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not a JSON array of items, or items failed to encode.
    #[error("Serialization error on {path}: {source}")]
    Serialization {
        /// Path of the backing document.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Any other backend failure.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Load/save contract for the full item collection.
///
/// # Dyn Compatibility
///
/// Methods return boxed futures instead of using `async fn` so the store can
/// hold an `Arc<dyn TodoRepository>` and tests can substitute a backing.
pub trait TodoRepository: Send + Sync {
    /// Load the full collection in document order.
    ///
    /// An absent document is an empty collection, not an error.
    ///
    /// # Errors
    ///
    /// - `Io`: the document exists but cannot be read
    /// - `Serialization`: the document is not a JSON array of items
    fn load(&self) -> RepositoryFuture<'_, Vec<TodoItem>>;

    /// Replace the stored collection with `items`.
    ///
    /// # Errors
    ///
    /// - `Io`: the document cannot be written
    /// - `Serialization`: the items cannot be encoded
    fn save(&self, items: Vec<TodoItem>) -> RepositoryFuture<'_, ()>;
}
