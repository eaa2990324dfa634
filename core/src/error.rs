//! Store error taxonomy.
//!
//! Request validation (missing fields, bad JSON) happens at the HTTP boundary
//! and never reaches the store, so only two kinds of failure exist here.

use crate::repository::RepositoryError;
use thiserror::Error;

/// Message reported when an operation targets an unknown id.
pub const NOT_FOUND_MESSAGE: &str = "To-Do item not found";

/// Errors returned by [`TodoStore`](crate::store::TodoStore) operations.
#[derive(Error, Debug)]
pub enum TodoError {
    /// No item with the requested id exists.
    #[error("To-Do item not found")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// The backing document could not be loaded or saved.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl TodoError {
    /// Creates a `NotFound` error for `id`
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Whether this error means the id was unknown
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_uses_fixed_message() {
        let err = TodoError::not_found("abc");
        assert_eq!(err.to_string(), NOT_FOUND_MESSAGE);
        assert!(err.is_not_found());
    }

    #[test]
    fn repository_errors_pass_through() {
        let err: TodoError = RepositoryError::Backend("disk on fire".to_string()).into();
        assert_eq!(err.to_string(), "Backend error: disk on fire");
        assert!(!err.is_not_found());
    }
}
