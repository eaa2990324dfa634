//! HTTP request handlers.
//!
//! This module contains all HTTP handlers organized by concern.

pub mod health;
pub mod page;
pub mod todos;

// Re-export common handler utilities
pub use health::{health_check, readiness};
pub use page::index;
pub use todos::{
    create_todo, delete_todo, list_todos, replace_todo, toggle_todo, update_priority,
    DeleteResponse, DELETED_MESSAGE,
};
