//! Pure operations over the item collection.
//!
//! `TodoList` never touches storage. The store loads one, runs a single
//! operation on it and hands the result back to the repository. Lookups are
//! linear scans in file order, which is fine at the sizes a flat file holds.

use crate::item::{NewTodo, TodoItem, TodoReplacement};
use crate::priority::resolve_priority;

/// The whole collection, in backing-document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Wraps items loaded from the backing document
    #[must_use]
    pub const fn from_items(items: Vec<TodoItem>) -> Self {
        Self { items }
    }

    /// Items in document order
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Gives the items back for persisting
    #[must_use]
    pub fn into_items(self) -> Vec<TodoItem> {
        self.items
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Appends a new item under `id` and returns it.
    ///
    /// The priority is resolved before the item is appended, so the new item
    /// never competes with itself.
    pub fn create(&mut self, id: String, new: NewTodo) -> TodoItem {
        let priority = resolve_priority(new.priority, &self.items);
        let item = TodoItem::from_new(id, new, priority);
        self.items.push(item.clone());
        item
    }

    /// Replaces every field but the id. Returns `None` if the id is unknown.
    pub fn replace(&mut self, id: &str, replacement: TodoReplacement) -> Option<TodoItem> {
        let item = self.find_mut(id)?;
        item.replace_with(replacement);
        Some(item.clone())
    }

    /// Flips the completion flag. Returns `None` if the id is unknown.
    pub fn toggle(&mut self, id: &str) -> Option<TodoItem> {
        let item = self.find_mut(id)?;
        item.completed = !item.completed;
        Some(item.clone())
    }

    /// Overwrites the priority only. Returns `None` if the id is unknown.
    pub fn set_priority(&mut self, id: &str, priority: f64) -> Option<TodoItem> {
        let item = self.find_mut(id)?;
        item.priority = priority;
        Some(item.clone())
    }

    /// Removes every item carrying `id`.
    ///
    /// Returns `true` if the collection shrank.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

impl From<Vec<TodoItem>> for TodoList {
    fn from(items: Vec<TodoItem>) -> Self {
        Self::from_items(items)
    }
}
