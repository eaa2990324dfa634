//! Item model and request payloads.
//!
//! [`TodoItem`] is the record stored in the backing document. The other types
//! are the shapes callers send to create or modify items.

use serde::{Deserialize, Serialize};

/// A single to-do record as persisted in the backing document.
///
/// Older documents may lack `completed` or `priority`; they read as `false`
/// and `0.0` respectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique id, assigned at creation and never changed afterwards
    pub id: String,
    /// Free-form title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Whether the item is done
    #[serde(default)]
    pub completed: bool,
    /// Advisory priority, callers sort by it as they see fit
    #[serde(default)]
    pub priority: f64,
}

impl TodoItem {
    /// Build a stored item from a creation request and its resolved priority.
    #[must_use]
    pub fn from_new(id: String, new: NewTodo, priority: f64) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            completed: new.completed,
            priority,
        }
    }

    /// Overwrite every field except `id`.
    pub fn replace_with(&mut self, replacement: TodoReplacement) {
        self.title = replacement.title;
        self.description = replacement.description;
        self.completed = replacement.completed;
        self.priority = replacement.priority;
    }
}

/// Payload for creating an item.
///
/// `title` and `description` are required. A missing or `null` priority asks
/// the store to assign one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTodo {
    /// Title of the new item
    pub title: String,
    /// Description of the new item
    pub description: String,
    /// Initial completion state
    #[serde(default)]
    pub completed: bool,
    /// Explicit priority, used verbatim when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
}

impl NewTodo {
    /// Creates an incomplete item request with an automatic priority
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            completed: false,
            priority: None,
        }
    }

    /// Request an explicit priority instead of the automatic one
    #[must_use]
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Create the item already completed
    #[must_use]
    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

/// Payload for a full replacement of an item.
///
/// The body must carry an `id` like a stored item, but it is ignored; the id
/// addressed by the caller always wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoReplacement {
    /// Required on the wire, ignored when applied
    pub id: String,
    /// New title
    pub title: String,
    /// New description
    pub description: String,
    /// New completion state
    pub completed: bool,
    /// New priority
    pub priority: f64,
}

/// Payload for changing only the priority of an item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityChange {
    /// New priority
    pub priority: f64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stored_item_defaults_missing_fields() {
        let item: TodoItem = serde_json::from_value(json!({
            "id": "legacy",
            "title": "Old",
            "description": "Written before priorities existed"
        }))
        .unwrap();

        assert!(!item.completed);
        assert_eq!(item.priority, 0.0);
    }

    #[test]
    fn new_todo_requires_title_and_description() {
        let missing_title = serde_json::from_value::<NewTodo>(json!({
            "description": "No title"
        }));
        assert!(missing_title.is_err());

        let missing_description = serde_json::from_value::<NewTodo>(json!({
            "title": "No description"
        }));
        assert!(missing_description.is_err());
    }

    #[test]
    fn new_todo_accepts_null_priority() {
        let new: NewTodo = serde_json::from_value(json!({
            "title": "t",
            "description": "d",
            "priority": null
        }))
        .unwrap();

        assert_eq!(new.priority, None);
        assert!(!new.completed);
    }

    #[test]
    fn replacement_ignores_body_id() {
        let mut item = TodoItem::from_new("keep-me".to_string(), NewTodo::new("a", "b"), 1.0);
        let replacement: TodoReplacement = serde_json::from_value(json!({
            "id": "other",
            "title": "Updated Title",
            "description": "Updated Desc",
            "completed": true,
            "priority": 10.0
        }))
        .unwrap();

        item.replace_with(replacement);

        assert_eq!(item.id, "keep-me");
        assert_eq!(item.title, "Updated Title");
        assert!(item.completed);
        assert_eq!(item.priority, 10.0);
    }

    #[test]
    fn replacement_requires_every_field() {
        let missing_priority = serde_json::from_value::<TodoReplacement>(json!({
            "id": "x",
            "title": "t",
            "description": "d",
            "completed": false
        }));
        assert!(missing_priority.is_err());

        let missing_id = serde_json::from_value::<TodoReplacement>(json!({
            "title": "t",
            "description": "d",
            "completed": false,
            "priority": 1.0
        }));
        assert!(missing_id.is_err());

        let null_id = serde_json::from_value::<TodoReplacement>(json!({
            "id": null,
            "title": "t",
            "description": "d",
            "completed": false,
            "priority": 1.0
        }));
        assert!(null_id.is_err());
    }
}
