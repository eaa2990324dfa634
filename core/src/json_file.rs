//! JSON file implementation of [`TodoRepository`].
//!
//! The whole collection lives in one JSON array. Saves rewrite the file in
//! place with 4-space indentation; there is no backup copy, temp-file rename
//! or file lock.

use crate::item::TodoItem;
use crate::repository::{RepositoryError, RepositoryFuture, TodoRepository};
use futures::FutureExt;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

/// Repository backed by a single JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Creates a repository for the document at `path`.
    ///
    /// Nothing is touched on disk until the first load or save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(&self, items: &[TodoItem]) -> Result<Vec<u8>, RepositoryError> {
        let mut buffer = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
        items
            .serialize(&mut serializer)
            .map_err(|source| RepositoryError::Serialization {
                path: self.path.clone(),
                source,
            })?;
        Ok(buffer)
    }
}

impl TodoRepository for JsonFileRepository {
    fn load(&self) -> RepositoryFuture<'_, Vec<TodoItem>> {
        async move {
            let bytes = match tokio::fs::read(&self.path).await {
                Ok(bytes) => bytes,
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    tracing::debug!(path = %self.path.display(), "Backing document absent, starting empty");
                    return Ok(Vec::new());
                }
                Err(source) => {
                    return Err(RepositoryError::Io {
                        path: self.path.clone(),
                        source,
                    });
                }
            };

            serde_json::from_slice(&bytes).map_err(|source| RepositoryError::Serialization {
                path: self.path.clone(),
                source,
            })
        }
        .boxed()
    }

    fn save(&self, items: Vec<TodoItem>) -> RepositoryFuture<'_, ()> {
        async move {
            let bytes = self.encode(&items)?;
            tokio::fs::write(&self.path, bytes)
                .await
                .map_err(|source| RepositoryError::Io {
                    path: self.path.clone(),
                    source,
                })?;

            tracing::debug!(path = %self.path.display(), count = items.len(), "Backing document written");
            Ok(())
        }
        .boxed()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn item(id: &str, priority: f64) -> TodoItem {
        TodoItem {
            id: id.to_string(),
            title: format!("Task {id}"),
            description: "details".to_string(),
            completed: false,
            priority,
        }
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("todo.json"));

        assert!(repo.load().await.unwrap().is_empty());
        assert!(!repo.path().exists());
    }

    #[tokio::test]
    async fn saved_items_load_back_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("todo.json"));
        let items = vec![item("b", 2.0), item("a", 1.0)];

        repo.save(items.clone()).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), items);
    }

    #[tokio::test]
    async fn document_is_indented_array() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("todo.json"));

        repo.save(vec![item("a", 1.0)]).await.unwrap();

        let text = std::fs::read_to_string(repo.path()).unwrap();
        assert!(text.starts_with("[\n    {\n        \"id\": \"a\","));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["priority"], 1.0);
        assert_eq!(value[0]["completed"], false);
    }

    #[tokio::test]
    async fn save_overwrites_whole_document() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("todo.json"));

        repo.save(vec![item("a", 1.0), item("b", 2.0)]).await.unwrap();
        repo.save(vec![item("c", 3.0)]).await.unwrap();

        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "c");
    }

    #[tokio::test]
    async fn legacy_items_without_optional_fields_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.json");
        std::fs::write(&path, r#"[{"id": "x", "title": "t", "description": "d"}]"#).unwrap();

        let loaded = JsonFileRepository::new(&path).load().await.unwrap();

        assert!(!loaded[0].completed);
        assert_eq!(loaded[0].priority, 0.0);
    }

    #[tokio::test]
    async fn corrupt_document_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileRepository::new(&path).load().await.unwrap_err();

        assert!(matches!(err, RepositoryError::Serialization { .. }));
    }
}
