//! End-to-end store behavior on a real JSON document.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use std::sync::Arc;
use todo_core::{JsonFileRepository, NewTodo, TodoRepository, TodoStore};
use todo_testing::SequentialIdGenerator;

#[tokio::test]
async fn store_round_trips_through_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo.json");
    let store = TodoStore::new(
        Arc::new(JsonFileRepository::new(&path)),
        Arc::new(SequentialIdGenerator::new()),
    );

    assert!(store.list().await.unwrap().is_empty());

    let first = store.create(NewTodo::new("Write report", "Q3")).await.unwrap();
    let second = store.create(NewTodo::new("Call bank", "")).await.unwrap();
    store.toggle(&first.id).await.unwrap();
    store.set_priority(&second.id, 0.25).await.unwrap();

    // A second repository over the same path sees everything, nothing is cached.
    let reread = JsonFileRepository::new(&path).load().await.unwrap();
    assert_eq!(reread.len(), 2);
    assert!(reread[0].completed);
    assert_eq!(reread[1].priority, 0.25);

    store.delete(&first.id).await.unwrap();
    let remaining = store.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);
}

#[tokio::test]
async fn external_edits_are_picked_up_on_next_operation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo.json");
    let store = TodoStore::with_uuid_ids(Arc::new(JsonFileRepository::new(&path)));

    std::fs::write(
        &path,
        r#"[{"id": "hand-made", "title": "t", "description": "d", "completed": false, "priority": 7.0}]"#,
    )
    .unwrap();

    let item = store.create(NewTodo::new("After edit", "")).await.unwrap();

    assert_eq!(item.priority, 8.0);
}
