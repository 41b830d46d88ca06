//! Integration tests for the file-backed configuration store

use cfs_domain::{Config, Error};
use cfs_store::ConfigStore;
use serde_json::json;
use tempfile::TempDir;

fn config(name: &str, metadata: serde_json::Value) -> Config {
    Config::new(name, metadata.as_object().unwrap().clone())
}

/// A store bound to an empty db.json inside a fresh temp dir
fn empty_store(dir: &TempDir) -> ConfigStore {
    let path = dir.path().join("db.json");
    std::fs::write(&path, "[]").unwrap();
    ConfigStore::new(path)
}

#[tokio::test]
async fn test_load_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path().join("absent.json"));

    let error = store.load().await.unwrap_err();
    assert!(matches!(error, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_load_rejects_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("db.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = ConfigStore::new(path);
    let error = store.load().await.unwrap_err();
    assert!(matches!(error, Error::Format { .. }));
}

#[tokio::test]
async fn test_load_rejects_wrong_shape() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("db.json");

    // Not an array
    std::fs::write(&path, r#"{"name": "a", "metadata": {}}"#).unwrap();
    let store = ConfigStore::new(&path);
    assert!(matches!(store.load().await.unwrap_err(), Error::Format { .. }));

    // Array element missing metadata
    std::fs::write(&path, r#"[{"name": "a"}]"#).unwrap();
    assert!(matches!(store.load().await.unwrap_err(), Error::Format { .. }));
}

#[tokio::test]
async fn test_failed_load_leaves_memory_untouched() {
    let dir = TempDir::new().unwrap();
    let store = empty_store(&dir);
    store.load().await.unwrap();
    store
        .create(config("svc1", json!({"key": "value"})))
        .await
        .unwrap();

    std::fs::write(store.path(), "broken").unwrap();
    assert!(store.load().await.is_err());

    assert_eq!(store.list().await.len(), 1);
    assert!(store.get("svc1").await.is_some());
}

#[tokio::test]
async fn test_load_ignores_unknown_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("db.json");
    std::fs::write(
        &path,
        r#"[{"name": "a", "metadata": {"k": "v"}, "stale": true}]"#,
    )
    .unwrap();

    let store = ConfigStore::new(path);
    store.load().await.unwrap();

    let records = store.list().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "a");
}

#[tokio::test]
async fn test_create_then_reload_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = empty_store(&dir);
    store.load().await.unwrap();

    let first = config("svc1", json!({"env": {"region": "us"}}));
    let second = config("svc2", json!({"replicas": 3}));
    let third = config("svc3", json!({"flags": ["a", "b"]}));
    for record in [&first, &second, &third] {
        store.create(record.clone()).await.unwrap();
    }

    let reloaded = ConfigStore::new(store.path());
    reloaded.load().await.unwrap();

    assert_eq!(reloaded.list().await, vec![first, second, third]);
}

#[tokio::test]
async fn test_get_returns_first_match() {
    let dir = TempDir::new().unwrap();
    let store = empty_store(&dir);
    store.load().await.unwrap();

    store.create(config("A", json!({"v": 1}))).await.unwrap();
    store.create(config("A", json!({"v": 2}))).await.unwrap();

    let found = store.get("A").await.unwrap();
    assert_eq!(found.metadata["v"], json!(1));

    assert!(store.get("a").await.is_none(), "name match is case-sensitive");
}

#[tokio::test]
async fn test_delete_removes_all_matches() {
    let dir = TempDir::new().unwrap();
    let store = empty_store(&dir);
    store.load().await.unwrap();

    store.create(config("A", json!({"v": 1}))).await.unwrap();
    store.create(config("B", json!({"v": 2}))).await.unwrap();
    store.create(config("A", json!({"v": 3}))).await.unwrap();

    assert_eq!(store.delete("A").await.unwrap(), 2);
    let remaining = store.list().await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "B");
}

#[tokio::test]
async fn test_delete_is_idempotent_and_leaves_file_unchanged() {
    let dir = TempDir::new().unwrap();
    let store = empty_store(&dir);
    store.load().await.unwrap();
    store.create(config("A", json!({"v": 1}))).await.unwrap();

    assert_eq!(store.delete("A").await.unwrap(), 1);
    let after_first = std::fs::read_to_string(store.path()).unwrap();

    assert_eq!(store.delete("A").await.unwrap(), 0);
    let after_second = std::fs::read_to_string(store.path()).unwrap();

    assert_eq!(after_first, after_second);
}

#[tokio::test]
async fn test_update_preserves_position() {
    let dir = TempDir::new().unwrap();
    let store = empty_store(&dir);
    store.load().await.unwrap();

    store.create(config("A", json!({"v": 1}))).await.unwrap();
    store.create(config("B", json!({"v": 2}))).await.unwrap();
    store.create(config("C", json!({"v": 3}))).await.unwrap();

    let replacement = config("B", json!({"v": 20}));
    let updated = store.update("B", replacement.clone()).await.unwrap();
    assert_eq!(updated, Some(replacement.clone()));

    let names: Vec<String> = store.list().await.into_iter().map(|c| c.name).collect();
    assert_eq!(names, ["A", "B", "C"]);
    assert_eq!(store.get("B").await.unwrap(), replacement);
}

#[tokio::test]
async fn test_update_missing_does_not_persist() {
    let dir = TempDir::new().unwrap();
    let store = empty_store(&dir);
    store.load().await.unwrap();
    store.create(config("A", json!({"v": 1}))).await.unwrap();

    let before = std::fs::read_to_string(store.path()).unwrap();
    let result = store
        .update("missing", config("missing", json!({})))
        .await
        .unwrap();
    assert!(result.is_none());

    let after = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_update_can_rename_a_record() {
    let dir = TempDir::new().unwrap();
    let store = empty_store(&dir);
    store.load().await.unwrap();
    store.create(config("old", json!({"v": 1}))).await.unwrap();

    store
        .update("old", config("new", json!({"v": 1})))
        .await
        .unwrap();

    assert!(store.get("old").await.is_none());
    assert!(store.get("new").await.is_some());
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let store = empty_store(&dir);
    store.load().await.unwrap();
    store
        .create(config("svc1", json!({"key": "Value"})))
        .await
        .unwrap();

    for query in ["metadata.key=value", "metadata.key=VALUE"] {
        let results = store.search(query).await.unwrap();
        assert_eq!(results.len(), 1, "query {query} should match");
    }
}

#[tokio::test]
async fn test_search_path_miss_returns_empty() {
    let dir = TempDir::new().unwrap();
    let store = empty_store(&dir);
    store.load().await.unwrap();
    store
        .create(config("svc1", json!({"key": "value"})))
        .await
        .unwrap();

    let results = store.search("metadata.missing.key=x").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_rejects_malformed_query() {
    let dir = TempDir::new().unwrap();
    let store = empty_store(&dir);
    store.load().await.unwrap();

    let error = store.search("no-equals-here").await.unwrap_err();
    assert!(matches!(error, Error::Validation { .. }));
}

#[tokio::test]
async fn test_search_preserves_insertion_order() {
    let dir = TempDir::new().unwrap();
    let store = empty_store(&dir);
    store.load().await.unwrap();

    for name in ["c", "a", "b"] {
        store
            .create(config(name, json!({"tier": "gold"})))
            .await
            .unwrap();
    }

    let names: Vec<String> = store
        .search("metadata.tier=gold")
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, ["c", "a", "b"]);
}

#[tokio::test]
async fn test_search_memo_is_cleared_by_mutations() {
    let dir = TempDir::new().unwrap();
    let store = empty_store(&dir);
    store.load().await.unwrap();
    store
        .create(config("svc1", json!({"key": "value"})))
        .await
        .unwrap();
    assert_eq!(store.cached_queries().await, 0);

    assert_eq!(store.search("metadata.key=value").await.unwrap().len(), 1);
    assert_eq!(store.cached_queries().await, 1);

    // A repeated identical query is served from the memo
    assert_eq!(store.search("metadata.key=value").await.unwrap().len(), 1);
    assert_eq!(store.cached_queries().await, 1);

    store
        .create(config("svc2", json!({"key": "value"})))
        .await
        .unwrap();
    assert_eq!(store.cached_queries().await, 0);

    // Recomputed after invalidation, seeing the new record
    assert_eq!(store.search("metadata.key=value").await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_end_to_end_scenario() {
    let dir = TempDir::new().unwrap();
    let store = empty_store(&dir);
    store.load().await.unwrap();
    assert!(store.list().await.is_empty());

    store
        .create(config("svc1", json!({"env": {"region": "us"}})))
        .await
        .unwrap();

    let matches = store.search("metadata.env.region=US").await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "svc1");

    assert_eq!(store.delete("svc1").await.unwrap(), 1);
    assert!(store.list().await.is_empty());
}

#[tokio::test]
async fn test_concurrent_creates_are_not_lost() {
    let dir = TempDir::new().unwrap();
    let store = std::sync::Arc::new(empty_store(&dir));
    store.load().await.unwrap();

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .create(config(&format!("svc{i}"), json!({"i": i})))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(store.record_count().await, 16);

    let reloaded = ConfigStore::new(store.path());
    reloaded.load().await.unwrap();
    assert_eq!(reloaded.record_count().await, 16);
}
