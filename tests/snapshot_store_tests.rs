/// Snapshot store tests
///
/// Record stores loaded from and saved to JSON snapshot files
/// Run with: cargo test --test snapshot_store_tests

use scriptline::storage::snapshot::{load_store, save_store};
use scriptline::{
    AdminRoster, BufferSink, HostSession, MemoryStore, RecordStore, ScriptEngine, Stores,
};
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_engine_over_loaded_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("users.json");
    std::fs::write(
        &path,
        r#"{"ada": {"name": "Ada", "settings": {"theme": "dark"}}}"#,
    )
    .unwrap();

    let users = load_store("users", &path).await.unwrap();
    let stores = Stores::new(Arc::new(users), Arc::new(MemoryStore::new("threads")));
    let engine = ScriptEngine::new(stores);
    let session = HostSession::open("ada", Arc::new(AdminRoster::new())).unwrap();
    let mut sink = BufferSink::new();

    let code = engine
        .run(&session, "uget::self settings theme", &mut sink)
        .await;

    assert_eq!(code, 0);
    assert_eq!(sink.joined(), "Property => settings.theme\n\n'dark'");
}

#[tokio::test]
async fn test_save_overwrites_previous_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("threads.json");

    let store = MemoryStore::new("threads");
    store.set_item("t-1", json!({"title": "first"})).await.unwrap();
    save_store(&store, &path).await.unwrap();

    store.set_item("t-1", json!({"title": "second"})).await.unwrap();
    store.set_item("t-2", json!({"title": "other"})).await.unwrap();
    save_store(&store, &path).await.unwrap();

    let reloaded = load_store("threads", &path).await.unwrap();
    assert_eq!(reloaded.keys().await.unwrap(), vec!["t-1", "t-2"]);
    assert_eq!(reloaded.get_item("t-1").await.unwrap(), json!({"title": "second"}));
}

#[tokio::test]
async fn test_snapshot_keeps_record_field_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("users.json");

    let store = MemoryStore::new("users");
    store
        .set_item("ada", json!({"zeta": 1, "alpha": 2}))
        .await
        .unwrap();
    save_store(&store, &path).await.unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.find("zeta").unwrap() < text.find("alpha").unwrap());

    let reloaded = load_store("users", &path).await.unwrap();
    let record = reloaded.get_item("ada").await.unwrap();
    let keys: Vec<&String> = record.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["zeta", "alpha"]);
}
