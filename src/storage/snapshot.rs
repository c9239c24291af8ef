//! JSON snapshot files for record stores.
//!
//! A snapshot is a single JSON object mapping record id to record.

use super::{MemoryStore, RecordStore};
use crate::core::{Result, ScriptError};
use log::{debug, info};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

/// Loads a store from a snapshot file
pub async fn load_store(name: &str, path: &Path) -> Result<MemoryStore> {
    let bytes = fs::read(path).await.map_err(|err| {
        ScriptError::Io(format!("Failed to read snapshot '{}': {}", path.display(), err))
    })?;

    let records = match serde_json::from_slice::<Value>(&bytes)? {
        Value::Object(map) => map,
        other => {
            return Err(ScriptError::Store(format!(
                "Snapshot '{}' must be a JSON object, got {}",
                path.display(),
                type_label(&other)
            )));
        }
    };

    info!("Loaded {} record(s) into '{}' from {}", records.len(), name, path.display());
    Ok(MemoryStore::with_records(name, records))
}

/// Writes the store to `path` through a temp file and rename
pub async fn save_store(store: &MemoryStore, path: &Path) -> Result<()> {
    let records: HashMap<String, Value> = store.export().await;
    let object: Map<String, Value> = records.into_iter().collect();
    let bytes = serde_json::to_vec_pretty(&Value::Object(object))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await.map_err(|err| {
                ScriptError::Io(format!(
                    "Failed to create parent directory '{}': {}",
                    parent.display(),
                    err
                ))
            })?;
        }
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, &bytes).await.map_err(|err| {
        ScriptError::Io(format!("Failed to write temp file '{}': {}", tmp.display(), err))
    })?;

    fs::rename(&tmp, path).await.map_err(|err| {
        ScriptError::Io(format!(
            "Failed to rename temp file '{}' -> '{}': {}",
            tmp.display(),
            path.display(),
            err
        ))
    })?;

    debug!("Saved snapshot of '{}' to {}", store.name(), path.display());
    Ok(())
}

fn type_label(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("users.json");

        let store = MemoryStore::new("users");
        store.set_item("u-1", json!({"name": "Ada"})).await.unwrap();
        save_store(&store, &path).await.unwrap();

        assert!(!path.with_extension("tmp").exists());

        let loaded = load_store("users", &path).await.unwrap();
        assert_eq!(loaded.get_item("u-1").await.unwrap(), json!({"name": "Ada"}));
    }

    #[tokio::test]
    async fn test_load_rejects_non_object() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        let err = load_store("users", &path).await.unwrap_err();
        assert!(err.to_string().contains("must be a JSON object"));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_store("users", &temp_dir.path().join("none.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, ScriptError::Io(_)));
    }
}
