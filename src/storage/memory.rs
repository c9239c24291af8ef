use super::RecordStore;
use crate::core::{Result, ScriptError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Record store kept entirely in memory
#[derive(Debug)]
pub struct MemoryStore {
    name: String,
    records: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a store pre-filled with records
    pub fn with_records<I>(name: impl Into<String>, records: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        Self {
            name: name.into(),
            records: RwLock::new(records.into_iter().collect()),
        }
    }

    /// Copy of every record, for snapshots
    pub async fn export(&self) -> HashMap<String, Value> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get_item(&self, id: &str) -> Result<Value> {
        let records = self.records.read().await;
        records
            .get(id)
            .cloned()
            .ok_or_else(|| ScriptError::RecordNotFound(format!("{}/{}", self.name, id)))
    }

    async fn set_item(&self, id: &str, value: Value) -> Result<Option<Value>> {
        if id.trim().is_empty() {
            return Err(ScriptError::Store("Record id cannot be empty".into()));
        }

        let mut records = self.records.write().await;
        Ok(records.insert(id.to_string(), value))
    }

    async fn remove_item(&self, id: &str) -> Result<Value> {
        let mut records = self.records.write().await;
        records
            .remove(id)
            .ok_or_else(|| ScriptError::RecordNotFound(format!("{}/{}", self.name, id)))
    }

    async fn keys(&self) -> Result<Vec<String>> {
        let records = self.records.read().await;

        let mut keys: Vec<String> = records.keys().cloned().collect();
        keys.sort();

        Ok(keys)
    }
}
