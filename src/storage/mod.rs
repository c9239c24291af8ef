pub mod memory;
pub mod snapshot;

pub use memory::MemoryStore;

use crate::core::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Record store addressable by identity string
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Store name used in diagnostics
    fn name(&self) -> &str;

    /// Fetch a record; fails with `RecordNotFound` when absent
    async fn get_item(&self, id: &str) -> Result<Value>;

    /// Insert or replace a record, returning the previous one
    async fn set_item(&self, id: &str, value: Value) -> Result<Option<Value>>;

    /// Remove a record, returning it
    async fn remove_item(&self, id: &str) -> Result<Value>;

    /// Sorted record ids
    async fn keys(&self) -> Result<Vec<String>>;
}

/// Which store a command reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKind {
    Users,
    Threads,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Threads => "threads",
        }
    }
}

/// Data stores handed to command bodies
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn RecordStore>,
    pub threads: Arc<dyn RecordStore>,
}

impl Stores {
    pub fn new(users: Arc<dyn RecordStore>, threads: Arc<dyn RecordStore>) -> Self {
        Self { users, threads }
    }

    /// Two empty in-memory stores
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MemoryStore::new(StoreKind::Users.as_str())),
            threads: Arc::new(MemoryStore::new(StoreKind::Threads.as_str())),
        }
    }

    pub fn get(&self, kind: StoreKind) -> &Arc<dyn RecordStore> {
        match kind {
            StoreKind::Users => &self.users,
            StoreKind::Threads => &self.threads,
        }
    }
}

impl Default for Stores {
    fn default() -> Self {
        Self::in_memory()
    }
}
