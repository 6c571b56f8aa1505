//! Durable key-value store abstraction
//!
//! State containers only ever see this trait: string keys, string values,
//! put/get/delete. Callers serialize before `put` and parse after `get`.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::kv::Result;

/// Restart-surviving string storage
#[async_trait]
pub trait DurableStore: Send + Sync {
    /// Store `value` under `key`, replacing any previous value
    async fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Read the value under `key`, `None` when absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Remove `key`; removing an absent key succeeds
    async fn delete(&self, key: &str) -> Result<()>;
}

/// Process-local store backed by a hash map
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a key is present
    pub async fn contains(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }

    /// Number of stored keys
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no keys
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl DurableStore for MemoryStore {
    async fn put(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
