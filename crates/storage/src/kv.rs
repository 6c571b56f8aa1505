//! Key-value store for restart-surviving client state
//!
//! This module provides a sled-backed string store implementing
//! [`DurableStore`](crate::durable::DurableStore).

use async_trait::async_trait;
use sled::Db;
use std::sync::Arc;
use thiserror::Error;

use crate::durable::DurableStore;

/// Key-value store error types
#[derive(Debug, Error)]
pub enum KvError {
    /// Sled database error
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Stored bytes are not valid UTF-8
    #[error("Invalid UTF-8 value stored under key: {0}")]
    Encoding(String),

    /// Invalid key
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Backing store cannot serve requests
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for key-value operations
pub type Result<T> = std::result::Result<T, KvError>;

/// Key-value store configuration
#[derive(Debug, Clone)]
pub struct KvConfig {
    /// Database path
    pub path: String,
    /// Cache capacity in bytes
    pub cache_capacity: u64,
    /// Enable compression
    pub use_compression: bool,
    /// Background flush interval in milliseconds; `None` disables the
    /// background flusher and flushes on every write instead
    pub flush_every_ms: Option<u64>,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            path: "ujenzi_kv.db".to_string(),
            cache_capacity: 8 * 1024 * 1024, // 8MB
            use_compression: true,
            flush_every_ms: Some(500),
        }
    }
}

impl KvConfig {
    /// Create a new configuration with a custom path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), ..Default::default() }
    }

    /// Set cache capacity in bytes
    pub fn cache_capacity(mut self, bytes: u64) -> Self {
        self.cache_capacity = bytes;
        self
    }

    /// Enable or disable compression
    pub fn use_compression(mut self, enabled: bool) -> Self {
        self.use_compression = enabled;
        self
    }

    /// Set flush interval in milliseconds
    pub fn flush_every_ms(mut self, ms: Option<u64>) -> Self {
        self.flush_every_ms = ms;
        self
    }
}

/// Key-value store implementation
pub struct KvStore {
    db: Arc<Db>,
    flush_on_write: bool,
}

impl KvStore {
    /// Create a new key-value store with configuration
    pub fn new(config: KvConfig) -> Result<Self> {
        let db = sled::Config::new()
            .path(&config.path)
            .cache_capacity(config.cache_capacity)
            .use_compression(config.use_compression)
            .flush_every_ms(config.flush_every_ms)
            .open()?;
        tracing::debug!(path = %config.path, "opened key-value store");

        Ok(Self { db: Arc::new(db), flush_on_write: config.flush_every_ms.is_none() })
    }

    /// Create an in-memory key-value store (for testing)
    pub fn in_memory() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;

        Ok(Self { db: Arc::new(db), flush_on_write: false })
    }

    /// Get a string value by key
    pub fn get_string(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        match self.db.get(key.as_bytes())? {
            Some(bytes) => String::from_utf8(bytes.to_vec())
                .map(Some)
                .map_err(|_| KvError::Encoding(key.to_string())),
            None => Ok(None),
        }
    }

    /// Whether every write is flushed before returning
    pub fn flushes_on_write(&self) -> bool {
        self.flush_on_write
    }

    /// Set a string value by key
    pub fn set_string(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.db.insert(key.as_bytes(), value.as_bytes())?;
        if self.flush_on_write {
            self.db.flush()?;
        }
        Ok(())
    }

    /// Remove a value by key
    pub fn remove(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        let removed = self.db.remove(key.as_bytes())?.is_some();
        if self.flush_on_write {
            self.db.flush()?;
        }
        Ok(removed)
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.db.contains_key(key.as_bytes())?)
    }

    /// Clear all data
    pub fn clear(&self) -> Result<()> {
        self.db.clear()?;
        Ok(())
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }

    /// Get the number of keys in the store
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }
}

#[async_trait]
impl DurableStore for KvStore {
    async fn put(&self, key: &str, value: &str) -> Result<()> {
        self.set_string(key, value)
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.get_string(key)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.remove(key).map(|_| ())
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(KvError::InvalidKey("key must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_kv_store_creation() {
        let kv = KvStore::in_memory().unwrap();
        assert!(kv.is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let kv = KvStore::in_memory().unwrap();

        kv.set_string("theme", "dark").unwrap();

        assert_eq!(kv.get_string("theme").unwrap(), Some("dark".to_string()));
        assert_eq!(kv.len(), 1);
    }

    #[test]
    fn test_values_are_stored_verbatim() {
        let kv = KvStore::in_memory().unwrap();
        let raw = r#"{"uid":"u1","email":"a@b.com"}"#;

        kv.set_string("user", raw).unwrap();

        assert_eq!(kv.get_string("user").unwrap().as_deref(), Some(raw));
    }

    #[test]
    fn test_get_nonexistent() {
        let kv = KvStore::in_memory().unwrap();
        assert_eq!(kv.get_string("nonexistent").unwrap(), None);
    }

    #[test]
    fn test_remove() {
        let kv = KvStore::in_memory().unwrap();

        kv.set_string("key", "value").unwrap();
        assert!(kv.contains("key").unwrap());

        assert!(kv.remove("key").unwrap());
        assert!(!kv.contains("key").unwrap());

        // Removing again is not an error
        assert!(!kv.remove("key").unwrap());
    }

    #[test]
    fn test_empty_key_rejected() {
        let kv = KvStore::in_memory().unwrap();
        assert!(matches!(kv.set_string("", "v"), Err(KvError::InvalidKey(_))));
        assert!(matches!(kv.get_string(""), Err(KvError::InvalidKey(_))));
    }

    #[test]
    fn test_clear() {
        let kv = KvStore::in_memory().unwrap();

        kv.set_string("key1", "value1").unwrap();
        kv.set_string("key2", "value2").unwrap();
        assert_eq!(kv.len(), 2);

        kv.clear().unwrap();
        assert!(kv.is_empty());
    }

    #[tokio::test]
    async fn test_durable_store_impl() {
        let kv = KvStore::in_memory().unwrap();

        kv.put("user", "payload").await.unwrap();
        assert_eq!(DurableStore::get(&kv, "user").await.unwrap(), Some("payload".to_string()));

        kv.delete("user").await.unwrap();
        assert_eq!(DurableStore::get(&kv, "user").await.unwrap(), None);

        // Deleting an absent key succeeds
        kv.delete("user").await.unwrap();
    }

    #[test]
    fn test_reopen_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kv.db");
        let config = KvConfig::new(path.to_string_lossy()).flush_every_ms(None);

        {
            let kv = KvStore::new(config.clone()).unwrap();
            kv.set_string("theme", "dark").unwrap();
        }

        let kv = KvStore::new(config).unwrap();
        assert_eq!(kv.get_string("theme").unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_flush_mode_follows_config() {
        let temp_dir = TempDir::new().unwrap();
        let periodic_path = temp_dir.path().join("periodic.db");
        let per_write_path = temp_dir.path().join("per_write.db");

        let periodic = KvStore::new(KvConfig::new(periodic_path.to_string_lossy())).unwrap();
        assert!(!periodic.flushes_on_write());

        let per_write =
            KvStore::new(KvConfig::new(per_write_path.to_string_lossy()).flush_every_ms(None))
                .unwrap();
        assert!(per_write.flushes_on_write());
    }

    #[test]
    fn test_repeated_reopen_without_background_flusher() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kv.db");
        let config = KvConfig::new(path.to_string_lossy()).flush_every_ms(None);

        for round in 0..3 {
            let kv = KvStore::new(config.clone()).unwrap();
            if round > 0 {
                assert_eq!(kv.get_string("round").unwrap(), Some((round - 1).to_string()));
            }
            kv.set_string("round", &round.to_string()).unwrap();
        }

        let kv = KvStore::new(config).unwrap();
        assert_eq!(kv.get_string("round").unwrap(), Some("2".to_string()));
        assert!(kv.remove("round").unwrap());
    }

    #[test]
    fn test_config_builder() {
        let config = KvConfig::new("test.db")
            .cache_capacity(32 * 1024 * 1024)
            .use_compression(false)
            .flush_every_ms(Some(1000));

        assert_eq!(config.path, "test.db");
        assert_eq!(config.cache_capacity, 32 * 1024 * 1024);
        assert!(!config.use_compression);
        assert_eq!(config.flush_every_ms, Some(1000));
    }
}
