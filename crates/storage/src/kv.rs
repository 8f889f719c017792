//! Key-value store for device preferences
//!
//! This module provides the preference storage capability behind a single
//! narrow interface: hosts with durable storage use the sled-backed
//! implementation, ephemeral hosts fall back to the in-memory one. The
//! implementation is selected once at startup; consumers only ever see the
//! [`PreferenceStore`] trait.
//!
//! Values are plain strings. Callers own the encoding of anything richer.

use async_trait::async_trait;
use sled::Db;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

/// Key-value store error types
#[derive(Debug, Error)]
pub enum KvError {
    /// Sled database error
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Stored bytes were not valid UTF-8
    #[error("Invalid UTF-8 in stored value for key: {0}")]
    InvalidUtf8(String),

    /// Store unavailable on this host
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for key-value operations
pub type Result<T> = std::result::Result<T, KvError>;

/// Capability interface for device-level preference storage
///
/// Both read and write may suspend; implementations decide whether any real
/// I/O happens. Failures are reported, never panicked on — recovery policy
/// belongs to the caller.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Get a value by key, or `None` if absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value by key
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value by key, returning whether it existed
    async fn remove(&self, key: &str) -> Result<bool>;
}

/// Key-value store configuration
#[derive(Debug, Clone)]
pub struct KvConfig {
    /// Database path
    pub path: String,
    /// Cache capacity in bytes
    pub cache_capacity: u64,
    /// Enable compression
    pub use_compression: bool,
    /// Flush interval in milliseconds (None for immediate flush)
    pub flush_every_ms: Option<u64>,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            path: "pawtrail_kv.db".to_string(),
            cache_capacity: 16 * 1024 * 1024, // 16MB
            use_compression: true,
            flush_every_ms: Some(500), // Flush every 500ms
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

/// Sled-backed preference store for hosts with durable storage
pub struct SledPreferenceStore {
    db: Db,
}

impl SledPreferenceStore {
    /// Open a store with the given configuration
    pub fn open(config: KvConfig) -> Result<Self> {
        let mut db_config = sled::Config::new()
            .path(&config.path)
            .cache_capacity(config.cache_capacity)
            .use_compression(config.use_compression);

        if let Some(ms) = config.flush_every_ms {
            db_config = db_config.flush_every_ms(Some(ms));
        }

        let db = db_config.open()?;
        tracing::debug!("Opened preference store at {}", config.path);

        Ok(Self { db })
    }

    /// Create an in-memory store (for testing)
    pub fn in_memory() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;

        Ok(Self { db })
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for SledPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match self.db.get(key.as_bytes())? {
            Some(bytes) => String::from_utf8(bytes.to_vec())
                .map(Some)
                .map_err(|_| KvError::InvalidUtf8(key.to_string())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.db.insert(key.as_bytes(), value.as_bytes())?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.db.remove(key.as_bytes())?.is_some())
    }
}

/// In-memory preference store
///
/// Used on hosts without durable storage, and as the standard test double.
/// Contents live for the process lifetime only.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.entries.write().await.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_sled_set_and_get() {
        let store = SledPreferenceStore::in_memory().unwrap();

        store.set("device:theme", "dark").await.unwrap();

        let value = store.get("device:theme").await.unwrap();
        assert_eq!(value, Some("dark".to_string()));
    }

    #[tokio::test]
    async fn test_sled_get_nonexistent() {
        let store = SledPreferenceStore::in_memory().unwrap();
        let value = store.get("nonexistent").await.unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn test_sled_overwrite() {
        let store = SledPreferenceStore::in_memory().unwrap();

        store.set("device:theme", "dark").await.unwrap();
        store.set("device:theme", "light").await.unwrap();

        let value = store.get("device:theme").await.unwrap();
        assert_eq!(value, Some("light".to_string()));
    }

    #[tokio::test]
    async fn test_sled_remove() {
        let store = SledPreferenceStore::in_memory().unwrap();

        store.set("device:theme", "dark").await.unwrap();
        assert!(store.remove("device:theme").await.unwrap());
        assert_eq!(store.get("device:theme").await.unwrap(), None);

        assert!(!store.remove("device:theme").await.unwrap());
    }

    #[tokio::test]
    async fn test_sled_invalid_utf8() {
        let store = SledPreferenceStore::in_memory().unwrap();

        // Write raw bytes under the hood to simulate a corrupted value
        store.db.insert(b"device:theme", &[0xFF, 0xFE][..]).unwrap();

        let err = store.get("device:theme").await.unwrap_err();
        assert!(matches!(err, KvError::InvalidUtf8(_)));
    }

    #[tokio::test]
    async fn test_sled_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.db");

        {
            let store = SledPreferenceStore::open(KvConfig::new(path.to_str().unwrap())).unwrap();
            store.set("device:theme", "dark").await.unwrap();
            store.flush().unwrap();
        }

        {
            let store = SledPreferenceStore::open(KvConfig::new(path.to_str().unwrap())).unwrap();
            let value = store.get("device:theme").await.unwrap();
            assert_eq!(value, Some("dark".to_string()));
        }
    }

    #[tokio::test]
    async fn test_memory_set_and_get() {
        let store = MemoryPreferenceStore::new();

        store.set("device:theme", "dark").await.unwrap();

        let value = store.get("device:theme").await.unwrap();
        assert_eq!(value, Some("dark".to_string()));
    }

    #[tokio::test]
    async fn test_memory_get_nonexistent() {
        let store = MemoryPreferenceStore::new();
        let value = store.get("device:theme").await.unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn test_memory_remove() {
        let store = MemoryPreferenceStore::new();

        store.set("device:theme", "light").await.unwrap();
        assert!(store.remove("device:theme").await.unwrap());
        assert!(!store.remove("device:theme").await.unwrap());
        assert_eq!(store.get("device:theme").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_stores_behind_trait_object() {
        let stores: Vec<Box<dyn PreferenceStore>> = vec![
            Box::new(SledPreferenceStore::in_memory().unwrap()),
            Box::new(MemoryPreferenceStore::new()),
        ];

        for store in &stores {
            store.set("device:theme", "dark").await.unwrap();
            assert_eq!(
                store.get("device:theme").await.unwrap(),
                Some("dark".to_string())
            );
        }
    }

    #[test]
    fn test_config_builder() {
        let config = KvConfig::new("test.db")
            .cache_capacity(8 * 1024 * 1024)
            .use_compression(false)
            .flush_every_ms(Some(1000));

        assert_eq!(config.path, "test.db");
        assert_eq!(config.cache_capacity, 8 * 1024 * 1024);
        assert!(!config.use_compression);
        assert_eq!(config.flush_every_ms, Some(1000));
    }
}
