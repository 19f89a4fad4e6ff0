//! Key-value store for preferences and settings
//!
//! This module models browser-style local storage: string keys mapped to raw
//! string values. The durable backend is sled; an in-memory map stands in
//! whenever durable storage cannot be opened.

use parking_lot::RwLock;
use sled::Db;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Key-value store error types
#[derive(Debug, Error)]
pub enum KvError {
    /// Sled database error
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Stored bytes were not valid UTF-8
    #[error("Invalid UTF-8 value for key {key}: {source}")]
    InvalidUtf8 {
        /// Key whose value failed to decode
        key: String,
        /// Underlying decode error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Invalid key
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Storage is not available at all
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type for key-value operations
pub type Result<T> = std::result::Result<T, KvError>;

/// Browser-style local storage: string keys, string values, no schema.
pub trait LocalStorage: Send + Sync {
    /// Read the value stored under `key`, `None` when absent
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; returns whether a value was present
    fn remove_item(&self, key: &str) -> Result<bool>;

    /// Remove every key
    fn clear(&self) -> Result<()>;
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(KvError::InvalidKey("key must not be empty".to_string()));
    }
    Ok(())
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
            path: "optatv_prefs.db".to_string(),
            cache_capacity: 1024 * 1024, // 1MB, a handful of keys
            use_compression: false,
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

/// Durable key-value store backed by sled
pub struct KvStore {
    db: Arc<Db>,
}

impl KvStore {
    /// Open (or create) a key-value store with configuration
    pub fn new(config: KvConfig) -> Result<Self> {
        let mut db_config = sled::Config::new()
            .path(&config.path)
            .cache_capacity(config.cache_capacity)
            .use_compression(config.use_compression);

        if let Some(ms) = config.flush_every_ms {
            db_config = db_config.flush_every_ms(Some(ms));
        }

        let db = db_config.open()?;
        tracing::debug!(path = %config.path, "opened key-value store");

        Ok(Self { db: Arc::new(db) })
    }

    /// Create a temporary store that is discarded on drop (for testing)
    pub fn in_memory() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;

        Ok(Self { db: Arc::new(db) })
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

impl LocalStorage for KvStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        match self.db.get(key.as_bytes())? {
            Some(bytes) => String::from_utf8(bytes.to_vec())
                .map(Some)
                .map_err(|source| KvError::InvalidUtf8 { key: key.to_string(), source }),
            None => Ok(None),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.db.insert(key.as_bytes(), value.as_bytes())?;
        // Preferences are tiny and rare; write through so a crash right after
        // a change does not lose it.
        self.db.flush()?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        Ok(self.db.remove(key.as_bytes())?.is_some())
    }

    fn clear(&self) -> Result<()> {
        self.db.clear()?;
        Ok(())
    }
}

/// Non-durable storage kept only for the current session
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<BTreeMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Check if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.items.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        Ok(self.items.write().remove(key).is_some())
    }

    fn clear(&self) -> Result<()> {
        self.items.write().clear();
        Ok(())
    }
}

/// Open durable storage, falling back to [`MemoryStorage`] when it cannot be
/// opened. The returned flag is `true` when the fallback was used.
pub fn open_or_memory(config: Option<KvConfig>) -> (Arc<dyn LocalStorage>, bool) {
    let Some(config) = config else {
        return (Arc::new(MemoryStorage::new()), false);
    };

    match KvStore::new(config) {
        Ok(store) => (Arc::new(store), false),
        Err(e) => {
            tracing::warn!(error = %e, "local storage unavailable, preferences will not persist");
            (Arc::new(MemoryStorage::new()), true)
        }
    }
}
