//! String-valued key-value storage used to persist the playlist

mod playlist;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

pub use playlist::{PlaylistStore, SaveOutcome};

/// Abstract key-value store with string values
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be read
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns error if the write fails or exceeds the store's quota
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns error if removal fails
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Storage errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Underlying file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be serialized or parsed
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Write would exceed the store's size quota
    #[error("quota exceeded writing {key}: {needed} bytes needed, quota is {quota}")]
    QuotaExceeded {
        /// Key being written
        key: String,
        /// Bytes the store would hold after the write
        needed: usize,
        /// Configured quota in bytes
        quota: usize,
    },

    /// Store cannot be accessed
    #[error("storage not available")]
    NotAvailable,
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// In-memory store (non-persistent)
///
/// Clones share the same backing map. An optional quota caps the total size of
/// all stored values, mimicking browser storage limits.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Create an unbounded in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects writes once values exceed `bytes` in total
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: Arc::default(),
            quota: Some(bytes),
        }
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |entries| entries.len())
    }

    /// Check if the store holds no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::NotAvailable)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::NotAvailable)?;

        if let Some(quota) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            let needed = others + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::NotAvailable)?;
        entries.remove(key);
        Ok(())
    }
}

/// File-based store holding every key in one JSON object
pub struct FileStore {
    path: PathBuf,
    cache: HashMap<String, String>,
}

impl FileStore {
    /// Open (or create) file storage at the given path
    ///
    /// # Errors
    ///
    /// Returns error if directory cannot be created or the existing file is unreadable
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let cache = Self::load_all(&path)?;
        Ok(Self { path, cache })
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_all(path: &Path) -> Result<HashMap<String, String>, StorageError> {
        if !path.try_exists()? {
            return Ok(HashMap::new());
        }

        let bytes = std::fs::read(path)?;
        if bytes.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    fn save_all(&self) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(&self.cache)?;
        std::fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.cache.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let previous = self.cache.insert(key.to_string(), value.to_string());
        if let Err(e) = self.save_all() {
            // Keep the cache in step with what is on disk
            match previous {
                Some(old) => self.cache.insert(key.to_string(), old),
                None => self.cache.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.cache.remove(key).is_some() {
            self.save_all()?;
        }
        Ok(())
    }
}
