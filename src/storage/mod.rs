//! Token storage
//!
//! [`KeyValueStorage`] is the storage capability: a persistent SQLite-backed
//! implementation and a no-op one for environments without storage. The
//! backend is chosen once by [`select_storage`]. [`TokenStore`] sits on top
//! and never fails outward: storage errors degrade to absent reads and
//! dropped writes.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::config::{Config, StorageKind};
use crate::error::StorageError;

pub mod noop;
pub mod sqlite;

pub use noop::NoopStorage;
pub use sqlite::SqliteStorage;

/// String key-value storage capability
pub trait KeyValueStorage: Send + Sync {
    /// Read a value
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value; removing an absent key is not an error
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// When the value was last written, if the backend tracks it
    fn updated_at(&self, _key: &str) -> Result<Option<DateTime<Utc>>, StorageError> {
        Ok(None)
    }

    /// Short backend name for status output
    fn describe(&self) -> &'static str;
}

/// Pick the storage backend for this process.
///
/// Persistent storage that cannot be opened falls back to [`NoopStorage`].
pub fn select_storage(config: &Config) -> Arc<dyn KeyValueStorage> {
    match config.storage {
        StorageKind::None => Arc::new(NoopStorage),
        StorageKind::Persistent => {
            let opened = match &config.data_dir {
                Some(dir) => SqliteStorage::open_at(dir),
                None => SqliteStorage::data_dir().and_then(|dir| SqliteStorage::open_at(&dir)),
            };
            match opened {
                Ok(storage) => Arc::new(storage),
                Err(e) => {
                    log::warn!("Token storage unavailable, continuing without it: {}", e);
                    Arc::new(NoopStorage)
                }
            }
        }
    }
}

/// The single stored bearer token
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// The stored token, or `None` if never set or storage is unavailable
    pub fn get(&self) -> Option<String> {
        match self.storage.get_item(&self.key) {
            Ok(token) => token,
            Err(e) => {
                log::warn!("Failed to read stored token: {}", e);
                None
            }
        }
    }

    /// Store a token, overwriting any prior one
    pub fn set(&self, token: &str) {
        if let Err(e) = self.storage.set_item(&self.key, token) {
            log::warn!("Failed to store token: {}", e);
        }
    }

    /// Remove the stored token
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove_item(&self.key) {
            log::warn!("Failed to clear stored token: {}", e);
        }
    }

    /// When the token was stored
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.storage.updated_at(&self.key).unwrap_or_else(|e| {
            log::warn!("Failed to read token timestamp: {}", e);
            None
        })
    }

    /// Backend name
    pub fn backend(&self) -> &'static str {
        self.storage.describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Storage whose every operation fails
    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Io("disk gone".to_string()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io("disk gone".to_string()))
        }

        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Io("disk gone".to_string()))
        }

        fn describe(&self) -> &'static str {
            "broken"
        }
    }

    fn memory_store() -> TokenStore {
        TokenStore::new(Arc::new(SqliteStorage::open_in_memory().unwrap()), "token")
    }

    #[test]
    fn test_set_then_get() {
        let store = memory_store();
        store.set("tok1");
        assert_eq!(store.get(), Some("tok1".to_string()));
    }

    #[test]
    fn test_new_value_overwrites() {
        let store = memory_store();
        store.set("tok1");
        store.set("tok2");
        assert_eq!(store.get(), Some("tok2".to_string()));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = memory_store();
        store.set("tok1");

        store.clear();
        assert_eq!(store.get(), None);
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_clones_share_the_slot() {
        let store = memory_store();
        let other = store.clone();
        store.set("shared");
        assert_eq!(other.get(), Some("shared".to_string()));
        other.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_key_is_respected() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(SqliteStorage::open_in_memory().unwrap());
        let a = TokenStore::new(storage.clone(), "a");
        let b = TokenStore::new(storage, "b");

        a.set("only-a");
        assert_eq!(a.get(), Some("only-a".to_string()));
        assert_eq!(b.get(), None);
    }

    #[test]
    fn test_noop_store_never_holds_a_token() {
        let store = TokenStore::new(Arc::new(NoopStorage), "token");
        store.set("tok1");
        assert_eq!(store.get(), None);
        store.clear();
        assert_eq!(store.backend(), "none");
    }

    #[test]
    fn test_storage_errors_do_not_escape() {
        let store = TokenStore::new(Arc::new(BrokenStorage), "token");
        store.set("tok1");
        assert_eq!(store.get(), None);
        store.clear();
        assert_eq!(store.updated_at(), None);
    }

    #[test]
    fn test_select_storage_none() {
        let mut config = Config::default();
        config.storage = StorageKind::None;
        assert_eq!(select_storage(&config).describe(), "none");
    }

    #[test]
    fn test_select_storage_persistent_in_data_dir() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.data_dir = Some(dir.path().to_path_buf());

        let storage = select_storage(&config);
        assert_eq!(storage.describe(), "sqlite");
        assert!(dir.path().join("storage.db").exists());
    }

    #[test]
    fn test_select_storage_falls_back_when_unopenable() {
        let dir = TempDir::new().unwrap();
        // A regular file where the data directory should be
        let blocker: PathBuf = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();

        let mut config = Config::default();
        config.data_dir = Some(blocker);

        assert_eq!(select_storage(&config).describe(), "none");
    }
}
