//! Storage for environments with nowhere to persist

use super::KeyValueStorage;
use crate::error::StorageError;

/// Reads are always absent, writes are dropped
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStorage;

impl KeyValueStorage for NoopStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn describe(&self) -> &'static str {
        "none"
    }
}
