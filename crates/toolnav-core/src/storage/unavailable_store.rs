//! A store that can't be used
//!
//! Stands in for a blocked or disabled browser cache: reads find nothing and
//! writes fail.

use super::traits::{PreferenceStore, StorageError, StorageResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailablePreferenceStore;

impl UnavailablePreferenceStore {
    pub fn new() -> Self {
        Self
    }
}

impl PreferenceStore for UnavailablePreferenceStore {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::NotAvailable("storage is disabled".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::NotAvailable("storage is disabled".to_string()))
    }

    fn remove(&self, _key: &str) -> StorageResult<()> {
        Err(StorageError::NotAvailable("storage is disabled".to_string()))
    }
}
