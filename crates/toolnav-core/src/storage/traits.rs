//! Core trait and errors for preference storage

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage not available: {0}")]
    NotAvailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt storage file: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Other(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// String key/value storage that survives restarts
///
/// Reads return `Ok(None)` for a missing key; `Err` means the backend itself
/// couldn't be read. Callers in this crate treat both the same way and fall
/// back to defaults.
pub trait PreferenceStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Whether the backend can be used at all
    fn is_available(&self) -> bool {
        true
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    fn remove(&self, key: &str) -> StorageResult<()>;
}
