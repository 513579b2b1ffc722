//! JSON-file preference store
//!
//! Keeps every key in one JSON object at
//! `<data dir>/toolnav/preferences.json`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::traits::{PreferenceStore, StorageError, StorageResult};

pub struct FilePreferenceStore {
    path: PathBuf,
    cache: RwLock<Option<BTreeMap<String, String>>>,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Store under the platform data directory
    pub fn user() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".local").join("share"));
        Self::new(data_dir.join("toolnav").join("preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> StorageResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn values(&self) -> StorageResult<BTreeMap<String, String>> {
        if let Some(values) = self.cache.read().as_ref() {
            return Ok(values.clone());
        }
        let values = self.load()?;
        *self.cache.write() = Some(values.clone());
        Ok(values)
    }

    /// Values to write over; an unreadable file is replaced rather than kept
    fn values_for_write(&self) -> StorageResult<BTreeMap<String, String>> {
        match self.values() {
            Err(StorageError::Corrupt(_)) => Ok(BTreeMap::new()),
            other => other,
        }
    }

    fn save(&self, values: BTreeMap<String, String>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&values)?;

        // Write beside the target then rename over it
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        *self.cache.write() = Some(values);
        Ok(())
    }

    /// Drop the cache so the next read goes to disk
    pub fn reload(&self) {
        *self.cache.write() = None;
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn name(&self) -> &str {
        "file"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut values = self.values_for_write()?;
        values.insert(key.to_string(), value.to_string());
        self.save(values)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        match self.values() {
            Ok(mut values) => {
                if values.remove(key).is_some() {
                    self.save(values)?;
                }
                Ok(())
            }
            Err(StorageError::Corrupt(_)) => self.save(BTreeMap::new()),
            Err(e) => Err(e),
        }
    }
}

impl std::fmt::Debug for FilePreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilePreferenceStore")
            .field("path", &self.path)
            .field("exists", &self.exists())
            .finish()
    }
}
