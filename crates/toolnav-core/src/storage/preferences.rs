//! Typed access to the persisted preference keys
//!
//! Storage failures never surface to callers: a failed or malformed read
//! yields the default, a failed write is logged and dropped. The session then
//! carries on with its in-memory state.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::logging::SharedLogger;
use crate::types::{FavoriteSet, Theme, ToolId};
use super::traits::{PreferenceStore, StorageError, StorageResult};

pub const KEY_THEME: &str = "theme";
pub const KEY_FAVORITES: &str = "favorites";
pub const KEY_SEARCH_HISTORY: &str = "searchHistory";

pub struct Preferences {
    store: Arc<dyn PreferenceStore>,
    logger: SharedLogger,
}

impl Preferences {
    pub fn new(store: Arc<dyn PreferenceStore>, logger: SharedLogger) -> Self {
        Self { store, logger }
    }

    pub fn store(&self) -> &Arc<dyn PreferenceStore> {
        &self.store
    }

    pub fn load_theme(&self) -> Theme {
        match self.read_raw(KEY_THEME) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                self.logger.warn(&format!("[Preferences] Ignoring stored theme: {}", e));
                Theme::default()
            }),
            None => Theme::default(),
        }
    }

    pub fn save_theme(&self, theme: Theme) {
        self.write_raw(KEY_THEME, theme.as_str());
    }

    /// Stored favorites, in stored order
    pub fn load_favorites(&self) -> FavoriteSet {
        self.read_json::<Vec<ToolId>>(KEY_FAVORITES)
            .map(FavoriteSet::from_ids)
            .unwrap_or_default()
    }

    pub fn save_favorites(&self, favorites: &FavoriteSet) {
        self.write_json(KEY_FAVORITES, favorites.ids());
    }

    /// Stored search history, most recent first
    pub fn load_search_history(&self) -> Vec<String> {
        self.read_json(KEY_SEARCH_HISTORY).unwrap_or_default()
    }

    pub fn save_search_history(&self, history: &[String]) {
        self.write_json(KEY_SEARCH_HISTORY, history);
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                self.logger.warn(&format!(
                    "[Preferences] Failed to read '{}' from {} store, using default: {}",
                    key,
                    self.store.name(),
                    e
                ));
                None
            }
        }
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.read_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                self.logger.warn(&format!("[Preferences] Ignoring malformed '{}': {}", key, e));
                None
            }
        }
    }

    fn write_raw(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            self.log_write_failure(key, &e);
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let result: StorageResult<()> = serde_json::to_string(value)
            .map_err(StorageError::from)
            .and_then(|json| self.store.set(key, &json));
        if let Err(e) = result {
            self.log_write_failure(key, &e);
        }
    }

    fn log_write_failure(&self, key: &str, error: &StorageError) {
        self.logger.warn(&format!(
            "[Preferences] Failed to write '{}' to {} store: {}",
            key,
            self.store.name(),
            error
        ));
    }
}

impl std::fmt::Debug for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences")
            .field("store", &self.store.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogLevel, MemoryLogger};
    use crate::storage::{MemoryPreferenceStore, UnavailablePreferenceStore};

    fn prefs_with(store: Arc<dyn PreferenceStore>) -> (Preferences, Arc<MemoryLogger>) {
        let logger = Arc::new(MemoryLogger::new());
        (Preferences::new(store, logger.clone()), logger)
    }

    #[test]
    fn test_defaults_when_empty() {
        let (prefs, logger) = prefs_with(Arc::new(MemoryPreferenceStore::new()));
        assert_eq!(prefs.load_theme(), Theme::Light);
        assert!(prefs.load_favorites().is_empty());
        assert!(prefs.load_search_history().is_empty());
        assert!(logger.messages_at(LogLevel::Warn).is_empty());
    }

    #[test]
    fn test_round_trip_through_store() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let (prefs, _) = prefs_with(store.clone());

        prefs.save_theme(Theme::Dark);
        let favorites = FavoriteSet::from_ids([ToolId::from(3u64), ToolId::from(1u64)]);
        prefs.save_favorites(&favorites);
        prefs.save_search_history(&["fox".to_string(), "hound".to_string()]);

        assert_eq!(store.raw(KEY_THEME), Some("dark".to_string()));
        assert_eq!(store.raw(KEY_FAVORITES), Some("[3,1]".to_string()));
        assert_eq!(store.raw(KEY_SEARCH_HISTORY), Some(r#"["fox","hound"]"#.to_string()));

        assert_eq!(prefs.load_theme(), Theme::Dark);
        assert_eq!(prefs.load_favorites(), favorites);
        assert_eq!(prefs.load_search_history(), vec!["fox", "hound"]);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let store = Arc::new(MemoryPreferenceStore::new());
        store.set(KEY_THEME, "sepia").unwrap();
        store.set(KEY_FAVORITES, "{oops").unwrap();
        let (prefs, logger) = prefs_with(store);

        assert_eq!(prefs.load_theme(), Theme::Light);
        assert!(prefs.load_favorites().is_empty());
        assert_eq!(logger.messages_at(LogLevel::Warn).len(), 2);
    }

    #[test]
    fn test_unavailable_store_is_silent_to_callers() {
        let (prefs, logger) = prefs_with(Arc::new(UnavailablePreferenceStore::new()));

        assert_eq!(prefs.load_theme(), Theme::Light);
        assert!(prefs.load_search_history().is_empty());
        prefs.save_theme(Theme::Dark);
        prefs.save_search_history(&["fox".to_string()]);

        let warnings = logger.messages_at(LogLevel::Warn);
        assert_eq!(warnings.len(), 4);
        assert!(warnings[2].contains("Failed to write 'theme'"));
    }
}
