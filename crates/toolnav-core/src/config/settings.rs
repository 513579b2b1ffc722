//! Navigator settings

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use super::traits::{ConfigError, ConfigResult};

/// Overrides `catalog`
pub const ENV_CATALOG: &str = "TOOLNAV_CATALOG";
/// Overrides `log_level`
pub const ENV_LOG_LEVEL: &str = "TOOLNAV_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Catalog document location: an http(s) URL or a file path
    pub catalog: String,
    /// Tools revealed per "load more"
    pub page_size: usize,
    /// Quiet period before live input is processed
    pub debounce_ms: u64,
    /// Maximum remembered searches
    pub history_limit: usize,
    /// Live input shorter than this is not recorded in history
    pub live_history_min_chars: usize,
    /// Preference store backend name (see `storage::list_preference_stores`)
    pub storage: String,
    pub log_level: LogLevel,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            catalog: "./data/tools.json".to_string(),
            page_size: 8,
            debounce_ms: 300,
            history_limit: 10,
            live_history_min_chars: 3,
            storage: "file".to_string(),
            log_level: LogLevel::Info,
        }
    }
}

impl NavigatorConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1".to_string()));
        }
        if self.history_limit == 0 {
            return Err(ConfigError::Invalid("history_limit must be at least 1".to_string()));
        }
        if self.catalog.trim().is_empty() {
            return Err(ConfigError::Invalid("catalog location is empty".to_string()));
        }
        Ok(())
    }

    /// Apply `TOOLNAV_*` environment overrides
    pub fn with_env_overrides(self) -> ConfigResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        if let Some(catalog) = lookup(ENV_CATALOG) {
            self.catalog = catalog;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level.parse().map_err(ConfigError::Invalid)?;
        }
        Ok(self)
    }
}
