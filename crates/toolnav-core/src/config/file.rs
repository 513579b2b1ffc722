//! File-based configuration provider (YAML)
//!
//! Lives at ~/.config/toolnav/config.yaml by default. A missing file means
//! all defaults.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::settings::NavigatorConfig;
use super::traits::{ConfigProvider, ConfigResult};

/// File-based configuration provider
///
/// # Example
///
/// ```no_run
/// use toolnav_core::config::{ConfigProvider, FileConfigProvider};
///
/// let config = FileConfigProvider::user().load().unwrap();
/// println!("catalog at {}", config.catalog);
/// ```
pub struct FileConfigProvider {
    path: PathBuf,
    cache: RwLock<Option<NavigatorConfig>>,
}

impl FileConfigProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// User-level config provider (~/.config/toolnav/config.yaml)
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("toolnav").join("config.yaml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read_file(&self) -> ConfigResult<NavigatorConfig> {
        if !self.path.exists() {
            return Ok(NavigatorConfig::default());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(NavigatorConfig::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Re-read the file, bypassing the cache
    pub fn reload(&self) -> ConfigResult<NavigatorConfig> {
        let config = self.read_file()?;
        config.validate()?;
        *self.cache.write() = Some(config.clone());
        Ok(config)
    }
}

impl ConfigProvider for FileConfigProvider {
    fn load(&self) -> ConfigResult<NavigatorConfig> {
        if let Some(config) = self.cache.read().as_ref() {
            return Ok(config.clone());
        }
        self.reload()
    }

    fn save(&self, config: &NavigatorConfig) -> ConfigResult<()> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_yaml::to_string(config)?)?;
        *self.cache.write() = Some(config.clone());
        Ok(())
    }
}

impl std::fmt::Debug for FileConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileConfigProvider")
            .field("path", &self.path)
            .field("exists", &self.exists())
            .finish()
    }
}
