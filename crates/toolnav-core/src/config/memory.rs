//! In-memory configuration provider

use parking_lot::RwLock;

use super::settings::NavigatorConfig;
use super::traits::{ConfigProvider, ConfigResult};

#[derive(Debug, Default)]
pub struct MemoryConfigProvider {
    config: RwLock<NavigatorConfig>,
}

impl MemoryConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NavigatorConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }
}

impl ConfigProvider for MemoryConfigProvider {
    fn load(&self) -> ConfigResult<NavigatorConfig> {
        let config = self.config.read().clone();
        config.validate()?;
        Ok(config)
    }

    fn save(&self, config: &NavigatorConfig) -> ConfigResult<()> {
        config.validate()?;
        *self.config.write() = config.clone();
        Ok(())
    }
}
