//! Configuration provider trait

use super::settings::NavigatorConfig;

/// Configuration provider abstraction
pub trait ConfigProvider: Send + Sync {
    /// Load the configuration, falling back to defaults for anything unset
    fn load(&self) -> ConfigResult<NavigatorConfig>;

    /// Persist the configuration
    fn save(&self, config: &NavigatorConfig) -> ConfigResult<()>;
}

/// Errors that can occur during configuration operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
