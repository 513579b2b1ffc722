//! Navigator configuration
//!
//! Supports multiple configuration sources:
//! - `MemoryConfigProvider`: In-memory for testing and embedding
//! - `FileConfigProvider`: YAML file (~/.config/toolnav/config.yaml)

mod traits;
mod settings;
mod memory;
mod file;

pub use traits::{ConfigProvider, ConfigError, ConfigResult};
pub use settings::{NavigatorConfig, ENV_CATALOG, ENV_LOG_LEVEL};
pub use memory::MemoryConfigProvider;
pub use file::FileConfigProvider;
