//! ToolNav Core
//!
//! The catalog-browsing engine behind the tool navigator page: it loads a
//! static list of tools, derives the visible cards from the active filter or
//! search, paginates with a cumulative "load more", and keeps favorites,
//! theme and recent searches in a persisted key/value store. Rendering is
//! left to the embedder.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use toolnav_core::{Navigator, NavigatorConfig, ConsoleLogger, catalog::source_for, storage::create_preference_store};
//!
//! let config = NavigatorConfig::default();
//! let store = create_preference_store(&config.storage).unwrap();
//! let mut nav = Navigator::new(&config, store, Arc::new(ConsoleLogger::new()));
//! nav.load(source_for(&config.catalog).as_ref()).await;
//!
//! nav.submit_search("image");
//! for card in nav.page_view().cards {
//!     println!("{} {}", card.tool.name, if card.favorite { "♥" } else { "" });
//! }
//! ```

pub mod types;
pub mod logging;
pub mod config;
pub mod storage;
pub mod catalog;
pub mod router;
pub mod navigator;

// Re-export commonly used types
pub use types::{
    ToolId, ToolRecord, CategoryRecord, CatalogDocument, Badge,
    Query, QuickFilter, QueryParseError,
    Theme, Notification, Severity,
    FavoriteSet, CancellationToken,
};

pub use logging::{Logger, LogLevel, SharedLogger, NoOpLogger, ConsoleLogger, MemoryLogger};

pub use config::{ConfigProvider, ConfigError, NavigatorConfig, FileConfigProvider, MemoryConfigProvider};

pub use storage::{
    PreferenceStore, StorageError, StorageResult, Preferences,
    MemoryPreferenceStore, FilePreferenceStore, UnavailablePreferenceStore,
    create_preference_store, register_preference_store, list_preference_stores,
};

pub use catalog::{CatalogState, CatalogSource, CatalogError, CatalogResult};

pub use router::{QueryRouter, InputSource, SearchHistory, Debouncer};

pub use navigator::{Navigator, NavigatorEvent, PageView, ToolCard};
