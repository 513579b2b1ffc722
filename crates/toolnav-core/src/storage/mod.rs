//! Persisted preference storage
//!
//! A flat string key/value store, the same shape as a browser's local
//! storage:
//! - `PreferenceStore` trait for pluggable backends
//! - Built-in backends: `MemoryPreferenceStore`, `FilePreferenceStore`, `UnavailablePreferenceStore`
//! - A registry for creating backends by name (used by config)
//! - `Preferences`, the typed view over the `theme`, `favorites` and `searchHistory` keys

mod traits;
mod memory_store;
mod file_store;
mod unavailable_store;
mod registry;
mod preferences;

pub use traits::{PreferenceStore, StorageError, StorageResult};
pub use memory_store::MemoryPreferenceStore;
pub use file_store::FilePreferenceStore;
pub use unavailable_store::UnavailablePreferenceStore;
pub use registry::{register_preference_store, create_preference_store, list_preference_stores, StoreFactory};
pub use preferences::{Preferences, KEY_THEME, KEY_FAVORITES, KEY_SEARCH_HISTORY};
