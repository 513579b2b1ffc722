//! Registry for creating preference stores by name

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::file_store::FilePreferenceStore;
use super::memory_store::MemoryPreferenceStore;
use super::traits::PreferenceStore;
use super::unavailable_store::UnavailablePreferenceStore;

/// Factory function type for creating preference stores
pub type StoreFactory = Box<dyn Fn() -> Arc<dyn PreferenceStore> + Send + Sync>;

struct StoreDefinition {
    description: String,
    factory: StoreFactory,
}

static REGISTRY: Lazy<RwLock<HashMap<String, StoreDefinition>>> = Lazy::new(|| {
    let mut map = HashMap::new();

    map.insert(
        "file".to_string(),
        StoreDefinition {
            description: "JSON file under the user data directory".to_string(),
            factory: Box::new(|| Arc::new(FilePreferenceStore::user())),
        },
    );

    map.insert(
        "memory".to_string(),
        StoreDefinition {
            description: "In-memory storage, lost on exit".to_string(),
            factory: Box::new(|| Arc::new(MemoryPreferenceStore::new())),
        },
    );

    map.insert(
        "unavailable".to_string(),
        StoreDefinition {
            description: "Disabled storage; preferences fall back to defaults".to_string(),
            factory: Box::new(|| Arc::new(UnavailablePreferenceStore::new())),
        },
    );

    RwLock::new(map)
});

/// Register (or replace) a store backend
pub fn register_preference_store(name: &str, description: &str, factory: StoreFactory) {
    REGISTRY.write().insert(
        name.to_string(),
        StoreDefinition {
            description: description.to_string(),
            factory,
        },
    );
}

/// Create a store by name, or `None` if no backend has that name
pub fn create_preference_store(name: &str) -> Option<Arc<dyn PreferenceStore>> {
    REGISTRY.read().get(name).map(|def| (def.factory)())
}

/// Registered backends as `(name, description)`, sorted by name
pub fn list_preference_stores() -> Vec<(String, String)> {
    let mut stores: Vec<_> = REGISTRY
        .read()
        .iter()
        .map(|(name, def)| (name.clone(), def.description.clone()))
        .collect();
    stores.sort();
    stores
}
