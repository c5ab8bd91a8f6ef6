//! Preference persistence for the single stored value: the last selected
//! tier's raw identifier. The rendering layer supplies whatever backing it
//! has (browser storage, a config file); absence or corruption reads as "no
//! prior selection".

use std::collections::HashMap;
use std::sync::Mutex;

/// Key-value preference storage. Both operations are best-effort; a failing
/// backend must degrade to `None`/no-op rather than error.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store, used in tests and as the default when the embedding layer
/// provides no persistence.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryPreferenceStore::new();
        assert!(store.get("selected_tier").is_none());
        store.set("selected_tier", "biggen");
        assert_eq!(store.get("selected_tier").as_deref(), Some("biggen"));
        store.set("selected_tier", "littlegen");
        assert_eq!(store.get("selected_tier").as_deref(), Some("littlegen"));
    }
}
