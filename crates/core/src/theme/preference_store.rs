//! Durable key-value storage for user preferences.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::errors::Result;

/// Storage for string preferences keyed by name.
///
/// Implementations live in storage crates; the core only reads and writes
/// through this trait.
pub trait PreferenceStore: Send + Sync {
    /// Returns the stored value, or `None` if the key was never written.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Writes or replaces the value for `key`.
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// Process-local store. Shared clones see the same values.
#[derive(Clone, Default)]
pub struct InMemoryPreferenceStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_store_shares_state_across_clones() {
        let store = InMemoryPreferenceStore::new();
        let other = store.clone();
        assert_eq!(store.load("theme").unwrap(), None);

        other.save("theme", "dark").unwrap();
        assert_eq!(store.load("theme").unwrap().as_deref(), Some("dark"));
    }
}
