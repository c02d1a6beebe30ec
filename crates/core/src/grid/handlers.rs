//! Registry of side-effecting cell handlers.
//!
//! Column descriptors only carry a handler name; the callable lives here so
//! descriptors stay plain data.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::errors::{Error, Result};

/// Receives the row identity and the requested toggle state.
pub type ToggleHandler = Arc<dyn Fn(&str, bool) + Send + Sync>;

#[derive(Clone, Default)]
pub struct HandlerRegistry {
    toggles: HashMap<String, ToggleHandler>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `name`, replacing any previous one.
    pub fn register_toggle<F>(&mut self, name: &str, handler: F)
    where
        F: Fn(&str, bool) + Send + Sync + 'static,
    {
        self.toggles.insert(name.to_string(), Arc::new(handler));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.toggles.contains_key(name)
    }

    pub fn invoke_toggle(&self, name: &str, identity: &str, state: bool) -> Result<()> {
        let handler = self
            .toggles
            .get(name)
            .ok_or_else(|| Error::HandlerNotRegistered(name.to_string()))?;
        debug!("Dispatching toggle '{}' for {} -> {}", name, identity, state);
        handler(identity, state);
        Ok(())
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("toggles", &self.toggles.keys().collect::<Vec<_>>())
            .finish()
    }
}
