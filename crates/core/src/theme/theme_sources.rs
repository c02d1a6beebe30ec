//! Ordered sources consulted when resolving the theme mode.

use std::sync::{Arc, PoisonError, RwLock};

use log::warn;

use super::{PreferenceStore, ThemeMode, THEME_PREFERENCE_KEY};

/// Environment variable read by [`EnvSignal`] when built with defaults.
pub const DEFAULT_THEME_ENV_VAR: &str = "DESK_THEME";

/// Shared ambient visual state: the mode the presentation surface is
/// currently showing. `None` until something sets it.
#[derive(Clone, Default)]
pub struct AmbientTheme {
    mode: Arc<RwLock<Option<ThemeMode>>>,
}

impl AmbientTheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<ThemeMode> {
        *self.mode.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set(&self, mode: ThemeMode) {
        *self.mode.write().unwrap_or_else(PoisonError::into_inner) = Some(mode);
    }

    /// Ambient mode, falling back to light when unset.
    pub fn resolved(&self) -> ThemeMode {
        self.get().unwrap_or_default()
    }
}

/// One step of the resolution chain.
pub trait ThemeSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns a mode if this source has an opinion.
    fn resolve(&self) -> Option<ThemeMode>;
}

/// Explicit preference persisted by a previous `apply`.
pub struct StoredPreference {
    store: Arc<dyn PreferenceStore>,
}

impl StoredPreference {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }
}

impl ThemeSource for StoredPreference {
    fn name(&self) -> &'static str {
        "stored-preference"
    }

    fn resolve(&self) -> Option<ThemeMode> {
        let stored = match self.store.load(THEME_PREFERENCE_KEY) {
            Ok(value) => value?,
            Err(e) => {
                warn!("Failed to read theme preference, treating as absent: {}", e);
                return None;
            }
        };
        match stored.parse() {
            Ok(mode) => Some(mode),
            Err(e) => {
                warn!("Ignoring stored theme preference: {}", e);
                None
            }
        }
    }
}

/// Whatever the ambient surface already shows.
pub struct AmbientSignal {
    ambient: AmbientTheme,
}

impl AmbientSignal {
    pub fn new(ambient: AmbientTheme) -> Self {
        Self { ambient }
    }
}

impl ThemeSource for AmbientSignal {
    fn name(&self) -> &'static str {
        "ambient"
    }

    fn resolve(&self) -> Option<ThemeMode> {
        self.ambient.get()
    }
}

/// Mode hint from an environment variable.
pub struct EnvSignal {
    var: String,
}

impl EnvSignal {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvSignal {
    fn default() -> Self {
        Self::new(DEFAULT_THEME_ENV_VAR)
    }
}

impl ThemeSource for EnvSignal {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn resolve(&self) -> Option<ThemeMode> {
        std::env::var(&self.var).ok()?.parse().ok()
    }
}

/// A fixed answer. Useful as the last link of a custom chain.
pub struct FixedMode(pub ThemeMode);

impl ThemeSource for FixedMode {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn resolve(&self) -> Option<ThemeMode> {
        Some(self.0)
    }
}

/// Tries each source in order; first answer wins.
pub fn resolve_chain(sources: &[Box<dyn ThemeSource>]) -> Option<(ThemeMode, &'static str)> {
    sources
        .iter()
        .find_map(|source| source.resolve().map(|mode| (mode, source.name())))
}
