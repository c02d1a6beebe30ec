//! Process-wide resolver slot.
//!
//! `install` once at startup, `resolver` from any consumer, `teardown` on
//! shutdown. Existing subscriptions see `None` from `recv` after the last
//! handle to the torn-down resolver is dropped.

use std::sync::{Arc, PoisonError, RwLock};

use log::debug;

use super::ThemeResolver;

static RESOLVER: RwLock<Option<Arc<ThemeResolver>>> = RwLock::new(None);

/// Installs `resolver` as the process-wide instance, replacing any previous one.
pub fn install(resolver: ThemeResolver) -> Arc<ThemeResolver> {
    let resolver = Arc::new(resolver);
    let previous = RESOLVER
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .replace(resolver.clone());
    if previous.is_some() {
        debug!("Replaced the installed theme resolver");
    }
    resolver
}

pub fn resolver() -> Option<Arc<ThemeResolver>> {
    RESOLVER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

pub fn teardown() -> Option<Arc<ThemeResolver>> {
    RESOLVER
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
}
