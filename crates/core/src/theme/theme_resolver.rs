//! Process-wide light/dark state with change broadcast.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};

use super::{
    resolve_chain, AmbientSignal, AmbientTheme, EnvSignal, PreferenceStore, StoredPreference,
    ThemeEvent, ThemeMode, ThemeSource, THEME_EVENT_CAPACITY, THEME_PREFERENCE_KEY,
};

/// Single writer of the theme mode; any number of subscribers.
///
/// Lifecycle: build, call [`ThemeResolver::init`] once, hand out
/// subscriptions, then drop (or [`super::global::teardown`]).
pub struct ThemeResolver {
    store: Arc<dyn PreferenceStore>,
    ambient: AmbientTheme,
    sources: Vec<Box<dyn ThemeSource>>,
    sender: broadcast::Sender<ThemeEvent>,
}

impl ThemeResolver {
    pub fn new(
        store: Arc<dyn PreferenceStore>,
        ambient: AmbientTheme,
        sources: Vec<Box<dyn ThemeSource>>,
    ) -> Self {
        let (sender, _receiver) = broadcast::channel(THEME_EVENT_CAPACITY);
        Self {
            store,
            ambient,
            sources,
            sender,
        }
    }

    /// Standard chain: stored preference, then ambient surface, then `DESK_THEME`.
    pub fn with_defaults(store: Arc<dyn PreferenceStore>) -> Self {
        let ambient = AmbientTheme::new();
        let sources: Vec<Box<dyn ThemeSource>> = vec![
            Box::new(StoredPreference::new(store.clone())),
            Box::new(AmbientSignal::new(ambient.clone())),
            Box::new(EnvSignal::default()),
        ];
        Self::new(store, ambient, sources)
    }

    /// Resolves the initial mode and mirrors it into the ambient state.
    pub fn init(&self) -> ThemeMode {
        let mode = match resolve_chain(&self.sources) {
            Some((mode, source)) => {
                debug!("Theme resolved to {} from {}", mode, source);
                mode
            }
            None => {
                debug!("No theme source answered, defaulting to light");
                ThemeMode::default()
            }
        };
        self.ambient.set(mode);
        mode
    }

    /// Current mode as seen by the ambient surface.
    pub fn current(&self) -> ThemeMode {
        match self.ambient.get() {
            Some(mode) => mode,
            None => resolve_chain(&self.sources)
                .map(|(mode, _)| mode)
                .unwrap_or_default(),
        }
    }

    pub fn ambient(&self) -> &AmbientTheme {
        &self.ambient
    }

    /// Sets the mode, persists it and notifies every subscriber.
    ///
    /// Persistence is best-effort: a failed write is logged, not returned.
    pub fn apply(&self, mode: ThemeMode) {
        self.ambient.set(mode);
        if let Err(e) = self.store.save(THEME_PREFERENCE_KEY, mode.as_str()) {
            warn!("Failed to persist theme preference '{}': {}", mode, e);
        }
        info!("Theme set to {}", mode);
        self.notify(Some(mode));
    }

    /// Applies the opposite of the current mode.
    pub fn toggle(&self) -> ThemeMode {
        let next = self.current().toggled();
        self.apply(next);
        next
    }

    /// Broadcasts a change without writing anything.
    pub fn notify(&self, mode: Option<ThemeMode>) {
        // No subscribers is not an error.
        let _ = self.sender.send(ThemeEvent::changed(mode));
    }

    pub fn subscribe(&self) -> ThemeSubscription {
        ThemeSubscription {
            receiver: self.sender.subscribe(),
            ambient: self.ambient.clone(),
            observed: self.current(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// A consumer's view of the theme. Dropping it unsubscribes.
pub struct ThemeSubscription {
    receiver: broadcast::Receiver<ThemeEvent>,
    ambient: AmbientTheme,
    observed: ThemeMode,
}

impl ThemeSubscription {
    /// Last mode this subscription resolved.
    pub fn mode(&self) -> ThemeMode {
        self.observed
    }

    /// Drains pending events without waiting.
    ///
    /// Returns the re-resolved mode if at least one event arrived.
    pub fn poll(&mut self) -> Option<ThemeMode> {
        let mut seen = false;
        loop {
            match self.receiver.try_recv() {
                Ok(event) => {
                    self.observe(event.mode);
                    seen = true;
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    debug!("Theme subscriber lagged by {} events", skipped);
                    self.observe(None);
                    seen = true;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        seen.then_some(self.observed)
    }

    /// Waits for the next change. Returns `None` once the resolver is gone.
    pub async fn recv(&mut self) -> Option<ThemeMode> {
        match self.receiver.recv().await {
            Ok(event) => {
                self.observe(event.mode);
                Some(self.observed)
            }
            Err(RecvError::Lagged(skipped)) => {
                debug!("Theme subscriber lagged by {} events", skipped);
                self.observe(None);
                Some(self.observed)
            }
            Err(RecvError::Closed) => None,
        }
    }

    fn observe(&mut self, payload: Option<ThemeMode>) {
        self.observed = payload.unwrap_or_else(|| self.ambient.resolved());
    }
}
