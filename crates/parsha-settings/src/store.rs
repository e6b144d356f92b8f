//! Observable, persisted text-source settings.

use std::sync::{Mutex, MutexGuard};

use parsha_model::{Metadata, TextSource};

use crate::config::{STORAGE_KEY, TextSourcesConfig};
use crate::error::{Result, SettingsError};
use crate::slot::KeyValueSlot;

type Listener = Box<dyn Fn(&TextSourcesConfig) + Send>;

/// Handle returned by [`TextSourcesStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct State<S> {
    config: TextSourcesConfig,
    slot: S,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<S: KeyValueSlot> State<S> {
    /// Persist `next`, then make it current and publish it.
    ///
    /// Nothing changes if persisting fails.
    fn commit(&mut self, next: TextSourcesConfig) -> Result<TextSourcesConfig> {
        let dump = serde_json::to_string(&next)
            .map_err(|e| SettingsError::Serialization { source: e })?;
        self.slot.set(STORAGE_KEY, &dump)?;
        self.config = next;
        for (_, listener) in &self.listeners {
            listener(&self.config);
        }
        Ok(self.config.clone())
    }

    fn load_persisted(&self) -> Option<TextSourcesConfig> {
        let dump = match self.slot.get(STORAGE_KEY) {
            Ok(Some(dump)) => dump,
            Ok(None) => return None,
            Err(error) => {
                tracing::warn!(%error, "Could not read saved text source settings, using defaults");
                return None;
            }
        };
        match serde_json::from_str(&dump) {
            Ok(config) => Some(config),
            Err(e) => {
                let error = SettingsError::Deserialization {
                    key: STORAGE_KEY.to_string(),
                    source: e,
                };
                tracing::warn!(%error, "Saved text source settings are corrupt, using defaults");
                None
            }
        }
    }
}

/// Owner of the [`TextSourcesConfig`].
///
/// Every transition reads the current value, applies the change, persists the
/// whole config and notifies all listeners while holding one lock, so two
/// transitions never interleave. Listeners run synchronously inside that lock
/// and must not call back into the store.
///
/// Until [`initialize`](Self::initialize) runs, the current value is
/// [`TextSourcesConfig::default`] and nothing has been persisted.
pub struct TextSourcesStore<S> {
    state: Mutex<State<S>>,
}

impl<S: KeyValueSlot> TextSourcesStore<S> {
    pub fn new(slot: S) -> Self {
        Self {
            state: Mutex::new(State {
                config: TextSourcesConfig::default(),
                slot,
                listeners: Vec::new(),
                next_id: 0,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, State<S>>> {
        self.state.lock().map_err(|_| SettingsError::LockPoisoned)
    }

    /// Snapshot of the current config.
    pub fn current(&self) -> Result<TextSourcesConfig> {
        Ok(self.lock()?.config.clone())
    }

    /// Register a listener. It is called right away with the current value
    /// and again after every transition.
    pub fn subscribe<F>(&self, listener: F) -> Result<SubscriptionId>
    where
        F: Fn(&TextSourcesConfig) + Send + 'static,
    {
        let mut state = self.lock()?;
        let id = SubscriptionId(state.next_id);
        state.next_id += 1;
        listener(&state.config);
        state.listeners.push((id, Box::new(listener)));
        Ok(id)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<bool> {
        let mut state = self.lock()?;
        let before = state.listeners.len();
        state.listeners.retain(|(listener_id, _)| *listener_id != id);
        Ok(state.listeners.len() != before)
    }

    /// Load the persisted config (or defaults), give every offered source
    /// without an entry an enabled one, persist and publish.
    ///
    /// Missing, unreadable or corrupt saved settings fall back to defaults.
    pub fn initialize(&self, metadata: &Metadata) -> Result<TextSourcesConfig> {
        let mut state = self.lock()?;
        let mut config = state.load_persisted().unwrap_or_default();
        let added = config.reconcile(&metadata.text_sources);
        tracing::debug!(
            main = %config.main,
            added = added.len(),
            "Reconciled text source settings"
        );
        let config = state.commit(config)?;
        tracing::info!("Initialized text source settings");
        Ok(config)
    }

    pub fn set_main(&self, source: TextSource) -> Result<TextSourcesConfig> {
        tracing::debug!(%source, "Setting main text source");
        self.transition(|config| config.set_main(source))
    }

    /// Flip a source in the details view; an unseen source becomes enabled.
    pub fn toggle(&self, source: &TextSource) -> Result<TextSourcesConfig> {
        tracing::debug!(%source, "Toggling text source");
        self.transition(|config| {
            config.toggle(source);
        })
    }

    pub fn enable(&self, source: &TextSource) -> Result<TextSourcesConfig> {
        tracing::debug!(%source, "Enabling text source");
        self.transition(|config| config.enable(source))
    }

    fn transition<F>(&self, change: F) -> Result<TextSourcesConfig>
    where
        F: FnOnce(&mut TextSourcesConfig),
    {
        let mut state = self.lock()?;
        let mut next = state.config.clone();
        change(&mut next);
        state.commit(next)
    }
}
