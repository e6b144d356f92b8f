//! Text-source configuration value.

use std::collections::BTreeMap;

use parsha_model::TextSource;
use serde::{Deserialize, Serialize};

/// Source shown as main text when nothing was persisted.
pub const DEFAULT_MAIN_TEXT_SOURCE: &str = "fg";

/// Storage key the configuration is persisted under.
pub const STORAGE_KEY: &str = "textSourcesConfig";

/// Which text source is the main one and which appear in the details view.
///
/// Missing fields in a stored document fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextSourcesConfig {
    /// Source used for primary display.
    pub main: TextSource,

    /// Details-view visibility per source. A source missing from the map is
    /// undetermined, which is not the same as disabled.
    pub enabled_in_details: BTreeMap<TextSource, bool>,
}

impl Default for TextSourcesConfig {
    fn default() -> Self {
        Self {
            main: TextSource::from(DEFAULT_MAIN_TEXT_SOURCE),
            enabled_in_details: BTreeMap::new(),
        }
    }
}

impl TextSourcesConfig {
    /// Explicit setting for `source`, `None` when undetermined.
    pub fn is_enabled(&self, source: &str) -> Option<bool> {
        self.enabled_in_details.get(source).copied()
    }

    /// Whether `source` is shown in details; undetermined resolves to `true`.
    pub fn shows_in_details(&self, source: &str) -> bool {
        self.is_enabled(source).unwrap_or(true)
    }

    /// Sources explicitly enabled, in key order.
    pub fn enabled_sources(&self) -> impl Iterator<Item = &TextSource> {
        self.enabled_in_details
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(source, _)| source)
    }

    /// Give every source without an explicit entry an enabled one.
    ///
    /// Existing entries are kept, including entries for sources that are no
    /// longer offered. Returns the sources that were added.
    pub fn reconcile(&mut self, sources: &[TextSource]) -> Vec<TextSource> {
        let mut added = Vec::new();
        for source in sources {
            if !self.enabled_in_details.contains_key(source) {
                self.enabled_in_details.insert(source.clone(), true);
                added.push(source.clone());
            }
        }
        added
    }

    pub fn set_main(&mut self, source: TextSource) {
        self.main = source;
    }

    /// Flip a source's details visibility and return the new value.
    ///
    /// Undetermined counts as disabled here, so toggling an unseen source
    /// enables it.
    pub fn toggle(&mut self, source: &TextSource) -> bool {
        let enabled = !self.is_enabled(source.as_str()).unwrap_or(false);
        self.enabled_in_details.insert(source.clone(), enabled);
        enabled
    }

    pub fn enable(&mut self, source: &TextSource) {
        self.enabled_in_details.insert(source.clone(), true);
    }
}
