//! Persisted settings store.
//!
//! Single source of truth for Pomodoro configuration. Rehydrates from the
//! key-value store on load and writes back on every update. Persistence is
//! best-effort: a failed write is logged and swallowed, the in-memory
//! settings stay authoritative for the session.

use log::warn;

use super::model::{PomodoroSettings, SettingsPatch};
use crate::storage::KeyValueStore;

/// Key the serialized settings object is stored under.
///
/// Matches the localStorage key of the original web app, so the layout is
/// a drop-in: one JSON object, eight camelCase fields.
pub const SETTINGS_KEY: &str = "pomodoro-settings";

/// Settings store over an injected key-value backend.
pub struct SettingsStore<'a> {
    store: &'a dyn KeyValueStore,
    settings: PomodoroSettings,
}

impl<'a> SettingsStore<'a> {
    /// Load settings from the backend, falling back to defaults.
    ///
    /// Missing key, unparsable JSON, or a read error all degrade to the
    /// hard-coded defaults. A parsable payload is merged over the defaults
    /// field by field (serde per-field defaults), then clamped so persisted
    /// out-of-range values never reach the timer engine.
    pub fn load(store: &'a dyn KeyValueStore) -> Self {
        let settings = match store.get(SETTINGS_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<PomodoroSettings>(&json) {
                Ok(parsed) => parsed.clamped(),
                Err(e) => {
                    warn!("failed to parse persisted settings, using defaults: {e}");
                    PomodoroSettings::default()
                }
            },
            Ok(None) => PomodoroSettings::default(),
            Err(e) => {
                warn!("failed to read persisted settings, using defaults: {e}");
                PomodoroSettings::default()
            }
        };
        Self { store, settings }
    }

    /// Current in-memory settings snapshot.
    pub fn get(&self) -> PomodoroSettings {
        self.settings.clone()
    }

    /// Merge a partial update over current settings and persist.
    ///
    /// No validation here: the store stores whatever it is given. Callers
    /// editing user input must go through [`SettingsStore::apply`], which
    /// clamps first. A persistence failure is logged and swallowed; the
    /// in-memory settings still update.
    pub fn update(&mut self, patch: &SettingsPatch) {
        self.settings.merge(patch);
        match serde_json::to_string(&self.settings) {
            Ok(json) => {
                if let Err(e) = self.store.set(SETTINGS_KEY, &json) {
                    warn!("failed to persist settings: {e}");
                }
            }
            Err(e) => warn!("failed to serialize settings: {e}"),
        }
    }

    /// User-facing apply path: clamp the patch, then update.
    ///
    /// Every editor surface (quick settings and the full settings screen)
    /// funnels duration edits through here.
    pub fn apply(&mut self, patch: SettingsPatch) {
        self.update(&patch.clamped());
    }

    /// Overwrite everything with the hard-coded defaults, through the same
    /// clamped apply path.
    pub fn reset_to_defaults(&mut self) {
        self.apply(PomodoroSettings::default().as_patch());
    }
}
