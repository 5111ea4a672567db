//! User settings persisted through the key/value store.
//!
//! A sparse mapping: keys absent from the stored JSON take their defaults
//! and unknown keys are ignored, so older or hand-edited data keeps
//! loading.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::JsonStore;

/// Key the settings are stored under.
pub const SETTINGS_KEY: &str = "focus_settings";

/// User preferences: theme, sound, and session auto-continuation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Dark theme enabled.
    pub dark: bool,
    /// Play a sound on timer controls.
    pub sound: bool,
    /// Start the next countdown immediately after a session ends.
    pub auto_start: bool,
}

impl Settings {
    /// Load from the store; absent or malformed data yields defaults.
    pub fn load(store: &JsonStore) -> Self {
        store
            .get(SETTINGS_KEY)
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }

    /// Persist to the store.
    pub fn save(&self, store: &JsonStore) -> Result<()> {
        store.set(SETTINGS_KEY, serde_json::to_value(self)?)
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        match key {
            "dark" => Some(self.dark),
            "sound" => Some(self.sound),
            "auto_start" => Some(self.auto_start),
            _ => None,
        }
    }

    /// Set a key; returns false when the key is unknown.
    pub fn set(&mut self, key: &str, value: bool) -> bool {
        match key {
            "dark" => self.dark = value,
            "sound" => self.sound = value,
            "auto_start" => self.auto_start = value,
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults_are_all_off() {
        let settings = Settings::default();
        assert!(!settings.dark);
        assert!(!settings.sound);
        assert!(!settings.auto_start);
    }

    #[test]
    fn missing_store_entry_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::at(dir.path().join("store.json"));
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn sparse_entry_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::at(dir.path().join("store.json"));
        store.set(SETTINGS_KEY, json!({"dark": true})).unwrap();

        let settings = Settings::load(&store);
        assert!(settings.dark);
        assert!(!settings.sound);
        assert!(!settings.auto_start);
    }

    #[test]
    fn unknown_keys_in_stored_data_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::at(dir.path().join("store.json"));
        store
            .set(SETTINGS_KEY, json!({"sound": true, "volume": 11}))
            .unwrap();
        assert!(Settings::load(&store).sound);
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::at(dir.path().join("store.json"));

        let mut settings = Settings::default();
        settings.set("auto_start", true);
        settings.save(&store).unwrap();

        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut settings = Settings::default();
        assert!(!settings.set("volume", true));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn get_by_key() {
        let mut settings = Settings::default();
        settings.dark = true;
        assert_eq!(settings.get("dark"), Some(true));
        assert_eq!(settings.get("sound"), Some(false));
        assert!(settings.get("volume").is_none());
    }
}
