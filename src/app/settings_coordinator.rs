//! Settings persistence coordination.
//!
//! Persists serializable preferences to eframe's storage as JSON strings.

use serde::{Deserialize, Serialize};
use crate::state::PanelSettings;

const PANEL_SETTINGS_KEY: &str = "reminder_panel_settings";

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a custom default.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    /// * `default` - The value to use if the key is missing or invalid
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        let Some(json_str) = storage.and_then(|s| s.get_string(key)) else {
            return default;
        };
        match serde_json::from_str(&json_str) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring invalid stored setting");
                default
            }
        }
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => tracing::warn!(key, error = %e, "failed to serialize setting"),
        }
    }

    /// Loads the reminders panel settings, clamped to supported values.
    pub fn load_panel_settings(storage: Option<&dyn eframe::Storage>) -> PanelSettings {
        Self::load_setting_or(storage, PANEL_SETTINGS_KEY, PanelSettings::default()).sanitized()
    }

    pub fn save_panel_settings(storage: &mut dyn eframe::Storage, settings: &PanelSettings) {
        Self::save_setting(storage, PANEL_SETTINGS_KEY, settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_simple() {
        let mut storage = MockStorage::new();
        SettingsCoordinator::save_setting(&mut storage, "test_key", &42i32);

        let loaded: i32 = SettingsCoordinator::load_setting_or(Some(&storage), "test_key", 0);
        assert_eq!(loaded, 42);
    }

    #[test]
    fn test_load_without_storage_uses_default() {
        let loaded: i32 = SettingsCoordinator::load_setting_or(None, "anything", 7);
        assert_eq!(loaded, 7);
    }

    #[test]
    fn test_invalid_json_uses_default() {
        let mut storage = MockStorage::new();
        storage.set_string("bad", "{not json".to_string());
        let loaded: i32 = SettingsCoordinator::load_setting_or(Some(&storage), "bad", 3);
        assert_eq!(loaded, 3);
    }

    #[test]
    fn test_panel_settings_round_trip() {
        let mut storage = MockStorage::new();
        assert_eq!(SettingsCoordinator::load_panel_settings(Some(&storage)), PanelSettings::default());

        let settings = PanelSettings { visible_count: 5, buffer: 2 };
        SettingsCoordinator::save_panel_settings(&mut storage, &settings);
        assert_eq!(SettingsCoordinator::load_panel_settings(Some(&storage)), settings);
    }

    #[test]
    fn test_stored_panel_settings_are_sanitized() {
        let mut storage = MockStorage::new();
        storage.set_string(PANEL_SETTINGS_KEY, r#"{"visible_count":0,"buffer":1}"#.to_string());
        let loaded = SettingsCoordinator::load_panel_settings(Some(&storage));
        assert_eq!(loaded.visible_count, 1);
    }
}
