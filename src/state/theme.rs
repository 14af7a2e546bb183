//! Persisted light/dark preference

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::storage::{KeyValueStore, StorageError};

/// Storage key holding the theme name
pub const THEME_KEY: &str = "theme";

/// The two visual modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSetting {
    #[default]
    Dark,
    Light,
}

impl ThemeSetting {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeSetting::Dark => "dark",
            ThemeSetting::Light => "light",
        }
    }

    /// Parse a stored value. Only the exact lowercase names are recognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(ThemeSetting::Dark),
            "light" => Some(ThemeSetting::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeSetting::Dark => ThemeSetting::Light,
            ThemeSetting::Light => ThemeSetting::Dark,
        }
    }
}

impl fmt::Display for ThemeSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current theme plus its persisted mirror
pub struct ThemePreference {
    setting: ThemeSetting,
    store: Arc<dyn KeyValueStore>,
    /// Whether the renderer still has to apply `setting`
    dirty: bool,
}

impl ThemePreference {
    /// Rehydrate from storage, defaulting to dark
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let setting = match store.get(THEME_KEY) {
            Ok(Some(raw)) => ThemeSetting::parse(&raw).unwrap_or_else(|| {
                tracing::warn!("Unknown stored theme {:?}, using dark", raw);
                ThemeSetting::default()
            }),
            Ok(None) => ThemeSetting::default(),
            Err(e) => {
                tracing::warn!("Failed to read theme: {}", e);
                ThemeSetting::default()
            }
        };

        Self {
            setting,
            store,
            dirty: true, // Apply theme on first frame
        }
    }

    pub fn setting(&self) -> ThemeSetting {
        self.setting
    }

    /// Flip dark and light
    pub fn toggle_theme(&mut self) -> ThemeSetting {
        self.set(self.setting.toggled());
        self.setting
    }

    /// Switch to `setting` and persist it
    pub fn set(&mut self, setting: ThemeSetting) {
        if let Err(e) = self.try_set(setting) {
            tracing::error!("Failed to save theme: {}", e);
        }
    }

    /// Switch to `setting`, reporting a failed write. The switch happens either way.
    pub fn try_set(&mut self, setting: ThemeSetting) -> Result<(), StorageError> {
        self.setting = setting;
        self.dirty = true;
        self.store.set(THEME_KEY, setting.as_str())
    }

    /// Returns true once after each change so the renderer can re-apply visuals
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::favorites::tests::ReadOnlyStore;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults_to_dark() {
        let pref = ThemePreference::load(Arc::new(MemoryStore::new()));
        assert_eq!(pref.setting(), ThemeSetting::Dark);
    }

    #[test]
    fn test_invalid_value_defaults_to_dark() {
        for raw in ["", "Light", "blue", "\"light\""] {
            let store = Arc::new(MemoryStore::new());
            store.set(THEME_KEY, raw).unwrap();
            assert_eq!(ThemePreference::load(store).setting(), ThemeSetting::Dark);
        }
    }

    #[test]
    fn test_stored_light_is_restored() {
        let store = Arc::new(MemoryStore::new());
        store.set(THEME_KEY, "light").unwrap();
        assert_eq!(ThemePreference::load(store).setting(), ThemeSetting::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let store = Arc::new(MemoryStore::new());
        let mut pref = ThemePreference::load(store.clone());

        assert_eq!(pref.toggle_theme(), ThemeSetting::Light);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_double_toggle_restores_value_and_storage() {
        let store = Arc::new(MemoryStore::new());
        store.set(THEME_KEY, "dark").unwrap();
        let mut pref = ThemePreference::load(store.clone());

        pref.toggle_theme();
        pref.toggle_theme();

        assert_eq!(pref.setting(), ThemeSetting::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_dirty_flag_fires_once_per_change() {
        let mut pref = ThemePreference::load(Arc::new(MemoryStore::new()));
        assert!(pref.take_dirty());
        assert!(!pref.take_dirty());

        pref.toggle_theme();
        assert!(pref.take_dirty());
        assert!(!pref.take_dirty());
    }

    #[test]
    fn test_try_set_reports_write_failure() {
        let mut pref = ThemePreference::load(Arc::new(ReadOnlyStore));
        assert!(pref.try_set(ThemeSetting::Light).is_err());
        assert_eq!(pref.setting(), ThemeSetting::Light);

        let store = Arc::new(MemoryStore::new());
        let mut pref = ThemePreference::load(store.clone());
        pref.try_set(ThemeSetting::Light).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_value_enum_names_match_stored_values() {
        use clap::ValueEnum;

        for setting in ThemeSetting::value_variants() {
            let name = setting.to_possible_value().unwrap();
            assert_eq!(name.get_name(), setting.as_str());
        }
        assert!(ThemeSetting::from_str("blue", false).is_err());
    }

    #[test]
    fn test_write_failure_is_not_fatal() {
        let mut pref = ThemePreference::load(Arc::new(ReadOnlyStore));
        pref.toggle_theme();
        assert_eq!(pref.setting(), ThemeSetting::Light);
    }
}
