use egui::Color32;
use serde::{Deserialize, Serialize};

/// Storage key for [`Settings`] in eframe's persistence layer
pub const SETTINGS_KEY: &str = "touch_sketch.settings";

/// Width of newly drawn strokes
pub const DEFAULT_LINE_WIDTH: f32 = 2.0;

/// Half-size of the square the eraser clears around the pointer
pub const DEFAULT_ERASE_THRESHOLD: f32 = 10.0;

/// User preferences that survive restarts. Drawings themselves are never stored.
///
/// There is no settings screen: values are edited in eframe's stored app state
/// and written back unchanged on exit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old settings
pub struct Settings {
    pub line_width: f32,
    pub erase_threshold: f32,
    pub background: Color32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            erase_threshold: DEFAULT_ERASE_THRESHOLD,
            background: Color32::WHITE,
        }
    }
}

impl Settings {
    /// Load settings from eframe storage, falling back to defaults
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        let loaded = storage
            .and_then(|storage| eframe::get_value::<Settings>(storage, SETTINGS_KEY))
            .unwrap_or_default();
        let settings = loaded.sanitized();
        if settings != loaded {
            log::warn!("Stored settings were invalid, using {:?}", settings);
        }
        settings
    }

    pub fn save(&self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, SETTINGS_KEY, self);
    }

    /// Replace a width or threshold that is not a positive finite number
    pub fn sanitized(self) -> Self {
        let positive = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        Self {
            line_width: positive(self.line_width, DEFAULT_LINE_WIDTH),
            erase_threshold: positive(self.erase_threshold, DEFAULT_ERASE_THRESHOLD),
            background: self.background,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        values: HashMap<String, String>,
    }

    impl eframe::Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.line_width, 2.0);
        assert_eq!(settings.erase_threshold, 10.0);
        assert_eq!(settings.background, Color32::WHITE);
    }

    #[test]
    fn test_missing_storage_gives_defaults() {
        assert_eq!(Settings::load(None), Settings::default());
        let empty = MemoryStorage::default();
        assert_eq!(Settings::load(Some(&empty as &dyn eframe::Storage)), Settings::default());
    }

    #[test]
    fn test_saved_settings_are_restored() {
        let mut storage = MemoryStorage::default();
        let custom = Settings {
            line_width: 6.0,
            erase_threshold: 15.0,
            background: Color32::LIGHT_GRAY,
        };
        custom.save(&mut storage);
        assert_eq!(Settings::load(Some(&storage as &dyn eframe::Storage)), custom);
    }

    #[test]
    fn test_sanitized_replaces_bad_values() {
        let bad = Settings {
            line_width: -1.0,
            erase_threshold: f32::NAN,
            background: Color32::BLACK,
        };
        let fixed = bad.sanitized();
        assert_eq!(fixed.line_width, DEFAULT_LINE_WIDTH);
        assert_eq!(fixed.erase_threshold, DEFAULT_ERASE_THRESHOLD);
        assert_eq!(fixed.background, Color32::BLACK);
    }
}
