// Grid interaction settings
// Loaded from ~/.config/editgrid/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Wheel delta reported per physical notch on most platforms.
pub const DEFAULT_WHEEL_NOTCH: i32 = 120;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    // Mouse wheel
    #[serde(rename = "wheel.notchSize")]
    pub wheel_notch: i32,

    /// When true, a positive wheel delta scrolls content up.
    #[serde(rename = "wheel.invert")]
    pub invert_wheel: bool,

    // Columns
    #[serde(rename = "columns.stretchByDefault")]
    pub stretch_columns_by_default: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            wheel_notch: DEFAULT_WHEEL_NOTCH,
            invert_wheel: true,
            stretch_columns_by_default: false,
        }
    }
}

impl GridSettings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("editgrid");
        config_dir.join("settings.json")
    }

    /// Load settings from the default location, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from `path`, falling back to defaults.
    ///
    /// A missing file is not an error. Parse failures are logged.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_json_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::error!("Error parsing {}: {}", path.display(), e);
                    log::error!("Using default settings");
                    Self::default()
                }
            },
            Err(e) => {
                log::error!("Error reading {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse settings JSON. Lines starting with `//` are comments.
    pub fn from_json_str(contents: &str) -> Result<Self, String> {
        let cleaned: String = contents
            .lines()
            .filter(|line| !line.trim().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n");

        let settings: Self = serde_json::from_str(&cleaned).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), String> {
        if self.wheel_notch <= 0 {
            return Err(format!("wheel.notchSize must be positive, got {}", self.wheel_notch));
        }
        Ok(())
    }

    /// Save current settings to the default location
    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| e.to_string())?;

        fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Convert a raw wheel delta into signed scroll units.
    ///
    /// Uses floor division, so a partial downward notch still moves one unit.
    pub fn wheel_units(&self, delta: i32) -> i32 {
        let notches = delta.div_euclid(self.wheel_notch.max(1));
        if self.invert_wheel { notches.saturating_neg() } else { notches }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = GridSettings::default();
        assert_eq!(s.wheel_notch, 120);
        assert!(s.invert_wheel);
        assert!(!s.stretch_columns_by_default);
    }

    #[test]
    fn test_wheel_units() {
        let s = GridSettings::default();
        assert_eq!(s.wheel_units(120), -1);
        assert_eq!(s.wheel_units(240), -2);
        assert_eq!(s.wheel_units(-120), 1);
        assert_eq!(s.wheel_units(-60), 1);
        assert_eq!(s.wheel_units(60), 0);
        assert_eq!(s.wheel_units(0), 0);
    }

    #[test]
    fn test_wheel_units_not_inverted() {
        let s = GridSettings { invert_wheel: false, ..GridSettings::default() };
        assert_eq!(s.wheel_units(120), 1);
        assert_eq!(s.wheel_units(-120), -1);
    }

    #[test]
    fn test_wheel_units_extreme_delta_saturates() {
        let s = GridSettings { wheel_notch: 1, ..GridSettings::default() };
        assert_eq!(s.wheel_units(i32::MIN), i32::MAX);
        assert_eq!(s.wheel_units(i32::MAX), -i32::MAX);
    }

    #[test]
    fn test_parse_with_comments_and_partial_keys() {
        let json = r#"{
    // Mouse wheel
    "wheel.notchSize": 40
}"#;
        let s = GridSettings::from_json_str(json).unwrap();
        assert_eq!(s.wheel_notch, 40);
        assert!(s.invert_wheel);
    }

    #[test]
    fn test_rejects_non_positive_notch() {
        assert!(GridSettings::from_json_str(r#"{"wheel.notchSize": 0}"#).is_err());
    }

    #[test]
    fn test_save_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let s = GridSettings { stretch_columns_by_default: true, ..GridSettings::default() };
        s.save_to(&path).unwrap();

        assert_eq!(GridSettings::load_from(&path), s);
    }

    #[test]
    fn test_load_missing_or_broken_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        assert_eq!(GridSettings::load_from(&path), GridSettings::default());

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(GridSettings::load_from(&path), GridSettings::default());
    }
}
